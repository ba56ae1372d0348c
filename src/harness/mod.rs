//! Benchmark drivers that pair the instrumented algorithms with
//! generated or loaded datasets and aggregate the comparison counts.
//! Every report derives `Serialize` so the binary can emit it as JSON.

pub mod graph_bench;
pub mod score_search;
pub mod search_bench;
pub mod shell_bench;
pub mod sort_bench;
pub mod table_ops;

pub use graph_bench::GraphBenchReport;
pub use score_search::ScoreSearchReport;
pub use search_bench::SearchBenchReport;
pub use shell_bench::ShellBenchReport;
pub use sort_bench::SortBenchReport;
pub use table_ops::TableOpsReport;
