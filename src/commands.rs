use std::io::{self, BufRead};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;

use algolab::dataset;
use algolab::graph::{shortest_paths, AdjMatrix, BfsTree};
use algolab::grammar;
use algolab::harness::{graph_bench, score_search, search_bench, shell_bench, sort_bench, table_ops};
use algolab::metrics::Metrics;
use algolab::searching::linear_search;
use algolab::student::load_students;
use algolab::tree_array::TreeArray;
use algolab::trees::Bst;

use crate::cli::Command;

pub fn execute_command(cmd: Command) -> Result<()> {
    match cmd {
        Command::Validate => validate_loop(false),
        Command::Analyze => validate_loop(true),
        Command::Traverse => traverse(),
        Command::SearchDemo { seed } => search_demo(seed),
        Command::SearchBench { seed, json } => {
            let report = search_bench::run(seed);
            if json {
                print_json(&report)?;
            } else {
                println!("structure size {} / {} lookups", report.structure_size, report.lookups);
                for case in &report.cases {
                    println!(
                        "{:<14} array {:>8.2}  bst {:>8.2}  avl {:>8.2}",
                        case.shape, case.array_avg, case.bst_avg, case.avl_avg
                    );
                }
            }
            Ok(())
        }
        Command::GraphBench { seed, json } => {
            let report = graph_bench::run(seed);
            if json {
                print_json(&report)?;
            } else {
                for case in &report.cases {
                    println!("{} / {} (V={}, E={})", case.density, case.representation, case.vertices, case.edges);
                    println!("  memory:            {} bytes", case.memory_bytes);
                    println!("  insert comparisons: {}", case.insert_comparisons);
                    println!("  delete comparisons: {}", case.delete_comparisons);
                    println!("  connect comparisons: {}", case.connect_comparisons);
                    println!("  neighbor comparisons: {}", case.neighbor_comparisons);
                }
            }
            Ok(())
        }
        Command::ShortestPaths { seed, json } => shortest_paths_cmd(seed, json),
        Command::ShellBench { seed, trials, json } => {
            let report = shell_bench::run(seed, trials);
            if json {
                print_json(&report)?;
            } else {
                println!("{} trials of {} random values", report.trials, report.data_size);
                for row in &report.rows {
                    println!("{:<16} avg comparisons {:>14.2}", row.algorithm, row.avg_comparisons);
                }
            }
            Ok(())
        }
        Command::SortBench { csv, reps, json } => {
            let students = load_roster(&csv)?;
            let report = sort_bench::run(&students, reps);
            if json {
                print_json(&report)?;
            } else {
                println!(
                    "{} records, {} repetitions, duplicates: {}",
                    report.records, report.repetitions, report.has_duplicates
                );
                for cell in &report.cells {
                    match (&cell.skipped, cell.avg_comparisons, cell.avg_aux_bytes) {
                        (Some(reason), _, _) => {
                            println!("{:<16} {:<7} {:<5} skipped: {}", cell.algorithm, cell.key, cell.direction, reason);
                        }
                        (None, Some(cmp), Some(aux)) => {
                            println!(
                                "{:<16} {:<7} {:<5} avg comparisons {:>12.2}  avg aux {:>12.2} bytes",
                                cell.algorithm, cell.key, cell.direction, cmp, aux
                            );
                        }
                        _ => {}
                    }
                }
            }
            Ok(())
        }
        Command::ScoreSearch { csv, seed, json } => {
            let students = load_roster(&csv)?;
            match score_search::run(&students, seed) {
                Some(report) => {
                    if json {
                        print_json(&report)?;
                    } else {
                        println!("target {} hit on attempt {}", report.target, report.attempts);
                        println!("sequential search:        {} comparisons", report.sequential_comparisons);
                        println!("quick sort:               {} comparisons", report.sort_comparisons);
                        println!("binary search:            {} comparisons", report.binary_comparisons);
                        println!("sort + binary combined:   {} comparisons", report.combined_comparisons);
                    }
                }
                None => println!("no random key matched a stored product score"),
            }
            Ok(())
        }
        Command::TableOps { csv, id, seed, json } => {
            let students = load_roster(&csv)?;
            let report = table_ops::run(&students, id, seed);
            if json {
                print_json(&report)?;
            } else {
                println!("{} records, target id {}, inserted id {}", report.records, report.target_id, report.inserted_id);
                for s in &report.structures {
                    println!("{}", s.structure);
                    println!("  search: {:<9} {} comparisons", outcome(s.search.ok), s.search.comparisons);
                    println!("  insert: {:<9} {} comparisons", outcome(s.insert.ok), s.insert.comparisons);
                    println!("  delete: {:<9} {} comparisons", outcome(s.delete.ok), s.delete.comparisons);
                }
            }
            Ok(())
        }
    }
}

fn outcome(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "not found"
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_roster(path: &Path) -> Result<Vec<algolab::student::Student>> {
    load_students(path).with_context(|| format!("loading `{}`", path.display()))
}

/// Stdin loop shared by `validate` and `analyze`: ERROR for inputs the
/// precheck rejects, TRUE/FALSE for the grammar verdict, `quit` stops.
fn validate_loop(analyze: bool) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim_end_matches(['\r', '\n']);
        if input.trim() == "quit" {
            break;
        }
        if grammar::precheck(input).is_err() {
            println!("ERROR");
            continue;
        }
        if !grammar::validate(input) {
            println!("FALSE");
            continue;
        }
        println!("TRUE");
        if analyze {
            if let Some(tree) = grammar::build(input) {
                println!(
                    "height: {}, nodes: {}, leaves: {}",
                    tree.height(),
                    tree.node_count(),
                    tree.leaf_count()
                );
            }
        }
    }
    Ok(())
}

fn traverse() -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    let input = line.trim();

    let tree = TreeArray::parse(input).with_context(|| format!("parsing `{input}`"))?;

    println!("index  label  left  right");
    for row in tree.rows() {
        println!("{:>5}  {:>5}  {:>4}  {:>5}", row.index, row.label, row.left, row.right);
    }
    println!("preorder:  {}", join_chars(&tree.preorder()));
    println!("inorder:   {}", join_chars(&tree.inorder()));
    println!("postorder: {}", join_chars(&tree.postorder()));
    Ok(())
}

fn join_chars(labels: &[char]) -> String {
    labels
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn search_demo(seed: Option<u64>) -> Result<()> {
    const COUNT: usize = 100;
    let mut rng = dataset::rng(seed);
    let cmp = |a: &u32, b: &u32| a.cmp(b);

    let values = dataset::random_values(&mut rng, COUNT, 1000);
    let mut build = Metrics::new();
    let mut bst = Bst::new();
    for &v in &values {
        bst.insert(v, &cmp, &mut build);
    }
    let target = values[rng.gen_range(0..COUNT)];
    println!("target number: {target}");

    let mut linear_metrics = Metrics::new();
    let start = Instant::now();
    let linear_found = linear_search(&values, &target, &cmp, &mut linear_metrics).is_some();
    let linear_time = start.elapsed();

    let mut bst_metrics = Metrics::new();
    let start = Instant::now();
    let bst_found = bst.search(&target, &cmp, &mut bst_metrics).is_some();
    let bst_time = start.elapsed();

    println!("linear search: {}", if linear_found { "found" } else { "not found" });
    println!("  comparisons: {}", linear_metrics.comparisons);
    println!("  time: {:.3} us", linear_time.as_secs_f64() * 1e6);
    println!("bst search (iterative): {}", if bst_found { "found" } else { "not found" });
    println!("  comparisons: {}", bst_metrics.comparisons);
    println!("  time: {:.3} us", bst_time.as_secs_f64() * 1e6);
    Ok(())
}

#[derive(Serialize)]
struct PairPath {
    from: usize,
    to: usize,
    distance: Option<u32>,
    path: Option<Vec<usize>>,
}

#[derive(Serialize)]
struct ShortestPathsReport {
    vertices: usize,
    edges: usize,
    trees: Vec<BfsTree>,
    pairs: Vec<PairPath>,
}

fn shortest_paths_cmd(seed: Option<u64>, json: bool) -> Result<()> {
    const VERTICES: usize = 10;
    const EDGES: usize = 20;

    let mut rng = dataset::rng(seed);
    let edge_list = dataset::random_edges(&mut rng, VERTICES, EDGES);
    let mut graph = AdjMatrix::new(VERTICES);
    let mut build = Metrics::new();
    for &(u, v) in &edge_list {
        graph.add_edge(u, v, &mut build);
    }

    let mut scratch = Metrics::new();
    let trees: Vec<BfsTree> = (0..VERTICES)
        .map(|src| shortest_paths(&graph, src, &mut scratch))
        .collect();

    let mut pairs = Vec::new();
    for from in 0..VERTICES {
        for to in from + 1..VERTICES {
            pairs.push(PairPath {
                from,
                to,
                distance: trees[from].dist[to],
                path: trees[from].path_to(to),
            });
        }
    }

    if json {
        return print_json(&ShortestPathsReport {
            vertices: VERTICES,
            edges: EDGES,
            trees,
            pairs,
        });
    }

    println!("adjacency matrix ({VERTICES} vertices, {EDGES} edges):");
    let mut probe = Metrics::new();
    for u in 0..VERTICES {
        let row: Vec<&str> = (0..VERTICES)
            .map(|v| if graph.is_connected(u, v, &mut probe) { "1" } else { "0" })
            .collect();
        println!("{u:>2}: {}", row.join(" "));
    }
    println!();
    for pair in &pairs {
        match (&pair.distance, &pair.path) {
            (Some(d), Some(p)) => {
                let steps: Vec<String> = p.iter().map(|v| v.to_string()).collect();
                println!("{} -> {}: {} edge(s), path {}", pair.from, pair.to, d, steps.join(" -> "));
            }
            _ => println!("{} -> {}: no path", pair.from, pair.to),
        }
    }
    Ok(())
}
