//! Student record shared by the benchmark drivers.
//!
//! One row of the score dataset: integer id, name, gender code, three
//! subject scores and the derived total. Records are loaded once from a
//! comma-separated file and copied into each structure under test.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub gender: char,
    pub korean: i32,
    pub english: i32,
    pub math: i32,
    /// Sum of the three subject scores, derived at load time.
    pub total: i32,
}

impl Student {
    pub fn new(id: u32, name: impl Into<String>, gender: char, korean: i32, english: i32, math: i32) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
            korean,
            english,
            math,
            total: korean + english + math,
        }
    }

    /// Exercise-10 key: product of the three subject scores.
    pub fn product_score(&self) -> i64 {
        self.korean as i64 * self.english as i64 * self.math as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortKey {
    Id,
    Name,
    Gender,
    Total,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Gender => "gender",
            SortKey::Total => "total",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// Total-score ordering. Ties break by korean, then english, then math,
/// all descending regardless of the primary direction.
fn compare_total(a: &Student, b: &Student) -> Ordering {
    a.total
        .cmp(&b.total)
        .then_with(|| b.korean.cmp(&a.korean))
        .then_with(|| b.english.cmp(&a.english))
        .then_with(|| b.math.cmp(&a.math))
}

/// Build the comparator for a key/direction pair.
pub fn comparator(key: SortKey, dir: Direction) -> impl Fn(&Student, &Student) -> Ordering {
    move |a, b| {
        let ord = match key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Gender => a.gender.cmp(&b.gender),
            SortKey::Total => compare_total(a, b),
        };
        match dir {
            Direction::Asc => ord,
            Direction::Desc => match key {
                // tie-breaks stay fixed; only the primary field flips
                SortKey::Total => match b.total.cmp(&a.total) {
                    Ordering::Equal => compare_total(a, b),
                    other => other,
                },
                _ => ord.reverse(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset {path} has no data rows")]
    Empty { path: String },
    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: field `{field}` is not a number: `{value}`")]
    BadNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: gender field is empty")]
    EmptyGender { line: usize },
}

fn field<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    line: usize,
    name: &'static str,
) -> Result<&'a str, LoadError> {
    parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(LoadError::MissingField { line, field: name })
}

fn numeric<T: std::str::FromStr>(raw: &str, line: usize, name: &'static str) -> Result<T, LoadError> {
    raw.parse().map_err(|_| LoadError::BadNumber {
        line,
        field: name,
        value: raw.to_string(),
    })
}

/// Load the dataset, skipping the header row. Field order:
/// `id,name,gender,korean,english,math`.
pub fn load_students(path: &Path) -> Result<Vec<Student>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut students = Vec::new();
    for (idx, row) in text.lines().enumerate().skip(1) {
        let line = idx + 1;
        if row.trim().is_empty() {
            continue;
        }
        let mut parts = row.split(',');
        let id = numeric(field(&mut parts, line, "id")?, line, "id")?;
        let name = field(&mut parts, line, "name")?.to_string();
        let gender_raw = field(&mut parts, line, "gender")?;
        let gender = gender_raw.chars().next().ok_or(LoadError::EmptyGender { line })?;
        let korean = numeric(field(&mut parts, line, "korean")?, line, "korean")?;
        let english = numeric(field(&mut parts, line, "english")?, line, "english")?;
        let math = numeric(field(&mut parts, line, "math")?, line, "math")?;
        students.push(Student::new(id, name, gender, korean, english, math));
    }

    if students.is_empty() {
        return Err(LoadError::Empty {
            path: path.display().to_string(),
        });
    }
    Ok(students)
}

/// Fully identical records gate the heap/tree sort rows of the benchmark.
pub fn has_duplicates(students: &[Student]) -> bool {
    let mut sorted: Vec<&Student> = students.iter().collect();
    sorted.sort_by(|a, b| {
        (a.id, &a.name, a.gender, a.korean, a.english, a.math).cmp(&(
            b.id, &b.name, b.gender, b.korean, b.english, b.math,
        ))
    });
    sorted.windows(2).any(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(id: u32, total: (i32, i32, i32)) -> Student {
        Student::new(id, format!("n{id}"), 'M', total.0, total.1, total.2)
    }

    #[test]
    fn total_is_derived() {
        assert_eq!(s(1, (10, 20, 30)).total, 60);
    }

    #[test]
    fn total_comparator_breaks_ties_by_subject_desc() {
        let a = s(1, (90, 50, 40)); // total 180
        let b = s(2, (80, 60, 40)); // total 180
        let cmp = comparator(SortKey::Total, Direction::Asc);
        // equal totals: higher korean ranks earlier
        assert_eq!(cmp(&a, &b), Ordering::Less);
        let cmp = comparator(SortKey::Total, Direction::Desc);
        assert_eq!(cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn duplicate_detection_requires_full_record_match() {
        let mut rows = vec![s(1, (1, 2, 3)), s(1, (1, 2, 4))];
        assert!(!has_duplicates(&rows));
        rows.push(s(1, (1, 2, 3)));
        assert!(has_duplicates(&rows));
    }
}
