// src/report.rs
//! Order-preserving status aggregation and the final report shape.

/// Tabular result: optional header row plus data rows. Downstream code
/// renders it; nothing downstream mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// Running counts keyed by the literal declared-status string, in the
/// order each distinct value was first observed. Not sorted, ever.
#[derive(Default)]
pub struct StatusCounts {
    counts: Vec<(String, usize)>,
}

impl StatusCounts {
    pub fn new() -> Self {
        Self { counts: Vec::new() }
    }

    pub fn add(&mut self, status: &str) {
        if let Some((_, n)) = self.counts.iter_mut().find(|(s, _)| s == status) {
            *n += 1;
        } else {
            self.counts.push((s!(status), 1));
        }
    }

    /// Number of observations, which is not the number of index entries:
    /// pages that failed to fetch or carried no status never got counted.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// One row per distinct status in first-seen order, then the
    /// trailing ("Total", N) row.
    pub fn into_dataset(self) -> DataSet {
        let total = self.total();
        let mut rows: Vec<Vec<String>> = self
            .counts
            .into_iter()
            .map(|(status, n)| vec![status, n.to_string()])
            .collect();
        rows.push(vec![s!("Total"), total.to_string()]);
        DataSet {
            headers: Some(vec![s!("Status"), s!("Count")]),
            rows,
        }
    }
}
