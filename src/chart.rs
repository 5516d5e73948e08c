// src/chart.rs
use indexmap::IndexMap;

/// Chart-ready parallel label/value series built from a type
/// distribution. The server decides the bucketing and the order; this
/// transform only reshapes, it never aggregates or sorts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn from_distribution(distribution: &IndexMap<String, u64>) -> Self {
        let mut labels = Vec::with_capacity(distribution.len());
        let mut values = Vec::with_capacity(distribution.len());
        for (label, count) in distribution {
            labels.push(label.clone());
            values.push(*count as f64);
        }
        Self { labels, values }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
