use statrs::statistics::{Data, Distribution, Max, Min, OrderStatistics};

use crate::types::{ColumnKind, infer_kind};
use crate::{Dataset, Scalar};

/// Descriptive statistics for one numeric column. Nulls are excluded from
/// every figure, including the count.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summarize every numeric column of the dataset, in column order.
/// Non-numeric and all-null columns are skipped.
pub fn summarize_numeric(dataset: &Dataset) -> Vec<ColumnSummary> {
    let mut summaries = Vec::new();
    for (idx, name) in dataset.columns().iter().enumerate() {
        let kind = infer_kind(dataset.column(idx));
        if !matches!(kind, ColumnKind::Integer | ColumnKind::Float) {
            continue;
        }

        let values: Vec<f64> = dataset.column(idx).filter_map(Scalar::as_f64).collect();
        let count = values.len();
        let mut data = Data::new(values);
        summaries.push(ColumnSummary {
            name: name.clone(),
            count,
            mean: data.mean().unwrap_or(0.0),
            std_dev: data.std_dev().unwrap_or(0.0),
            min: data.min(),
            q1: data.quantile(0.25),
            median: data.quantile(0.5),
            q3: data.quantile(0.75),
            max: data.max(),
        });
    }
    summaries
}
