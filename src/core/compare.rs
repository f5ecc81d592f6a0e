use serde::Serialize;
use thiserror::Error;
use crate::core::scoring::build_criteria_scores;
use crate::models::{Criterion, Neighborhood};

/// How many neighborhoods fit side by side unless configured otherwise
pub const DEFAULT_MAX_COMPARE: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("No neighborhoods selected")]
    Empty,

    #[error("Can compare at most {max} neighborhoods, got {requested}")]
    TooMany { requested: usize, max: usize },

    #[error("Unknown neighborhood: {0}")]
    UnknownNeighborhood(String),

    #[error("Neighborhood selected twice: {0}")]
    Duplicate(String),
}

/// One criterion across the compared neighborhoods
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub criterion: Criterion,
    /// Scores in the same order as `Comparison::neighborhoods`
    pub values: Vec<f64>,
    /// Ids sharing the highest score
    pub best: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub neighborhoods: Vec<Neighborhood>,
    pub rows: Vec<ComparisonRow>,
}

/// Build a side-by-side comparison for the given ids, in the order given
pub fn compare_neighborhoods(
    catalog: &[Neighborhood],
    ids: &[String],
    max: usize,
) -> Result<Comparison, CompareError> {
    if ids.is_empty() {
        return Err(CompareError::Empty);
    }
    if ids.len() > max {
        return Err(CompareError::TooMany { requested: ids.len(), max });
    }

    let mut selected: Vec<&Neighborhood> = Vec::with_capacity(ids.len());
    for id in ids {
        if selected.iter().any(|n| &n.id == id) {
            return Err(CompareError::Duplicate(id.clone()));
        }
        let neighborhood = catalog
            .iter()
            .find(|n| &n.id == id)
            .ok_or_else(|| CompareError::UnknownNeighborhood(id.clone()))?;
        selected.push(neighborhood);
    }

    let scores: Vec<_> = selected.iter().map(|n| build_criteria_scores(n)).collect();

    let rows = Criterion::ALL
        .into_iter()
        .map(|criterion| {
            let values: Vec<f64> = scores.iter().map(|s| s.get(criterion)).collect();
            let top = values.iter().copied().fold(f64::MIN, f64::max);
            let best = selected
                .iter()
                .zip(&values)
                .filter(|(_, v)| **v == top)
                .map(|(n, _)| n.id.clone())
                .collect();
            ComparisonRow { criterion, values, best }
        })
        .collect();

    Ok(Comparison {
        neighborhoods: selected.into_iter().cloned().collect(),
        rows,
    })
}
