use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use thiserror::Error;
use crate::models::domain::{MAX_RATING, MIN_RATING};
use crate::models::{Criterion, Neighborhood};

/// Catalog shipped with the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/neighborhoods.json");

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate neighborhood id: {0}")]
    DuplicateId(String),

    #[error("Neighborhood {id} has {criterion} rating {value}, expected 1-5")]
    RatingOutOfRange {
        id: String,
        criterion: Criterion,
        value: u8,
    },
}

/// Immutable neighborhood catalog with id lookup
#[derive(Debug, Clone)]
pub struct Catalog {
    neighborhoods: Vec<Neighborhood>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and ratings outside 1-5
    pub fn new(neighborhoods: Vec<Neighborhood>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(neighborhoods.len());

        for (idx, n) in neighborhoods.iter().enumerate() {
            for criterion in Criterion::ALL {
                if let Some(value) = n.rating(criterion) {
                    if !(MIN_RATING..=MAX_RATING).contains(&value) {
                        return Err(CatalogError::RatingOutOfRange {
                            id: n.id.clone(),
                            criterion,
                            value,
                        });
                    }
                }
            }
            if by_id.insert(n.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(n.id.clone()));
            }
        }

        Ok(Self { neighborhoods, by_id })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// The catalog compiled into the binary
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Load from `path` if given, otherwise fall back to the bundled catalog
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => {
                tracing::info!("Loading neighborhood catalog from {}", p);
                Self::load_from(p)
            }
            None => Self::bundled(),
        }
    }

    pub fn all(&self) -> &[Neighborhood] {
        &self.neighborhoods
    }

    pub fn len(&self) -> usize {
        self.neighborhoods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighborhoods.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Neighborhood> {
        self.by_id.get(id).map(|&idx| &self.neighborhoods[idx])
    }

    pub fn by_city<'a>(&'a self, city_id: &'a str) -> impl Iterator<Item = &'a Neighborhood> + 'a {
        self.neighborhoods
            .iter()
            .filter(move |n| crate::core::filters::matches_city(n, city_id))
    }

    /// Distinct city ids, sorted
    pub fn cities(&self) -> Vec<String> {
        self.neighborhoods
            .iter()
            .map(|n| n.city_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.cities(), vec!["london", "new-york"]);
        assert!(catalog.get("shoreditch").is_some());
        assert!(catalog.by_city("new-york").all(|n| n.city_id == "new-york"));
    }

    #[test]
    fn test_bundled_catalog_is_located() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.all().iter().all(|n| n.location().is_some()));
    }

    #[test]
    fn test_rejects_out_of_range_rating() {
        let mut hood = Catalog::bundled().unwrap().all()[0].clone();
        hood.safety = 7;
        let err = Catalog::new(vec![hood]).unwrap_err();
        assert!(matches!(err, CatalogError::RatingOutOfRange { value: 7, .. }));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let hood = Catalog::bundled().unwrap().all()[0].clone();
        let err = Catalog::new(vec![hood.clone(), hood]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(_)));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
    }
}
