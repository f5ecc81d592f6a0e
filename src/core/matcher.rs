use std::collections::HashMap;
use crate::models::{CandidateQuery, Neighborhood, RankedNeighborhood, ScoredNeighborhood, ScoringPreferences};
use crate::core::{
    filters::matches_query,
    scoring::{calculate_personalized_score, round_half_up},
};

/// Result of a ranking pass
#[derive(Debug)]
pub struct MatchResult {
    pub neighborhoods: Vec<RankedNeighborhood>,
    /// Size of the visible set after filtering, before `limit` truncation
    pub total_candidates: usize,
}

/// Score every neighborhood and sort by score, best first
///
/// The sort is stable: equal scores keep their input order.
pub fn score_and_sort_neighborhoods<'a, I>(
    neighborhoods: I,
    preferences: &ScoringPreferences,
) -> Vec<ScoredNeighborhood>
where
    I: IntoIterator<Item = &'a Neighborhood>,
{
    let mut scored: Vec<ScoredNeighborhood> = neighborhoods
        .into_iter()
        .map(|n| calculate_personalized_score(n, preferences))
        .collect();

    scored.sort_by(|a, b| {
        b.personalized_score
            .partial_cmp(&a.personalized_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}

/// First `n` of `score_and_sort_neighborhoods`
pub fn get_top_neighborhoods<'a, I>(
    neighborhoods: I,
    preferences: &ScoringPreferences,
    n: usize,
) -> Vec<ScoredNeighborhood>
where
    I: IntoIterator<Item = &'a Neighborhood>,
{
    let mut scored = score_and_sort_neighborhoods(neighborhoods, preferences);
    scored.truncate(n);
    scored
}

/// "Top X%" value for rank `index` (0 = best) in a visible set of `total`
///
/// `round((total - index) / total * 100)`, never below 1. `None` for an empty set or an
/// index outside it.
pub fn percentile_for_rank(index: usize, total: usize) -> Option<u32> {
    if total == 0 || index >= total {
        return None;
    }
    let raw = (total - index) as f64 / total as f64 * 100.0;
    Some((round_half_up(raw) as u32).max(1))
}

/// Rank percentile for every neighborhood in an already sorted list, keyed by id
///
/// Percentiles are relative to `sorted` only; recompute whenever the visible set changes.
pub fn rank_percentiles(sorted: &[ScoredNeighborhood]) -> HashMap<String, u32> {
    let total = sorted.len();
    sorted
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            percentile_for_rank(i, total).map(|p| (s.neighborhood.id.clone(), p))
        })
        .collect()
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Candidate filtering (city, search text, vibe)
/// 2. Scoring and stable sort
/// 3. Rank percentile over the visible set
/// 4. Limit
#[derive(Debug, Clone)]
pub struct Matcher {
    default_limit: usize,
    max_limit: usize,
}

impl Matcher {
    pub fn new(default_limit: usize, max_limit: usize) -> Self {
        Self {
            default_limit,
            max_limit: max_limit.max(1),
        }
    }

    /// Rank the candidates matching `query` against `preferences`
    ///
    /// The percentile is computed before truncation so the requested limit never
    /// changes a neighborhood's label.
    pub fn rank(
        &self,
        preferences: &ScoringPreferences,
        candidates: &[Neighborhood],
        query: &CandidateQuery,
    ) -> MatchResult {
        let limit = query
            .limit
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit);

        // Stage 1: filter down to the visible set
        let visible = candidates.iter().filter(|n| matches_query(n, query));

        // Stage 2: score and sort
        let sorted = score_and_sort_neighborhoods(visible, preferences);
        let total_candidates = sorted.len();

        // Stage 3 & 4: percentiles, then limit
        let neighborhoods = sorted
            .into_iter()
            .enumerate()
            .take(limit)
            .filter_map(|(rank, scored)| {
                percentile_for_rank(rank, total_candidates).map(|percentile| RankedNeighborhood {
                    scored,
                    rank,
                    percentile,
                })
            })
            .collect();

        MatchResult {
            neighborhoods,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(20, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiningStyle, Vibe};

    fn create_neighborhood(id: &str, city: &str, safety: u8, nightlife: u8) -> Neighborhood {
        Neighborhood {
            id: id.to_string(),
            city_id: city.to_string(),
            name: format!("Hood {}", id),
            borough: "Borough".to_string(),
            affordability: 3,
            safety,
            transit: 3,
            green_space: 3,
            nightlife,
            family_friendly: 3,
            dining: 3,
            dining_style: DiningStyle::Diverse,
            vibe: Vibe::Moderate,
            description: String::new(),
            highlights: vec![],
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_sorted_descending() {
        let hoods = vec![
            create_neighborhood("a", "london", 1, 3),
            create_neighborhood("b", "london", 5, 3),
            create_neighborhood("c", "london", 3, 3),
        ];
        let sorted = score_and_sort_neighborhoods(&hoods, &ScoringPreferences::default());
        let ids: Vec<&str> = sorted.iter().map(|s| s.neighborhood.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let hoods = vec![
            create_neighborhood("first", "london", 3, 3),
            create_neighborhood("second", "london", 3, 3),
        ];
        let sorted = score_and_sort_neighborhoods(&hoods, &ScoringPreferences::default());
        assert_eq!(sorted[0].neighborhood.id, "first");
        assert_eq!(sorted[1].neighborhood.id, "second");
    }

    #[test]
    fn test_top_neighborhoods_truncates() {
        let hoods: Vec<Neighborhood> = (1..=5)
            .map(|i| create_neighborhood(&i.to_string(), "london", i, 3))
            .collect();
        let top = get_top_neighborhoods(&hoods, &ScoringPreferences::default(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].neighborhood.id, "5");
    }

    #[test]
    fn test_percentile_for_ten_items() {
        assert_eq!(percentile_for_rank(0, 10), Some(100));
        assert_eq!(percentile_for_rank(9, 10), Some(10));
        assert_eq!(percentile_for_rank(10, 10), None);
        assert_eq!(percentile_for_rank(0, 0), None);
    }

    #[test]
    fn test_percentile_floor_is_one() {
        assert_eq!(percentile_for_rank(499, 500), Some(1));
        assert_eq!(percentile_for_rank(998, 1000), Some(1));
    }

    #[test]
    fn test_rank_percentiles_empty() {
        assert!(rank_percentiles(&[]).is_empty());
    }

    #[test]
    fn test_percentile_relative_to_visible_set() {
        let mut hoods: Vec<Neighborhood> = (1..=4)
            .map(|i| create_neighborhood(&format!("l{i}"), "london", i, 3))
            .collect();
        hoods.push(create_neighborhood("n1", "new-york", 5, 5));

        let matcher = Matcher::default();
        let all = matcher.rank(&ScoringPreferences::default(), &hoods, &CandidateQuery::default());
        let l4_all = all.neighborhoods.iter().find(|r| r.scored.neighborhood.id == "l4").unwrap();
        assert_eq!(l4_all.percentile, 80);

        let query = CandidateQuery { city_id: Some("london".to_string()), ..Default::default() };
        let london = matcher.rank(&ScoringPreferences::default(), &hoods, &query);
        assert_eq!(london.total_candidates, 4);
        assert_eq!(london.neighborhoods[0].scored.neighborhood.id, "l4");
        assert_eq!(london.neighborhoods[0].percentile, 100);
        assert_eq!(london.neighborhoods[3].percentile, 25);
    }

    #[test]
    fn test_limit_does_not_change_percentiles() {
        let hoods: Vec<Neighborhood> = (1..=4)
            .map(|i| create_neighborhood(&i.to_string(), "london", i, 3))
            .collect();
        let query = CandidateQuery { limit: Some(2), ..Default::default() };
        let result = Matcher::default().rank(&ScoringPreferences::default(), &hoods, &query);
        assert_eq!(result.neighborhoods.len(), 2);
        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.neighborhoods[1].percentile, 75);
    }
}
