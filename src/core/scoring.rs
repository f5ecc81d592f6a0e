use crate::models::{Criterion, CriteriaScores, Neighborhood, ScoredNeighborhood, ScoringPreferences, Vibe};

/// Power applied to normalized weights before averaging.
///
/// Values above 1 let high-priority criteria dominate more than a linear weighting would.
pub const WEIGHT_EXPONENT: f64 = 1.5;

/// Deviation amplification used by `calculate_match_percentage`
const MATCH_DEVIATION_FACTOR: f64 = 1.3;

/// Round half up, matching the rounding the scores were originally tuned with
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Map the categorical vibe to a 1-5 score
#[inline]
pub fn vibe_score(vibe: Vibe) -> f64 {
    match vibe {
        Vibe::Happening => 5.0,
        Vibe::Moderate => 3.0,
        Vibe::Quiet => 1.0,
        Vibe::Other => 3.0,
    }
}

/// Raw per-criterion scores for a neighborhood.
///
/// Affordability is taken as-is: a higher rating already means cheaper.
pub fn build_criteria_scores(neighborhood: &Neighborhood) -> CriteriaScores {
    CriteriaScores {
        safety: neighborhood.safety as f64,
        affordability: neighborhood.affordability as f64,
        transit: neighborhood.transit as f64,
        green_space: neighborhood.green_space as f64,
        nightlife: neighborhood.nightlife as f64,
        family_friendly: neighborhood.family_friendly as f64,
        dining: neighborhood.dining as f64,
        vibe: vibe_score(neighborhood.vibe),
    }
}

/// Weight after the power curve: `(w/100)^1.5 * 100`
#[inline]
pub fn effective_weight(weight: u8) -> f64 {
    (weight as f64 / 100.0).powf(WEIGHT_EXPONENT) * 100.0
}

/// Weighted 1-5 score over the active (non-zero weight) criteria
///
/// Falls back to the plain mean of all eight scores when every weight is zero.
pub fn weighted_score(scores: &CriteriaScores, preferences: &ScoringPreferences) -> f64 {
    if preferences.is_all_zero() {
        let sum: f64 = Criterion::ALL.iter().map(|c| scores.get(*c)).sum();
        return sum / Criterion::ALL.len() as f64;
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for (criterion, weight) in preferences.iter().filter(|(_, w)| *w > 0) {
        let ew = effective_weight(weight);
        weighted_sum += scores.get(criterion) * ew;
        total_weight += ew;
    }

    weighted_sum / total_weight
}

/// Score one neighborhood against a preference vector
///
/// `personalized_score` is rounded to one decimal, `criteria_scores` are left raw.
pub fn calculate_personalized_score(
    neighborhood: &Neighborhood,
    preferences: &ScoringPreferences,
) -> ScoredNeighborhood {
    let criteria_scores = build_criteria_scores(neighborhood);
    let score = weighted_score(&criteria_scores, preferences);

    ScoredNeighborhood {
        neighborhood: neighborhood.clone(),
        personalized_score: round_half_up(score * 10.0) / 10.0,
        criteria_scores,
    }
}

/// Map a 1-5 personalized score to a 0-100 match percentage
///
/// Linear base, then deviation from the midpoint is stretched by 1.3 and clamped.
/// This is distinct from the rank percentile shown in "Top X%" badges.
pub fn calculate_match_percentage(personalized_score: f64) -> u32 {
    let base = (personalized_score - 1.0) / 4.0 * 100.0;
    let deviation = base - 50.0;
    let amplified = 50.0 + deviation * MATCH_DEVIATION_FACTOR;
    round_half_up(amplified.clamp(0.0, 100.0)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiningStyle;

    fn create_test_neighborhood(safety: u8, affordability: u8, rest: u8, vibe: Vibe) -> Neighborhood {
        Neighborhood {
            id: "test-hood".to_string(),
            city_id: "london".to_string(),
            name: "Test Hood".to_string(),
            borough: "Test Borough".to_string(),
            affordability,
            safety,
            transit: rest,
            green_space: rest,
            nightlife: rest,
            family_friendly: rest,
            dining: rest,
            dining_style: DiningStyle::Diverse,
            vibe,
            description: String::new(),
            highlights: vec![],
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_vibe_mapping() {
        assert_eq!(vibe_score(Vibe::Happening), 5.0);
        assert_eq!(vibe_score(Vibe::Moderate), 3.0);
        assert_eq!(vibe_score(Vibe::Quiet), 1.0);
        assert_eq!(vibe_score(Vibe::Other), 3.0);
    }

    #[test]
    fn test_effective_weight_curve() {
        assert!((effective_weight(100) - 100.0).abs() < 1e-9);
        assert!((effective_weight(50) - 35.355).abs() < 0.001);
        assert_eq!(effective_weight(0), 0.0);
    }

    #[test]
    fn test_all_zero_falls_back_to_mean() {
        let hood = create_test_neighborhood(5, 2, 3, Vibe::Happening);
        let scored = calculate_personalized_score(&hood, &ScoringPreferences::uniform(0));
        // (5 + 2 + 3*5 + 5) / 8 = 3.375
        assert_eq!(scored.personalized_score, 3.4);
    }

    #[test]
    fn test_single_active_weight_uses_that_score() {
        let hood = create_test_neighborhood(5, 2, 3, Vibe::Happening);
        let mut prefs = ScoringPreferences::uniform(0);
        prefs.affordability = 1;
        assert!(!prefs.is_all_zero());
        assert_eq!(calculate_personalized_score(&hood, &prefs).personalized_score, 2.0);
    }

    #[test]
    fn test_uniform_weights_equal_mean() {
        let hood = create_test_neighborhood(5, 2, 3, Vibe::Quiet);
        let scored = calculate_personalized_score(&hood, &ScoringPreferences::default());
        // (5 + 2 + 15 + 1) / 8 = 2.875
        assert_eq!(scored.personalized_score, 2.9);
    }

    #[test]
    fn test_safety_dominates() {
        let hood = create_test_neighborhood(5, 2, 3, Vibe::Moderate);
        let mut prefs = ScoringPreferences::default();
        prefs.safety = 100;
        prefs.affordability = 10;

        let scored = calculate_personalized_score(&hood, &prefs);
        assert_eq!(scored.personalized_score, 3.6);
        assert!(scored.personalized_score < 5.0);
    }

    #[test]
    fn test_criteria_scores_are_raw() {
        let hood = create_test_neighborhood(4, 2, 3, Vibe::Happening);
        let scored = calculate_personalized_score(&hood, &ScoringPreferences::default());
        assert_eq!(scored.criteria_scores.safety, 4.0);
        assert_eq!(scored.criteria_scores.affordability, 2.0);
        assert_eq!(scored.criteria_scores.vibe, 5.0);
    }

    #[test]
    fn test_zero_weight_criterion_ignored() {
        let hood = create_test_neighborhood(1, 5, 5, Vibe::Happening);
        let mut prefs = ScoringPreferences::default();
        prefs.safety = 0;
        let scored = calculate_personalized_score(&hood, &prefs);
        assert_eq!(scored.personalized_score, 5.0);
    }

    #[test]
    fn test_match_percentage() {
        assert_eq!(calculate_match_percentage(3.0), 50);
        assert_eq!(calculate_match_percentage(5.0), 100);
        assert_eq!(calculate_match_percentage(1.0), 0);
        // base 80, deviation 30 * 1.3 = 39
        assert_eq!(calculate_match_percentage(4.2), 89);
        assert_eq!(calculate_match_percentage(1.4), 0);
    }
}
