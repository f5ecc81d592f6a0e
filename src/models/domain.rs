use serde::{Deserialize, Serialize};

/// Lowest and highest rating a neighborhood can carry for a criterion
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Preference weights live in [0, 100]
pub const MAX_WEIGHT: u8 = 100;
pub const DEFAULT_WEIGHT: u8 = 50;

/// One of the eight scoring dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    Safety,
    Affordability,
    Transit,
    GreenSpace,
    Nightlife,
    FamilyFriendly,
    Dining,
    Vibe,
}

impl Criterion {
    /// Canonical ordering, used everywhere criteria are listed
    pub const ALL: [Criterion; 8] = [
        Criterion::Safety,
        Criterion::Affordability,
        Criterion::Transit,
        Criterion::GreenSpace,
        Criterion::Nightlife,
        Criterion::FamilyFriendly,
        Criterion::Dining,
        Criterion::Vibe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Safety => "safety",
            Criterion::Affordability => "affordability",
            Criterion::Transit => "transit",
            Criterion::GreenSpace => "greenSpace",
            Criterion::Nightlife => "nightlife",
            Criterion::FamilyFriendly => "familyFriendly",
            Criterion::Dining => "dining",
            Criterion::Vibe => "vibe",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiningStyle {
    Traditional,
    Diverse,
    Trendy,
    Limited,
}

/// Qualitative feel of a neighborhood
///
/// Unrecognised values deserialize to `Other` so a bad catalog row still scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Happening,
    Moderate,
    Quiet,
    #[serde(other)]
    Other,
}

/// Static neighborhood record bundled with the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub id: String,
    pub city_id: String,
    pub name: String,
    pub borough: String,
    pub affordability: u8,
    pub safety: u8,
    pub transit: u8,
    pub green_space: u8,
    pub nightlife: u8,
    pub family_friendly: u8,
    pub dining: u8,
    pub dining_style: DiningStyle,
    pub vibe: Vibe,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Neighborhood {
    /// Raw 1-5 rating for every criterion except vibe, which is categorical
    pub fn rating(&self, criterion: Criterion) -> Option<u8> {
        match criterion {
            Criterion::Safety => Some(self.safety),
            Criterion::Affordability => Some(self.affordability),
            Criterion::Transit => Some(self.transit),
            Criterion::GreenSpace => Some(self.green_space),
            Criterion::Nightlife => Some(self.nightlife),
            Criterion::FamilyFriendly => Some(self.family_friendly),
            Criterion::Dining => Some(self.dining),
            Criterion::Vibe => None,
        }
    }

    /// Centre of the neighborhood as (latitude, longitude)
    pub fn location(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Per-criterion importance weights (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringPreferences {
    #[serde(default = "default_weight")]
    pub safety: u8,
    #[serde(default = "default_weight")]
    pub affordability: u8,
    #[serde(default = "default_weight")]
    pub transit: u8,
    #[serde(default = "default_weight")]
    pub green_space: u8,
    #[serde(default = "default_weight")]
    pub nightlife: u8,
    #[serde(default = "default_weight")]
    pub family_friendly: u8,
    #[serde(default = "default_weight")]
    pub dining: u8,
    #[serde(default = "default_weight")]
    pub vibe: u8,
}

fn default_weight() -> u8 { DEFAULT_WEIGHT }

impl Default for ScoringPreferences {
    fn default() -> Self {
        Self::uniform(DEFAULT_WEIGHT)
    }
}

impl ScoringPreferences {
    /// Every criterion set to the same weight (clamped)
    pub fn uniform(weight: u8) -> Self {
        let w = weight.min(MAX_WEIGHT);
        Self {
            safety: w,
            affordability: w,
            transit: w,
            green_space: w,
            nightlife: w,
            family_friendly: w,
            dining: w,
            vibe: w,
        }
    }

    pub fn get(&self, criterion: Criterion) -> u8 {
        match criterion {
            Criterion::Safety => self.safety,
            Criterion::Affordability => self.affordability,
            Criterion::Transit => self.transit,
            Criterion::GreenSpace => self.green_space,
            Criterion::Nightlife => self.nightlife,
            Criterion::FamilyFriendly => self.family_friendly,
            Criterion::Dining => self.dining,
            Criterion::Vibe => self.vibe,
        }
    }

    fn slot(&mut self, criterion: Criterion) -> &mut u8 {
        match criterion {
            Criterion::Safety => &mut self.safety,
            Criterion::Affordability => &mut self.affordability,
            Criterion::Transit => &mut self.transit,
            Criterion::GreenSpace => &mut self.green_space,
            Criterion::Nightlife => &mut self.nightlife,
            Criterion::FamilyFriendly => &mut self.family_friendly,
            Criterion::Dining => &mut self.dining,
            Criterion::Vibe => &mut self.vibe,
        }
    }

    /// Slider edit: set a single criterion, clamped to [0, 100]
    pub fn set(&mut self, criterion: Criterion, value: i64) {
        *self.slot(criterion) = value.clamp(0, MAX_WEIGHT as i64) as u8;
    }

    /// Copy with every field forced into [0, 100]
    pub fn clamped(mut self) -> Self {
        for c in Criterion::ALL {
            let v = self.get(c) as i64;
            self.set(c, v);
        }
        self
    }

    pub fn is_all_zero(&self) -> bool {
        Criterion::ALL.iter().all(|c| self.get(*c) == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, u8)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Per-criterion 1-5 scores used by the weighted average, vibe already mapped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaScores {
    pub safety: f64,
    pub affordability: f64,
    pub transit: f64,
    pub green_space: f64,
    pub nightlife: f64,
    pub family_friendly: f64,
    pub dining: f64,
    pub vibe: f64,
}

impl CriteriaScores {
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Safety => self.safety,
            Criterion::Affordability => self.affordability,
            Criterion::Transit => self.transit,
            Criterion::GreenSpace => self.green_space,
            Criterion::Nightlife => self.nightlife,
            Criterion::FamilyFriendly => self.family_friendly,
            Criterion::Dining => self.dining,
            Criterion::Vibe => self.vibe,
        }
    }
}

/// Neighborhood with its personalized score for one scoring pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredNeighborhood {
    #[serde(flatten)]
    pub neighborhood: Neighborhood,
    pub personalized_score: f64,
    pub criteria_scores: CriteriaScores,
}

/// Scored neighborhood positioned within the currently visible set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedNeighborhood {
    #[serde(flatten)]
    pub scored: ScoredNeighborhood,
    /// Zero-based position in the sorted visible set
    pub rank: usize,
    /// "Top X%" label value
    pub percentile: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Low,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedCriterion {
    pub criterion: Criterion,
    pub importance: Importance,
    pub matched_keywords: Vec<String>,
}

/// Output of text parsing or quiz completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatcherResult {
    pub preferences: ScoringPreferences,
    pub detected_criteria: Vec<DetectedCriterion>,
    pub confidence: f64,
}

/// Subset of criteria weights contributed by a single quiz answer
pub type PartialWeights = &'static [(Criterion, u8)];

#[derive(Debug, Clone, Serialize)]
pub struct QuizOption {
    pub label: &'static str,
    #[serde(serialize_with = "serialize_partial_weights")]
    pub weights: PartialWeights,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [QuizOption],
}

fn serialize_partial_weights<S>(weights: &PartialWeights, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;
    let mut map = serializer.serialize_map(Some(weights.len()))?;
    for (criterion, weight) in weights.iter() {
        map.serialize_entry(criterion.as_str(), weight)?;
    }
    map.end()
}

/// Candidate filter applied before scoring
#[derive(Debug, Clone, Default)]
pub struct CandidateQuery {
    pub city_id: Option<String>,
    pub search: Option<String>,
    pub vibe: Option<Vibe>,
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences_are_fifty() {
        let prefs = ScoringPreferences::default();
        assert!(prefs.iter().all(|(_, w)| w == 50));
    }

    #[test]
    fn test_slider_edit_clamps() {
        let mut prefs = ScoringPreferences::default();
        prefs.set(Criterion::Nightlife, 140);
        prefs.set(Criterion::Dining, -3);
        assert_eq!(prefs.nightlife, 100);
        assert_eq!(prefs.dining, 0);
    }

    #[test]
    fn test_missing_fields_default_to_fifty() {
        let prefs: ScoringPreferences = serde_json::from_str(r#"{"safety": 90}"#).unwrap();
        assert_eq!(prefs.safety, 90);
        assert_eq!(prefs.green_space, 50);
    }

    #[test]
    fn test_unknown_vibe_deserializes_to_other() {
        let vibe: Vibe = serde_json::from_str(r#""sleepy""#).unwrap();
        assert_eq!(vibe, Vibe::Other);
    }

    #[test]
    fn test_criterion_serde_names() {
        assert_eq!(serde_json::to_string(&Criterion::GreenSpace).unwrap(), r#""greenSpace""#);
        assert_eq!(Criterion::FamilyFriendly.to_string(), "familyFriendly");
    }
}
