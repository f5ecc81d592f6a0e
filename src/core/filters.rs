use crate::models::{CandidateQuery, Neighborhood, Vibe};

/// Check if a neighborhood belongs to the requested city
#[inline]
pub fn matches_city(neighborhood: &Neighborhood, city_id: &str) -> bool {
    neighborhood.city_id.eq_ignore_ascii_case(city_id)
}

/// Case-insensitive substring search over name, borough and highlights
///
/// A blank search matches everything.
pub fn matches_search(neighborhood: &Neighborhood, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    neighborhood.name.to_lowercase().contains(&needle)
        || neighborhood.borough.to_lowercase().contains(&needle)
        || neighborhood
            .highlights
            .iter()
            .any(|h| h.to_lowercase().contains(&needle))
}

#[inline]
pub fn matches_vibe(neighborhood: &Neighborhood, vibe: Vibe) -> bool {
    neighborhood.vibe == vibe
}

/// Check if a neighborhood is part of the visible set described by `query`
pub fn matches_query(neighborhood: &Neighborhood, query: &CandidateQuery) -> bool {
    if let Some(city_id) = &query.city_id {
        if !matches_city(neighborhood, city_id) {
            return false;
        }
    }

    if let Some(search) = &query.search {
        if !matches_search(neighborhood, search) {
            return false;
        }
    }

    if let Some(vibe) = query.vibe {
        if !matches_vibe(neighborhood, vibe) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiningStyle;

    fn create_test_neighborhood() -> Neighborhood {
        Neighborhood {
            id: "shoreditch".to_string(),
            city_id: "london".to_string(),
            name: "Shoreditch".to_string(),
            borough: "Hackney".to_string(),
            affordability: 2,
            safety: 3,
            transit: 4,
            green_space: 2,
            nightlife: 5,
            family_friendly: 2,
            dining: 5,
            dining_style: DiningStyle::Trendy,
            vibe: Vibe::Happening,
            description: "Street art and late bars".to_string(),
            highlights: vec!["Boxpark".to_string(), "Brick Lane".to_string()],
            latitude: Some(51.5265),
            longitude: Some(-0.0786),
        }
    }

    #[test]
    fn test_city_match() {
        let hood = create_test_neighborhood();
        assert!(matches_city(&hood, "london"));
        assert!(matches_city(&hood, "London"));
        assert!(!matches_city(&hood, "new-york"));
    }

    #[test]
    fn test_search_over_fields() {
        let hood = create_test_neighborhood();
        assert!(matches_search(&hood, "ditch"));
        assert!(matches_search(&hood, "HACKNEY"));
        assert!(matches_search(&hood, "brick"));
        assert!(matches_search(&hood, "  "));
        assert!(!matches_search(&hood, "brooklyn"));
    }

    #[test]
    fn test_query_combines_filters() {
        let hood = create_test_neighborhood();
        let query = CandidateQuery {
            city_id: Some("london".to_string()),
            search: Some("shore".to_string()),
            vibe: Some(Vibe::Quiet),
            limit: None,
        };
        assert!(!matches_query(&hood, &query));

        let query = CandidateQuery { vibe: Some(Vibe::Happening), ..query };
        assert!(matches_query(&hood, &query));
    }
}
