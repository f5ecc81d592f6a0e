use crate::core::distance::haversine_distance;
use crate::models::{CommuteEstimate, CommuteMode, Destination, Neighborhood};

/// Streets are not straight lines
const DETOUR_FACTOR: f64 = 1.3;

/// Average door-to-door speeds in km/h
const WALK_SPEED_KMH: f64 = 4.8;
const CYCLE_SPEED_KMH: f64 = 15.0;
const TRANSIT_SPEED_KMH: f64 = 22.0;
const DRIVE_SPEED_KMH: f64 = 25.0;

/// Walking to a stop and waiting, for the worst-connected neighborhoods
const TRANSIT_ACCESS_MINUTES: f64 = 8.0;

fn speed_kmh(mode: CommuteMode) -> f64 {
    match mode {
        CommuteMode::Walk => WALK_SPEED_KMH,
        CommuteMode::Cycle => CYCLE_SPEED_KMH,
        CommuteMode::Transit => TRANSIT_SPEED_KMH,
        CommuteMode::Drive => DRIVE_SPEED_KMH,
    }
}

/// Access/wait overhead; each transit rating point above 1 saves a minute
fn access_minutes(mode: CommuteMode, transit_rating: u8) -> f64 {
    match mode {
        CommuteMode::Transit => {
            (TRANSIT_ACCESS_MINUTES - transit_rating.saturating_sub(1) as f64).max(0.0)
        }
        _ => 0.0,
    }
}

/// Rough travel time from a neighborhood's centre to a destination
///
/// Returns `None` when the neighborhood has no coordinates.
pub fn estimate_commute(neighborhood: &Neighborhood, destination: &Destination) -> Option<CommuteEstimate> {
    let (lat, lon) = neighborhood.location()?;
    let distance_km = haversine_distance(lat, lon, destination.latitude, destination.longitude);
    let route_km = distance_km * DETOUR_FACTOR;

    let minutes = route_km / speed_kmh(destination.mode) * 60.0
        + access_minutes(destination.mode, neighborhood.transit);

    Some(CommuteEstimate {
        destination: destination.name.clone(),
        distance_km: (distance_km * 10.0).round() / 10.0,
        minutes: minutes.ceil().max(1.0) as u32,
    })
}

/// Estimates for every destination, skipped entirely if the neighborhood is not located
pub fn estimate_commutes(neighborhood: &Neighborhood, destinations: &[Destination]) -> Vec<CommuteEstimate> {
    destinations
        .iter()
        .filter_map(|d| estimate_commute(neighborhood, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiningStyle, Vibe};

    fn create_located_neighborhood(transit: u8) -> Neighborhood {
        Neighborhood {
            id: "islington".to_string(),
            city_id: "london".to_string(),
            name: "Islington".to_string(),
            borough: "Islington".to_string(),
            affordability: 2,
            safety: 4,
            transit,
            green_space: 3,
            nightlife: 4,
            family_friendly: 3,
            dining: 5,
            dining_style: DiningStyle::Diverse,
            vibe: Vibe::Moderate,
            description: String::new(),
            highlights: vec![],
            latitude: Some(51.5416),
            longitude: Some(-0.1022),
        }
    }

    fn destination(mode: CommuteMode) -> Destination {
        // Bank, City of London
        Destination {
            name: "Office".to_string(),
            latitude: 51.5133,
            longitude: -0.0886,
            mode,
        }
    }

    #[test]
    fn test_modes_are_ordered_by_speed() {
        let hood = create_located_neighborhood(5);
        let walk = estimate_commute(&hood, &destination(CommuteMode::Walk)).unwrap();
        let cycle = estimate_commute(&hood, &destination(CommuteMode::Cycle)).unwrap();
        let drive = estimate_commute(&hood, &destination(CommuteMode::Drive)).unwrap();
        assert!(walk.minutes > cycle.minutes);
        assert!(cycle.minutes > drive.minutes);
        assert!(walk.distance_km > 2.5 && walk.distance_km < 4.0);
    }

    #[test]
    fn test_better_transit_is_faster() {
        let well_connected = create_located_neighborhood(5);
        let poorly_connected = create_located_neighborhood(1);
        let fast = estimate_commute(&well_connected, &destination(CommuteMode::Transit)).unwrap();
        let slow = estimate_commute(&poorly_connected, &destination(CommuteMode::Transit)).unwrap();
        assert_eq!(slow.minutes - fast.minutes, 4);
    }

    #[test]
    fn test_unlocated_neighborhood() {
        let mut hood = create_located_neighborhood(3);
        hood.latitude = None;
        assert!(estimate_commute(&hood, &destination(CommuteMode::Walk)).is_none());
        assert!(estimate_commutes(&hood, &[destination(CommuteMode::Walk)]).is_empty());
    }
}
