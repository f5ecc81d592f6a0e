use geo::{point, HaversineDistance};

/// Great-circle distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let from = point!(x: lon1, y: lat1);
    let to = point!(x: lon2, y: lat2);
    from.haversine_distance(&to) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // London to Paris is approximately 344 km
        let distance = haversine_distance(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_zero_distance() {
        assert!(haversine_distance(40.7128, -74.0060, 40.7128, -74.0060) < 0.01);
    }

    #[test]
    fn test_manhattan_to_brooklyn() {
        let distance = haversine_distance(40.7580, -73.9855, 40.6782, -73.9442);
        assert!(distance > 5.0 && distance < 15.0);
    }
}
