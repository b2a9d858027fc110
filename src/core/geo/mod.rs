/// A point in WGS84 decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// A point in logical screen pixels, as reported by the map widget's
/// touch callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &ScreenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned bounding envelope over WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_longitude: f64,
    pub min_latitude: f64,
    pub max_longitude: f64,
    pub max_latitude: f64,
}

impl Envelope {
    pub fn of_point(point: GeoPoint) -> Self {
        Self {
            min_longitude: point.longitude,
            min_latitude: point.latitude,
            max_longitude: point.longitude,
            max_latitude: point.latitude,
        }
    }

    pub fn expand_to(&mut self, point: GeoPoint) {
        self.min_longitude = self.min_longitude.min(point.longitude);
        self.min_latitude = self.min_latitude.min(point.latitude);
        self.max_longitude = self.max_longitude.max(point.longitude);
        self.max_latitude = self.max_latitude.max(point.latitude);
    }

    /// The minimal envelope over `points`, or `None` when there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut envelope = Self::of_point(*first);
        for point in iter {
            envelope.expand_to(*point);
        }
        Some(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_corners_equal_min_and_max_of_two_points() {
        let points = [GeoPoint::new(-122.4, 37.8), GeoPoint::new(-122.0, 37.0)];
        let envelope = Envelope::from_points(points.iter()).expect("two points must bound");

        assert_eq!(envelope.min_longitude, -122.4);
        assert_eq!(envelope.max_longitude, -122.0);
        assert_eq!(envelope.min_latitude, 37.0);
        assert_eq!(envelope.max_latitude, 37.8);
    }

    #[test]
    fn envelope_over_no_points_is_absent() {
        let no_points: [GeoPoint; 0] = [];
        assert!(Envelope::from_points(no_points.iter()).is_none());
    }

    #[test]
    fn single_point_envelope_is_degenerate() {
        let point = GeoPoint::new(12.5, -3.25);
        let envelope = Envelope::from_points([point].iter()).expect("one point must bound");

        assert_eq!(envelope.min_longitude, envelope.max_longitude);
        assert_eq!(envelope.min_latitude, envelope.max_latitude);
        assert_eq!(envelope.min_longitude, 12.5);
        assert_eq!(envelope.min_latitude, -3.25);
    }

    #[test]
    fn screen_distance_is_euclidean() {
        let a = ScreenPoint::new(0.0, 0.0);
        let b = ScreenPoint::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
