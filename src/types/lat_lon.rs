use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`. Serializes as a `[lat, lon]` pair, the
/// shape map markers take.
///
/// # Examples
///
/// ```
/// use heatwave::LatLon;
///
/// let recife = LatLon(-8.05, -34.90);
/// assert_eq!(recife.0, -8.05); // Latitude
/// assert_eq!(recife.1, -34.90); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(self) -> f64 {
        self.0
    }

    pub fn longitude(self) -> f64 {
        self.1
    }
}
