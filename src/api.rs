//! Namespace-style access to the geohash operations.

use crate::geohash::{self, BoundingBox, Coordinate, Result};

/// Stateless entry point for the geohash operations.
///
/// Every method is an associated function that delegates to the matching
/// free function in [`crate::geohash`].
///
/// # Examples
///
/// ```
/// use geocell::GeoHash;
///
/// let hash = GeoHash::encode(0.0, 0.0, 1);
/// assert_eq!(hash, "7");
/// assert_eq!(GeoHash::expand(&hash).unwrap()[1], "e");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoHash;

impl GeoHash {
    /// See [`geohash::encode`].
    #[must_use]
    pub fn encode(lng: f64, lat: f64, precision: usize) -> String {
        geohash::encode(lng, lat, precision)
    }

    /// See [`geohash::decode`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if `hash` contains a character outside the alphabet.
    pub fn decode(hash: &str) -> Result<BoundingBox> {
        geohash::decode(hash)
    }

    /// See [`geohash::expand`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if `hash` contains a character outside the alphabet.
    pub fn expand(hash: &str) -> Result<[String; 8]> {
        geohash::expand(hash)
    }

    /// See [`geohash::get_rect`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if `hash` contains a character outside the alphabet.
    pub fn get_rect(hash: &str) -> Result<[Coordinate; 4]> {
        geohash::get_rect(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_matches_free_functions() {
        let hash = GeoHash::encode(-5.6, 42.6, 5);
        assert_eq!(hash, geohash::encode(-5.6, 42.6, 5));
        assert_eq!(GeoHash::decode(&hash), geohash::decode(&hash));
        assert_eq!(GeoHash::expand(&hash), geohash::expand(&hash));
        assert_eq!(GeoHash::get_rect(&hash), geohash::get_rect(&hash));
    }

    #[test]
    fn facade_propagates_errors() {
        assert!(GeoHash::decode("oops").is_err());
        assert!(GeoHash::expand("oops").is_err());
        assert!(GeoHash::get_rect("oops").is_err());
    }
}
