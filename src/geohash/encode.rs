//! Coordinate to geohash encoding.

use super::alphabet::{symbol, BITS};
use super::types::{Axis, BoundingBox, Coordinate, Precision};

/// Encodes a longitude/latitude pair to a geohash of `precision` characters.
///
/// Starting from the whole world, each step halves the current range on one
/// axis and records a 1 bit if the coordinate lies strictly above the
/// midpoint. Steps alternate longitude, latitude, longitude, ... across the
/// whole hash, and every five bits become one character.
///
/// Supported lengths are 1 through 12. Other lengths are not rejected: zero
/// gives an empty string and longer lengths keep bisecting.
///
/// # Arguments
///
/// * `lng` - Longitude in degrees
/// * `lat` - Latitude in degrees
/// * `precision` - Number of characters to produce
///
/// # Examples
///
/// ```
/// use geocell::encode;
///
/// assert_eq!(encode(0.0, 0.0, 1), "7");
/// assert_eq!(encode(-5.6, 42.6, 5), "ezs42");
///
/// // Out-of-range coordinates saturate into the corner cells
/// assert_eq!(encode(200.0, 100.0, 3), "zzz");
/// ```
#[must_use]
pub fn encode(lng: f64, lat: f64, precision: usize) -> String {
    let coord = Coordinate::new(lng, lat);
    let mut cell = BoundingBox::WORLD;
    let mut axis = Axis::Longitude;
    let mut hash = String::with_capacity(precision);

    while hash.len() < precision {
        let mut value = 0u8;
        for bit in BITS {
            let upper = coord.on(axis) > cell.midpoint(axis);
            if upper {
                value |= bit;
            }
            cell.bisect(axis, upper);
            axis = axis.flip();
        }
        hash.push(symbol(value));
    }

    hash
}

/// Encodes a [`Coordinate`] at one of the supported [`Precision`] levels.
///
/// # Examples
///
/// ```
/// use geocell::{encode_coordinate, Coordinate, Precision};
///
/// let hash = encode_coordinate(Coordinate::new(-122.4194, 37.7749), Precision::City);
/// assert_eq!(hash, "9q8yy");
/// ```
#[must_use]
pub fn encode_coordinate(coord: Coordinate, precision: Precision) -> String {
    encode(coord.lng, coord.lat, precision.length())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geohash::alphabet::BASE32;

    #[test]
    fn origin_at_precision_1() {
        assert_eq!(encode(0.0, 0.0, 1), "7");
    }

    #[test]
    fn known_vector() {
        assert_eq!(encode(-5.6, 42.6, 5), "ezs42");
    }

    #[test]
    fn length_matches_precision() {
        for precision in 0..=12 {
            assert_eq!(encode(12.34, -56.78, precision).len(), precision);
        }
    }

    #[test]
    fn zero_precision_is_empty() {
        assert_eq!(encode(10.0, 10.0, 0), "");
    }

    #[test]
    fn precision_beyond_twelve_keeps_bisecting() {
        let long = encode(12.34, -56.78, 20);
        assert_eq!(long.len(), 20);
        assert!(long.starts_with(&encode(12.34, -56.78, 12)));
    }

    #[test]
    fn longer_hash_extends_shorter() {
        let geo5 = encode(-122.4194, 37.7749, 5);
        let geo8 = encode(-122.4194, 37.7749, 8);
        assert!(geo8.starts_with(&geo5));
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(encode(200.0, 100.0, 3), "zzz");
        assert_eq!(encode(-200.0, -100.0, 2), "00");
    }

    #[test]
    fn midpoint_goes_to_lower_half() {
        // Exactly on every midpoint is never "strictly greater"
        assert_eq!(encode(0.0, 0.0, 1), "7");
        assert_eq!(encode(-180.0, -90.0, 4), "0000");
    }

    #[test]
    fn nan_takes_lower_half() {
        assert_eq!(encode(f64::NAN, f64::NAN, 3), "000");
    }

    #[test]
    fn output_is_within_alphabet() {
        let hash = encode(151.2093, -33.8688, 12);
        assert!(hash.bytes().all(|b| BASE32.contains(&b)));
    }

    #[test]
    fn nearby_locations_share_prefix() {
        let geo1 = encode(-122.4194, 37.7749, 8);
        let geo2 = encode(-122.4203, 37.7758, 8);

        let common_prefix_len = geo1
            .chars()
            .zip(geo2.chars())
            .take_while(|(a, b)| a == b)
            .count();

        assert!(common_prefix_len >= 5);
    }

    #[test]
    fn encode_coordinate_uses_precision_length() {
        let coord = Coordinate::new(-5.6, 42.6);
        assert_eq!(encode_coordinate(coord, Precision::City), "ezs42");
        assert_eq!(encode_coordinate(coord, Precision::default()).len(), 12);
    }
}
