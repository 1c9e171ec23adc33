//! Geohash to bounding box decoding.

use super::alphabet::{value_of, BITS, BITS_PER_CHAR};
use super::error::{GeohashError, Result};
use super::types::{Axis, BoundingBox};

/// Decodes a geohash to the bounding box of its cell.
///
/// Replays the bisection steps the encoder took. The longitude/latitude
/// alternation runs across the whole bit stream, and each character holds an
/// odd number of bits, so characters at even positions start on longitude
/// (lng, lat, lng, lat, lng) and characters at odd positions start on
/// latitude (lat, lng, lat, lng, lat).
///
/// The empty string decodes to [`BoundingBox::WORLD`].
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`] for the first character that
/// is not in the base-32 alphabet.
///
/// # Examples
///
/// ```
/// use geocell::decode;
///
/// let cell = decode("7").unwrap();
/// assert_eq!((cell.min_lng, cell.max_lng), (-45.0, 0.0));
/// assert_eq!((cell.min_lat, cell.max_lat), (-45.0, 0.0));
///
/// assert!(decode("7a").is_err());
/// ```
pub fn decode(hash: &str) -> Result<BoundingBox> {
    let mut cell = BoundingBox::WORLD;

    for (position, character) in hash.chars().enumerate() {
        let Some(value) = value_of(character) else {
            log::debug!("rejecting geohash {hash:?}: {character:?} at position {position}");
            return Err(GeohashError::InvalidCharacter {
                character,
                position,
            });
        };

        let mut axis = first_axis(position);
        for bit in BITS {
            cell.bisect(axis, value & bit != 0);
            axis = axis.flip();
        }
    }

    Ok(cell)
}

/// Axis of the first bit in the character at `position`.
const fn first_axis(position: usize) -> Axis {
    // Five bits per character: an odd count flips the starting axis each time.
    if (position * BITS_PER_CHAR) % 2 == 0 {
        Axis::Longitude
    } else {
        Axis::Latitude
    }
}

#[cfg(test)]
mod tests {
    // Bisection of the world extent is exact in binary floating point.
    #![allow(clippy::float_cmp)]

    use super::*;
    use crate::geohash::encode::encode;
    use crate::geohash::types::Coordinate;

    #[test]
    fn decodes_single_character() {
        let cell = decode("7").unwrap();
        assert_eq!(
            cell,
            BoundingBox {
                min_lng: -45.0,
                max_lng: 0.0,
                min_lat: -45.0,
                max_lat: 0.0,
            }
        );
    }

    #[test]
    fn decodes_known_vector() {
        let cell = decode("ezs42").unwrap();
        assert_eq!(cell.min_lng, -5.625);
        assert_eq!(cell.max_lng, -5.581_054_687_5);
        assert_eq!(cell.min_lat, 42.583_007_812_5);
        assert_eq!(cell.max_lat, 42.626_953_125);
    }

    #[test]
    fn odd_positions_start_on_latitude() {
        let first = decode("s").unwrap();
        assert_eq!((first.min_lng, first.max_lng), (0.0, 45.0));
        assert_eq!((first.min_lat, first.max_lat), (0.0, 45.0));

        // "0" then "1": second char value 1 sets only the last bit, a latitude bit
        let cell = decode("01").unwrap();
        let parent = decode("0").unwrap();
        assert_eq!(cell.min_lng, parent.min_lng);
        assert!(cell.min_lat > parent.min_lat);
    }

    #[test]
    fn first_axis_alternates_by_position() {
        assert_eq!(first_axis(0), Axis::Longitude);
        assert_eq!(first_axis(1), Axis::Latitude);
        assert_eq!(first_axis(2), Axis::Longitude);
        assert_eq!(first_axis(11), Axis::Latitude);
    }

    #[test]
    fn empty_hash_is_world() {
        assert_eq!(decode("").unwrap(), BoundingBox::WORLD);
    }

    #[test]
    fn round_trip_at_precision_1() {
        assert_eq!(
            decode(&encode(0.0, 0.0, 1)).unwrap(),
            decode("7").unwrap()
        );
    }

    #[test]
    fn decoded_cell_contains_encoded_point() {
        let coord = Coordinate::new(151.2093, -33.8688);
        for precision in 1..=12 {
            let cell = decode(&encode(coord.lng, coord.lat, precision)).unwrap();
            assert!(cell.contains(coord), "precision {precision}");
        }
    }

    #[test]
    fn rejects_letter_outside_alphabet() {
        let err = decode("ezs4a").unwrap_err();
        assert_eq!(
            err,
            GeohashError::InvalidCharacter {
                character: 'a',
                position: 4,
            }
        );
    }

    #[test]
    fn rejects_uppercase() {
        assert!(matches!(
            decode("EZS42"),
            Err(GeohashError::InvalidCharacter {
                character: 'E',
                position: 0,
            })
        ));
    }

    #[test]
    fn reports_character_position_not_byte_offset() {
        let err = decode("é7o").unwrap_err();
        assert_eq!(
            err,
            GeohashError::InvalidCharacter {
                character: 'é',
                position: 0,
            }
        );

        let err = decode("7éo").unwrap_err();
        assert!(matches!(
            err,
            GeohashError::InvalidCharacter { position: 1, .. }
        ));
    }
}
