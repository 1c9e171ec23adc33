//! Neighbor expansion.

use super::decode::decode;
use super::encode::encode;
use super::error::Result;

/// Returns the eight geohashes around `hash`, at the same length.
///
/// The cell is decoded, then eight points offset by half a cell width and
/// height from its edges are re-encoded, in this order:
///
/// ```text
/// 1 2 3
/// 4 . 5
/// 6 7 8
/// ```
///
/// There is no wraparound at the poles or the antimeridian. Points pushed
/// past the world edge saturate into the edge cells, so the result can
/// repeat hashes or contain `hash` itself.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`](super::GeohashError::InvalidCharacter)
/// if `hash` does not decode.
///
/// # Examples
///
/// ```
/// use geocell::expand;
///
/// let neighbors = expand("7").unwrap();
/// assert_eq!(neighbors, ["d", "e", "s", "6", "k", "4", "5", "h"]);
/// ```
pub fn expand(hash: &str) -> Result<[String; 8]> {
    let cell = decode(hash)?;
    let dlng = cell.width() / 2.0;
    let dlat = cell.height() / 2.0;
    let precision = hash.chars().count();

    log::trace!("expanding geohash {hash:?} around {cell:?}");

    Ok([
        encode(cell.min_lng - dlng, cell.max_lat + dlat, precision),
        encode(cell.min_lng + dlng, cell.max_lat + dlat, precision),
        encode(cell.max_lng + dlng, cell.max_lat + dlat, precision),
        encode(cell.min_lng - dlng, cell.max_lat - dlat, precision),
        encode(cell.max_lng + dlng, cell.max_lat - dlat, precision),
        encode(cell.min_lng - dlng, cell.min_lat - dlat, precision),
        encode(cell.min_lng + dlng, cell.min_lat - dlat, precision),
        encode(cell.max_lng + dlng, cell.min_lat - dlat, precision),
    ])
}
