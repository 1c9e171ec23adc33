//! Cell rectangle extraction.

use super::decode::decode;
use super::error::Result;
use super::types::Coordinate;

/// Returns the four corners of the cell denoted by `hash`.
///
/// Order is bottom-left, top-left, top-right, bottom-right, suitable as the
/// ring of a polygon.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`](super::GeohashError::InvalidCharacter)
/// if `hash` does not decode.
///
/// # Examples
///
/// ```
/// use geocell::{get_rect, Coordinate};
///
/// let corners = get_rect("7").unwrap();
/// assert_eq!(corners[0], Coordinate::new(-45.0, -45.0));
/// assert_eq!(corners[2], Coordinate::new(0.0, 0.0));
/// ```
pub fn get_rect(hash: &str) -> Result<[Coordinate; 4]> {
    decode(hash).map(|cell| cell.corners())
}
