//! Geohash module.
//!
//! Provides the four geohash operations:
//! - Encoding a coordinate to a geohash of a given length
//! - Decoding a geohash to the bounding box of its cell
//! - Expanding a geohash to the eight cells around it
//! - Extracting the four corners of a geohash cell
//!
//! # Bit Convention
//!
//! Every character carries five bisection bits, most significant first.
//! Bits alternate between longitude and latitude across the whole hash,
//! starting with longitude, so even-indexed characters begin on longitude and
//! odd-indexed characters begin on latitude.
//!
//! ```text
//! char index:   0              1
//! bit weight:   16 8  4  2  1  16 8  4  2  1
//! axis:         x  y  x  y  x  y  x  y  x  y
//! ```
//!
//! # Example Usage
//!
//! ```
//! use geocell::geohash::{decode, encode, Coordinate};
//!
//! let hash = encode(-5.6, 42.6, 5);
//! assert_eq!(hash, "ezs42");
//!
//! let cell = decode(&hash).unwrap();
//! assert!(cell.contains(Coordinate::new(-5.6, 42.6)));
//! ```

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod error;
pub mod neighbors;
pub mod rect;
pub mod types;

pub use decode::decode;
pub use encode::{encode, encode_coordinate};
pub use error::{GeohashError, Result};
pub use neighbors::expand;
pub use rect::get_rect;
pub use types::{Axis, BoundingBox, Coordinate, Precision};
