//! Geocell
//!
//! Geohash encoding and decoding for spatial indexing and approximate
//! proximity queries. A geohash names a rectangular cell of the earth by
//! interleaving longitude and latitude bisection bits, five bits per
//! character, so nearby locations tend to share a prefix.
//!
//! ```
//! use geocell::{decode, encode, expand, get_rect};
//!
//! let hash = encode(0.0, 0.0, 1);
//! assert_eq!(hash, "7");
//!
//! let cell = decode(&hash).unwrap();
//! assert_eq!((cell.min_lng, cell.max_lng), (-45.0, 0.0));
//!
//! let neighbors = expand(&hash).unwrap();
//! assert_eq!(neighbors.len(), 8);
//!
//! let corners = get_rect(&hash).unwrap();
//! assert_eq!(corners[0].lng, -45.0);
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

mod api;
pub mod geohash;

pub use api::GeoHash;
pub use geohash::{
    decode, encode, encode_coordinate, expand, get_rect, BoundingBox, Coordinate, GeohashError,
    Precision,
};
