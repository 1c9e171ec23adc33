//! Geohash value types.

use serde::{Deserialize, Serialize};

/// A geographic position as a longitude/latitude pair in degrees.
///
/// No range is enforced. Values outside [-180, 180] × [-90, 90] still encode,
/// they just land in the outermost cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees
    pub lng: f64,

    /// Latitude in degrees
    pub lat: f64,
}

impl Coordinate {
    /// Creates a coordinate from longitude and latitude, in that order.
    #[must_use]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Returns the value of this coordinate on `axis`.
    #[must_use]
    pub const fn on(self, axis: Axis) -> f64 {
        match axis {
            Axis::Longitude => self.lng,
            Axis::Latitude => self.lat,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Interprets the tuple as `(lng, lat)`.
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}

/// The axis a bisection step acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// East-west (x)
    Longitude,
    /// North-south (y)
    Latitude,
}

impl Axis {
    /// Returns the other axis.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Longitude => Self::Latitude,
            Self::Latitude => Self::Longitude,
        }
    }
}

/// The rectangular cell denoted by a geohash.
///
/// `min_lng <= max_lng` and `min_lat <= max_lat` always hold, since every
/// bisection step moves one bound to the midpoint of the current range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Western edge
    pub min_lng: f64,
    /// Eastern edge
    pub max_lng: f64,
    /// Southern edge
    pub min_lat: f64,
    /// Northern edge
    pub max_lat: f64,
}

impl BoundingBox {
    /// The whole world, the cell of the empty geohash.
    pub const WORLD: Self = Self {
        min_lng: -180.0,
        max_lng: 180.0,
        min_lat: -90.0,
        max_lat: 90.0,
    };

    /// Longitudinal extent in degrees.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Latitudinal extent in degrees.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Center point of the cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocell::geohash::{BoundingBox, Coordinate};
    ///
    /// assert_eq!(BoundingBox::WORLD.center(), Coordinate::new(0.0, 0.0));
    /// ```
    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            self.midpoint(Axis::Longitude),
            self.midpoint(Axis::Latitude),
        )
    }

    /// Returns `true` if `coord` lies inside the cell, edges included.
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.min_lng..=self.max_lng).contains(&coord.lng)
            && (self.min_lat..=self.max_lat).contains(&coord.lat)
    }

    /// Corners in the order bottom-left, top-left, top-right, bottom-right.
    #[must_use]
    pub const fn corners(&self) -> [Coordinate; 4] {
        [
            Coordinate::new(self.min_lng, self.min_lat),
            Coordinate::new(self.min_lng, self.max_lat),
            Coordinate::new(self.max_lng, self.max_lat),
            Coordinate::new(self.max_lng, self.min_lat),
        ]
    }

    /// Midpoint of the current range on `axis`.
    #[must_use]
    pub fn midpoint(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Longitude => (self.min_lng + self.max_lng) / 2.0,
            Axis::Latitude => (self.min_lat + self.max_lat) / 2.0,
        }
    }

    /// One bisection step: keeps the upper half of `axis` if `upper`, else the lower half.
    pub(crate) fn bisect(&mut self, axis: Axis, upper: bool) {
        let mid = self.midpoint(axis);
        match (axis, upper) {
            (Axis::Longitude, true) => self.min_lng = mid,
            (Axis::Longitude, false) => self.max_lng = mid,
            (Axis::Latitude, true) => self.min_lat = mid,
            (Axis::Latitude, false) => self.max_lat = mid,
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::WORLD
    }
}

/// Supported geohash lengths, named by the scale of their cells.
///
/// # Cell Size Table
///
/// | Precision      | Length | Cell (width × height) |
/// |----------------|--------|-----------------------|
/// | Continental    | 1      | 5,009.4 km × 4,992.6 km |
/// | Subcontinental | 2      | 1,252.3 km × 624.1 km |
/// | Region         | 3      | 156.5 km × 156 km     |
/// | District       | 4      | 39.1 km × 19.5 km     |
/// | City           | 5      | 4.9 km × 4.9 km       |
/// | Neighborhood   | 6      | 1.2 km × 609.4 m      |
/// | Street         | 7      | 152.9 m × 152.4 m     |
/// | Building       | 8      | 38.2 m × 19 m         |
/// | Meters         | 9      | 4.8 m × 4.8 m         |
/// | SubMeter       | 10     | 1.2 m × 59.5 cm       |
/// | Decimeter      | 11     | 14.9 cm × 14.9 cm     |
/// | Centimeter     | 12     | 3.7 cm × 1.9 cm       |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Precision {
    /// 1 character
    Continental,
    /// 2 characters
    Subcontinental,
    /// 3 characters
    Region,
    /// 4 characters
    District,
    /// 5 characters, city-level
    City,
    /// 6 characters
    Neighborhood,
    /// 7 characters
    Street,
    /// 8 characters
    Building,
    /// 9 characters
    Meters,
    /// 10 characters
    SubMeter,
    /// 11 characters
    Decimeter,
    /// 12 characters, the longest supported hash
    #[default]
    Centimeter,
}

impl Precision {
    /// Every precision, shortest first.
    pub const ALL: [Self; 12] = [
        Self::Continental,
        Self::Subcontinental,
        Self::Region,
        Self::District,
        Self::City,
        Self::Neighborhood,
        Self::Street,
        Self::Building,
        Self::Meters,
        Self::SubMeter,
        Self::Decimeter,
        Self::Centimeter,
    ];

    /// Number of geohash characters at this precision.
    #[must_use]
    pub const fn length(self) -> usize {
        match self {
            Self::Continental => 1,
            Self::Subcontinental => 2,
            Self::Region => 3,
            Self::District => 4,
            Self::City => 5,
            Self::Neighborhood => 6,
            Self::Street => 7,
            Self::Building => 8,
            Self::Meters => 9,
            Self::SubMeter => 10,
            Self::Decimeter => 11,
            Self::Centimeter => 12,
        }
    }

    /// Returns the precision for a hash length, or `None` outside 1..=12.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocell::Precision;
    ///
    /// assert_eq!(Precision::from_length(5), Some(Precision::City));
    /// assert_eq!(Precision::from_length(13), None);
    /// ```
    #[must_use]
    pub fn from_length(length: usize) -> Option<Self> {
        length
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    /// Approximate cell size in metres as `(width, height)`.
    #[must_use]
    pub const fn cell_size_m(self) -> (f64, f64) {
        match self {
            Self::Continental => (5_009_400.0, 4_992_600.0),
            Self::Subcontinental => (1_252_300.0, 624_100.0),
            Self::Region => (156_500.0, 156_000.0),
            Self::District => (39_100.0, 19_500.0),
            Self::City => (4_900.0, 4_900.0),
            Self::Neighborhood => (1_200.0, 609.4),
            Self::Street => (152.9, 152.4),
            Self::Building => (38.2, 19.0),
            Self::Meters => (4.8, 4.8),
            Self::SubMeter => (1.2, 0.595),
            Self::Decimeter => (0.149, 0.149),
            Self::Centimeter => (0.037, 0.019),
        }
    }
}

impl From<Precision> for usize {
    fn from(precision: Precision) -> Self {
        precision.length()
    }
}
