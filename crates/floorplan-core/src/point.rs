//! Typed points for the three coordinate spaces.
//!
//! A point only ever moves between spaces through the conversion functions in
//! [`crate::units`]; there are no `From` impls between these types. All three
//! serialize as `{ "x": .., "y": .. }`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Read access to the raw coordinates of a point in any space.
pub trait PlanePoint: Copy {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    /// Euclidean distance to another point of the same space.
    fn distance_to(&self, other: &Self) -> f64 {
        let dx = other.x() - self.x();
        let dy = other.y() - self.y();
        (dx * dx + dy * dy).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

macro_rules! plane_point {
    ($(#[$meta:meta])* $name:ident, $unit:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            pub x: f64,
            pub y: f64,
        }

        impl $name {
            pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

            pub const fn new(x: f64, y: f64) -> Self {
                Self { x, y }
            }

            /// Arithmetic midpoint of `self` and `other`.
            pub fn midpoint(&self, other: &Self) -> Self {
                Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
            }
        }

        impl PlanePoint for $name {
            fn x(&self) -> f64 {
                self.x
            }

            fn y(&self) -> f64 {
                self.y
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self::new(self.x + rhs.x, self.y + rhs.y)
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self::new(self.x - rhs.x, self.y - rhs.y)
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self::new(-self.x, -self.y)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({:.2}, {:.2}) {}", self.x, self.y, $unit)
            }
        }
    };
}

plane_point!(
    /// A point in world space, measured in feet. All stored geometry uses it.
    WorldPoint,
    "ft"
);

plane_point!(
    /// A point in export-image pixels for a given DPI and export origin.
    ExportPoint,
    "px"
);

plane_point!(
    /// A point in on-screen editing pixels, after pan and zoom.
    CanvasPoint,
    "canvas px"
);
