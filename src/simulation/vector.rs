//! Two-dimensional vector value type used for positions, velocities and forces.

use std::ops::{Add, AddAssign, Mul, Sub};

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use serde::{Deserialize, Serialize};

/// An immutable (x, y) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean magnitude.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// The zero vector has no direction and is returned unchanged.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length > 0.0 {
            self.scale(1.0 / length)
        } else {
            self
        }
    }

    /// Multiplies both components by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Rescales the vector down to `max_length` if it is longer.
    pub fn limit(self, max_length: f32) -> Self {
        if self.length() > max_length {
            self.normalize().scale(max_length)
        } else {
            self
        }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Self) -> f32 {
        Euclidean.distance(Point::from(self), Point::from(other))
    }
}

impl From<Vector2> for Point<f32> {
    fn from(v: Vector2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}
