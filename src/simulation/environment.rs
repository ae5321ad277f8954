//! Read-only arena geometry supplied by the host on every tick.
//!
//! The host owns the layout (it may change on window resize); the simulation only
//! queries it for spawn position, target completion and collisions.

use geo::{Intersects, Rect, coord};
use serde::{Deserialize, Serialize};

use super::vector::Vector2;

/// Circular goal the rockets try to reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Center of the target.
    pub center: Vector2,
    /// Radius of the target.
    pub radius: f32,
}

/// Rectangular bounds of the playing field, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    /// Width of the arena.
    pub width: f32,
    /// Height of the arena.
    pub height: f32,
}

impl Arena {
    /// Checks whether `pos` lies within `[0, width] x [0, height]`.
    pub fn contains(&self, pos: Vector2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

/// Geometry of one simulation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Goal of the rockets.
    pub target: Target,
    /// Obstacle rockets crash into, if any.
    pub obstacle: Option<Rect<f32>>,
    /// Playing field bounds.
    pub arena: Arena,
}

impl Environment {
    /// Builds the default layout for an arena of the given size.
    ///
    /// The target sits centered near the top and a horizontal bar blocks the
    /// middle half of the direct path from the spawn point.
    pub fn for_arena(width: f32, height: f32) -> Self {
        let bar_y = height * 0.55;
        Self {
            target: Target {
                center: Vector2::new(width / 2.0, height * 0.85),
                radius: 20.0,
            },
            obstacle: Some(Rect::new(
                coord! { x: width * 0.25, y: bar_y },
                coord! { x: width * 0.75, y: bar_y + 10.0 },
            )),
            arena: Arena { width, height },
        }
    }

    /// Point every rocket of a generation starts from.
    pub fn spawn_point(&self) -> Vector2 {
        Vector2::new(self.arena.width / 2.0, self.arena.height * 0.25)
    }

    /// Distance from `pos` to the target center.
    pub fn distance_to_target(&self, pos: Vector2) -> f32 {
        pos.distance(self.target.center)
    }

    /// Checks whether `pos` is close enough to the target to count as arrived.
    pub fn reached_target(&self, pos: Vector2) -> bool {
        self.distance_to_target(pos) < self.target.radius / 2.0
    }

    /// Checks whether `pos` hits the obstacle (boundary included) or has left the arena.
    pub fn collides(&self, pos: Vector2) -> bool {
        let hits_obstacle = self
            .obstacle
            .is_some_and(|rect| rect.intersects(&coord! { x: pos.x, y: pos.y }));

        hits_obstacle || !self.arena.contains(pos)
    }
}
