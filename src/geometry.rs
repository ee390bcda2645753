//! 2D shape primitives: axis-aligned rectangles and oriented polygons.
//!
//! A [`Poly`] stores its points in local coordinates relative to `pos`, and
//! carries a tracked `orientation` — the running sum of rotations applied to
//! it. Orientation is authoritative state, never recomputed from the point
//! geometry, so [`Poly::set_orientation`] can renormalize a feature's facing
//! each frame without cumulative drift.

use crate::math::rotate_vec;
use crate::types::Color;
use glam::Vec2;

/// Default outline width for polygons, as a fraction of the smaller output
/// dimension (see [`crate::viewport::present`]). Zero disables the outline.
pub const DEFAULT_OUTLINE: f32 = 0.08;

/// Corner sign masks, halved and multiplied by `size` to produce corners.
/// The order is load-bearing: the rig reads corners positionally to derive
/// its frontal and side reference points.
const CORNER_MASKS: [Vec2; 4] = [
    Vec2::new(-1.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(-1.0, -1.0),
];

/// An axis-aligned rectangle. `pos` is the center.
///
/// `size` components are expected to be non-negative; a negative component
/// (e.g. from an out-of-range rig parameter) flips the corner winding but is
/// otherwise harmless.
#[derive(Clone, Debug)]
pub struct Rect {
    pub size: Vec2,
    pub pos: Vec2,
    pub color: Color,
}

impl Rect {
    pub fn new(size: Vec2, pos: Vec2, color: Color) -> Self {
        Self { size, pos, color }
    }

    /// The four corners in world space, in the fixed mask order.
    pub fn corner_points(&self) -> Vec<Vec2> {
        CORNER_MASKS
            .iter()
            .map(|mask| self.pos + *mask / 2.0 * self.size)
            .collect()
    }

    /// Converts to a [`Poly`] whose local points are the corners of this
    /// rect recentered at the origin, carrying `pos` and color over.
    pub fn to_polygon(&self) -> Poly {
        let centered = Rect {
            size: self.size,
            pos: Vec2::ZERO,
            color: self.color,
        };
        Poly::new(centered.corner_points(), self.pos, self.color)
    }

    /// Moves the rect in the direction opposite to `delta`.
    pub fn shift(&mut self, delta: Vec2) {
        self.pos -= delta;
    }

    /// Scales position and size elementwise (used by the viewport mapping).
    pub fn scale(&mut self, factor: Vec2) {
        self.pos *= factor;
        self.size *= factor;
    }
}

/// An oriented polygon with local points relative to `pos`.
#[derive(Clone, Debug)]
pub struct Poly {
    /// Vertices in local coordinates, relative to `pos`.
    pub points: Vec<Vec2>,
    /// World-space anchor.
    pub pos: Vec2,
    pub color: Color,
    /// Outline width; 0 disables the outline.
    pub outline: f32,
    /// Cumulative rotation applied so far, in radians.
    pub orientation: f32,
}

impl Poly {
    pub fn new(points: Vec<Vec2>, pos: Vec2, color: Color) -> Self {
        debug_assert!(points.len() >= 3, "polygon needs at least 3 points");
        Self {
            points,
            pos,
            color,
            outline: DEFAULT_OUTLINE,
            orientation: 0.0,
        }
    }

    /// Rotates every local point about the local origin by `angle` radians
    /// and adds `angle` to the tracked orientation.
    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        for point in &mut self.points {
            *point = rotate_vec(*point, angle);
        }
        self.orientation += angle;
        self
    }

    /// Rotates by whatever is left to reach `target`, normalizing the facing
    /// without accumulating drift across frames.
    pub fn set_orientation(&mut self, target: f32) -> &mut Self {
        let current = self.orientation;
        self.rotate(target - current)
    }

    /// Scales the silhouette about `pos`: each local point is shifted to
    /// world space, scaled elementwise, and shifted back. `pos` itself is
    /// unaffected.
    pub fn scale(&mut self, factor: Vec2) -> &mut Self {
        for point in &mut self.points {
            *point += self.pos;
            *point *= factor;
            *point -= self.pos;
        }
        self
    }

    /// Moves the polygon in the direction opposite to `delta`. The viewport
    /// mapping relies on this subtraction convention.
    pub fn shift(&mut self, delta: Vec2) -> &mut Self {
        self.pos -= delta;
        self
    }

    /// Arithmetic mean of the local points (not area-weighted).
    pub fn centroid(&self) -> Vec2 {
        let sum = self
            .points
            .iter()
            .fold(Vec2::ZERO, |acc, point| acc + *point);
        sum / self.points.len() as f32
    }

    /// Vertices in world space (local points offset by `pos`).
    pub fn world_points(&self) -> Vec<Vec2> {
        self.points.iter().map(|point| *point + self.pos).collect()
    }
}
