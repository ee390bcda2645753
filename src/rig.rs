//! The facial rig: the live parameter set and the feature polygons derived
//! from it every frame.
//!
//! [`Narrator`] owns the parameters, the feature shapes, and the captured
//! pose sequence with its playback cursor. Each frame, [`Narrator::update`]
//! re-anchors every feature to reference points on the head polygon's
//! rotated corners; [`Narrator::render`] hands the shape batch to a
//! [`Renderer`] through the viewport mapping.

use crate::animation::{blend_step, AggregateConvergence, BlendOutcome, ConvergencePolicy};
use crate::errors::RigError;
use crate::geometry::{Poly, Rect};
use crate::math::{extend_magnitude, midpoint};
use crate::render::Renderer;
use crate::snapshot::Snapshot;
use crate::types::Color;
use crate::viewport::{present, Viewport};
use glam::Vec2;
use tracing::{debug, info};

/// Index of the right-side entry in per-side parameter pairs.
pub const RIGHT: usize = 0;
/// Index of the left-side entry in per-side parameter pairs.
pub const LEFT: usize = 1;

const BODY_COLOR: Color = Color::from_rgb8(51, 51, 51);
const CROWN_COLOR: Color = Color::from_rgb8(255, 215, 0);
const FEATURE_COLOR: Color = Color::WHITE;

/// Outline width used by the small features (eyes, mouth, brows).
const FEATURE_OUTLINE: f32 = 0.06;

const BODY_SIZE: Vec2 = Vec2::new(1.0, 3.0);
const HEAD_SIZE: Vec2 = Vec2::new(1.0, 1.0);
const BROW_SIZE: Vec2 = Vec2::new(0.32, 0.03);

const CROWN_SIZE: f32 = 1.2;
/// The crown sits at the frontal reference point with its magnitude grown by
/// `CROWN_SIZE / CROWN_LIFT_DIVISOR`.
const CROWN_LIFT_DIVISOR: f32 = 1.4;
/// Eye centers sit at the frontal reference scaled by `1 / EYE_CENTER_DIVISOR`.
const EYE_CENTER_DIVISOR: f32 = 6.0;
/// Per-side eye offset is the side reference divided by `±EYE_SPREAD_DIVISOR`.
const EYE_SPREAD_DIVISOR: f32 = 2.2;

/// Samples per lip branch is `2 * MOUTH_RESOLUTION + 1`.
const MOUTH_RESOLUTION: i32 = 10;

/// Right-edge profile of the torso silhouette in the unit square, base to
/// collar. Mirrored across the vertical midline and expanded at build time.
const TORSO_PROFILE: [[f32; 2]; 8] = [
    [1.0 / 3.0, 0.0],
    [0.10, 0.26],
    [0.20, 0.285],
    [0.095, 0.31],
    [0.0625, 0.77],
    [0.138, 0.795],
    [0.05, 0.82],
    [0.15, 1.0],
];
const TORSO_SCALE: f32 = 2.8;

/// Spike profile of the crown in the unit square; centered and scaled by
/// `CROWN_SIZE` at build time.
const CROWN_PROFILE: [[f32; 2]; 7] = [
    [0.0, 0.0],
    [0.0, 0.75],
    [0.25, 0.5],
    [0.5, 0.75],
    [0.75, 0.5],
    [1.0, 0.75],
    [1.0, 0.0],
];

fn torso_points() -> Vec<Vec2> {
    let right: Vec<Vec2> = TORSO_PROFILE
        .iter()
        .map(|&[x, y]| Vec2::new(x, y - 0.5) * TORSO_SCALE)
        .collect();
    let mut points: Vec<Vec2> = right.iter().rev().map(|p| Vec2::new(-p.x, p.y)).collect();
    points.extend(right);
    points
}

fn crown_points() -> Vec<Vec2> {
    CROWN_PROFILE
        .iter()
        .map(|&[x, y]| Vec2::new(x, y) * CROWN_SIZE - Vec2::splat(CROWN_SIZE / 2.0))
        .collect()
}

/// The live facial parameter set, mutated by the control surface or by the
/// blend step and read by the rig builder every frame. All values are
/// unchecked scalars; out-of-range values produce degenerate but harmless
/// geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceParams {
    /// Head facing, radians.
    pub head_rotation: f32,
    /// Head lift above the top of the body.
    pub head_escalation: f32,
    /// Horizontal head offset from the body.
    pub head_shift: f32,
    pub mouth_width: f32,
    pub mouth_height: f32,
    /// How far below the head center the mouth sits, as a fraction of the
    /// frontal reference.
    pub mouth_escalation: f32,
    /// Curvature of the lip parabola; negative frowns.
    pub smile_amount: f32,
    pub eye_size: f32,
    pub eye_openness: [f32; 2],
    pub brow_escalation: [f32; 2],
    pub brow_rotation: [f32; 2],
    /// Per-axis mouth openness, `[width, height]`. Consumed by the mouth
    /// generator but not part of the snapshot vector, so playback cannot
    /// restore it.
    pub mouth_openness: [f32; 2],
}

impl Default for FaceParams {
    fn default() -> Self {
        Self {
            head_rotation: 0.0,
            head_escalation: 0.8,
            head_shift: 0.0,
            mouth_width: 0.3,
            mouth_height: 0.1,
            mouth_escalation: 0.6,
            smile_amount: 0.0,
            eye_size: 0.15,
            eye_openness: [1.0, 1.0],
            brow_escalation: [0.3, 0.3],
            brow_rotation: [0.1, -0.1],
            mouth_openness: [1.0, 1.0],
        }
    }
}

/// The animated face: parameters, derived feature polygons, and the captured
/// pose sequence.
pub struct Narrator {
    pub params: FaceParams,
    pub viewport: Viewport,

    pub body: Rect,
    pub torso: Poly,
    pub head: Poly,
    pub crown: Poly,
    pub eyes: [Poly; 2],
    pub mouth: Poly,
    pub brows: [Poly; 2],

    snapshots: Vec<Snapshot>,
    cursor: usize,
    policy: Box<dyn ConvergencePolicy>,
}

impl Narrator {
    pub fn new() -> Self {
        let params = FaceParams::default();

        let body = Rect::new(BODY_SIZE, Vec2::ZERO, BODY_COLOR);
        let torso = Poly::new(torso_points(), body.pos, BODY_COLOR);
        let head = Rect::new(HEAD_SIZE, Vec2::ZERO, BODY_COLOR).to_polygon();
        let crown = Poly::new(crown_points(), Vec2::ZERO, CROWN_COLOR);

        let eye_rect = Rect::new(Vec2::splat(params.eye_size), Vec2::ZERO, FEATURE_COLOR);
        let mut eyes = [eye_rect.to_polygon(), eye_rect.to_polygon()];
        for eye in &mut eyes {
            eye.outline = FEATURE_OUTLINE;
        }

        let mouth_rect = Rect::new(
            Vec2::new(params.mouth_width, params.mouth_height),
            Vec2::ZERO,
            FEATURE_COLOR,
        );
        let mut mouth = mouth_rect.to_polygon();
        mouth.outline = FEATURE_OUTLINE;

        let brow_rect = Rect::new(BROW_SIZE, Vec2::ZERO, FEATURE_COLOR);
        let mut brows = [brow_rect.to_polygon(), brow_rect.to_polygon()];
        for brow in &mut brows {
            brow.outline = FEATURE_OUTLINE;
        }

        let mut narrator = Self {
            params,
            viewport: Viewport::default(),
            body,
            torso,
            head,
            crown,
            eyes,
            mouth,
            brows,
            snapshots: Vec::new(),
            cursor: 0,
            policy: Box::new(AggregateConvergence::default()),
        };
        narrator.set_mouth();
        narrator
    }

    /// Swaps the convergence policy used during playback.
    pub fn set_convergence_policy(&mut self, policy: Box<dyn ConvergencePolicy>) {
        self.policy = policy;
    }

    /// Captures the current parameters as a pose.
    pub fn take_snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.params)
    }

    /// Appends a pose to the playback sequence.
    pub fn add_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
        info!(total = self.snapshots.len(), "snapshot appended");
    }

    /// Replaces the playback sequence and rewinds the cursor.
    pub fn set_snapshots(&mut self, snapshots: Vec<Snapshot>) {
        self.snapshots = snapshots;
        self.cursor = 0;
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Playback-sequence tick: blends toward the snapshot at the cursor and
    /// advances on convergence. Past the end of the sequence the first
    /// snapshot is re-applied instantly (no blending) and the cursor rewinds.
    /// An empty sequence is a no-op.
    pub fn apply_snapshots(&mut self, dt: f32) {
        if self.cursor < self.snapshots.len() {
            let target = self.snapshots[self.cursor];
            if blend_step(&mut self.params, &target, dt, self.policy.as_ref())
                == BlendOutcome::Converged
            {
                self.cursor += 1;
                debug!(cursor = self.cursor, "pose reached");
            }
        } else if let Some(first) = self.snapshots.first() {
            first.apply(&mut self.params);
            self.cursor = 0;
            debug!("sequence looped");
        }
    }

    /// Rebuilds the mouth polygon from the current parameters: two parabolic
    /// lip branches sampled at `2 * MOUTH_RESOLUTION + 1` points each, the
    /// lower lip dropped by half the (openness-scaled) mouth height.
    fn set_mouth(&mut self) {
        let p = &self.params;
        let half_gap = p.mouth_height * p.mouth_openness[1] / 2.0;
        let n = MOUTH_RESOLUTION;

        let sample_x = |i: i32| i as f32 / n as f32 * p.mouth_width * p.mouth_openness[0];

        let mut points = Vec::with_capacity(2 * (2 * n as usize + 1));
        for i in -n..=n {
            let x = sample_x(i);
            points.push(Vec2::new(x, p.smile_amount * x * x - half_gap));
        }
        for i in (-n..=n).rev() {
            let x = sample_x(i);
            points.push(Vec2::new(x, p.smile_amount * x * x));
        }

        self.mouth.points = points;
        self.mouth.orientation = 0.0;
    }

    /// Recomputes feature placement from the current parameters.
    ///
    /// Fails only when a reference vector degenerates to zero length, which
    /// aborts this tick's update and surfaces the fault to the driver.
    pub fn update(&mut self) -> Result<(), RigError> {
        let p = self.params;

        self.head.pos = Vec2::new(
            self.body.pos.x + p.head_shift,
            self.body.pos.y + self.body.size.y / 2.0 + p.head_escalation,
        );
        self.torso.pos = self.body.pos;

        self.head.set_orientation(p.head_rotation);

        // Reference points in the head's current rotated local frame.
        let frontal = midpoint(self.head.points[0], self.head.points[1]);
        let side = midpoint(self.head.points[1], self.head.points[2]);

        self.crown.pos = extend_magnitude(frontal, CROWN_SIZE / CROWN_LIFT_DIVISOR)? + self.head.pos;
        self.crown.set_orientation(p.head_rotation);

        let eye_center = frontal / EYE_CENTER_DIVISOR + self.head.pos;
        let side_offsets = [side / EYE_SPREAD_DIVISOR, side / -EYE_SPREAD_DIVISOR];

        for i in [RIGHT, LEFT] {
            let size = Vec2::new(p.eye_size, p.eye_size * p.eye_openness[i]);
            self.eyes[i].points =
                Rect::new(size, Vec2::ZERO, FEATURE_COLOR).corner_points();
            self.eyes[i].orientation = 0.0;
            self.eyes[i].pos = eye_center + side_offsets[i];
            self.eyes[i].set_orientation(p.head_rotation);
        }

        self.set_mouth();
        self.mouth.pos = frontal * -p.mouth_escalation + self.head.pos;
        self.mouth.set_orientation(p.head_rotation);

        for i in [RIGHT, LEFT] {
            let lifted =
                extend_magnitude(eye_center - self.head.pos, p.brow_escalation[i])? + self.head.pos;
            self.brows[i].pos = lifted + side_offsets[i];
            // Brow rotation rides on top of the head-orientation normalize.
            self.brows[i].set_orientation(p.head_rotation);
            self.brows[i].rotate(p.brow_rotation[i]);
        }

        Ok(())
    }

    /// Presents the current frame: recenters the body, then hands the
    /// feature polygons to the renderer through the viewport mapping. Shape
    /// state is restored before returning.
    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        self.body.pos = Vec2::ZERO;

        let Self {
            torso,
            head,
            crown,
            mouth,
            eyes,
            brows,
            viewport,
            ..
        } = self;

        let mut shapes: Vec<&mut Poly> = Vec::with_capacity(8);
        shapes.push(torso);
        shapes.push(head);
        shapes.push(crown);
        shapes.push(mouth);
        for eye in eyes.iter_mut() {
            shapes.push(eye);
        }
        for brow in brows.iter_mut() {
            shapes.push(brow);
        }

        present(&mut shapes, viewport, renderer);
    }
}

impl Default for Narrator {
    fn default() -> Self {
        Self::new()
    }
}
