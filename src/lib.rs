//! # Narrator Engine
//!
//! `narrator-engine` is a parametric 2D face rig with pose snapshot capture
//! and playback.
//!
//! A stylized face is built from oriented polygons and driven by a small set
//! of scalar parameters (head rotation/shift/elevation, mouth geometry and
//! smile curvature, eye openness, eyebrow tilt/elevation). The live
//! parameters can be captured into pose snapshots, and a sequence of
//! snapshots can be played back with smooth exponential blending between
//! poses.
//!
//! ## Core Features
//!
//! *   **Parametric Rig**: every feature polygon is re-derived each frame
//!     from reference points on the head, so the whole face follows head
//!     rotation, shift, and elevation.
//! *   **Pose Snapshots**: the 14-value parameter vector can be captured,
//!     appended to a sequence, and persisted as JSON.
//! *   **Playback**: a sequence of poses replays with per-tick exponential
//!     blending, looping back to the first pose at the end.
//! *   **Injected Boundaries**: rendering, control input, and timing are
//!     traits ([`render::Renderer`], [`control::ControlSurface`], [`Clock`]);
//!     the engine is headless by itself.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use narrator_engine::driver::playback_tick;
//! use narrator_engine::render::NullRenderer;
//! use narrator_engine::Narrator;
//!
//! let mut narrator = Narrator::new();
//!
//! let neutral = narrator.take_snapshot();
//! narrator.params.smile_amount = 1.2;
//! narrator.add_snapshot(narrator.take_snapshot());
//! narrator.add_snapshot(neutral);
//!
//! let mut renderer = NullRenderer::default();
//! for _ in 0..120 {
//!     playback_tick(&mut narrator, &mut renderer, 1.0 / 60.0).unwrap();
//! }
//! ```

/// Pose blending and convergence policies.
pub mod animation;

/// The control-surface boundary (interactive or scripted parameter feeds).
pub mod control;

/// The interactive-edit and scripted-playback driver routines.
pub mod driver;

pub mod errors;

/// 2D shape primitives with tracked orientation.
pub mod geometry;

/// Directed-frame math over `glam::Vec2`.
pub mod math;

/// The drawing boundary and headless renderer implementations.
pub mod render;

/// The facial rig itself.
pub mod rig;

/// Pose snapshots and their on-disk format.
pub mod snapshot;

/// Shared data structures used across the engine.
pub mod types;

/// The transient world→output mapping.
pub mod viewport;

pub use errors::RigError;
pub use rig::{FaceParams, Narrator};
pub use snapshot::Snapshot;

use std::time::Instant;

/// A per-tick source of elapsed time driving rate-based blending.
pub trait Clock {
    /// Seconds elapsed since the previous call (or since creation).
    fn tick(&mut self) -> f32;
}

/// Monotonic wall-clock implementation of [`Clock`].
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Fixed-step clock for headless runs and tests.
pub struct FixedClock {
    pub dt: f32,
}

impl Clock for FixedClock {
    fn tick(&mut self) -> f32 {
        self.dt
    }
}
