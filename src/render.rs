//! The drawing boundary.
//!
//! The engine computes world- and output-space polygon points; putting
//! pixels on a surface — including the offset geometry for outlines
//! (round-join, closed-path) — belongs to the [`Renderer`] implementation.

use crate::types::Color;
use glam::Vec2;

pub trait Renderer {
    /// Size of the output surface in pixels.
    fn output_size(&self) -> Vec2;

    /// Draws a filled polygon from output-space points.
    fn draw_filled_polygon(&mut self, points: &[Vec2], color: Color);

    /// Draws a filled polygon wrapped in an outline ring of the given
    /// thickness (in output units).
    fn draw_outlined_polygon(&mut self, points: &[Vec2], outline_width: f32, color: Color);
}

/// Discards every draw call. For headless playback and benchmarks.
pub struct NullRenderer {
    pub output: Vec2,
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self {
            output: Vec2::new(800.0, 800.0),
        }
    }
}

impl Renderer for NullRenderer {
    fn output_size(&self) -> Vec2 {
        self.output
    }

    fn draw_filled_polygon(&mut self, _points: &[Vec2], _color: Color) {}

    fn draw_outlined_polygon(&mut self, _points: &[Vec2], _outline_width: f32, _color: Color) {}
}

/// One captured draw call.
#[derive(Clone, Debug)]
pub struct DrawCall {
    pub points: Vec<Vec2>,
    /// `None` for filled draws, `Some(width)` for outlined ones.
    pub outline_width: Option<f32>,
    pub color: Color,
}

/// Records every draw call for inspection in tests.
pub struct RecordingRenderer {
    pub output: Vec2,
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new(output: Vec2) -> Self {
        Self {
            output,
            calls: Vec::new(),
        }
    }
}

impl Renderer for RecordingRenderer {
    fn output_size(&self) -> Vec2 {
        self.output
    }

    fn draw_filled_polygon(&mut self, points: &[Vec2], color: Color) {
        self.calls.push(DrawCall {
            points: points.to_vec(),
            outline_width: None,
            color,
        });
    }

    fn draw_outlined_polygon(&mut self, points: &[Vec2], outline_width: f32, color: Color) {
        self.calls.push(DrawCall {
            points: points.to_vec(),
            outline_width: Some(outline_width),
            color,
        });
    }
}
