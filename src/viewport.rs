//! World→output mapping, applied transiently around a draw batch.
//!
//! Rig state is shared across frames, so the transform must leave no
//! residue: after the renderer has been handed the batch, the exact inverse
//! is applied in reverse order.

use crate::geometry::Poly;
use crate::render::Renderer;
use glam::Vec2;

/// Outline widths are fractions of the smaller output dimension; this is
/// the divisor that fraction is taken against.
const OUTLINE_REFERENCE: f32 = 10.0;

/// The world-space window mapped onto the output surface: `origin` lands on
/// the output center, `extent` spans the full output size.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub origin: Vec2,
    pub extent: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: Vec2::new(-5.0, -6.0),
            extent: Vec2::new(10.0, 10.0),
        }
    }
}

/// Maps `shapes` into output space, hands them to the renderer, and restores
/// their world-space state.
pub fn present(shapes: &mut [&mut Poly], viewport: &Viewport, renderer: &mut dyn Renderer) {
    let output = renderer.output_size();
    let shift = viewport.origin;
    let scale = output / viewport.extent;
    let outline_scale = output.min_element() / OUTLINE_REFERENCE;

    for shape in shapes.iter_mut() {
        shape.shift(shift);
        shape.scale(scale);

        let points = shape.world_points();
        if shape.outline > 0.0 {
            renderer.draw_outlined_polygon(&points, shape.outline * outline_scale, shape.color);
        } else {
            renderer.draw_filled_polygon(&points, shape.color);
        }
    }

    // Exact inverse, reverse order.
    let inverse = scale.recip();
    for shape in shapes.iter_mut() {
        shape.scale(inverse);
        shape.shift(-shift);
    }
}
