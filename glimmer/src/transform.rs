//! Aspect-corrected orthographic projection and rotation matrices.
//!
//! The legacy fixed-function matrix stack has no counterpart here: the
//! demos compute explicit 4×4 matrix values and pass them as uniforms to a
//! small vertex shader.

use cgmath::{Deg, Matrix4, SquareMatrix};

/// Half-extents `(x1, x2, y1, y2)` of the orthographic view volume for a
/// framebuffer with the given width/height ratio.
///
/// The longer axis is stretched so a unit circle stays circular:
/// `(-ratio, ratio, -1, 1)` when `ratio > 1`, and
/// `(-1, 1, -1/ratio, 1/ratio)` otherwise.
pub fn ortho_extents(ratio: f32) -> (f32, f32, f32, f32) {
  if ratio > 1. {
    (-ratio, ratio, -1., 1.)
  } else {
    (-1., 1., -1. / ratio, 1. / ratio)
  }
}

/// Orthographic projection over [`ortho_extents`], near/far planes at `1`
/// and `-1`.
pub fn projection(ratio: f32) -> Matrix4<f32> {
  let (x1, x2, y1, y2) = ortho_extents(ratio);
  cgmath::ortho(x1, x2, y1, y2, 1., -1.)
}

/// Rotation around the Z axis; the angle is in degrees.
pub fn rotation_z(degrees: f32) -> Matrix4<f32> {
  Matrix4::from_angle_z(Deg(degrees))
}

/// Identity transform, for passes drawn directly in normalized device
/// coordinates.
pub fn identity() -> Matrix4<f32> {
  Matrix4::identity()
}

#[cfg(test)]
mod tests {
  use super::*;
  use cgmath::Vector4;

  const EPSILON: f32 = 1e-5;

  #[test]
  fn wide_framebuffer_stretches_x() {
    assert_eq!(ortho_extents(2.), (-2., 2., -1., 1.));
  }

  #[test]
  fn tall_framebuffer_stretches_y() {
    assert_eq!(ortho_extents(0.5), (-1., 1., -2., 2.));
  }

  #[test]
  fn square_framebuffer_keeps_unit_extents() {
    assert_eq!(ortho_extents(1.), (-1., 1., -1., 1.));
  }

  #[test]
  fn square_projection_maps_corners_to_ndc_corners() {
    let corner = projection(1.) * Vector4::new(1., 1., 0., 1.);

    assert!((corner.x - 1.).abs() < EPSILON);
    assert!((corner.y - 1.).abs() < EPSILON);
    assert!((corner.w - 1.).abs() < EPSILON);
  }

  #[test]
  fn wide_projection_shrinks_x() {
    let point = projection(2.) * Vector4::new(2., -1., 0., 1.);

    assert!((point.x - 1.).abs() < EPSILON);
    assert!((point.y + 1.).abs() < EPSILON);
  }

  #[test]
  fn quarter_turn_sends_x_to_y() {
    let turned = rotation_z(90.) * Vector4::new(1., 0., 0., 1.);

    assert!(turned.x.abs() < EPSILON);
    assert!((turned.y - 1.).abs() < EPSILON);
  }
}
