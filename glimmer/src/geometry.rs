//! Static geometry for the demo scenes.

use crate::color::hsb_to_rgb;
use std::f32::consts::PI;

/// A ring of vertices around the origin colored with the full hue wheel.
///
/// Positions are interleaved `x, y` pairs, colors are `r, g, b` triples and
/// the element indices walk the vertices in order, ready for a line-loop
/// draw.
pub struct HueRing {
  pub positions: Vec<f32>,
  pub colors: Vec<f32>,
  pub indices: Vec<u32>,
}

/// Samples the circle of the given radius every `step` radians, starting at
/// the top and winding clockwise, one full hue revolution around the ring.
pub fn hue_ring(radius: f32, step: f32) -> HueRing {
  let mut positions = Vec::new();
  let mut colors = Vec::new();
  let mut indices = Vec::new();

  let mut angle = 0.;
  while angle < 2. * PI {
    let (r, g, b) = hsb_to_rgb(angle / (2. * PI), 1., 1.);

    positions.push(radius * angle.sin());
    positions.push(radius * angle.cos());
    colors.extend_from_slice(&[r, g, b]);
    indices.push(indices.len() as u32);

    angle += step;
  }

  HueRing {
    positions,
    colors,
    indices,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_ring_has_126_vertices() {
    let ring = hue_ring(1., 0.05);

    assert_eq!(ring.indices.len(), 126);
    assert_eq!(ring.positions.len(), 126 * 2);
    assert_eq!(ring.colors.len(), 126 * 3);
  }

  #[test]
  fn ring_starts_at_the_top_in_red() {
    let ring = hue_ring(0.95, 0.05);

    assert_eq!(ring.positions[0], 0.);
    assert_eq!(ring.positions[1], 0.95);
    assert_eq!(&ring.colors[..3], &[1., 0., 0.]);
  }

  #[test]
  fn indices_walk_the_vertices_in_order() {
    let ring = hue_ring(1., 0.05);

    for (i, index) in ring.indices.iter().enumerate() {
      assert_eq!(*index, i as u32);
    }
  }

  #[test]
  fn vertices_sit_on_the_circle() {
    let ring = hue_ring(2., 0.05);

    for xy in ring.positions.chunks(2) {
      let r = (xy[0] * xy[0] + xy[1] * xy[1]).sqrt();
      assert!((r - 2.).abs() < 1e-5);
    }
  }
}
