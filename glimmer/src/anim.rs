//! Time-driven animation parameters.
//!
//! Animation state is never stored: every parameter is a pure function of
//! the wall-clock time elapsed since the render loop started, so a frame is
//! fully determined by `(resources, elapsed, framebuffer size)`.

/// Fade factor oscillating in `[0, 1]`; exactly `0.5` at `elapsed = 0`.
pub fn fade_factor(elapsed: f32) -> f32 {
  0.5 * elapsed.sin() + 0.5
}

/// Rotation angle for a constant angular speed.
///
/// The unit follows the speed; the demos pass degrees per second.
pub fn rotation_angle(elapsed: f32, angular_speed: f32) -> f32 {
  elapsed * angular_speed
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fade_starts_at_half() {
    assert_eq!(fade_factor(0.), 0.5);
  }

  #[test]
  fn fade_stays_in_range() {
    for i in 0..1000 {
      let fade = fade_factor(i as f32 * 0.05);
      assert!((0. ..=1.).contains(&fade));
    }
  }

  #[test]
  fn rotation_is_linear_in_time() {
    assert_eq!(rotation_angle(0., 50.), 0.);
    assert_eq!(rotation_angle(2., 50.), 100.);
    assert_eq!(rotation_angle(4., 50.), 2. * rotation_angle(2., 50.));
  }
}
