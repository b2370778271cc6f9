//! Hue/saturation/brightness to RGB conversion.

/// Converts an HSB triple to an RGB triple, every component in `[0, 1]`.
///
/// Standard six-sector conversion: the chroma is `brightness * saturation`,
/// the hue is scaled to `[0, 6)` and the sector it falls in selects the
/// permutation of the chroma, its secondary component and zero. A hue of
/// exactly `1.0` wraps back to the start of sector 0.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> (f32, f32, f32) {
  let c = brightness * saturation;
  let h = hue * 6.;
  let x = c * (1. - ((h % 2.) - 1.).abs());

  if h < 1. {
    (c, x, 0.)
  } else if h < 2. {
    (x, c, 0.)
  } else if h < 3. {
    (0., c, x)
  } else if h < 4. {
    (0., x, c)
  } else if h < 5. {
    (x, 0., c)
  } else {
    (c, 0., x)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const EPSILON: f32 = 1e-6;

  fn assert_rgb(actual: (f32, f32, f32), expected: (f32, f32, f32)) {
    assert!(
      (actual.0 - expected.0).abs() < EPSILON
        && (actual.1 - expected.1).abs() < EPSILON
        && (actual.2 - expected.2).abs() < EPSILON,
      "expected {:?}, got {:?}",
      expected,
      actual
    );
  }

  #[test]
  fn sector_starts_at_full_saturation_and_brightness() {
    assert_rgb(hsb_to_rgb(0., 1., 1.), (1., 0., 0.));
    assert_rgb(hsb_to_rgb(1. / 6., 1., 1.), (1., 1., 0.));
    assert_rgb(hsb_to_rgb(2. / 6., 1., 1.), (0., 1., 0.));
    assert_rgb(hsb_to_rgb(3. / 6., 1., 1.), (0., 1., 1.));
    assert_rgb(hsb_to_rgb(4. / 6., 1., 1.), (0., 0., 1.));
    assert_rgb(hsb_to_rgb(5. / 6., 1., 1.), (1., 0., 1.));
  }

  #[test]
  fn full_hue_wraps_to_sector_zero() {
    assert_rgb(hsb_to_rgb(1., 1., 1.), hsb_to_rgb(0., 1., 1.));
  }

  #[test]
  fn sector_boundaries_are_continuous() {
    let step = 1e-4;
    for k in 1..6 {
      let h = k as f32 / 6.;
      let below = hsb_to_rgb(h - step, 1., 1.);
      let at = hsb_to_rgb(h, 1., 1.);

      assert!((below.0 - at.0).abs() < 1e-2);
      assert!((below.1 - at.1).abs() < 1e-2);
      assert!((below.2 - at.2).abs() < 1e-2);
    }
  }

  #[test]
  fn components_stay_in_range() {
    for hue in 0..100 {
      for (s, b) in [(0., 0.), (0.25, 0.75), (1., 0.5), (1., 1.)] {
        let (r, g, bl) = hsb_to_rgb(hue as f32 / 100., s, b);

        for component in [r, g, bl] {
          assert!((0. ..=1.).contains(&component));
        }
      }
    }
  }
}
