//! Texture decoding and upload.

use gl::types::{GLint, GLsizei, GLuint};
use std::{error, fmt, path::Path};

/// Errors the texture loader can produce.
#[derive(Debug)]
pub enum TextureError {
  /// The underlying image could not be opened or decoded.
  Decode(image::ImageError),
  /// The decoded image is not tightly packed 4-byte RGBA.
  UnsupportedStride {
    /// `width * 4`.
    expected: usize,
    /// The decoder's actual row stride in bytes.
    actual: usize,
  },
}

impl fmt::Display for TextureError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      TextureError::Decode(ref e) => write!(f, "failed to decode image: {}", e),

      TextureError::UnsupportedStride { expected, actual } => write!(
        f,
        "unsupported row stride: expected {} bytes, got {}",
        expected, actual
      ),
    }
  }
}

impl error::Error for TextureError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      TextureError::Decode(e) => Some(e),
      TextureError::UnsupportedStride { .. } => None,
    }
  }
}

impl From<image::ImageError> for TextureError {
  fn from(e: image::ImageError) -> Self {
    TextureError::Decode(e)
  }
}

/// Handle to an immutable 2D RGBA texture.
#[derive(Debug)]
pub struct Texture {
  handle: GLuint,
  width: u32,
  height: u32,
}

impl Texture {
  /// Decodes the image at `path` and uploads it as a 2D texture.
  ///
  /// Rows are flipped vertically during the copy: image files store row 0
  /// at the top, while the texture coordinate origin used by the demo
  /// shaders is bottom-left.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, TextureError> {
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();
    let stride = img.sample_layout().height_stride;

    let texels = flip_rows(img.as_raw(), width, height, stride)?;

    Ok(Self::from_rgba(&texels, width, height))
  }

  /// Uploads tightly packed, bottom-up RGBA texels with the fixed sampling
  /// parameters: linear min/mag filtering, clamp-to-edge on both axes.
  ///
  /// The internal format is RGBA8, matching the RGBA/UNSIGNED_BYTE
  /// external data; one consistent pairing for every texture.
  pub fn from_rgba(texels: &[u8], width: u32, height: u32) -> Self {
    let mut handle: GLuint = 0;

    unsafe {
      gl::GenTextures(1, &mut handle);
      gl::BindTexture(gl::TEXTURE_2D, handle);

      gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as GLint);
      gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);
      gl::TexParameteri(
        gl::TEXTURE_2D,
        gl::TEXTURE_WRAP_S,
        gl::CLAMP_TO_EDGE as GLint,
      );
      gl::TexParameteri(
        gl::TEXTURE_2D,
        gl::TEXTURE_WRAP_T,
        gl::CLAMP_TO_EDGE as GLint,
      );

      gl::TexImage2D(
        gl::TEXTURE_2D,
        0,
        gl::RGBA8 as GLint,
        width as GLsizei,
        height as GLsizei,
        0,
        gl::RGBA,
        gl::UNSIGNED_BYTE,
        texels.as_ptr() as _,
      );
    }

    Texture {
      handle,
      width,
      height,
    }
  }

  /// Binds the texture to the given texture unit.
  pub fn bind_to_unit(&self, unit: u32) {
    unsafe {
      gl::ActiveTexture(gl::TEXTURE0 + unit);
      gl::BindTexture(gl::TEXTURE_2D, self.handle);
    }
  }

  /// Width in pixels.
  pub fn width(&self) -> u32 {
    self.width
  }

  /// Height in pixels.
  pub fn height(&self) -> u32 {
    self.height
  }
}

impl Drop for Texture {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteTextures(1, &self.handle);
    }
  }
}

/// Reorders tightly packed RGBA rows bottom-up: source row `h` lands in
/// destination row `height - 1 - h`.
///
/// A row stride other than `width * 4` is a precondition violation, not
/// something to silently reformat.
pub fn flip_rows(
  pixels: &[u8],
  width: u32,
  height: u32,
  stride: usize,
) -> Result<Vec<u8>, TextureError> {
  let expected = width as usize * 4;

  if stride != expected {
    return Err(TextureError::UnsupportedStride {
      expected,
      actual: stride,
    });
  }

  let mut flipped = vec![0; pixels.len()];

  for h in 0..height as usize {
    let src = &pixels[h * stride..(h + 1) * stride];
    let dst = height as usize - 1 - h;

    flipped[dst * stride..(dst + 1) * stride].copy_from_slice(src);
  }

  Ok(flipped)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn two_rows_swap_places() {
    // 2×2 image, one marker byte pattern per row
    let top = [1, 2, 3, 4, 5, 6, 7, 8];
    let bottom = [9, 10, 11, 12, 13, 14, 15, 16];
    let pixels: Vec<u8> = top.iter().chain(bottom.iter()).copied().collect();

    let flipped = flip_rows(&pixels, 2, 2, 8).unwrap();

    assert_eq!(&flipped[..8], &bottom);
    assert_eq!(&flipped[8..], &top);
  }

  #[test]
  fn three_rows_reverse_order() {
    let pixels: Vec<u8> = (0..12).collect();

    let flipped = flip_rows(&pixels, 1, 3, 4).unwrap();

    assert_eq!(&flipped[..4], &[8, 9, 10, 11]);
    assert_eq!(&flipped[4..8], &[4, 5, 6, 7]);
    assert_eq!(&flipped[8..], &[0, 1, 2, 3]);
  }

  #[test]
  fn padded_stride_is_rejected() {
    let pixels = vec![0; 3 * 20];

    match flip_rows(&pixels, 4, 3, 20) {
      Err(TextureError::UnsupportedStride { expected, actual }) => {
        assert_eq!(expected, 16);
        assert_eq!(actual, 20);
      }
      other => panic!("expected a stride error, got {:?}", other.map(|v| v.len())),
    }
  }

  #[test]
  fn flip_preserves_length() {
    let pixels = vec![7; 5 * 4 * 4];

    let flipped = flip_rows(&pixels, 5, 4, 20).unwrap();

    assert_eq!(flipped.len(), pixels.len());
  }
}
