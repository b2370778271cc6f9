//! All-or-nothing resource construction.

use crate::shader::{ProgramError, StageError};
use crate::texture::TextureError;
use std::{error, fmt};

/// Any error raised while building a demo's resource aggregate.
///
/// Construction is all-or-nothing: the render loop never sees a partially
/// built aggregate, every variant here is fatal to startup, and there is no
/// retry or degraded-mode rendering.
#[derive(Debug)]
pub enum ResourceError {
  /// A shader stage failed to compile.
  Stage(StageError),
  /// A program failed to link.
  Program(ProgramError),
  /// A texture failed to decode or validate.
  Texture(TextureError),
}

impl fmt::Display for ResourceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ResourceError::Stage(ref e) => write!(f, "shader stage error: {}", e),
      ResourceError::Program(ref e) => write!(f, "shader program error: {}", e),
      ResourceError::Texture(ref e) => write!(f, "texture error: {}", e),
    }
  }
}

impl error::Error for ResourceError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      ResourceError::Stage(e) => Some(e),
      ResourceError::Program(e) => Some(e),
      ResourceError::Texture(e) => Some(e),
    }
  }
}

impl From<StageError> for ResourceError {
  fn from(e: StageError) -> Self {
    ResourceError::Stage(e)
  }
}

impl From<ProgramError> for ResourceError {
  fn from(e: ProgramError) -> Self {
    ResourceError::Program(e)
  }
}

impl From<TextureError> for ResourceError {
  fn from(e: TextureError) -> Self {
    ResourceError::Texture(e)
  }
}
