//! Static GPU buffer upload.

use gl::types::{GLenum, GLsizeiptr, GLuint};
use std::mem;

mod sealed {
  pub trait Sealed {}

  impl Sealed for f32 {}
  impl Sealed for u32 {}
}

/// The 32-bit element types a [`GpuBuffer`] accepts: floats for vertex
/// attributes, unsigned integers for element indices.
pub trait BufferItem: Copy + sealed::Sealed {}

impl BufferItem for f32 {}
impl BufferItem for u32 {}

/// Which binding point a buffer is uploaded through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BufferTarget {
  /// Per-vertex attribute data.
  Vertex,
  /// Element indices defining primitive connectivity.
  Element,
}

impl BufferTarget {
  fn to_gl(self) -> GLenum {
    match self {
      BufferTarget::Vertex => gl::ARRAY_BUFFER,
      BufferTarget::Element => gl::ELEMENT_ARRAY_BUFFER,
    }
  }
}

/// Handle to an upload-once buffer in device memory.
///
/// The handle stays valid until the buffer is dropped; in this system that
/// only happens at process exit, when the owning resource aggregate goes
/// away.
#[derive(Debug)]
pub struct GpuBuffer {
  handle: GLuint,
  target: BufferTarget,
  len: usize,
  stride: usize,
}

impl GpuBuffer {
  /// Allocates a static device buffer and fills it with `data`.
  ///
  /// Allocation failure is unrecoverable for this system and is left to
  /// the graphics context.
  pub fn upload<T>(target: BufferTarget, data: &[T]) -> Self
  where
    T: BufferItem,
  {
    let mut handle: GLuint = 0;
    let stride = mem::size_of::<T>();
    let bytes = stride * data.len();

    unsafe {
      gl::GenBuffers(1, &mut handle);
      gl::BindBuffer(target.to_gl(), handle);
      gl::BufferData(
        target.to_gl(),
        bytes as GLsizeiptr,
        data.as_ptr() as _,
        gl::STATIC_DRAW,
      );
    }

    GpuBuffer {
      handle,
      target,
      len: data.len(),
      stride,
    }
  }

  pub(crate) fn handle(&self) -> GLuint {
    self.handle
  }

  /// The binding point the buffer was uploaded through.
  pub fn target(&self) -> BufferTarget {
    self.target
  }

  /// Number of elements in the buffer.
  pub fn len(&self) -> usize {
    self.len
  }

  /// Whether the buffer holds no elements.
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Bytes per element.
  pub fn stride(&self) -> usize {
    self.stride
  }
}

impl Drop for GpuBuffer {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteBuffers(1, &self.handle);
    }
  }
}
