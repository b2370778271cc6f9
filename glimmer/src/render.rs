//! Per-frame draw pass execution.

use crate::buffer::{BufferTarget, GpuBuffer};
use crate::shader::AttributeLocation;
use gl::types::{GLenum, GLint, GLsizei};
use std::ptr::null;

/// Sets the color the framebuffer is cleared to at the start of each
/// frame.
pub fn set_clear_color(r: f32, g: f32, b: f32, a: f32) {
  unsafe {
    gl::ClearColor(r, g, b, a);
  }
}

/// Sizes the viewport to the current framebuffer and clears the color
/// buffer.
pub fn begin_frame(width: i32, height: i32) {
  unsafe {
    gl::Viewport(0, 0, width as GLsizei, height as GLsizei);
    gl::Clear(gl::COLOR_BUFFER_BIT);
  }
}

/// The primitive kinds the demos draw with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Primitive {
  Lines,
  LineLoop,
  Triangles,
  TriangleStrip,
}

impl Primitive {
  fn to_gl(self) -> GLenum {
    match self {
      Primitive::Lines => gl::LINES,
      Primitive::LineLoop => gl::LINE_LOOP,
      Primitive::Triangles => gl::TRIANGLES,
      Primitive::TriangleStrip => gl::TRIANGLE_STRIP,
    }
  }
}

/// One vertex attribute fed from a buffer.
pub struct AttributeBinding<'a> {
  /// Attribute slot resolved from the pass's program.
  pub location: AttributeLocation,
  /// Tightly packed float buffer backing the attribute.
  pub buffer: &'a GpuBuffer,
  /// Components per vertex: 2 for vec2 positions, 3 for vec3 colors.
  pub components: i32,
}

/// One draw pass: attribute wiring, connectivity and primitive kind.
///
/// The active program and its uniform values are frame-varying state set by
/// the caller before [`DrawPass::draw`]; everything here is resolved once
/// at resource construction time.
pub struct DrawPass<'a> {
  pub attributes: &'a [AttributeBinding<'a>],
  pub elements: &'a GpuBuffer,
  pub primitive: Primitive,
  /// Line width to draw with, for the line primitives. Line width is
  /// sticky context state, so line passes should always set it.
  pub line_width: Option<f32>,
}

impl DrawPass<'_> {
  /// Issues the indexed draw call for this pass.
  ///
  /// Every attribute enabled for the pass is disabled again when the guard
  /// drops, so an enable can never leak into the next pass.
  pub fn draw(&self) {
    debug_assert_eq!(self.elements.target(), BufferTarget::Element);

    let _enabled = EnabledAttributes::bind(self.attributes);

    unsafe {
      gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.elements.handle());

      if let Some(width) = self.line_width {
        gl::LineWidth(width);
      }

      gl::DrawElements(
        self.primitive.to_gl(),
        self.elements.len() as GLsizei,
        gl::UNSIGNED_INT,
        null(),
      );
    }
  }
}

/// Guard pairing every attribute enable with a disable.
struct EnabledAttributes<'a> {
  attributes: &'a [AttributeBinding<'a>],
}

impl<'a> EnabledAttributes<'a> {
  fn bind(attributes: &'a [AttributeBinding<'a>]) -> Self {
    for binding in attributes {
      debug_assert_eq!(binding.buffer.target(), BufferTarget::Vertex);

      unsafe {
        gl::BindBuffer(gl::ARRAY_BUFFER, binding.buffer.handle());
        gl::VertexAttribPointer(
          binding.location.0,
          binding.components as GLint,
          gl::FLOAT,
          gl::FALSE,
          (binding.components * 4) as GLsizei,
          null(),
        );
        gl::EnableVertexAttribArray(binding.location.0);
      }
    }

    EnabledAttributes { attributes }
  }
}

impl Drop for EnabledAttributes<'_> {
  fn drop(&mut self) {
    for binding in self.attributes {
      unsafe {
        gl::DisableVertexAttribArray(binding.location.0);
      }
    }
  }
}
