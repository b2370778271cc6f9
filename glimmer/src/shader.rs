//! Shader stage compilation and program linking.

use cgmath::Matrix4;
use gl::types::{GLchar, GLenum, GLint, GLuint};
use std::{
  error,
  ffi::CString,
  fmt,
  ptr::{null, null_mut},
};

/// A shader stage kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StageKind {
  /// Vertex shader.
  Vertex,
  /// Fragment shader.
  Fragment,
}

impl StageKind {
  fn to_gl(self) -> GLenum {
    match self {
      StageKind::Vertex => gl::VERTEX_SHADER,
      StageKind::Fragment => gl::FRAGMENT_SHADER,
    }
  }
}

impl fmt::Display for StageKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageKind::Vertex => f.write_str("vertex shader"),
      StageKind::Fragment => f.write_str("fragment shader"),
    }
  }
}

/// Errors that shader stages can emit.
#[derive(Clone, Debug)]
pub enum StageError {
  /// The graphics context refused to allocate a stage object.
  CreationFailed(StageKind),
  /// Compilation failed; carries the offending source text and the
  /// context's diagnostic log.
  CompilationFailed {
    kind: StageKind,
    source: String,
    log: String,
  },
}

impl fmt::Display for StageError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageError::CreationFailed(kind) => write!(f, "cannot create {} object", kind),

      StageError::CompilationFailed {
        kind,
        ref source,
        ref log,
      } => write!(f, "failed to compile {}:\n{}\n{}", kind, source, log),
    }
  }
}

impl error::Error for StageError {}

/// A compiled shader stage.
///
/// Stages only need to live long enough to be linked into a [`Program`];
/// the underlying object is deleted on drop.
#[derive(Debug)]
pub struct Stage {
  handle: GLuint,
  kind: StageKind,
}

impl Stage {
  /// Compiles GLSL source text into a stage object.
  pub fn compile(kind: StageKind, source: &str) -> Result<Self, StageError> {
    let handle = unsafe { gl::CreateShader(kind.to_gl()) };

    if handle == 0 {
      return Err(StageError::CreationFailed(kind));
    }

    let c_source = CString::new(source.as_bytes()).unwrap();

    unsafe {
      gl::ShaderSource(handle, 1, [c_source.as_ptr()].as_ptr(), null());
      gl::CompileShader(handle);

      let mut compiled: GLint = gl::FALSE.into();
      gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut compiled);

      if compiled == gl::TRUE.into() {
        Ok(Stage { handle, kind })
      } else {
        let mut log_len: GLint = 0;
        gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

        let mut log: Vec<u8> = Vec::with_capacity(log_len as usize);
        gl::GetShaderInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);
        log.set_len(log_len as usize);

        gl::DeleteShader(handle);

        Err(StageError::CompilationFailed {
          kind,
          source: source.to_owned(),
          log: String::from_utf8_lossy(&log).into_owned(),
        })
      }
    }
  }
}

impl Drop for Stage {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteShader(self.handle);
    }
  }
}

/// Errors that a [`Program`] can generate.
#[derive(Clone, Debug)]
pub enum ProgramError {
  /// Link failed; the log comes straight from the graphics context.
  LinkFailed(String),
}

impl fmt::Display for ProgramError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ProgramError::LinkFailed(ref log) => {
        write!(f, "shader program failed to link: {}", log)
      }
    }
  }
}

impl error::Error for ProgramError {}

/// A resolved uniform location.
///
/// The location may be the "not found" sentinel (−1); setting a uniform
/// through such a location is silently ignored by the graphics context,
/// which is exactly the non-fatal behavior inactive uniforms call for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UniformLocation(GLint);

impl UniformLocation {
  /// Whether the name resolved to an active uniform.
  pub fn is_active(self) -> bool {
    self.0 >= 0
  }
}

/// A resolved vertex attribute location.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AttributeLocation(pub(crate) GLuint);

/// A linked, executable vertex + fragment shader pair.
#[derive(Debug)]
pub struct Program {
  handle: GLuint,
}

impl Program {
  /// Attaches and links the two stages into an executable program.
  pub fn link(vertex: &Stage, fragment: &Stage) -> Result<Self, ProgramError> {
    debug_assert_eq!(vertex.kind, StageKind::Vertex);
    debug_assert_eq!(fragment.kind, StageKind::Fragment);

    unsafe {
      let handle = gl::CreateProgram();

      gl::AttachShader(handle, vertex.handle);
      gl::AttachShader(handle, fragment.handle);
      gl::LinkProgram(handle);

      let mut linked: GLint = gl::FALSE.into();
      gl::GetProgramiv(handle, gl::LINK_STATUS, &mut linked);

      if linked == gl::TRUE.into() {
        Ok(Program { handle })
      } else {
        let mut log_len: GLint = 0;
        gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

        let mut log: Vec<u8> = Vec::with_capacity(log_len as usize);
        gl::GetProgramInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);
        log.set_len(log_len as usize);

        gl::DeleteProgram(handle);

        Err(ProgramError::LinkFailed(
          String::from_utf8_lossy(&log).into_owned(),
        ))
      }
    }
  }

  /// Makes this program the active one for subsequent uniform updates and
  /// draw calls.
  pub fn activate(&self) {
    unsafe {
      gl::UseProgram(self.handle);
    }
  }

  /// Resolves a uniform by name.
  ///
  /// Linkers are free to optimize unused declarations away, so an
  /// unresolved name is only worth a warning, never an error.
  pub fn uniform(&self, name: &str) -> UniformLocation {
    let location = {
      let c_name = CString::new(name.as_bytes()).unwrap();
      unsafe { gl::GetUniformLocation(self.handle, c_name.as_ptr() as *const GLchar) }
    };

    if location < 0 {
      log::warn!("uniform {} is inactive in the linked program", name);
    }

    UniformLocation(location)
  }

  /// Resolves a vertex attribute by name; `None` if it is inactive.
  pub fn attribute(&self, name: &str) -> Option<AttributeLocation> {
    let location = {
      let c_name = CString::new(name.as_bytes()).unwrap();
      unsafe { gl::GetAttribLocation(self.handle, c_name.as_ptr() as *const GLchar) }
    };

    if location < 0 {
      log::warn!("vertex attribute {} is inactive in the linked program", name);
      None
    } else {
      Some(AttributeLocation(location as GLuint))
    }
  }

  /// Sets a float uniform. The program must be active.
  pub fn set_f32(&self, uniform: UniformLocation, value: f32) {
    unsafe {
      gl::Uniform1f(uniform.0, value);
    }
  }

  /// Sets an integer uniform; also used for sampler unit bindings. The
  /// program must be active.
  pub fn set_i32(&self, uniform: UniformLocation, value: i32) {
    unsafe {
      gl::Uniform1i(uniform.0, value);
    }
  }

  /// Sets a 4×4 matrix uniform. The program must be active.
  pub fn set_mat4(&self, uniform: UniformLocation, value: &Matrix4<f32>) {
    let raw: [[f32; 4]; 4] = (*value).into();

    unsafe {
      gl::UniformMatrix4fv(uniform.0, 1, gl::FALSE, raw.as_ptr() as *const f32);
    }
  }
}

impl Drop for Program {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteProgram(self.handle);
    }
  }
}
