//! Window and OpenGL context creation.

use glfw::{Context as _, Glfw, InitError, Window, WindowEvent, WindowHint};
use std::{error, fmt, os::raw::c_void, sync::mpsc::Receiver};

/// Error that can be risen while creating a surface.
#[derive(Debug)]
pub enum SurfaceError {
  /// GLFW initialization went wrong.
  InitError(InitError),
  /// The window or its context could not be created.
  WindowCreationFailed,
}

impl fmt::Display for SurfaceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      SurfaceError::InitError(ref e) => write!(f, "initialization error: {}", e),
      SurfaceError::WindowCreationFailed => f.write_str("window creation failed"),
    }
  }
}

impl error::Error for SurfaceError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      SurfaceError::InitError(e) => Some(e),
      SurfaceError::WindowCreationFailed => None,
    }
  }
}

impl From<InitError> for SurfaceError {
  fn from(e: InitError) -> Self {
    SurfaceError::InitError(e)
  }
}

/// A window with a current OpenGL context and its event stream.
///
/// The context is bound to the thread that calls [`Surface::new`]; every GL
/// call in this crate must happen on that thread.
pub struct Surface {
  /// The GLFW instance, used to poll events once per loop iteration.
  pub glfw: Glfw,
  /// The window; exposes the framebuffer size, the swap-buffers operation
  /// and the close-requested flag.
  pub window: Window,
  /// Wrapped GLFW events queue.
  pub events_rx: Receiver<(f64, WindowEvent)>,
}

impl Surface {
  /// Opens a window, makes its context current on the calling thread and
  /// loads the GL symbols.
  ///
  /// A 2.1 context is requested: the demo shaders are `#version 120` and
  /// the spinners draw wide lines, both of which need a compatibility-era
  /// context. The swap interval is 1, an additional throttle on top of the
  /// render loop's fixed sleep.
  pub fn new(
    title: &str,
    width: u32,
    height: u32,
    resizable: bool,
  ) -> Result<Self, SurfaceError> {
    let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS)?;

    glfw.window_hint(WindowHint::ContextVersionMajor(2));
    glfw.window_hint(WindowHint::ContextVersionMinor(1));
    glfw.window_hint(WindowHint::Resizable(resizable));

    let (mut window, events_rx) = glfw
      .create_window(width, height, title, glfw::WindowMode::Windowed)
      .ok_or(SurfaceError::WindowCreationFailed)?;

    window.make_current();
    window.set_char_polling(true);
    glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

    // init OpenGL
    gl::load_with(|s| window.get_proc_address(s) as *const c_void);

    Ok(Surface {
      glfw,
      window,
      events_rx,
    })
  }

  /// Current framebuffer size in pixels.
  pub fn framebuffer_size(&self) -> (i32, i32) {
    self.window.get_framebuffer_size()
  }
}
