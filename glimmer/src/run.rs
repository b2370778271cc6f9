//! The frame loop.

use crate::surface::Surface;
use glfw::{Context as _, Window, WindowEvent};
use std::{
  thread,
  time::{Duration, Instant},
};

/// Fixed sleep between frames; a simple frame-rate throttle, independent of
/// the swap interval supplied by the windowing layer.
const FRAME_THROTTLE: Duration = Duration::from_millis(10);

/// Drives `frame` until a close is requested.
///
/// Each iteration sleeps for the fixed throttle, renders, swaps buffers and
/// polls events. `frame` receives the window (for the current framebuffer
/// size) and the seconds elapsed since the loop started. Typing `q`
/// requests a close; the flag is checked once per iteration, so
/// cancellation is cooperative and never interrupts a frame.
pub fn run<F>(surface: &mut Surface, mut frame: F)
where
  F: FnMut(&mut Window, f32),
{
  let start = Instant::now();

  while !surface.window.should_close() {
    thread::sleep(FRAME_THROTTLE);

    frame(&mut surface.window, start.elapsed().as_secs_f32());

    surface.window.swap_buffers();
    surface.glfw.poll_events();

    for (_, event) in surface.events_rx.try_iter() {
      match event {
        WindowEvent::Char('q') => surface.window.set_should_close(true),
        WindowEvent::Char(c) => log::debug!("ignoring char input {:?}", c),
        _ => (),
      }
    }
  }
}
