//! Minimal real-time rendering harness.
//!
//! `glimmer` owns the GPU resource lifecycle (shader compilation and
//! linking, static buffer and texture upload) and the per-frame
//! update-and-draw mechanics used by the demo binaries. Window and context
//! creation, event polling and image decoding are delegated to the
//! [glfw](https://crates.io/crates/glfw) and
//! [image](https://crates.io/crates/image) crates.
//!
//! Everything runs on the one thread that created the context: the
//! underlying graphics API requires all calls to originate from that
//! thread, so resource construction and every frame's render calls stay on
//! it. Resource construction is all-or-nothing; any startup error is fatal
//! and carries its full diagnostic context.

pub mod anim;
pub mod buffer;
pub mod color;
pub mod geometry;
pub mod render;
pub mod resources;
pub mod run;
pub mod shader;
pub mod surface;
pub mod texture;
pub mod transform;
