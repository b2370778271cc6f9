//! The same rotating-triangle scene as `spinner`, but with the transform
//! expressed as an explicit model-view-projection matrix uniform: an
//! aspect-corrected orthographic projection composed with a Z rotation,
//! built on the host and handed to a single vertex shader.
//!
//! Press 'q' to quit.

use glimmer::anim;
use glimmer::buffer::{BufferTarget, GpuBuffer};
use glimmer::geometry;
use glimmer::render::{self, AttributeBinding, DrawPass, Primitive};
use glimmer::resources::ResourceError;
use glimmer::run;
use glimmer::shader::{AttributeLocation, Program, Stage, StageKind, UniformLocation};
use glimmer::surface::Surface;
use glimmer::transform;
use std::process;

const ORTHO_VS: &str = include_str!("ortho-vs.glsl");
const ORTHO_FS: &str = include_str!("ortho-fs.glsl");

/// Triangle and ring radius inside the orthographic view volume.
const RADIUS: f32 = 0.95;

/// Spin rate of the triangle and the ring.
const SPIN_DEGREES_PER_SECOND: f32 = 50.0;

// Axes cross spanning the window, drawn with an identity transform.
const AXES_POSITIONS: [f32; 8] = [
  -1.0, 0.0, //
  1.0, 0.0, //
  0.0, -1.0, //
  0.0, 1.0, //
];
const AXES_COLORS: [f32; 12] = [0.0; 12];
const AXES_INDICES: [u32; 4] = [0, 1, 2, 3];

// Unit triangle pointing up; scaled by RADIUS at upload time.
const TRIANGLE_POSITIONS: [f32; 6] = [
  0.0, 1.0, //
  0.866, -0.5, //
  -0.866, -0.5, //
];
const TRIANGLE_COLORS: [f32; 9] = [
  1.0, 0.0, 0.0, //
  0.0, 1.0, 0.0, //
  0.0, 0.0, 1.0, //
];
const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

struct Resources {
  program: Program,
  mvp: UniformLocation,
  position: AttributeLocation,
  color: AttributeLocation,

  axes_positions: GpuBuffer,
  axes_colors: GpuBuffer,
  axes_elements: GpuBuffer,

  triangle_positions: GpuBuffer,
  triangle_colors: GpuBuffer,
  triangle_elements: GpuBuffer,

  ring_positions: GpuBuffer,
  ring_colors: GpuBuffer,
  ring_elements: GpuBuffer,
}

fn make_resources() -> Result<Resources, ResourceError> {
  let vs = Stage::compile(StageKind::Vertex, ORTHO_VS)?;
  let fs = Stage::compile(StageKind::Fragment, ORTHO_FS)?;
  let program = Program::link(&vs, &fs)?;

  let mvp = program.uniform("mvp");
  let position = program.attribute("position").expect("position attribute");
  let color = program.attribute("color").expect("color attribute");

  let triangle: Vec<f32> = TRIANGLE_POSITIONS.iter().map(|v| v * RADIUS).collect();
  let ring = geometry::hue_ring(RADIUS, 0.05);

  Ok(Resources {
    program,
    mvp,
    position,
    color,

    axes_positions: GpuBuffer::upload(BufferTarget::Vertex, &AXES_POSITIONS),
    axes_colors: GpuBuffer::upload(BufferTarget::Vertex, &AXES_COLORS),
    axes_elements: GpuBuffer::upload(BufferTarget::Element, &AXES_INDICES),

    triangle_positions: GpuBuffer::upload(BufferTarget::Vertex, &triangle),
    triangle_colors: GpuBuffer::upload(BufferTarget::Vertex, &TRIANGLE_COLORS),
    triangle_elements: GpuBuffer::upload(BufferTarget::Element, &TRIANGLE_INDICES),

    ring_positions: GpuBuffer::upload(BufferTarget::Vertex, &ring.positions),
    ring_colors: GpuBuffer::upload(BufferTarget::Vertex, &ring.colors),
    ring_elements: GpuBuffer::upload(BufferTarget::Element, &ring.indices),
  })
}

fn render_frame(r: &Resources, elapsed: f32, (width, height): (i32, i32)) {
  let ratio = width as f32 / height as f32;
  let angle = anim::rotation_angle(elapsed, SPIN_DEGREES_PER_SECOND);
  let spinning = transform::projection(ratio) * transform::rotation_z(angle);

  render::begin_frame(width, height);

  r.program.activate();

  // axes cross, directly in NDC
  r.program.set_mat4(r.mvp, &transform::identity());
  DrawPass {
    attributes: &[
      AttributeBinding {
        location: r.position,
        buffer: &r.axes_positions,
        components: 2,
      },
      AttributeBinding {
        location: r.color,
        buffer: &r.axes_colors,
        components: 3,
      },
    ],
    elements: &r.axes_elements,
    primitive: Primitive::Lines,
    line_width: Some(1.0),
  }
  .draw();

  // rotating triangle
  r.program.set_mat4(r.mvp, &spinning);
  DrawPass {
    attributes: &[
      AttributeBinding {
        location: r.position,
        buffer: &r.triangle_positions,
        components: 2,
      },
      AttributeBinding {
        location: r.color,
        buffer: &r.triangle_colors,
        components: 3,
      },
    ],
    elements: &r.triangle_elements,
    primitive: Primitive::Triangles,
    line_width: None,
  }
  .draw();

  // hue ring, rotating with the triangle
  DrawPass {
    attributes: &[
      AttributeBinding {
        location: r.position,
        buffer: &r.ring_positions,
        components: 2,
      },
      AttributeBinding {
        location: r.color,
        buffer: &r.ring_colors,
        components: 3,
      },
    ],
    elements: &r.ring_elements,
    primitive: Primitive::LineLoop,
    line_width: Some(5.0),
  }
  .draw();
}

fn main() {
  env_logger::init();

  let mut surface = Surface::new("glimmer: spinner (ortho)", 640, 480, true).unwrap_or_else(|e| {
    eprintln!("surface creation failed: {}", e);
    process::exit(1);
  });

  let resources = make_resources().unwrap_or_else(|e| {
    eprintln!("resource construction failed: {}", e);
    process::exit(1);
  });

  render::set_clear_color(0.5, 0.5, 0.5, 0.0);
  println!("Press 'q' to quit");

  run::run(&mut surface, |window, elapsed| {
    render_frame(&resources, elapsed, window.get_framebuffer_size());
  });
}
