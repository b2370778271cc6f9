//! A rotating RGB triangle inside a thick hue ring, over an axes cross,
//! driven by two small shader programs. The gradient program takes the
//! aspect scale and the rotation as four scalar uniforms and does the
//! transform arithmetic itself.
//!
//! Press 'q' to quit.

use glimmer::buffer::{BufferTarget, GpuBuffer};
use glimmer::geometry;
use glimmer::render::{self, AttributeBinding, DrawPass, Primitive};
use glimmer::resources::ResourceError;
use glimmer::run;
use glimmer::shader::{AttributeLocation, Program, Stage, StageKind, UniformLocation};
use glimmer::surface::Surface;
use std::process;

const FLAT_VS: &str = include_str!("flat-vs.glsl");
const FLAT_FS: &str = include_str!("flat-fs.glsl");
const GRADIENT_VS: &str = include_str!("gradient-vs.glsl");
const GRADIENT_FS: &str = include_str!("gradient-fs.glsl");

/// Triangle and ring radius inside the unit view volume; folded into the
/// aspect scale uniforms.
const RADIUS: f32 = 0.95;

// Axes cross spanning the window, drawn directly in NDC.
const AXES_POSITIONS: [f32; 8] = [
  -1.0, 0.0, //
  1.0, 0.0, //
  0.0, -1.0, //
  0.0, 1.0, //
];
const AXES_INDICES: [u32; 4] = [0, 1, 2, 3];

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

struct GradientUniforms {
  xmul: UniformLocation,
  ymul: UniformLocation,
  sn: UniformLocation,
  cs: UniformLocation,
}

struct Resources {
  axes_positions: GpuBuffer,
  axes_elements: GpuBuffer,
  flat_program: Program,
  flat_position: AttributeLocation,

  triangle_positions: GpuBuffer,
  triangle_colors: GpuBuffer,
  triangle_elements: GpuBuffer,

  ring_positions: GpuBuffer,
  ring_colors: GpuBuffer,
  ring_elements: GpuBuffer,

  gradient_program: Program,
  gradient_uniforms: GradientUniforms,
  gradient_position: AttributeLocation,
  gradient_color: AttributeLocation,
}

fn make_resources() -> Result<Resources, ResourceError> {
  let flat_vs = Stage::compile(StageKind::Vertex, FLAT_VS)?;
  let flat_fs = Stage::compile(StageKind::Fragment, FLAT_FS)?;
  let flat_program = Program::link(&flat_vs, &flat_fs)?;
  let flat_position = flat_program
    .attribute("position")
    .expect("position attribute");

  let gradient_vs = Stage::compile(StageKind::Vertex, GRADIENT_VS)?;
  let gradient_fs = Stage::compile(StageKind::Fragment, GRADIENT_FS)?;
  let gradient_program = Program::link(&gradient_vs, &gradient_fs)?;
  let gradient_uniforms = GradientUniforms {
    xmul: gradient_program.uniform("xmul"),
    ymul: gradient_program.uniform("ymul"),
    sn: gradient_program.uniform("sn"),
    cs: gradient_program.uniform("cs"),
  };
  let gradient_position = gradient_program
    .attribute("position")
    .expect("position attribute");
  let gradient_color = gradient_program.attribute("color").expect("color attribute");

  let ring = geometry::hue_ring(1.0, 0.05);

  Ok(Resources {
    axes_positions: GpuBuffer::upload(BufferTarget::Vertex, &AXES_POSITIONS),
    axes_elements: GpuBuffer::upload(BufferTarget::Element, &AXES_INDICES),
    flat_program,
    flat_position,

    triangle_positions: GpuBuffer::upload(BufferTarget::Vertex, &TRIANGLE_POSITIONS),
    triangle_colors: GpuBuffer::upload(BufferTarget::Vertex, &TRIANGLE_COLORS),
    triangle_elements: GpuBuffer::upload(BufferTarget::Element, &TRIANGLE_INDICES),

    ring_positions: GpuBuffer::upload(BufferTarget::Vertex, &ring.positions),
    ring_colors: GpuBuffer::upload(BufferTarget::Vertex, &ring.colors),
    ring_elements: GpuBuffer::upload(BufferTarget::Element, &ring.indices),

    gradient_program,
    gradient_uniforms,
    gradient_position,
    gradient_color,
  })
}

fn render_frame(r: &Resources, elapsed: f32, (width, height): (i32, i32)) {
  let ratio = width as f32 / height as f32;
  let sn = elapsed.sin();
  let cs = elapsed.cos();
  let (xmul, ymul) = if ratio > 1.0 {
    (RADIUS / ratio, RADIUS)
  } else {
    (RADIUS, RADIUS * ratio)
  };

  render::begin_frame(width, height);

  // axes cross
  r.flat_program.activate();
  DrawPass {
    attributes: &[AttributeBinding {
      location: r.flat_position,
      buffer: &r.axes_positions,
      components: 2,
    }],
    elements: &r.axes_elements,
    primitive: Primitive::Lines,
    line_width: Some(1.0),
  }
  .draw();

  // rotating triangle
  r.gradient_program.activate();
  r.gradient_program.set_f32(r.gradient_uniforms.xmul, xmul);
  r.gradient_program.set_f32(r.gradient_uniforms.ymul, ymul);
  r.gradient_program.set_f32(r.gradient_uniforms.sn, sn);
  r.gradient_program.set_f32(r.gradient_uniforms.cs, cs);
  DrawPass {
    attributes: &[
      AttributeBinding {
        location: r.gradient_position,
        buffer: &r.triangle_positions,
        components: 2,
      },
      AttributeBinding {
        location: r.gradient_color,
        buffer: &r.triangle_colors,
        components: 3,
      },
    ],
    elements: &r.triangle_elements,
    primitive: Primitive::Triangles,
    line_width: None,
  }
  .draw();

  // hue ring, same program and uniforms
  DrawPass {
    attributes: &[
      AttributeBinding {
        location: r.gradient_position,
        buffer: &r.ring_positions,
        components: 2,
      },
      AttributeBinding {
        location: r.gradient_color,
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

  let mut surface = Surface::new("glimmer: spinner", 640, 480, true).unwrap_or_else(|e| {
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
