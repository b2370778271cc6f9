//! Two textures cross-fading on a fullscreen quad; the fade factor is a
//! sine of the elapsed time, so the images breathe into each other.
//!
//! Press 'q' to quit.

use glimmer::anim;
use glimmer::buffer::{BufferTarget, GpuBuffer};
use glimmer::render::{self, AttributeBinding, DrawPass, Primitive};
use glimmer::resources::ResourceError;
use glimmer::run;
use glimmer::shader::{AttributeLocation, Program, Stage, StageKind, UniformLocation};
use glimmer::surface::Surface;
use glimmer::texture::Texture;
use std::{path::Path, process};

const VS: &str = include_str!("crossfade-vs.glsl");
const FS: &str = include_str!("crossfade-fs.glsl");

// Fullscreen quad as a triangle strip.
const QUAD_POSITIONS: [f32; 8] = [
  -1.0, -1.0, //
  1.0, -1.0, //
  -1.0, 1.0, //
  1.0, 1.0, //
];
const QUAD_INDICES: [u32; 4] = [0, 1, 2, 3];

struct Resources {
  quad: GpuBuffer,
  elements: GpuBuffer,
  textures: [Texture; 2],
  program: Program,
  fade_factor: UniformLocation,
  samplers: [UniformLocation; 2],
  position: AttributeLocation,
}

fn make_resources(assets: &Path) -> Result<Resources, ResourceError> {
  let textures = [
    Texture::load(assets.join("hello1.png"))?,
    Texture::load(assets.join("hello2.png"))?,
  ];

  let vs = Stage::compile(StageKind::Vertex, VS)?;
  let fs = Stage::compile(StageKind::Fragment, FS)?;
  let program = Program::link(&vs, &fs)?;

  let fade_factor = program.uniform("fade_factor");
  let samplers = [program.uniform("textures[0]"), program.uniform("textures[1]")];
  let position = program.attribute("position").expect("position attribute");

  Ok(Resources {
    quad: GpuBuffer::upload(BufferTarget::Vertex, &QUAD_POSITIONS),
    elements: GpuBuffer::upload(BufferTarget::Element, &QUAD_INDICES),
    textures,
    program,
    fade_factor,
    samplers,
    position,
  })
}

fn render_frame(r: &Resources, elapsed: f32, (width, height): (i32, i32)) {
  render::begin_frame(width, height);

  r.program.activate();
  r.program.set_f32(r.fade_factor, anim::fade_factor(elapsed));

  r.textures[0].bind_to_unit(0);
  r.program.set_i32(r.samplers[0], 0);
  r.textures[1].bind_to_unit(1);
  r.program.set_i32(r.samplers[1], 1);

  DrawPass {
    attributes: &[AttributeBinding {
      location: r.position,
      buffer: &r.quad,
      components: 2,
    }],
    elements: &r.elements,
    primitive: Primitive::TriangleStrip,
    line_width: None,
  }
  .draw();
}

fn main() {
  env_logger::init();

  let mut surface = Surface::new("glimmer: crossfade", 400, 300, false).unwrap_or_else(|e| {
    eprintln!("surface creation failed: {}", e);
    process::exit(1);
  });

  let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
  let resources = make_resources(&assets).unwrap_or_else(|e| {
    eprintln!("resource construction failed: {}", e);
    process::exit(1);
  });

  render::set_clear_color(1.0, 1.0, 1.0, 0.0);
  println!("Press 'q' to quit");

  run::run(&mut surface, |window, elapsed| {
    render_frame(&resources, elapsed, window.get_framebuffer_size());
  });
}
