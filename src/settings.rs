//! Compile-time settings.

use winit::dpi::PhysicalSize;

pub const WINDOW_TITLE: &str = "Mandelbrot Fractal";

pub const WINDOW_SIZE: PhysicalSize<u32> = PhysicalSize {
    width: 800,
    height: 800,
};

/// Scales both panning and zooming. Units are "screens per second" at zoom 1.
pub const MOVEMENT_SPEED: f32 = 1.0;

pub const INITIAL_CENTER: [f32; 2] = [-1.0, 0.0];
pub const INITIAL_ZOOM: f32 = 0.25;
pub const INITIAL_MAX_ITERATION: i32 = 40;

pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 10000.0;

pub const MIN_MAX_ITERATION: i32 = 5;
pub const MAX_MAX_ITERATION: i32 = 1000;

pub const VERTEX_SHADER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/vertex.wgsl");
pub const FRAGMENT_SHADER_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/fragment.wgsl");

pub const CLEAR_COLOUR: wgpu::Color = wgpu::Color::BLACK;
