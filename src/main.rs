mod buffer;
mod canvas;
mod clock;
mod encoder;
mod input;
mod renderer;
mod settings;
mod shader;
mod uniform;
mod view;

use std::time::Instant;

use anyhow::Context;
use log::{debug, error, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::{
    clock::FrameClock,
    input::{Command, Flow},
    renderer::Renderer,
    settings::{WINDOW_SIZE, WINDOW_TITLE},
    view::View,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(WINDOW_SIZE)
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to create window")?;

    let mut renderer = Some(Renderer::new(&window)?);
    let mut view = View::default();
    let mut clock = FrameClock::new(Instant::now());

    event_loop.run(move |event, _, control_flow| match event {
        Event::MainEventsCleared => {
            window.request_redraw();
        }
        Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                *control_flow = ControlFlow::Exit;
            }
            WindowEvent::KeyboardInput { input, .. } => {
                if let Some(command) = Command::from_input(&input) {
                    if command.apply(&mut view, clock.seconds_per_frame()) == Flow::Exit {
                        *control_flow = ControlFlow::Exit;
                    }
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = renderer.as_mut() {
                    renderer.resize(size);
                }
            }
            WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                if let Some(renderer) = renderer.as_mut() {
                    renderer.resize(*new_inner_size);
                }
            }
            _ => {}
        },
        Event::RedrawRequested(window_id) if window_id == window.id() => {
            clock.tick(Instant::now());

            if let Some(renderer) = renderer.as_mut() {
                match renderer.render(&view) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.reconfigure();
                    }
                    Err(wgpu::SurfaceError::Timeout) => {
                        warn!("timed out waiting for the next frame");
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("out of GPU memory");
                        *control_flow = ControlFlow::ExitWithCode(1);
                    }
                }
            }
        }
        Event::LoopDestroyed => {
            debug!("shutting down");
            if let Some(renderer) = renderer.take() {
                renderer.destroy();
            }
        }
        _ => {}
    });
}
