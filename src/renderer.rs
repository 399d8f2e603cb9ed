use std::path::Path;

use anyhow::Context;
use log::{debug, error};
use winit::{dpi::PhysicalSize, window::Window};

use crate::{
    canvas::Canvas,
    encoder::{self, CommandEncoderExt},
    settings::{CLEAR_COLOUR, FRAGMENT_SHADER_PATH, VERTEX_SHADER_PATH},
    shader::Program,
    view::View,
};

/// Everything needed to put a frame on screen.
pub struct Renderer {
    surface: wgpu::Surface,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_configuration: wgpu::SurfaceConfiguration,
    program: Program,
    canvas: Canvas,
}

impl Renderer {
    pub fn new(window: &Window) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(wgpu::Backends::all());

        let size = window.inner_size();
        let surface = unsafe { instance.create_surface(window) };

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: Default::default(),
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .context("no compatible graphics adapter")?;

        let adapter_info = adapter.get_info();
        debug!(
            "using adapter {:?} ({:?})",
            adapter_info.name, adapter_info.backend
        );

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("device"),
                features: wgpu::Features::empty(),
                limits: wgpu::Limits::default(),
            },
            None,
        ))
        .context("failed to create graphics device")?;

        // The default handler panics; a broken shader program should only be reported.
        device.on_uncaptured_error(|err: wgpu::Error| error!("{}", err));

        let format = *surface
            .get_supported_formats(&adapter)
            .first()
            .context("surface is incompatible with the adapter")?;

        let surface_configuration = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
        };
        surface.configure(&device, &surface_configuration);

        let program = Program::new(
            &device,
            format,
            Path::new(VERTEX_SHADER_PATH),
            Path::new(FRAGMENT_SHADER_PATH),
            [size.width as f32, size.height as f32],
        );

        let canvas = Canvas::new(&device);

        Ok(Self {
            surface,
            device,
            queue,
            surface_configuration,
            program,
            canvas,
        })
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        // Minimised windows report a zero size, which can't be configured.
        if size.width == 0 || size.height == 0 {
            return;
        }

        debug!("resizing to {:?}", size);

        self.surface_configuration.width = size.width;
        self.surface_configuration.height = size.height;
        self.reconfigure();

        self.program
            .set_viewport_dimensions(size.width as f32, size.height as f32);
    }

    pub fn reconfigure(&self) {
        self.surface
            .configure(&self.device, &self.surface_configuration);
    }

    pub fn render(&mut self, view: &View) -> Result<(), wgpu::SurfaceError> {
        self.program.set_center(view.center);
        self.program.set_zoom(view.zoom);
        self.program.set_max_iteration(view.max_iteration);
        self.program.flush(&self.queue);

        let surface_texture = self.surface.get_current_texture()?;
        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let program = &self.program;
        let canvas = &self.canvas;
        let command_buffer = encoder::record(&self.device, "frame", |command_encoder| {
            command_encoder.with_render_pass(
                &wgpu::RenderPassDescriptor {
                    label: Some("render-pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &surface_texture_view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(CLEAR_COLOUR),
                            store: true,
                        },
                    })],
                    depth_stencil_attachment: None,
                },
                |render_pass| {
                    if !program.is_degraded() {
                        program.bind(render_pass);
                        canvas.draw(render_pass);
                    }
                },
            )
        });

        self.queue.submit([command_buffer]);
        surface_texture.present();

        Ok(())
    }

    pub fn destroy(self) {
        debug!("releasing GPU resources");
        self.canvas.destroy();
        self.program.destroy();
    }
}
