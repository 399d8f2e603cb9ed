/*!
The Mandelbrot shader program.

Both stages are WGSL files read at startup. Compiling a stage means creating
its [`wgpu::ShaderModule`]; linking means creating the render pipeline that
joins the two stages and the uniform block.

Failures at any of these steps don't stop the program. Each one is logged
as a [`Diagnostic`] carrying the compiler's message, and the resulting
[`Program`] is marked degraded. A degraded program is never bound, so the
frame is only cleared.
*/

use std::{fmt, fs, path::Path};

use bytemuck::{Pod, Zeroable};
use log::{debug, error};

use crate::{
    canvas,
    uniform::{self, Uniform},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    fn entry_point(self) -> &'static str {
        match self {
            Stage::Vertex => "vertex_main",
            Stage::Fragment => "fragment_main",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Vertex => write!(f, "vertex"),
            Stage::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Diagnostic {
    Read {
        stage: Stage,
        path: String,
        message: String,
    },
    Compile {
        stage: Stage,
        log: String,
    },
    Link {
        log: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Read {
                stage,
                path,
                message,
            } => write!(f, "failed to read {} shader {}: {}", stage, path, message),
            Diagnostic::Compile { stage, log } => {
                write!(f, "failed to compile {} shader:\n{}", stage, log)
            }
            Diagnostic::Link { log } => write!(f, "failed to link shader program:\n{}", log),
        }
    }
}

/// Read a shader's source verbatim. On failure the source is empty, which
/// later fails to link.
pub fn read_source(stage: Stage, path: &Path, diagnostics: &mut Vec<Diagnostic>) -> String {
    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            diagnostics.push(Diagnostic::Read {
                stage,
                path: path.display().to_string(),
                message: err.to_string(),
            });
            String::new()
        }
    }
}

/// Uniform block shared by both stages. Matches `Uniforms` in the WGSL files.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Uniforms {
    pub viewport_dimensions: [f32; 2],
    pub center: [f32; 2],
    pub zoom: f32,
    pub max_iteration: i32,
    _padding: [u32; 2],
}

impl Uniforms {
    pub fn new(viewport_dimensions: [f32; 2]) -> Self {
        Self {
            viewport_dimensions,
            ..Self::zeroed()
        }
    }
}

pub struct Program {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniforms: Uniform<Uniforms>,
    degraded: bool,
}

impl Program {
    /// Build the program from the two shader files.
    pub fn new(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        vertex_path: &Path,
        fragment_path: &Path,
        viewport_dimensions: [f32; 2],
    ) -> Self {
        let mut diagnostics = Vec::new();

        let vertex_source = read_source(Stage::Vertex, vertex_path, &mut diagnostics);
        let fragment_source = read_source(Stage::Fragment, fragment_path, &mut diagnostics);

        let vertex_module = compile(device, Stage::Vertex, &vertex_source, &mut diagnostics);
        let fragment_module = compile(device, Stage::Fragment, &fragment_source, &mut diagnostics);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniforms-bind-group-layout"),
            entries: &[uniform::layout_entry(0, wgpu::ShaderStages::FRAGMENT)],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mandelbrot-pipeline-layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mandelbrot-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Stage::Vertex.entry_point(),
                buffers: &[canvas::Vertex::layout()],
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Stage::Fragment.entry_point(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview: None,
        });
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            diagnostics.push(Diagnostic::Link {
                log: err.to_string(),
            });
        }

        let uniforms = uniform::Builder::new(Uniforms::new(viewport_dimensions))
            .with_label("uniforms")
            .create(device);

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniforms-bind-group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.binding_resource(),
            }],
        });

        for diagnostic in &diagnostics {
            error!("{}", diagnostic);
        }
        if diagnostics.is_empty() {
            debug!("shader program ready");
        }

        Self {
            pipeline,
            bind_group,
            uniforms,
            degraded: !diagnostics.is_empty(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn set_viewport_dimensions(&mut self, width: f32, height: f32) {
        self.uniforms
            .update(|uniforms| uniforms.viewport_dimensions = [width, height]);
    }

    pub fn set_center(&mut self, center: [f32; 2]) {
        self.uniforms.update(|uniforms| uniforms.center = center);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.uniforms.update(|uniforms| uniforms.zoom = zoom);
    }

    pub fn set_max_iteration(&mut self, max_iteration: i32) {
        self.uniforms
            .update(|uniforms| uniforms.max_iteration = max_iteration);
    }

    /// Upload uniforms changed by the setters since the last flush.
    pub fn flush(&mut self, queue: &wgpu::Queue) {
        self.uniforms.flush(queue)
    }

    /// Make this the program used by subsequent draws in `render_pass`.
    pub fn bind<'pass>(&'pass self, render_pass: &mut wgpu::RenderPass<'pass>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
    }

    pub fn destroy(self) {
        self.uniforms.destroy()
    }
}

fn compile(
    device: &wgpu::Device,
    stage: Stage,
    source: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> wgpu::ShaderModule {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(match stage {
            Stage::Vertex => "vertex-shader",
            Stage::Fragment => "fragment-shader",
        }),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    if let Some(err) = pollster::block_on(device.pop_error_scope()) {
        diagnostics.push(Diagnostic::Compile {
            stage,
            log: err.to_string(),
        });
    }
    module
}
