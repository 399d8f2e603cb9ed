/*!
Typed, immutable `wgpu` buffers.

[`bytemuck`](https://docs.rs/bytemuck/latest/bytemuck/) casts the Rust data
to bytes. The element type stays attached to the buffer so a vertex buffer
can't be bound where an index buffer is expected, and so the element count
for a draw call comes from the buffer itself.
*/

use std::{marker::PhantomData, ops::RangeBounds};

use wgpu::util::DeviceExt;

pub struct Buffer<A> {
    buffer: wgpu::Buffer,
    len: u32,
    phantom_data: PhantomData<A>,
}

impl<A: bytemuck::Pod + bytemuck::Zeroable> Buffer<A> {
    /// Number of `A`s in the buffer.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn slice<S: RangeBounds<wgpu::BufferAddress>>(&self, bounds: S) -> wgpu::BufferSlice {
        self.buffer.slice(bounds)
    }

    pub fn destroy(self) {
        self.buffer.destroy()
    }
}

pub struct Builder<'a, A> {
    label: Option<&'a str>,
    contents: &'a [A],
    usage: wgpu::BufferUsages,
}

impl<'a, A: bytemuck::Pod + bytemuck::Zeroable> Builder<'a, A> {
    pub fn new(contents: &'a [A]) -> Self {
        Self {
            label: None,
            contents,
            usage: wgpu::BufferUsages::empty(),
        }
    }

    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_usage(mut self, usage: wgpu::BufferUsages) -> Self {
        self.usage |= usage;
        self
    }

    pub fn create(self, device: &wgpu::Device) -> Buffer<A> {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: self.label,
            contents: bytemuck::cast_slice(self.contents),
            usage: self.usage,
        });

        Buffer {
            buffer,
            len: self.contents.len() as u32,
            phantom_data: PhantomData,
        }
    }
}
