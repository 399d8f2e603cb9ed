/*!
Typed uniform buffers.

A [`Uniform<A>`] owns a GPU buffer holding exactly one `A` together with a
CPU-side copy. Setters only touch the copy; [`Uniform::flush`] uploads it,
and only when it changed since the last upload.
*/

use wgpu::util::DeviceExt;

pub struct Uniform<A> {
    buffer: wgpu::Buffer,
    value: A,
    dirty: bool,
}

impl<A: bytemuck::Pod + bytemuck::Zeroable + PartialEq> Uniform<A> {
    pub fn update(&mut self, function: impl FnOnce(&mut A)) {
        let mut value = self.value;
        function(&mut value);
        if value != self.value {
            self.value = value;
            self.dirty = true;
        }
    }

    pub fn flush(&mut self, queue: &wgpu::Queue) {
        if self.dirty {
            queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&self.value));
            self.dirty = false;
        }
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }

    pub fn destroy(self) {
        self.buffer.destroy()
    }
}

pub fn layout_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

pub struct Builder<'a, A> {
    label: Option<&'a str>,
    value: A,
}

impl<'a, A: bytemuck::Pod + bytemuck::Zeroable + PartialEq> Builder<'a, A> {
    pub fn new(value: A) -> Self {
        Self { label: None, value }
    }

    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn create(self, device: &wgpu::Device) -> Uniform<A> {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: self.label,
            contents: bytemuck::bytes_of(&self.value),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Uniform {
            buffer,
            value: self.value,
            dirty: false,
        }
    }
}
