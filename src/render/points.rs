use super::helpers;
use crate::core::particles::Particle;
use glam::Mat4;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BatchUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) params: [f32; 4],
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x3];

pub(crate) struct PointsResources {
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) pipeline: wgpu::RenderPipeline,
}

pub(crate) fn create_points_resources(
    device: &wgpu::Device,
    frame_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> PointsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POINTS_WGSL.into()),
    });
    let bgl = helpers::object_bind_group_layout(device, "points_bgl");
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("points_pl"),
        bind_group_layouts: &[frame_bgl, &bgl],
        push_constant_ranges: &[],
    });
    let additive = wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    };
    let pipeline = helpers::make_scene_pipeline(
        device,
        "points_pipeline",
        &pl,
        &shader,
        ("vs_points", "fs_points"),
        &[wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Particle>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        }],
        color_format,
        Some(additive),
        None,
        false,
    );
    PointsResources { bgl, pipeline }
}

/// One particle batch on the GPU: six vertices per instance, one instance
/// per particle, a single sprite texture.
pub(crate) struct PointDraw {
    pub(crate) texture_key: String,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: Option<wgpu::BindGroup>,
}

impl PointDraw {
    /// `None` for an empty batch; zero-sized vertex buffers cannot be bound.
    pub(crate) fn new(
        device: &wgpu::Device,
        label: &str,
        particles: &[Particle],
        texture_key: &str,
    ) -> Option<Self> {
        if particles.is_empty() {
            return None;
        }
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(particles),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<BatchUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Some(Self {
            texture_key: texture_key.to_string(),
            instance_buffer,
            instance_count: particles.len() as u32,
            uniform_buffer,
            bind_group: None,
        })
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.bind_group.is_some()
    }

    pub(crate) fn attach_texture(
        &mut self,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) {
        self.bind_group = Some(helpers::object_bind_group(
            device,
            "points_bg",
            layout,
            &self.uniform_buffer,
            view,
            sampler,
        ));
    }

    pub(crate) fn write_model(&self, queue: &wgpu::Queue, model: Mat4, size_scale: f32) {
        let u = BatchUniforms {
            model: model.to_cols_array_2d(),
            params: [size_scale, 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        let Some(bg) = &self.bind_group else {
            return;
        };
        rpass.set_bind_group(1, bg, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..6, 0..self.instance_count);
    }
}
