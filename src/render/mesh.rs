use super::helpers;
use crate::core::geometry::{Mesh, MeshVertex};
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) tint: [f32; 4],
    pub(crate) params: [f32; 4],
}

const MESH_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

pub(crate) struct MeshResources {
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) opaque_pipeline: wgpu::RenderPipeline,
    pub(crate) masked_pipeline: wgpu::RenderPipeline,
}

pub(crate) fn create_mesh_resources(
    device: &wgpu::Device,
    frame_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> MeshResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mesh_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::MESH_WGSL.into()),
    });
    let bgl = helpers::object_bind_group_layout(device, "mesh_bgl");
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("mesh_pl"),
        bind_group_layouts: &[frame_bgl, &bgl],
        push_constant_ranges: &[],
    });
    let layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &MESH_ATTRS,
    };
    let opaque_pipeline = helpers::make_scene_pipeline(
        device,
        "mesh_opaque_pipeline",
        &pl,
        &shader,
        ("vs_mesh", "fs_mesh"),
        &[layout.clone()],
        color_format,
        Some(wgpu::BlendState::REPLACE),
        Some(wgpu::Face::Back),
        true,
    );
    // double-sided, blended, no depth write
    let masked_pipeline = helpers::make_scene_pipeline(
        device,
        "mesh_masked_pipeline",
        &pl,
        &shader,
        ("vs_mesh", "fs_mesh"),
        &[layout],
        color_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
        None,
        false,
    );
    MeshResources {
        bgl,
        opaque_pipeline,
        masked_pipeline,
    }
}

/// One uploaded mesh. It becomes drawable once its texture has arrived and
/// the bind group exists.
pub(crate) struct MeshDraw {
    pub(crate) texture_key: String,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: Option<wgpu::BindGroup>,
    tint: [f32; 4],
    alpha_mask: bool,
}

impl MeshDraw {
    pub(crate) fn new(
        device: &wgpu::Device,
        label: &str,
        mesh: &Mesh,
        texture_key: &str,
        tint: [f32; 4],
        alpha_mask: bool,
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<ObjectUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            texture_key: texture_key.to_string(),
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            uniform_buffer,
            bind_group: None,
            tint,
            alpha_mask,
        }
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
            "mesh_bg",
            layout,
            &self.uniform_buffer,
            view,
            sampler,
        ));
    }

    pub(crate) fn write_model(&self, queue: &wgpu::Queue, model: Mat4) {
        let u = ObjectUniforms {
            model: model.to_cols_array_2d(),
            tint: self.tint,
            params: [0.0, if self.alpha_mask { 1.0 } else { 0.0 }, 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        let Some(bg) = &self.bind_group else {
            return;
        };
        rpass.set_bind_group(1, bg, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
