use crate::constants::*;
use crate::core::{Camera, SceneConfig, SceneGraph, SceneState, Tunables};
use fnv::FnvHashMap;
use glam::{EulerRot, Mat4};
use web_sys as web;

mod helpers;
mod mesh;
mod points;
mod targets;
use mesh::{create_mesh_resources, MeshDraw, MeshResources};
use points::{create_points_resources, PointDraw, PointsResources};
use targets::DepthTarget;

const WHITE_TEXTURE_KEY: &str = "builtin:white";

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    light_dir: [f32; 4],
    ambient: [f32; 4],
}

/// Which sampler a texture is bound with, and whether it holds color data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureKind {
    Albedo,
    Mask,
    Sprite,
}

fn sampler_for<'s>(
    kind: TextureKind,
    repeat: &'s wgpu::Sampler,
    clamp: &'s wgpu::Sampler,
) -> &'s wgpu::Sampler {
    match kind {
        TextureKind::Albedo | TextureKind::Mask => repeat,
        TextureKind::Sprite => clamp,
    }
}

struct GpuTexture {
    _tex: wgpu::Texture,
    view: wgpu::TextureView,
    kind: TextureKind,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    frame_buffer: wgpu::Buffer,
    frame_bg: wgpu::BindGroup,
    mesh: MeshResources,
    points: PointsResources,
    repeat_sampler: wgpu::Sampler,
    clamp_sampler: wgpu::Sampler,
    textures: FnvHashMap<String, GpuTexture>,

    planet: MeshDraw,
    ring: MeshDraw,
    near: Vec<Option<PointDraw>>,
    far: Vec<PointDraw>,
    light_helper: Option<PointDraw>,

    camera: Camera,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        graph: &SceneGraph,
        scene: &SceneConfig,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let mesh = create_mesh_resources(&device, &frame_bgl, format);
        let points = create_points_resources(&device, &frame_bgl, format);
        let repeat_sampler =
            helpers::create_sampler(&device, "repeat_sampler", wgpu::AddressMode::Repeat);
        let clamp_sampler =
            helpers::create_sampler(&device, "clamp_sampler", wgpu::AddressMode::ClampToEdge);

        let planet = MeshDraw::new(
            &device,
            "planet",
            &graph.planet,
            &scene.planet.albedo_path,
            [1.0, 1.0, 1.0, 1.0],
            false,
        );
        let [tr, tg, tb] = scene.ring.tint;
        let ring = MeshDraw::new(
            &device,
            "ring",
            &graph.ring,
            &scene.ring.alpha_path,
            [tr, tg, tb, 1.0],
            true,
        );
        let sprite_key = |i: usize| scene.sprite_paths[i].as_str();
        // Keep one slot per near batch so indices line up with SceneState::near_rotations
        let near = graph
            .near
            .iter()
            .map(|b| PointDraw::new(&device, "near_points", &b.particles, sprite_key(b.texture_index)))
            .collect();
        let far = graph
            .far
            .iter()
            .filter_map(|b| PointDraw::new(&device, "far_points", &b.particles, sprite_key(b.texture_index)))
            .collect();
        let helper_particle = crate::core::particles::Particle {
            position: [0.0; 3],
            size: LIGHT_HELPER_SIZE,
            color: LIGHT_HELPER_COLOR,
        };
        let light_helper =
            PointDraw::new(&device, "light_helper", &[helper_particle], WHITE_TEXTURE_KEY);

        let mut camera = Camera::new(CAMERA_FOV_DEG, 1.0, CAMERA_NEAR, CAMERA_FAR);
        camera.set_viewport(width, height);

        let mut state = Self {
            surface,
            device,
            queue,
            config,
            depth,
            frame_buffer,
            frame_bg,
            mesh,
            points,
            repeat_sampler,
            clamp_sampler,
            textures: FnvHashMap::default(),
            planet,
            ring,
            near,
            far,
            light_helper,
            camera,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        };
        state.upload_texture(WHITE_TEXTURE_KEY, 1, 1, &[255, 255, 255, 255], TextureKind::Sprite);
        log::info!(
            "[gpu] ready {}x{} format={:?} near={} far={}",
            width,
            height,
            format,
            state.near.len(),
            state.far.len()
        );
        Ok(state)
    }

    /// Store a decoded image under `key` and bind it to every draw that
    /// references that key.
    pub fn upload_texture(
        &mut self,
        key: &str,
        width: u32,
        height: u32,
        rgba: &[u8],
        kind: TextureKind,
    ) {
        let (tex, view) = helpers::upload_rgba_texture(
            &self.device,
            &self.queue,
            key,
            width,
            height,
            rgba,
            kind == TextureKind::Albedo,
        );
        self.textures.insert(
            key.to_string(),
            GpuTexture {
                _tex: tex,
                view,
                kind,
            },
        );
        self.bind_pending_draws();
    }

    fn bind_pending_draws(&mut self) {
        let device = &self.device;
        let textures = &self.textures;
        let (repeat, clamp) = (&self.repeat_sampler, &self.clamp_sampler);
        for draw in [&mut self.planet, &mut self.ring] {
            if draw.is_ready() {
                continue;
            }
            if let Some(t) = textures.get(&draw.texture_key) {
                draw.attach_texture(device, &self.mesh.bgl, &t.view, sampler_for(t.kind, repeat, clamp));
            }
        }
        let point_draws = self
            .near
            .iter_mut()
            .flatten()
            .chain(self.far.iter_mut())
            .chain(self.light_helper.iter_mut());
        for draw in point_draws {
            if draw.is_ready() {
                continue;
            }
            if let Some(t) = textures.get(&draw.texture_key) {
                draw.attach_texture(device, &self.points.bgl, &t.view, sampler_for(t.kind, repeat, clamp));
            }
        }
    }

    pub fn planet_ready(&self) -> bool {
        self.planet.is_ready()
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
            self.camera.set_viewport(width, height);
        }
    }

    fn write_frame_uniforms(&self, tunables: &Tunables) {
        let view = self.camera.view_matrix();
        let proj = self.camera.projection_matrix();
        let light_dir = tunables.light_position.normalize_or_zero();
        let ambient = tunables.ambient_intensity;
        let u = FrameUniforms {
            view_proj: (proj * view).to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            camera_pos: self.camera.eye.extend(1.0).to_array(),
            light_dir: light_dir.extend(tunables.directional_intensity).to_array(),
            ambient: [ambient, ambient, ambient, 1.0],
        };
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub fn render(
        &mut self,
        scene: &SceneState,
        tunables: &Tunables,
    ) -> Result<(), wgpu::SurfaceError> {
        self.camera.eye = scene.camera_position;
        self.camera.target = scene.camera_target;
        self.write_frame_uniforms(tunables);

        let planet_model = Mat4::from_rotation_y(scene.planet_rotation_y.unwrap_or(0.0));
        self.planet.write_model(&self.queue, planet_model);
        let r = tunables.ring_rotation;
        self.ring
            .write_model(&self.queue, Mat4::from_euler(EulerRot::XYZ, r.x, r.y, r.z));
        for (draw, rot) in self.near.iter().zip(scene.near_rotations.iter()) {
            if let Some(d) = draw {
                d.write_model(&self.queue, Mat4::from_rotation_y(*rot), 1.0);
            }
        }
        for d in &self.far {
            d.write_model(&self.queue, Mat4::IDENTITY, 1.0);
        }
        if let Some(h) = &self.light_helper {
            h.write_model(
                &self.queue,
                Mat4::from_translation(tunables.light_position),
                1.0,
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.frame_bg, &[]);

            // Planet only once the scene state has picked it up
            if scene.planet_rotation_y.is_some() {
                rpass.set_pipeline(&self.mesh.opaque_pipeline);
                self.planet.draw(&mut rpass);
            }

            rpass.set_pipeline(&self.mesh.masked_pipeline);
            self.ring.draw(&mut rpass);

            rpass.set_pipeline(&self.points.pipeline);
            for d in self.far.iter().chain(self.near.iter().flatten()) {
                d.draw(&mut rpass);
            }
            if tunables.show_helpers {
                if let Some(h) = &self.light_helper {
                    h.draw(&mut rpass);
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
