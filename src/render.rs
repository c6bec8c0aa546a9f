use crate::constants::{CLEAR_RGB, DRIVE_CLEAR_BOOST, FIELD_ALPHA, SPRITE_SIZE_MULTIPLIER};
use lounge_core::{Camera, FrameState, Renderer};
use web_sys as web;

mod particles;
use particles::{
    create_instance_buffer, create_particle_resources, InstanceRaw, ParticleResources,
    ParticleUniforms,
};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    particles: ParticleResources,
    // Staging for instance data, reused every frame.
    instances: Vec<InstanceRaw>,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, capacity: usize) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let particles = create_particle_resources(&device, format, capacity);
        log::info!("[gpu] ready {}x{} ({:?}), {} instances", width, height, format, capacity);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            particles,
            instances: Vec::with_capacity(capacity),
            width,
            height,
        })
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
        }
    }

    fn upload(&mut self, frame: &FrameState<'_>) {
        self.instances.clear();
        self.instances
            .extend(frame.elements.iter().zip(frame.transforms).map(|(a, t)| {
                let i = t.color_intensity;
                InstanceRaw {
                    pos_scale: [t.position.x, t.position.y, t.position.z, t.scale],
                    color: [a.color[0] * i, a.color[1] * i, a.color[2] * i, 1.0],
                    spin: [t.rotation, 0.0, 0.0, 0.0],
                }
            }));
        if self.instances.len() > self.particles.capacity {
            self.particles.capacity = self.instances.len();
            self.particles.instance_buffer = create_instance_buffer(&self.device, self.particles.capacity);
        }
        self.queue.write_buffer(
            &self.particles.instance_buffer,
            0,
            bytemuck::cast_slice(&self.instances),
        );

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let camera = Camera::looking_at_origin(frame.pose.camera_eye, aspect);
        let uniforms = ParticleUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            tint: [frame.tint[0], frame.tint[1], frame.tint[2], frame.drive],
            params: [frame.time, SPRITE_SIZE_MULTIPLIER, FIELD_ALPHA, 0.0],
        };
        self.queue
            .write_buffer(&self.particles.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    pub fn render(&mut self, frame: &FrameState<'_>) -> Result<(), wgpu::SurfaceError> {
        self.upload(frame);
        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        // Background lifts slightly with loudness.
        let lift = (frame.drive.clamp(0.0, 1.5) * DRIVE_CLEAR_BOOST) as f64;
        let clear = wgpu::Color {
            r: CLEAR_RGB[0] + lift * frame.tint[0] as f64,
            g: CLEAR_RGB[1] + lift * frame.tint[1] as f64,
            b: CLEAR_RGB[2] + lift * frame.tint[2] as f64,
            a: 1.0,
        };
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("particles_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.particles.pipeline);
            rpass.set_bind_group(0, &self.particles.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.particles.instance_buffer.slice(..));
            rpass.draw(0..6, 0..self.instances.len() as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}

impl<'a> Renderer for GpuState<'a> {
    fn draw(&mut self, frame: &FrameState<'_>) {
        if let Err(e) = self.render(frame) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Used before WebGPU is ready (or when it is unavailable): the pipeline keeps
/// running so audio, entry and HUD behave the same.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &FrameState<'_>) {}
}
