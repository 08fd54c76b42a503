use glam::Vec2;
use web_sys as web;

mod flowmap;
mod helpers;

use crate::core::{Preset, METABALL_WGSL};
use flowmap::FlowmapResources;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MetaballUniforms {
    resolution: [f32; 2],
    time: f32,
    alpha: f32,
    mouse: [f32; 2],
    mouse_l: [f32; 2],
    mouse_ll: [f32; 2],
    _pad: [f32; 2],
}

/// WebGPU state for the effect: surface, the flow-map ping-pong pass and the
/// fullscreen metaball pass that samples it.
pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    flowmap: FlowmapResources,
    metaball_pipeline: wgpu::RenderPipeline,
    metaball_uniforms: wgpu::Buffer,
    // One bind group per flow-map ping-pong target
    bg_flow_a: wgpu::BindGroup,
    bg_flow_b: wgpu::BindGroup,

    width: u32,
    height: u32,
    time_accum: f32,
    alpha: f32,
    trails: [Vec2; 3],
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, preset: Preset) -> anyhow::Result<Self> {
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
                    // Default limits keep older WebGPU implementations happy
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

        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let flowmap = FlowmapResources::new(&device, &linear_sampler);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("metaball_shader"),
            source: wgpu::ShaderSource::Wgsl(METABALL_WGSL.into()),
        });
        let bgl = helpers::make_effect_bgl(&device, "metaball_bgl");
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("metaball_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let metaball_pipeline = helpers::make_effect_pipeline(
            &device,
            "metaball_pipeline",
            &pl,
            &shader,
            preset.fragment_entry(),
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
        );
        let metaball_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("metaball_uniforms"),
            size: std::mem::size_of::<MetaballUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bg_flow_a = helpers::make_effect_bind_group(
            &device,
            "metaball_bg_flow_a",
            &bgl,
            flowmap.view_a(),
            &linear_sampler,
            &metaball_uniforms,
        );
        let bg_flow_b = helpers::make_effect_bind_group(
            &device,
            "metaball_bg_flow_b",
            &bgl,
            flowmap.view_b(),
            &linear_sampler,
            &metaball_uniforms,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            flowmap,
            metaball_pipeline,
            metaball_uniforms,
            bg_flow_a,
            bg_flow_b,
            width,
            height,
            time_accum: 0.0,
            alpha: 0.0,
            trails: [Vec2::ZERO; 3],
        })
    }

    /// Per-frame flow-map inputs: pointer UV plus the eased velocity.
    pub fn set_flow_inputs(&mut self, mouse_uv: Vec2, velocity: Vec2) {
        self.flowmap.mouse = mouse_uv;
        self.flowmap.velocity = velocity;
        self.flowmap.aspect = if self.height > 0 {
            self.width as f32 / self.height as f32
        } else {
            1.0
        };
    }

    /// Fast/medium/slow lagged pointer positions in UV space.
    pub fn set_trails(&mut self, trails: [Vec2; 3]) {
        self.trails = trails;
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
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

    pub fn render(&mut self, dt_sec: f32) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        self.flowmap.encode_update(&self.queue, &mut encoder);

        let u = MetaballUniforms {
            resolution: [self.width as f32, self.height as f32],
            time: self.time_accum,
            alpha: self.alpha,
            mouse: self.trails[0].to_array(),
            mouse_l: self.trails[1].to_array(),
            mouse_ll: self.trails[2].to_array(),
            _pad: [0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.metaball_uniforms, 0, bytemuck::bytes_of(&u));

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("metaball_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.metaball_pipeline);
            let bg = if self.flowmap.current_is_a() {
                &self.bg_flow_a
            } else {
                &self.bg_flow_b
            };
            rpass.set_bind_group(0, bg, &[]);
            rpass.draw(0..3, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
