use glam::Vec2;
use wgpu;

use super::helpers;
use crate::core::{
    FLOWMAP_WGSL, FLOW_DISSIPATION, FLOW_FALLOFF, FLOW_MAP_SIZE, FLOW_STAMP_ALPHA,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct FlowUniforms {
    mouse: [f32; 2],
    velocity: [f32; 2],
    aspect: f32,
    falloff: f32,
    dissipation: f32,
    stamp_alpha: f32,
}

/// Ping-pong flow-map: each frame one advect pass reads the previous field
/// and writes the other texture, then the roles swap. The texture last
/// written is the one the metaball pass samples.
pub(crate) struct FlowmapResources {
    view_a: wgpu::TextureView,
    view_b: wgpu::TextureView,
    // kept alive for the views above
    _tex_a: wgpu::Texture,
    _tex_b: wgpu::Texture,

    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bg_read_a: wgpu::BindGroup,
    bg_read_b: wgpu::BindGroup,

    // true when texture A holds the current field (the next read source)
    ping: bool,

    pub(crate) mouse: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) aspect: f32,
}

impl FlowmapResources {
    pub(crate) fn new(device: &wgpu::Device, sampler: &wgpu::Sampler) -> Self {
        let format = wgpu::TextureFormat::Rgba16Float;
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (tex_a, view_a) = helpers::create_color_texture(
            device,
            "flow_a",
            FLOW_MAP_SIZE,
            FLOW_MAP_SIZE,
            format,
            usage,
        );
        let (tex_b, view_b) = helpers::create_color_texture(
            device,
            "flow_b",
            FLOW_MAP_SIZE,
            FLOW_MAP_SIZE,
            format,
            usage,
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("flowmap_shader"),
            source: wgpu::ShaderSource::Wgsl(FLOWMAP_WGSL.into()),
        });
        let bgl = helpers::make_effect_bgl(device, "flow_bgl");
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("flow_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_effect_pipeline(
            device,
            "flow_pipeline",
            &pl,
            &shader,
            "fs_advect",
            format,
            None,
        );
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("flow_uniforms"),
            size: std::mem::size_of::<FlowUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bg_read_a = helpers::make_effect_bind_group(
            device,
            "flow_bg_read_a",
            &bgl,
            &view_a,
            sampler,
            &uniform_buffer,
        );
        let bg_read_b = helpers::make_effect_bind_group(
            device,
            "flow_bg_read_b",
            &bgl,
            &view_b,
            sampler,
            &uniform_buffer,
        );

        Self {
            view_a,
            view_b,
            _tex_a: tex_a,
            _tex_b: tex_b,
            pipeline,
            uniform_buffer,
            bg_read_a,
            bg_read_b,
            ping: true,
            mouse: Vec2::ZERO,
            velocity: Vec2::ZERO,
            aspect: 1.0,
        }
    }

    pub(crate) fn view_a(&self) -> &wgpu::TextureView {
        &self.view_a
    }

    pub(crate) fn view_b(&self) -> &wgpu::TextureView {
        &self.view_b
    }

    /// True when the most recently written field lives in texture A.
    pub(crate) fn current_is_a(&self) -> bool {
        self.ping
    }

    /// Encode one advect pass for this frame and swap the ping-pong roles.
    pub(crate) fn encode_update(
        &mut self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
    ) {
        let u = FlowUniforms {
            mouse: self.mouse.to_array(),
            velocity: self.velocity.to_array(),
            aspect: self.aspect,
            falloff: FLOW_FALLOFF,
            dissipation: FLOW_DISSIPATION,
            stamp_alpha: FLOW_STAMP_ALPHA,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));

        let (src_bg, dst_view) = if self.ping {
            (&self.bg_read_a, &self.view_b)
        } else {
            (&self.bg_read_b, &self.view_a)
        };
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("flow_advect"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: dst_view,
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
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, src_bg, &[]);
        rpass.draw(0..3, 0..1);
        drop(rpass);

        self.ping = !self.ping;
    }
}
