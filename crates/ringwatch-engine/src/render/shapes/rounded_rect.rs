use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{
    build_shape_pipeline, open_pass, paint_inputs, InstanceBuffer, PipelineSpec, UnitQuad,
    ViewportBinding, QUAD_INDEX_COUNT,
};

/// Draws `DrawCmd::RoundedRect` panels.
///
/// The fragment shader evaluates a per-corner-radius rounded-box SDF and
/// splits coverage between fill and an optional inward border. Radius 0
/// degenerates to a sharp rectangle, so plain rect fills go through here
/// too. Solid and 2-stop linear-gradient paints are supported.
#[derive(Default)]
pub struct RoundedRectRenderer {
    gpu: Option<RectGpu>,
}

/// GPU objects, built on first use and rebuilt if the surface format changes.
struct RectGpu {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport: ViewportBinding,
    quad: UnitQuad,
    instances: InstanceBuffer<RectInstance>,
}

impl RectGpu {
    fn build(ctx: &RenderCtx<'_>) -> Self {
        let device = ctx.device;

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("rounded_rect"),
            entries: &[ViewportBinding::layout_entry(0)],
        });
        let viewport = ViewportBinding::create(device, "rounded_rect viewport");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("rounded_rect"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry { binding: 0, resource: viewport.resource() }],
        });

        Self {
            format: ctx.surface_format,
            pipeline: build_shape_pipeline(
                device,
                ctx.surface_format,
                &PipelineSpec {
                    label: "rounded_rect",
                    shader_src: include_str!("shaders/rounded_rect.wgsl"),
                    instance_layout: RectInstance::layout(),
                    bind_group_layout: &bgl,
                },
            ),
            bind_group,
            viewport,
            quad: UnitQuad::create(device, "rounded_rect quad"),
            instances: InstanceBuffer::create(device, "rounded_rect instances"),
        }
    }
}

impl RoundedRectRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        let mut batch: Vec<RectInstance> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::RoundedRect(cmd) = &item.cmd else { continue };

            let rect = cmd.rect.normalized();
            if rect.is_empty() {
                continue;
            }

            let paint = paint_inputs(&cmd.paint);
            let (border_width, border_color) = match &cmd.border {
                Some(b) => (b.width.max(0.0), [b.color.r, b.color.g, b.color.b, b.color.a]),
                None => (0.0, [0.0; 4]),
            };

            batch.push(RectInstance {
                origin: [rect.origin.x, rect.origin.y],
                size: [rect.size.x, rect.size.y],
                radii: cmd.radii.clockwise_from_top_left(),
                color0: paint.color0,
                color1: paint.color1,
                axis_start: paint.axis_start,
                axis_end: paint.axis_end,
                border: [border_width, 0.0],
                border_color,
            });
        }

        if batch.is_empty() {
            return;
        }

        let gpu = match &mut self.gpu {
            Some(gpu) if gpu.format == ctx.surface_format => gpu,
            slot => slot.insert(RectGpu::build(ctx)),
        };

        gpu.viewport.update(ctx.queue, ctx.viewport);
        gpu.instances.upload(ctx.device, ctx.queue, &batch);

        let mut pass = open_pass(target.encoder, target.color_view, "rounded_rect pass");
        pass.set_pipeline(&gpu.pipeline);
        pass.set_bind_group(0, &gpu.bind_group, &[]);
        pass.set_vertex_buffer(0, gpu.quad.vertices.slice(..));
        pass.set_vertex_buffer(1, gpu.instances.slice());
        pass.set_index_buffer(gpu.quad.indices.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..QUAD_INDEX_COUNT, 0, 0..batch.len() as u32);
    }
}

/// Mirrors `VsIn` in `shaders/rounded_rect.wgsl` (locations 1..=9).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct RectInstance {
    origin: [f32; 2],
    size: [f32; 2],
    radii: [f32; 4], // tl, tr, br, bl
    color0: [f32; 4],
    color1: [f32; 4],
    axis_start: [f32; 2],
    axis_end: [f32; 2],
    border: [f32; 2], // .x = width, .y unused
    border_color: [f32; 4],
}

impl RectInstance {
    const ATTRS: [wgpu::VertexAttribute; 9] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32x2,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x2,
        7 => Float32x2,
        8 => Float32x2,
        9 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
