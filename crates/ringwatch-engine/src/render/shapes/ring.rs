use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{
    build_shape_pipeline, open_pass, paint_inputs, InstanceBuffer, PipelineSpec, UnitQuad,
    ViewportBinding, QUAD_INDEX_COUNT,
};

/// Draws `DrawCmd::Ring` arcs.
///
/// Each arc is one instanced quad over the ring's bounding square. The
/// fragment shader evaluates the annulus-sector SDF: sweep starts at
/// 12 o'clock, runs clockwise, and ends in rounded caps. Solid and 2-stop
/// linear-gradient paints are supported.
#[derive(Default)]
pub struct RingRenderer {
    gpu: Option<RingGpu>,
}

/// GPU objects, built on first use and rebuilt if the surface format changes.
struct RingGpu {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport: ViewportBinding,
    quad: UnitQuad,
    instances: InstanceBuffer<ArcInstance>,
}

impl RingGpu {
    fn build(ctx: &RenderCtx<'_>) -> Self {
        let device = ctx.device;

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("ring"),
            entries: &[ViewportBinding::layout_entry(0)],
        });
        let viewport = ViewportBinding::create(device, "ring viewport");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ring"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry { binding: 0, resource: viewport.resource() }],
        });

        Self {
            format: ctx.surface_format,
            pipeline: build_shape_pipeline(
                device,
                ctx.surface_format,
                &PipelineSpec {
                    label: "ring",
                    shader_src: include_str!("shaders/ring.wgsl"),
                    instance_layout: ArcInstance::layout(),
                    bind_group_layout: &bgl,
                },
            ),
            bind_group,
            viewport,
            quad: UnitQuad::create(device, "ring quad"),
            instances: InstanceBuffer::create(device, "ring instances"),
        }
    }
}

impl RingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        let mut batch: Vec<ArcInstance> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Ring(cmd) = &item.cmd else { continue };

            // Zero-area and zero-sweep arcs draw nothing.
            if cmd.radius <= 0.0 || cmd.thickness <= 0.0 || cmd.sweep <= 0.0 {
                continue;
            }

            let paint = paint_inputs(&cmd.paint);
            batch.push(ArcInstance {
                center: [cmd.center.x, cmd.center.y],
                radius_thickness: [cmd.radius, cmd.thickness],
                sweep: [cmd.sweep.min(1.0), 0.0],
                axis_start: paint.axis_start,
                axis_end: paint.axis_end,
                color0: paint.color0,
                color1: paint.color1,
            });
        }

        if batch.is_empty() {
            return;
        }

        let gpu = match &mut self.gpu {
            Some(gpu) if gpu.format == ctx.surface_format => gpu,
            slot => slot.insert(RingGpu::build(ctx)),
        };

        gpu.viewport.update(ctx.queue, ctx.viewport);
        gpu.instances.upload(ctx.device, ctx.queue, &batch);

        let mut pass = open_pass(target.encoder, target.color_view, "ring pass");
        pass.set_pipeline(&gpu.pipeline);
        pass.set_bind_group(0, &gpu.bind_group, &[]);
        pass.set_vertex_buffer(0, gpu.quad.vertices.slice(..));
        pass.set_vertex_buffer(1, gpu.instances.slice());
        pass.set_index_buffer(gpu.quad.indices.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..QUAD_INDEX_COUNT, 0, 0..batch.len() as u32);
    }
}

/// Mirrors `VsIn` in `shaders/ring.wgsl` (locations 1..=7).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ArcInstance {
    center: [f32; 2],
    radius_thickness: [f32; 2],
    sweep: [f32; 2], // .y unused
    axis_start: [f32; 2],
    axis_end: [f32; 2],
    color0: [f32; 4],
    color1: [f32; 4],
}

impl ArcInstance {
    const ATTRS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32x2,
        3 => Float32x2,
        4 => Float32x2,
        5 => Float32x2,
        6 => Float32x4,
        7 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
