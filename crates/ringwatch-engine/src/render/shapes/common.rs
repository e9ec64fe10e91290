//! Plumbing shared by the shape renderers.
//!
//! Every shape draws the same way: a unit quad instanced once per shape,
//! stretched over the shape's bounds in the vertex stage, with coverage
//! decided by an SDF in the fragment stage. The parts that are identical
//! across shapes live here, so a renderer only supplies its shader source
//! and instance layout.

use std::marker::PhantomData;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Viewport;
use crate::paint::{Color, Paint};

// ── unit quad ─────────────────────────────────────────────────────────────

/// Vertex stream 0: one corner of the unit quad, in `[0, 1]²`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct CornerVertex {
    pos: [f32; 2],
}

impl CornerVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_INDEX_COUNT: u32 = 6;

/// The quad every instance is stretched from.
pub(super) struct UnitQuad {
    pub vertices: wgpu::Buffer,
    pub indices: wgpu::Buffer,
}

impl UnitQuad {
    pub(super) fn create(device: &wgpu::Device, label: &str) -> Self {
        let corners = [
            CornerVertex { pos: [0.0, 0.0] },
            CornerVertex { pos: [1.0, 0.0] },
            CornerVertex { pos: [1.0, 1.0] },
            CornerVertex { pos: [0.0, 1.0] },
        ];
        let indices: [u16; QUAD_INDEX_COUNT as usize] = [0, 1, 2, 0, 2, 3];

        Self {
            vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&corners),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            indices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            }),
        }
    }
}

// ── viewport uniform ──────────────────────────────────────────────────────

/// WGSL uniforms round up to 16 bytes, hence the padding.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ViewportUniform {
    size: [f32; 2],
    _pad: [f32; 2],
}

/// Uniform buffer carrying the logical viewport size, refreshed per frame.
pub(super) struct ViewportBinding {
    buffer: wgpu::Buffer,
}

impl ViewportBinding {
    const BYTES: u64 = std::mem::size_of::<ViewportUniform>() as u64;

    pub(super) fn create(device: &wgpu::Device, label: &str) -> Self {
        Self {
            buffer: device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: Self::BYTES,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }),
        }
    }

    /// Bind-group-layout entry for uniform slot `slot`, vertex-stage only.
    pub(super) fn layout_entry(slot: u32) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding: slot,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(Self::BYTES),
            },
            count: None,
        }
    }

    pub(super) fn resource(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }

    /// Uploads `viewport`, clamped away from zero so the NDC divide stays
    /// finite while a window is minimized.
    pub(super) fn update(&self, queue: &wgpu::Queue, viewport: Viewport) {
        let uniform = ViewportUniform {
            size: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
        };
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&uniform));
    }
}

// ── pipeline scaffold ─────────────────────────────────────────────────────

pub(super) struct PipelineSpec<'a> {
    pub label: &'a str,
    pub shader_src: &'a str,
    pub instance_layout: wgpu::VertexBufferLayout<'static>,
    pub bind_group_layout: &'a wgpu::BindGroupLayout,
}

/// Builds the pipeline shape all renderers share: unit-quad stream plus an
/// instance stream, premultiplied-alpha blending onto `format`, triangle
/// list, no depth, no culling.
pub(super) fn build_shape_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    spec: &PipelineSpec<'_>,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(spec.label),
        source: wgpu::ShaderSource::Wgsl(spec.shader_src.into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(spec.label),
        bind_group_layouts: &[spec.bind_group_layout],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(spec.label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[CornerVertex::layout(), spec.instance_layout.clone()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                // Colors arrive premultiplied; see `paint::Color`.
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// Opens a color pass over the frame that loads existing contents, so each
/// shape family composites over whatever rendered before it.
pub(super) fn open_pass<'e>(
    encoder: &'e mut wgpu::CommandEncoder,
    view: &wgpu::TextureView,
    label: &str,
) -> wgpu::RenderPass<'e> {
    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    })
}

// ── instance upload ───────────────────────────────────────────────────────

/// Per-frame instance buffer that regrows when a frame needs more shapes
/// than any frame before it.
pub(super) struct InstanceBuffer<T> {
    label: &'static str,
    buffer: wgpu::Buffer,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T: Pod> InstanceBuffer<T> {
    const MIN_CAPACITY: usize = 16;

    pub(super) fn create(device: &wgpu::Device, label: &'static str) -> Self {
        Self {
            label,
            buffer: Self::alloc(device, label, Self::MIN_CAPACITY),
            capacity: Self::MIN_CAPACITY,
            _marker: PhantomData,
        }
    }

    fn alloc(device: &wgpu::Device, label: &str, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * std::mem::size_of::<T>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub(super) fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: &[T]) {
        if data.len() > self.capacity {
            self.capacity = (data.len() * 2).max(Self::MIN_CAPACITY);
            self.buffer = Self::alloc(device, self.label, self.capacity);
        }
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
    }

    pub(super) fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..)
    }
}

// ── paint flattening ──────────────────────────────────────────────────────

/// Shader-ready paint: two endpoint colors plus a gradient axis.
///
/// A solid paint collapses to a zero-length axis, which the shaders read as
/// "`color0` everywhere". Gradients with more than two stops are sampled at
/// their endpoints only.
#[derive(Debug, Copy, Clone)]
pub(super) struct PaintInputs {
    pub color0: [f32; 4],
    pub color1: [f32; 4],
    pub axis_start: [f32; 2],
    pub axis_end: [f32; 2],
}

pub(super) fn paint_inputs(paint: &Paint) -> PaintInputs {
    fn rgba(c: Color) -> [f32; 4] {
        [c.r, c.g, c.b, c.a]
    }

    match paint {
        Paint::Solid(c) => PaintInputs {
            color0: rgba(*c),
            color1: rgba(*c),
            axis_start: [0.0; 2],
            axis_end: [0.0; 2],
        },
        Paint::LinearGradient(g) => {
            let (first, last) = match (g.stops.first(), g.stops.last()) {
                (Some(a), Some(b)) => (a.color, b.color),
                _ => (Color::transparent(), Color::transparent()),
            };
            if g.stops.len() > 2 {
                static EXTRA_STOPS: std::sync::Once = std::sync::Once::new();
                EXTRA_STOPS.call_once(|| {
                    log::debug!("linear gradients sample only their endpoint stops");
                });
            }
            PaintInputs {
                color0: rgba(first),
                color1: rgba(last),
                axis_start: [g.start.x, g.start.y],
                axis_end: [g.end.x, g.end.y],
            }
        }
    }
}
