use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use super::common::{
    build_shape_pipeline, open_pass, InstanceBuffer, PipelineSpec, UnitQuad, ViewportBinding,
    QUAD_INDEX_COUNT,
};

/// Draws `DrawCmd::Text` runs as one instanced quad per glyph.
///
/// Glyph coverage lives in an R8 atlas filled lazily: the first time a
/// (font, glyph, size) combination appears it is rasterized through fontdue
/// and shelf-packed into the atlas, then reused for the renderer's lifetime.
/// The dial's digit set is tiny, so there is no eviction.
pub struct TextRenderer {
    gpu: Option<TextGpu>,
    // `None` marks glyphs that didn't fit the atlas; they are not retried.
    glyphs: HashMap<GlyphRasterConfig, Option<AtlasSlot>>,
    layout: Layout<()>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            gpu: None,
            glyphs: HashMap::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all `DrawCmd::Text` entries in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        font_system: &FontSystem,
    ) {
        // Split the borrows: the glyph loop reads `layout` while it feeds
        // the atlas (`gpu`) and the cache (`glyphs`).
        let Self { gpu, glyphs, layout } = self;

        let gpu = match gpu {
            Some(gpu) if gpu.format == ctx.surface_format => gpu,
            slot => slot.insert(TextGpu::build(ctx)),
        };

        let mut batch: Vec<GlyphInstance> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Text(cmd) = &item.cmd else { continue };

            let Some(font) = font_system.get(cmd.font) else {
                log::warn!("text renderer: unknown {:?}, skipping run", cmd.font);
                continue;
            };

            layout.reset(&LayoutSettings {
                x: cmd.origin.x,
                y: cmd.origin.y,
                max_width: cmd.max_width,
                ..LayoutSettings::default()
            });
            layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

            let color = [cmd.color.r, cmd.color.g, cmd.color.b, cmd.color.a];

            for glyph in layout.glyphs() {
                if !glyph.char_data.rasterize() || glyph.width == 0 || glyph.height == 0 {
                    continue;
                }

                let slot = glyphs.entry(glyph.key).or_insert_with(|| {
                    let (metrics, coverage) = font.rasterize_config(glyph.key);
                    if metrics.width == 0 || metrics.height == 0 {
                        return None;
                    }
                    gpu.atlas.place(
                        ctx.queue,
                        &coverage,
                        metrics.width as u32,
                        metrics.height as u32,
                    )
                });
                let Some(slot) = slot else { continue };

                batch.push(GlyphInstance {
                    dst_min: [glyph.x, glyph.y],
                    dst_max: [glyph.x + glyph.width as f32, glyph.y + glyph.height as f32],
                    uv_min: slot.uv_min,
                    uv_max: slot.uv_max,
                    color,
                });
            }
        }

        if batch.is_empty() {
            return;
        }

        gpu.viewport.update(ctx.queue, ctx.viewport);
        gpu.instances.upload(ctx.device, ctx.queue, &batch);

        let mut pass = open_pass(target.encoder, target.color_view, "text pass");
        pass.set_pipeline(&gpu.pipeline);
        pass.set_bind_group(0, &gpu.bind_group, &[]);
        pass.set_vertex_buffer(0, gpu.quad.vertices.slice(..));
        pass.set_vertex_buffer(1, gpu.instances.slice());
        pass.set_index_buffer(gpu.quad.indices.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..QUAD_INDEX_COUNT, 0, 0..batch.len() as u32);
    }
}

// ── GPU state ─────────────────────────────────────────────────────────────

/// GPU objects, built on first use and rebuilt if the surface format changes.
///
/// The atlas texture is allocated once at full size, so the bind group never
/// needs rebuilding afterwards.
struct TextGpu {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport: ViewportBinding,
    quad: UnitQuad,
    instances: InstanceBuffer<GlyphInstance>,
    atlas: GlyphAtlas,
}

impl TextGpu {
    fn build(ctx: &RenderCtx<'_>) -> Self {
        let device = ctx.device;

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("text"),
            entries: &[
                ViewportBinding::layout_entry(0),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let atlas = GlyphAtlas::build(device);
        let atlas_view = atlas.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("text atlas sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let viewport = ViewportBinding::create(device, "text viewport");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("text"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: viewport.resource() },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            format: ctx.surface_format,
            pipeline: build_shape_pipeline(
                device,
                ctx.surface_format,
                &PipelineSpec {
                    label: "text",
                    shader_src: include_str!("shaders/text.wgsl"),
                    instance_layout: GlyphInstance::layout(),
                    bind_group_layout: &bgl,
                },
            ),
            bind_group,
            viewport,
            quad: UnitQuad::create(device, "text quad"),
            instances: InstanceBuffer::create(device, "text instances"),
            atlas,
        }
    }
}

// ── glyph atlas ───────────────────────────────────────────────────────────

/// UV rectangle of a packed glyph.
#[derive(Debug, Copy, Clone)]
struct AtlasSlot {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

/// Shelf-packed R8 coverage atlas.
struct GlyphAtlas {
    texture: wgpu::Texture,
    shelf_x: u32,
    shelf_y: u32,
    shelf_height: u32,
    out_of_room: bool,
}

impl GlyphAtlas {
    const EDGE: u32 = 1024;
    const GAP: u32 = 1; // keeps linear sampling from bleeding between glyphs

    fn build(device: &wgpu::Device) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("text atlas"),
            size: wgpu::Extent3d {
                width: Self::EDGE,
                height: Self::EDGE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        Self {
            texture,
            shelf_x: Self::GAP,
            shelf_y: Self::GAP,
            shelf_height: 0,
            out_of_room: false,
        }
    }

    /// Packs a `w × h` coverage bitmap and uploads it, or returns `None`
    /// once the atlas is exhausted.
    fn place(&mut self, queue: &wgpu::Queue, coverage: &[u8], w: u32, h: u32) -> Option<AtlasSlot> {
        if self.out_of_room {
            return None;
        }

        // Wrap to the next shelf when the current one runs out of width.
        if self.shelf_x + w + Self::GAP > Self::EDGE {
            self.shelf_y += self.shelf_height + Self::GAP;
            self.shelf_x = Self::GAP;
            self.shelf_height = 0;
        }
        if self.shelf_y + h + Self::GAP > Self::EDGE {
            log::warn!(
                "glyph atlas exhausted ({edge}×{edge}); further new glyphs will be dropped",
                edge = Self::EDGE
            );
            self.out_of_room = true;
            return None;
        }

        let (x, y) = (self.shelf_x, self.shelf_y);
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d { x, y, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            coverage,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );

        self.shelf_x += w + Self::GAP;
        self.shelf_height = self.shelf_height.max(h);

        let scale = 1.0 / Self::EDGE as f32;
        Some(AtlasSlot {
            uv_min: [x as f32 * scale, y as f32 * scale],
            uv_max: [(x + w) as f32 * scale, (y + h) as f32 * scale],
        })
    }
}

// ── glyph instance ────────────────────────────────────────────────────────

/// Mirrors `VsIn` in `shaders/text.wgsl` (locations 1..=5).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32x2,
        3 => Float32x2,
        4 => Float32x2,
        5 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
