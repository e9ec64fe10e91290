use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Surface preferences for [`Gpu::new`].
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when the platform offers one. UI colors
    /// are authored in sRGB, so this should stay on outside of tests.
    pub prefer_srgb: bool,
    /// Swap behavior. FIFO is universally supported and right for UI work.
    pub present_mode: wgpu::PresentMode,
    /// Frame-latency hint forwarded to the surface configuration.
    pub max_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            max_frame_latency: 2,
        }
    }
}

/// The device/queue pair and the configured surface for one window.
///
/// `'w` ties the surface to the window it draws into; the runtime keeps the
/// window alive for at least as long as this value.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    phys_size: PhysicalSize<u32>,
}

/// One acquired surface texture plus an encoder to record into.
///
/// Short-lived: holding it blocks acquisition of the next frame.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What the caller should do after a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was reconfigured; try again next frame.
    Reconfigured,
    /// Transient failure; drop this frame.
    SkipFrame,
    /// Unrecoverable (device loss or OOM); shut down.
    Fatal,
}

impl<'w> Gpu<'w> {
    /// Picks an adapter compatible with `window`'s surface and configures a
    /// swapchain for it.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let phys_size = window.inner_size();
        anyhow::ensure!(
            phys_size.width > 0 && phys_size.height > 0,
            "cannot create a surface for a zero-sized window"
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("creating window surface")?;

        // A dial and two buttons do not need the discrete GPU.
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("requesting a compatible adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("ringwatch device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("requesting device and queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format = pick_surface_format(&caps, init.prefer_srgb)
            .context("surface reports no usable formats")?;
        log::debug!("surface format {format:?}, {} alpha modes", caps.alpha_modes.len());

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: phys_size.width,
            height: phys_size.height,
            present_mode: init.present_mode,
            alpha_mode: caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: init.max_frame_latency,
        };
        surface.configure(&device, &surface_config);

        Ok(Self { surface, device, queue, surface_config, phys_size })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Tracks a window resize.
    ///
    /// A 0×0 surface cannot be configured (minimized window); the new size
    /// is recorded and applied once the window has area again.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.phys_size = new_size;
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.surface_config.width = new_size.width;
        self.surface_config.height = new_size.height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Acquires the next swapchain texture and opens an encoder for it.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("frame") });

        Ok(GpuFrame { surface_texture, view, encoder })
    }

    /// Submits the frame's commands and presents it.
    pub fn submit(&self, frame: GpuFrame) {
        self.queue.submit(std::iter::once(frame.encoder.finish()));
        frame.surface_texture.present();
    }

    /// Maps a frame-acquisition failure to a recovery action, reconfiguring
    /// the surface for the recoverable cases.
    pub fn handle_surface_error(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        match err {
            SurfaceError::Lost | SurfaceError::Outdated => {
                log::warn!("surface {err:?}, reconfiguring");
                if self.phys_size.width > 0 && self.phys_size.height > 0 {
                    self.surface.configure(&self.device, &self.surface_config);
                }
                SurfaceErrorAction::Reconfigured
            }
            SurfaceError::Timeout | SurfaceError::Other => {
                log::warn!("skipping frame: {err:?}");
                SurfaceErrorAction::SkipFrame
            }
            SurfaceError::OutOfMemory => {
                log::error!("surface out of memory");
                SurfaceErrorAction::Fatal
            }
        }
    }
}

fn pick_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        if let Some(format) = caps.formats.iter().copied().find(|f| f.is_srgb()) {
            return Some(format);
        }
    }
    caps.formats.first().copied()
}
