use std::collections::HashMap;

use winit::dpi::LogicalSize;

use ringwatch_engine::coords::Vec2;
use ringwatch_engine::core::{App as EngineApp, AppControl, FrameCtx};
use ringwatch_engine::device::GpuInit;
use ringwatch_engine::input::{Key, MouseButton};
use ringwatch_engine::paint::Color;
use ringwatch_engine::render::shapes::ring::RingRenderer;
use ringwatch_engine::render::shapes::rounded_rect::RoundedRectRenderer;
use ringwatch_engine::render::shapes::text::TextRenderer;
use ringwatch_engine::text::FontId;
use ringwatch_engine::window::{Runtime, RuntimeConfig};

use crate::scene::{UiInput, UiScene};
use crate::widget::Element;

// ── Component ─────────────────────────────────────────────────────────────

/// Per-frame application logic driving a widget tree.
///
/// Each frame the runtime calls [`update`](Component::update) with the
/// frame's delta time and input snapshot, then [`view`](Component::view) to
/// obtain the tree to lay out, paint, and route events through. Rebuilding
/// the tree every frame keeps animated values (like a progress arc) a plain
/// function of component state — there is no retained binding to
/// invalidate.
pub trait Component: 'static {
    /// Advance timers/animations and react to input.
    fn update(&mut self, dt: f32, input: &UiInput) {
        let _ = (dt, input);
    }

    /// Build this frame's widget tree.
    fn view(&mut self) -> Element;
}

// ── FontMap ───────────────────────────────────────────────────────────────

/// A name-keyed map of loaded font handles.
///
/// Passed to the builder closure in [`Application::run_component`] so the
/// application can retrieve [`FontId`] values by name without importing
/// engine internals.
///
/// ```rust,ignore
/// .run_component(|fonts: &FontMap| {
///     let body = fonts.get("body").expect("body font registered");
///     MyApp::new(body)
/// })
/// ```
pub struct FontMap(pub(crate) HashMap<String, FontId>);

impl FontMap {
    /// Returns the [`FontId`] registered under `name`, or `None` if the name
    /// was not registered or the font failed to load.
    pub fn get(&self, name: &str) -> Option<FontId> {
        self.0.get(name).copied()
    }
}

// ── Application ───────────────────────────────────────────────────────────

/// Top-level UI application builder.
///
/// Configure the window and fonts, then start the event loop with
/// [`run_component`](Application::run_component). Escape closes the window.
///
/// # Example
///
/// ```rust,ignore
/// Application::new()
///     .title("Ringwatch")
///     .size(360.0, 480.0)
///     .font("body", load_font())
///     .run_component(|fonts| StopwatchApp::new(fonts));
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    background: Color,
    fonts: Vec<(String, Vec<u8>)>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "ringwatch".to_string(),
            width: 360.0,
            height: 480.0,
            background: Color::from_straight(0.07, 0.07, 0.09, 1.0),
            fonts: Vec::new(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the clear color behind the widget tree.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Register a named font for [`FontMap::get`].
    pub fn font(mut self, name: impl Into<String>, data: Vec<u8>) -> Self {
        self.fonts.push((name.into(), data));
        self
    }

    /// Start the event loop with a [`Component`].
    ///
    /// `build` is called once after fonts are loaded; the returned component
    /// persists across frames and drives the UI.
    ///
    /// This never returns.
    pub fn run_component<C, F>(self, build: F) -> !
    where
        C: Component,
        F: FnOnce(&FontMap) -> C,
    {
        let mut ui_scene = UiScene::new();
        let mut font_map = FontMap(HashMap::new());

        for (name, bytes) in &self.fonts {
            match ui_scene.load_font(bytes) {
                Ok(id) => {
                    font_map.0.insert(name.clone(), id);
                }
                Err(e) => log::warn!("failed to load font '{name}': {e}"),
            }
        }

        let component = Box::new(build(&font_map));

        let state = UiAppState {
            background: self.background,
            ui_scene,
            rounded_rect_renderer: RoundedRectRenderer::new(),
            ring_renderer: RingRenderer::new(),
            text_renderer: TextRenderer::new(),
            component,
        };

        let config = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
        };
        Runtime::run(config, GpuInit::default(), state).unwrap_or_else(|e| {
            eprintln!("ringwatch runtime error: {e:#}");
            std::process::exit(1);
        });
        // Runtime::run only returns on fatal error (normal exit goes through
        // the event loop exit path), but the compiler doesn't know that.
        std::process::exit(0);
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Internal state that implements `ringwatch_engine::core::App`.
///
/// Everything engine-specific (renderers, FrameCtx) lives here. User code
/// never sees this type.
struct UiAppState {
    background: Color,

    ui_scene: UiScene,
    rounded_rect_renderer: RoundedRectRenderer,
    ring_renderer: RingRenderer,
    text_renderer: TextRenderer,

    component: Box<dyn Component>,
}

impl EngineApp for UiAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let viewport = Vec2::new(w, h);

        let (mx, my) = ctx.input.pointer_pos.unwrap_or((0.0, 0.0));
        let ui_input = UiInput {
            mouse_pos: Vec2::new(mx, my),
            mouse_pressed: ctx.input.button_down(MouseButton::Left),
            mouse_clicked: ctx.input_frame.buttons_released.contains(&MouseButton::Left),
            keys_pressed: ctx.input_frame.keys_pressed.iter().copied().collect(),
        };

        if ui_input.keys_pressed.contains(&Key::Escape) {
            return AppControl::Exit;
        }

        // ── update + build + layout + paint ───────────────────────────────
        self.component.update(ctx.time.dt, &ui_input);
        let root = self.component.view();
        let _ = self.ui_scene.frame(root, viewport, &ui_input);

        // ── render ────────────────────────────────────────────────────────
        let dl = &mut self.ui_scene.draw_list;
        let fs = &self.ui_scene.font_system;
        let r_rr = &mut self.rounded_rect_renderer;
        let r_ring = &mut self.ring_renderer;
        let r_t = &mut self.text_renderer;

        ctx.render(self.background, |rctx, target| {
            r_rr.render(rctx, target, dl);
            r_ring.render(rctx, target, dl);
            r_t.render(rctx, target, dl, fs);
        })
    }
}
