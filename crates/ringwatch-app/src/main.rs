mod dial;
mod stopwatch;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};

use ringwatch_engine::logging::init_logging;
use ringwatch_ui::prelude::*;

use dial::StopwatchDial;
use stopwatch::{format_time, Stopwatch, DEFAULT_LOOP_DURATION};

/// Control actions queued by the buttons (and keyboard shortcuts) during one
/// frame, applied at the start of the next update.
#[derive(Debug, Copy, Clone)]
enum Msg {
    ToggleRun,
    Reset,
}

struct StopwatchApp {
    core: Stopwatch,
    /// Shared with the button `on_click` closures built in `view`.
    msgs: Rc<RefCell<Vec<Msg>>>,
    font: FontId,
}

impl StopwatchApp {
    fn new(core: Stopwatch, font: FontId) -> Self {
        Self {
            core,
            msgs: Rc::new(RefCell::new(Vec::new())),
            font,
        }
    }

    fn apply(&mut self, msg: Msg) {
        match msg {
            Msg::ToggleRun => self.core.toggle(Instant::now()),
            Msg::Reset => self.core.reset(),
        }
    }

    fn control_button(
        &self,
        label: &str,
        msg: Msg,
    ) -> Button {
        let msgs = self.msgs.clone();
        Button::new(Text::new(label, self.font, 16.0, Color::from_straight(1.0, 1.0, 1.0, 1.0)))
            .background(Color::from_straight(0.16, 0.45, 0.85, 1.0))
            .hover_background(Color::from_straight(0.22, 0.55, 0.95, 1.0))
            .press_background(Color::from_straight(0.12, 0.35, 0.7, 1.0))
            .corner_radius(6.0)
            .padding(Edges::symmetric(9.0, 0.0))
            .min_size(92.0, 0.0)
            .on_click(move || msgs.borrow_mut().push(msg))
    }
}

impl Component for StopwatchApp {
    fn update(&mut self, _dt: f32, input: &UiInput) {
        // Button clicks routed during the previous frame.
        let pending: Vec<Msg> = self.msgs.borrow_mut().drain(..).collect();
        for msg in pending {
            self.apply(msg);
        }

        // Keyboard shortcuts.
        for key in &input.keys_pressed {
            match key {
                Key::Space => self.apply(Msg::ToggleRun),
                Key::R => self.apply(Msg::Reset),
                _ => {}
            }
        }

        let ticks = self.core.advance(Instant::now());
        if ticks > 0 {
            log::debug!(
                "tick: elapsed={}s progress={:.3}",
                self.core.elapsed_secs(),
                self.core.progress()
            );
        }
    }

    fn view(&mut self) -> Element {
        let readout = format_time(self.core.elapsed_secs());
        let toggle_label = if self.core.is_running() { "Stop" } else { "Start" };

        Column::new()
            .padding(Edges::all(24.0))
            .spacing(28.0)
            .cross_align(Align::Center)
            .child(StopwatchDial::new(self.core.progress(), readout, self.font))
            .child(
                Row::new()
                    .spacing(16.0)
                    .cross_align(Align::Center)
                    .child(self.control_button(toggle_label, Msg::ToggleRun))
                    .child(self.control_button("Reset", Msg::Reset)),
            )
            .into()
    }
}

/// Optional first argument: seconds per ring revolution.
fn parse_loop_duration() -> Result<u32> {
    match std::env::args().nth(1) {
        None => Ok(DEFAULT_LOOP_DURATION),
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid loop duration '{arg}' (expected whole seconds)")),
    }
}

fn load_font() -> Result<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
    .context("no usable system font found (looked for DejaVu Sans and Noto Sans)")
}

fn main() -> Result<()> {
    init_logging("info");

    let loop_duration = parse_loop_duration()?;
    let core = Stopwatch::new(loop_duration).context("invalid stopwatch configuration")?;

    log::info!("starting ringwatch (loop duration {loop_duration}s)");

    let font_bytes = load_font()?;

    Application::new()
        .title("Ringwatch")
        .size(360.0, 440.0)
        .font("body", font_bytes)
        .run_component(move |fonts| {
            let font = fonts.get("body").expect("body font registered at startup");
            StopwatchApp::new(core, font)
        })
}
