use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// Text-run payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left corner of the laid-out block.
    pub origin: Vec2,
    /// Wrap width; `None` lays out a single line.
    pub max_width: Option<f32>,
}

impl DrawList {
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let cmd = TextCmd { text: text.into(), font, size, color, origin, max_width };
        self.push(z, DrawCmd::Text(cmd));
    }
}
