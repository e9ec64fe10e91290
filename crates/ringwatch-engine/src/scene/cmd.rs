use crate::scene::shapes::ring::RingCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::text::TextCmd;

/// One recorded shape.
///
/// Adding a shape touches four places: a payload module under
/// `scene::shapes`, a variant here, push helpers on `DrawList` in that
/// module, and a matching renderer under `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect(RoundedRectCmd),
    Ring(RingCmd),
    Text(TextCmd),
}
