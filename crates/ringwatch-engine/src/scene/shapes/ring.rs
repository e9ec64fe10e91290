use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Ring-arc payload.
///
/// A circular band of `thickness` centered on the circle of `radius` around
/// `center`. `sweep` is the visible fraction of a full turn in [0, 1],
/// starting at 12 o'clock and running clockwise; partial arcs get rounded
/// end caps. `sweep >= 1` closes the band (no caps), which doubles as the
/// track behind a progress arc.
#[derive(Debug, Clone, PartialEq)]
pub struct RingCmd {
    pub center: Vec2,
    pub radius: f32,
    pub thickness: f32,
    pub sweep: f32,
    pub paint: Paint,
}

impl DrawList {
    #[inline]
    pub fn push_ring(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        thickness: f32,
        sweep: f32,
        paint: Paint,
    ) {
        self.push(z, DrawCmd::Ring(RingCmd { center, radius, thickness, sweep, paint }));
    }
}
