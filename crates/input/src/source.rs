use glam::Vec2;

use crate::InputEvent;

/// Contract the motion core expects from the device layer.
///
/// A source is polled once per tick: `drain_events` first, then the axes.
/// `enable` and `disable` bracket the period during which a controller is
/// attached; a disabled source should report zero axes and no events.
pub trait InputSource {
    /// Planar movement axis. Components nominally in [-1, 1], not normalized.
    fn movement_axis(&self) -> Vec2;

    /// Look delta for this frame. `x` turns the body, `y` pitches the camera.
    fn look_axis(&self) -> Vec2;

    /// Edge events latched since the previous call, in arrival order.
    fn drain_events(&mut self) -> Vec<InputEvent>;

    fn enable(&mut self) {}

    fn disable(&mut self) {}
}
