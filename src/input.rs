// Pointer handling: viewport -> scene translation and planting.

use crate::error::Rejected;
use crate::model::{GameState, Phase};

/// Bounding box of the canvas element as laid out on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&web_sys::DomRect> for ViewRect {
    fn from(r: &web_sys::DomRect) -> Self {
        Self {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        }
    }
}

/// Maps client coordinates to scene units, compensating for CSS scaling of
/// the canvas element.
pub fn to_scene(client_x: f64, client_y: f64, rect: ViewRect, scene_w: f64, scene_h: f64) -> (f64, f64) {
    let sx = if rect.width > 0.0 { scene_w / rect.width } else { 1.0 };
    let sy = if rect.height > 0.0 { scene_h / rect.height } else { 1.0 };
    ((client_x - rect.left) * sx, (client_y - rect.top) * sy)
}

/// Plants at a scene point if a round is running.
pub fn handle_pointer(state: &mut GameState, x: f64, y: f64) -> Result<(), Rejected> {
    if state.phase != Phase::Running {
        return Err(Rejected::Inactive);
    }
    state.world.add_object(x, y, &state.config)
}
