//! Board rendering
//!
//! Rendering writes the current wire states back into the externally
//! visible forms: the resel grid and the RGB image. Every pixel of a wire
//! region takes the hue's saturated code/color when the wire is on and
//! the dark one when it is off. Nothing else is repainted; nodes and
//! decorative pixels keep their compile-time colors.
//!
//! None of this feeds back into the simulation, so callers that only want
//! the final frame can skip rendering on intermediate ticks.

use crate::board::Board;

impl Board {
    /// Write wire states into the resel grid and/or the image.
    pub fn render(&mut self, update_grid: bool, update_image: bool) {
        if !update_grid && !update_image {
            return;
        }
        for wi in 0..self.wires.len() {
            let wire = &self.wires[wi];
            let code = if wire.state {
                wire.hue.on_code()
            } else {
                wire.hue.off_code()
            };
            let rgb = code.rgb().unwrap_or((0, 0, 0));

            let Ok(region) = self.region_map.region(wire.region) else {
                continue;
            };
            for &(x, y) in &region.pixels {
                if update_grid {
                    let _ = self.resel_map.set(x, y, code);
                }
                if update_image {
                    let _ = self.image.set(x, y, rgb);
                }
            }
        }
    }
}
