use log::debug;

use crate::api::Host;
use crate::math::Tile;
use crate::targeting::{Mode, Targeting};
use crate::Sowing;

impl Sowing {
    pub(crate) fn infer_mode<H: Host>(&mut self, host: &H, tile: Tile) -> Vec<Targeting> {
        if self.config.marquee {
            self.targeting.anchor_marquee(tile);
            return self.targeting.change_mode(Mode::Add);
        }
        if self.targeting.is_targeted(tile) {
            self.targeting.change_mode(Mode::Remove)
        } else if host.soil(tile).is_some() {
            self.targeting.change_mode(Mode::Add)
        } else {
            debug!("Keeps {:?} mode, {:?} is not tilled", self.targeting.mode, tile);
            vec![]
        }
    }
}
