use log::debug;

use crate::api::{HeldItem, Host, ItemClass};
use crate::math::Tile;
use crate::targeting::{Marquee, Mode, Targeting};
use crate::Sowing;

impl Sowing {
    pub(crate) fn update_targets<H: Host>(
        &mut self,
        host: &H,
        tile: Tile,
        item: Option<HeldItem>,
    ) -> Vec<Targeting> {
        if !self.config.marquee {
            let mode = self.targeting.mode;
            return self.update_tile(host, tile, mode, item);
        }
        let marquee = match self.targeting.stretch_marquee(tile) {
            Ok(stretch) => stretch(),
            Err(error) => {
                debug!("Skips marquee update at {:?}, {:?}", tile, error);
                return vec![];
            }
        };
        self.rebuild_targets(host, marquee, item)
    }

    /// Replaces targets with the tiles of the marquee accepted right now.
    pub(crate) fn rebuild_targets<H: Host>(
        &mut self,
        host: &H,
        marquee: Marquee,
        item: Option<HeldItem>,
    ) -> Vec<Targeting> {
        let previous = self.targeting.take_targets();
        for tile in marquee.rect().tiles() {
            self.update_tile(host, tile, Mode::Add, item);
        }
        self.targeting.compare_targets(&previous)
    }

    pub fn update_tile<H: Host>(
        &mut self,
        host: &H,
        tile: Tile,
        mode: Mode,
        item: Option<HeldItem>,
    ) -> Vec<Targeting> {
        if mode == Mode::Remove {
            return match self.targeting.untarget(tile) {
                Ok(untarget) => untarget(),
                Err(_) => vec![],
            };
        }
        if self.config.consumable && self.targeting.is_saturated(item.as_ref()) {
            return vec![];
        }
        let soil = match host.soil(tile) {
            Some(soil) => soil,
            None => return vec![],
        };
        let class = match item {
            Some(item) => item.class,
            None => return vec![],
        };
        let accepted = match class {
            ItemClass::Seed => soil.is_eligible(class),
            ItemClass::Fertilizer if soil.is_eligible(class) => {
                let wasted = self.config.prevent_fertilizer_waste && !soil.crop;
                if wasted {
                    debug!("Skips fertilizer target {:?}, nothing grows there", tile);
                }
                !wasted
            }
            _ => false,
        };
        if !accepted {
            return vec![];
        }
        match self.targeting.target(tile) {
            Ok(target) => target(),
            Err(_) => vec![],
        }
    }
}
