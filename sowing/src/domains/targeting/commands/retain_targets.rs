use crate::math::Tile;
use crate::targeting::{Targeting, TargetingDomain};

impl TargetingDomain {
    pub fn retain_targets<F>(&mut self, mut keep: F) -> Vec<Targeting>
    where
        F: FnMut(Tile) -> bool,
    {
        let mut dropped: Vec<Tile> = self
            .targets
            .iter()
            .copied()
            .filter(|tile| !keep(*tile))
            .collect();
        dropped.sort();
        let mut events = vec![];
        for tile in dropped {
            self.targets.remove(&tile);
            events.push(Targeting::TileUntargeted { tile });
        }
        events
    }
}
