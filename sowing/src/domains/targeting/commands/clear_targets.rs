use std::collections::HashSet;
use std::mem;

use crate::math::Tile;
use crate::targeting::{Targeting, TargetingDomain};

impl TargetingDomain {
    pub fn clear_targets(&mut self) -> Vec<Targeting> {
        let count = self.targets.len();
        if count == 0 {
            return vec![];
        }
        self.targets.clear();
        vec![Targeting::TargetsCleared { count }]
    }

    /// Empties the set without notice, the caller reports the difference
    /// with [`TargetingDomain::compare_targets`] once the set is rebuilt.
    pub fn take_targets(&mut self) -> HashSet<Tile> {
        mem::take(&mut self.targets)
    }

    pub fn compare_targets(&self, previous: &HashSet<Tile>) -> Vec<Targeting> {
        let mut dropped: Vec<Tile> = previous.difference(&self.targets).copied().collect();
        let mut added: Vec<Tile> = self.targets.difference(previous).copied().collect();
        dropped.sort();
        added.sort();
        let mut events = vec![];
        for tile in dropped {
            events.push(Targeting::TileUntargeted { tile });
        }
        for tile in added {
            events.push(Targeting::TileTargeted { tile });
        }
        events
    }
}
