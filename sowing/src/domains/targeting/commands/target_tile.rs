use crate::math::Tile;
use crate::targeting::{Targeting, TargetingDomain, TargetingError};

impl TargetingDomain {
    pub fn target(
        &mut self,
        tile: Tile,
    ) -> Result<impl FnOnce() -> Vec<Targeting> + '_, TargetingError> {
        if self.targets.contains(&tile) {
            return Err(TargetingError::TileAlreadyTargeted { tile });
        }
        let command = move || {
            self.targets.insert(tile);
            vec![Targeting::TileTargeted { tile }]
        };
        Ok(command)
    }

    pub fn untarget(
        &mut self,
        tile: Tile,
    ) -> Result<impl FnOnce() -> Vec<Targeting> + '_, TargetingError> {
        if !self.targets.contains(&tile) {
            return Err(TargetingError::TileNotTargeted { tile });
        }
        let command = move || {
            self.targets.remove(&tile);
            vec![Targeting::TileUntargeted { tile }]
        };
        Ok(command)
    }
}
