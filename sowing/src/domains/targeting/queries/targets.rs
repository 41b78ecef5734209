use crate::math::{Tile, TileMath};
use crate::targeting::TargetingDomain;

impl TargetingDomain {
    #[inline]
    pub fn is_targeted(&self, tile: Tile) -> bool {
        self.targets.contains(&tile)
    }

    pub fn any_targeted_within(&self, center: Tile, radius: u32) -> bool {
        self.targets
            .iter()
            .any(|tile| tile.distance_to(center) <= radius)
    }

    pub fn sorted_targets(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self.targets.iter().copied().collect();
        tiles.sort();
        tiles
    }
}
