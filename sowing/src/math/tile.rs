pub type Tile = [i32; 2];

pub trait TileMath {
    fn add_offset(self, offset: [i32; 2]) -> Self;
    fn distance_to(self, other: Self) -> u32;
    fn around(self, radius: u32) -> Vec<Tile>;
}

impl TileMath for Tile {
    fn add_offset(self, offset: [i32; 2]) -> Self {
        [self[0] + offset[0], self[1] + offset[1]]
    }

    /// Chebyshev distance, the number of king moves between two tiles.
    fn distance_to(self, other: Self) -> u32 {
        let dx = self[0].abs_diff(other[0]);
        let dy = self[1].abs_diff(other[1]);
        dx.max(dy)
    }

    /// Square area centered on the tile, columns first.
    fn around(self, radius: u32) -> Vec<Tile> {
        let radius = radius as i32;
        let side = (2 * radius + 1) as usize;
        let mut tiles = Vec::with_capacity(side * side);
        for x in -radius..=radius {
            for y in -radius..=radius {
                tiles.push(self.add_offset([x, y]));
            }
        }
        tiles
    }
}
