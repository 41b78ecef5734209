use crate::math::Tile;

/// Inclusive tile rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: Tile,
    pub max: Tile,
}

impl Rect {
    pub fn from_corners(a: Tile, b: Tile) -> Self {
        Self {
            min: [a[0].min(b[0]), a[1].min(b[1])],
            max: [a[0].max(b[0]), a[1].max(b[1])],
        }
    }

    pub fn width(&self) -> usize {
        (self.max[0] - self.min[0]) as usize + 1
    }

    pub fn height(&self) -> usize {
        (self.max[1] - self.min[1]) as usize + 1
    }

    /// Every cell exactly once, row by row from the top left corner.
    pub fn tiles(&self) -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(self.width() * self.height());
        for y in self.min[1]..=self.max[1] {
            for x in self.min[0]..=self.max[0] {
                tiles.push([x, y]);
            }
        }
        tiles
    }

    /// Outline cells: top and bottom rows, then left and right columns
    /// without the corners already visited.
    pub fn border(&self) -> Vec<Tile> {
        let [left, top] = self.min;
        let [right, bottom] = self.max;
        let mut tiles = vec![];
        for x in left..=right {
            tiles.push([x, top]);
            if bottom != top {
                tiles.push([x, bottom]);
            }
        }
        for y in (top + 1)..bottom {
            tiles.push([left, y]);
            if right != left {
                tiles.push([right, y]);
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut tiles: Vec<Tile>) -> Vec<Tile> {
        tiles.sort();
        tiles
    }

    #[test]
    fn test_corners_order_does_not_matter() {
        let forward = Rect::from_corners([1, 1], [3, 2]);
        let backward = Rect::from_corners([3, 2], [1, 1]);
        let diagonal = Rect::from_corners([1, 2], [3, 1]);
        assert_eq!(forward, backward);
        assert_eq!(forward, diagonal);
        assert_eq!(forward.tiles(), backward.tiles());
    }

    #[test]
    fn test_tiles_row_major() {
        let rect = Rect::from_corners([3, 2], [1, 1]);
        assert_eq!(
            rect.tiles(),
            vec![[1, 1], [2, 1], [3, 1], [1, 2], [2, 2], [3, 2]]
        );
    }

    #[test]
    fn test_degenerate_rects() {
        assert_eq!(Rect::from_corners([5, 5], [5, 5]).tiles(), vec![[5, 5]]);
        assert_eq!(Rect::from_corners([5, 5], [5, 5]).border(), vec![[5, 5]]);
        assert_eq!(
            Rect::from_corners([2, 0], [0, 0]).tiles(),
            vec![[0, 0], [1, 0], [2, 0]]
        );
        assert_eq!(
            sorted(Rect::from_corners([0, 2], [0, 0]).border()),
            vec![[0, 0], [0, 1], [0, 2]]
        );
    }

    #[test]
    fn test_border_skips_interior() {
        let rect = Rect::from_corners([1, 1], [3, 3]);
        let border = rect.border();
        assert_eq!(border.len(), 8);
        assert!(!border.contains(&[2, 2]));
        assert!(border.iter().all(|tile| rect.tiles().contains(tile)));
    }

    #[test]
    fn test_negative_coordinates() {
        let rect = Rect::from_corners([-1, 0], [0, -1]);
        assert_eq!(rect.width(), 2);
        assert_eq!(rect.height(), 2);
        assert_eq!(rect.tiles(), vec![[-1, -1], [0, -1], [-1, 0], [0, 0]]);
    }
}
