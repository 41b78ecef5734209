use std::collections::HashSet;

use crate::api::ItemId;
use crate::math::{Rect, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Add,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marquee {
    pub start: Tile,
    pub last: Tile,
}

impl Marquee {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.start, self.last)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Targeting {
    TileTargeted {
        tile: Tile,
    },
    TileUntargeted {
        tile: Tile,
    },
    TargetsCleared {
        count: usize,
    },
    ModeChanged {
        mode: Mode,
    },
    ItemPlaced {
        tile: Tile,
        item: ItemId,
        fertilizer: bool,
    },
}

#[derive(Default)]
pub struct TargetingDomain {
    pub targets: HashSet<Tile>,
    pub mode: Mode,
    pub marquee: Option<Marquee>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TargetingError {
    TileAlreadyTargeted { tile: Tile },
    TileNotTargeted { tile: Tile },
    MarqueeNotAnchored,
}
