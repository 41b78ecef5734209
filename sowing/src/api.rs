use serde::{Deserialize, Serialize};

use crate::math::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    MouseLeft,
    MouseRight,
    MouseMiddle,
    ControllerA,
    ControllerX,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemClass {
    Seed,
    Fertilizer,
    Other,
}

impl ItemClass {
    #[inline]
    pub fn is_sowable(&self) -> bool {
        matches!(self, ItemClass::Seed | ItemClass::Fertilizer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldItem {
    pub id: ItemId,
    pub class: ItemClass,
    pub stack: u32,
}

/// Tilled soil state of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Soil {
    pub crop: bool,
    pub fertilizer: bool,
}

impl Soil {
    pub fn is_eligible(&self, class: ItemClass) -> bool {
        match class {
            ItemClass::Seed => !self.crop,
            ItemClass::Fertilizer => !self.fertilizer,
            ItemClass::Other => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    Farm,
    Greenhouse,
    IslandFarm,
    Town,
    Mine,
    Interior,
    Other,
}

impl LocationKind {
    pub const SOWABLE: [LocationKind; 3] = [
        LocationKind::Farm,
        LocationKind::Greenhouse,
        LocationKind::IslandFarm,
    ];

    pub fn is_sowable(&self) -> bool {
        LocationKind::SOWABLE.contains(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub id: LocationId,
    pub kind: LocationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Crosshair,
    MarqueeBorder,
}

pub trait Pointer {
    fn cursor_tile(&self) -> Tile;
}

pub trait Terrain {
    /// Returns `None` unless the tile holds tilled soil.
    fn soil(&self, tile: Tile) -> Option<Soil>;

    fn location(&self) -> Location;
}

pub trait Farmer {
    fn farmer_tile(&self) -> Tile;

    fn is_moving(&self) -> bool;

    fn held_item(&self) -> Option<HeldItem>;

    fn decrease_item(&mut self, item: ItemId);

    fn remove_item(&mut self, item: ItemId);
}

pub trait Planter {
    /// Plants seeds or applies fertilizer to the soil of the tile.
    fn plant(&mut self, item: &HeldItem, tile: Tile, fertilizer: bool) -> bool;
}

pub trait RenderSink {
    fn draw(&mut self, sprite: Sprite, tile: Tile);
}

pub trait Host: Pointer + Terrain + Farmer + Planter {}

impl<T> Host for T where T: Pointer + Terrain + Farmer + Planter {}
