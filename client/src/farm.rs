use std::collections::HashMap;

use log::{debug, info};

use sowing::api::{
    Farmer, HeldItem, ItemClass, ItemId, Location, LocationId, LocationKind, Planter, Pointer,
    Soil, Terrain,
};
use sowing::math::Tile;

pub struct Stack {
    pub name: String,
    pub item: HeldItem,
}

pub struct Farm {
    pub width: usize,
    pub height: usize,
    pub soils: HashMap<Tile, Soil>,
    pub location: Location,
    pub cursor: Tile,
    pub farmer: Tile,
    pub moving: bool,
    pub backpack: Vec<Stack>,
    pub selected: usize,
    items_id: usize,
}

#[derive(Debug)]
pub enum FarmError {
    UnknownCell { tile: Tile, code: char },
}

impl Farm {
    pub const BARE: char = '.';
    pub const TILLED: char = '~';
    pub const SEEDED: char = 's';
    pub const FERTILIZED: char = 'f';
    pub const SEEDED_FERTILIZED: char = 'b';

    pub fn parse(map: &[String], location: LocationKind) -> Result<Self, FarmError> {
        let mut soils = HashMap::new();
        let mut width = 0;
        for (y, line) in map.iter().enumerate() {
            let row: Vec<char> = line.chars().filter(|code| !code.is_whitespace()).collect();
            width = width.max(row.len());
            for (x, code) in row.into_iter().enumerate() {
                let tile = [x as i32, y as i32];
                let soil = match code {
                    Farm::BARE => continue,
                    Farm::TILLED => Soil::default(),
                    Farm::SEEDED => Soil {
                        crop: true,
                        fertilizer: false,
                    },
                    Farm::FERTILIZED => Soil {
                        crop: false,
                        fertilizer: true,
                    },
                    Farm::SEEDED_FERTILIZED => Soil {
                        crop: true,
                        fertilizer: true,
                    },
                    _ => return Err(FarmError::UnknownCell { tile, code }),
                };
                soils.insert(tile, soil);
            }
        }
        info!("Farm {}x{} with {} tilled tiles", width, map.len(), soils.len());
        Ok(Self {
            width,
            height: map.len(),
            soils,
            location: Location {
                id: LocationId(1),
                kind: location,
            },
            cursor: [0, 0],
            farmer: [0, 0],
            moving: false,
            backpack: vec![],
            selected: 0,
            items_id: 0,
        })
    }

    pub fn put_item(&mut self, name: &str, class: ItemClass, stack: u32) -> ItemId {
        self.items_id += 1;
        let id = ItemId(self.items_id);
        self.backpack.push(Stack {
            name: name.to_string(),
            item: HeldItem { id, class, stack },
        });
        id
    }

    pub fn travel(&mut self, kind: LocationKind) {
        let id = LocationId(self.location.id.0 + 1);
        info!("Farmer travels to {:?} {:?}", kind, id);
        self.location = Location { id, kind };
    }

    pub fn contains(&self, tile: Tile) -> bool {
        let [x, y] = tile;
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn code(&self, tile: Tile) -> char {
        match self.soils.get(&tile) {
            None => Farm::BARE,
            Some(soil) => match (soil.crop, soil.fertilizer) {
                (false, false) => Farm::TILLED,
                (true, false) => Farm::SEEDED,
                (false, true) => Farm::FERTILIZED,
                (true, true) => Farm::SEEDED_FERTILIZED,
            },
        }
    }

    fn stack_mut(&mut self, item: ItemId) -> Option<&mut Stack> {
        self.backpack.iter_mut().find(|stack| stack.item.id == item)
    }
}

impl Pointer for Farm {
    fn cursor_tile(&self) -> Tile {
        self.cursor
    }
}

impl Terrain for Farm {
    fn soil(&self, tile: Tile) -> Option<Soil> {
        self.soils.get(&tile).copied()
    }

    fn location(&self) -> Location {
        self.location
    }
}

impl Farmer for Farm {
    fn farmer_tile(&self) -> Tile {
        self.farmer
    }

    fn is_moving(&self) -> bool {
        self.moving
    }

    fn held_item(&self) -> Option<HeldItem> {
        self.backpack.get(self.selected).map(|stack| stack.item)
    }

    fn decrease_item(&mut self, item: ItemId) {
        if let Some(stack) = self.stack_mut(item) {
            stack.item.stack = stack.item.stack.saturating_sub(1);
        }
    }

    fn remove_item(&mut self, item: ItemId) {
        if let Some(index) = self
            .backpack
            .iter()
            .position(|stack| stack.item.id == item)
        {
            let stack = self.backpack.remove(index);
            info!("{} used up", stack.name);
        }
    }
}

impl Planter for Farm {
    fn plant(&mut self, item: &HeldItem, tile: Tile, fertilizer: bool) -> bool {
        let soil = match self.soils.get_mut(&tile) {
            Some(soil) => soil,
            None => return false,
        };
        if fertilizer {
            if soil.fertilizer {
                return false;
            }
            soil.fertilizer = true;
        } else {
            if soil.crop {
                return false;
            }
            soil.crop = true;
        }
        debug!("Applied {:?} to {:?}", item.id, tile);
        true
    }
}
