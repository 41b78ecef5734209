#![allow(dead_code)]

use std::collections::HashMap;

use sowing::api::{
    Farmer, HeldItem, ItemClass, ItemId, Location, LocationId, LocationKind, Planter, Pointer,
    RenderSink, Soil, Sprite, Terrain,
};
use sowing::config::SowingConfig;
use sowing::math::Tile;
use sowing::targeting::{Mode, Targeting};
use sowing::Sowing;

pub struct TestFarm {
    pub soils: HashMap<Tile, Soil>,
    pub location: Location,
    pub cursor: Tile,
    pub farmer: Tile,
    pub moving: bool,
    pub items: Vec<HeldItem>,
    pub selected: usize,
    pub planted: Vec<(Tile, bool)>,
    pub rejecting: bool,
}

impl TestFarm {
    pub fn new() -> Self {
        Self {
            soils: HashMap::new(),
            location: Location {
                id: LocationId(1),
                kind: LocationKind::Farm,
            },
            cursor: [0, 0],
            farmer: [0, 0],
            moving: false,
            items: vec![],
            selected: 0,
            planted: vec![],
            rejecting: false,
        }
    }

    /// Reads a farm map where `.` is bare ground, `~` empty tilled soil,
    /// `s` seeded soil, `f` fertilized soil and `b` both.
    pub fn parse(map: &str) -> HashMap<Tile, Soil> {
        let mut soils = HashMap::new();
        let rows = map.lines().filter(|line| !line.trim().is_empty());
        for (y, line) in rows.enumerate() {
            for (x, code) in line.trim().split_whitespace().enumerate() {
                let soil = match code {
                    "~" => Soil::default(),
                    "s" => Soil {
                        crop: true,
                        fertilizer: false,
                    },
                    "f" => Soil {
                        crop: false,
                        fertilizer: true,
                    },
                    "b" => Soil {
                        crop: true,
                        fertilizer: true,
                    },
                    _ => continue,
                };
                soils.insert([x as i32, y as i32], soil);
            }
        }
        soils
    }
}

impl Pointer for TestFarm {
    fn cursor_tile(&self) -> Tile {
        self.cursor
    }
}

impl Terrain for TestFarm {
    fn soil(&self, tile: Tile) -> Option<Soil> {
        self.soils.get(&tile).copied()
    }

    fn location(&self) -> Location {
        self.location
    }
}

impl Farmer for TestFarm {
    fn farmer_tile(&self) -> Tile {
        self.farmer
    }

    fn is_moving(&self) -> bool {
        self.moving
    }

    fn held_item(&self) -> Option<HeldItem> {
        self.items.get(self.selected).copied()
    }

    fn decrease_item(&mut self, item: ItemId) {
        let item = self.items.iter_mut().find(|held| held.id == item).unwrap();
        item.stack -= 1;
    }

    fn remove_item(&mut self, item: ItemId) {
        self.items.retain(|held| held.id != item);
    }
}

impl Planter for TestFarm {
    fn plant(&mut self, _item: &HeldItem, tile: Tile, fertilizer: bool) -> bool {
        if self.rejecting {
            return false;
        }
        let soil = self.soils.get_mut(&tile).unwrap();
        if fertilizer {
            soil.fertilizer = true;
        } else {
            soil.crop = true;
        }
        self.planted.push((tile, fertilizer));
        true
    }
}

#[derive(Default)]
pub struct TestCanvas {
    pub sprites: Vec<(Sprite, Tile)>,
}

impl RenderSink for TestCanvas {
    fn draw(&mut self, sprite: Sprite, tile: Tile) {
        self.sprites.push((sprite, tile));
    }
}

pub struct SowingTestScenario {
    pub sowing: Sowing,
    pub farm: TestFarm,
    pub events: Vec<Targeting>,
    items: HashMap<String, ItemId>,
}

impl SowingTestScenario {
    pub fn new() -> Self {
        Self {
            sowing: Sowing::new(SowingConfig::default()),
            farm: TestFarm::new(),
            events: vec![],
            items: HashMap::new(),
        }
    }

    pub fn item(&self, name: &str) -> ItemId {
        *self.items.get(name).unwrap()
    }

    pub fn given_config<F: FnOnce(&mut SowingConfig)>(mut self, change: F) -> Self {
        change(&mut self.sowing.config);
        self
    }

    pub fn given_farm(mut self, map: &str) -> Self {
        self.farm.soils = TestFarm::parse(map);
        self
    }

    pub fn given_location(mut self, id: usize, kind: LocationKind) -> Self {
        self.farm.location = Location {
            id: LocationId(id),
            kind,
        };
        self
    }

    pub fn given_item(mut self, name: &str, class: ItemClass, stack: u32) -> Self {
        let id = ItemId(self.items.len() + 1);
        self.items.insert(name.to_string(), id);
        self.farm.items.push(HeldItem { id, class, stack });
        self
    }

    pub fn given_farmer_at(mut self, tile: Tile) -> Self {
        self.farm.farmer = tile;
        self
    }

    pub fn given_rejecting_planter(mut self) -> Self {
        self.farm.rejecting = true;
        self
    }

    pub fn when_select(mut self, name: &str) -> Self {
        let id = self.item(name);
        self.farm.selected = self
            .farm
            .items
            .iter()
            .position(|item| item.id == id)
            .unwrap();
        self
    }

    pub fn when_press_at(mut self, tile: Tile) -> Self {
        self.farm.cursor = tile;
        let trigger = self.sowing.config.trigger;
        self.events = self.sowing.on_button_pressed(&self.farm, trigger);
        self.when_tick()
    }

    pub fn when_drag_to(mut self, tile: Tile) -> Self {
        self.farm.cursor = tile;
        self.events = self.sowing.on_tick(&mut self.farm);
        self
    }

    pub fn when_release(mut self) -> Self {
        let trigger = self.sowing.config.trigger;
        self.events = self.sowing.on_button_released(trigger);
        self
    }

    /// Press, visit each tile for one tick, release.
    pub fn when_mark(self, tiles: &[Tile]) -> Self {
        let mut scenario = self.when_press_at(tiles[0]);
        for tile in &tiles[1..] {
            scenario = scenario.when_drag_to(*tile);
        }
        scenario.when_release()
    }

    pub fn when_tick(mut self) -> Self {
        let events = self.sowing.on_tick(&mut self.farm);
        self.events.extend(events);
        self
    }

    pub fn when_farmer_moves_to(mut self, tile: Tile) -> Self {
        self.farm.farmer = tile;
        self.farm.moving = true;
        self.events = self.sowing.on_tick(&mut self.farm);
        self.farm.moving = false;
        self
    }

    pub fn when_soil_changes(mut self, tile: Tile, soil: Soil) -> Self {
        self.farm.soils.insert(tile, soil);
        self
    }

    pub fn when_location_changes(mut self, id: usize, kind: LocationKind) -> Self {
        self.farm.location = Location {
            id: LocationId(id),
            kind,
        };
        self
    }

    pub fn then_targets_should_be(self, expected: &[Tile]) -> Self {
        let mut expected = expected.to_vec();
        expected.sort();
        assert_eq!(self.sowing.targeting.sorted_targets(), expected);
        self
    }

    pub fn then_mode_should_be(self, mode: Mode) -> Self {
        assert_eq!(self.sowing.targeting.mode, mode);
        self
    }

    pub fn then_stack_should_be(self, name: &str, stack: u32) -> Self {
        let id = self.item(name);
        let item = self.farm.items.iter().find(|item| item.id == id);
        assert_eq!(item.map(|item| item.stack), Some(stack));
        self
    }

    pub fn then_item_should_be_gone(self, name: &str) -> Self {
        let id = self.item(name);
        assert!(self.farm.items.iter().all(|item| item.id != id));
        self
    }

    pub fn then_planted_should_be(self, expected: &[(Tile, bool)]) -> Self {
        assert_eq!(self.farm.planted, expected);
        self
    }

    pub fn then_events_should_be(self, expected: Vec<Targeting>) -> Self {
        assert_eq!(self.events, expected);
        self
    }

    pub fn then_render_should_be(self, expected: Vec<(Sprite, Tile)>) -> Self {
        let mut canvas = TestCanvas::default();
        self.sowing.on_render(&mut canvas);
        assert_eq!(canvas.sprites, expected);
        self
    }
}
