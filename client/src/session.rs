use std::fs;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use sowing::api::{ItemClass, LocationKind};
use sowing::math::{Tile, TileMath};
use sowing::targeting::Targeting;
use sowing::Sowing;

use crate::canvas::Canvas;
use crate::farm::{Farm, FarmError};

#[derive(Debug, Deserialize)]
pub struct ItemDefinition {
    pub name: String,
    pub class: ItemClass,
    pub stack: u32,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Press { tile: Tile },
    Drag { tile: Tile },
    Release,
    Select { slot: usize },
    Walk { path: Vec<Tile> },
    Wander { steps: usize, seed: u64 },
    Wait { ticks: usize },
    Travel { location: LocationKind },
    Set { key: String, value: String },
    Render,
}

#[derive(Debug, Deserialize)]
pub struct Session {
    pub map: Vec<String>,
    #[serde(default = "default_location")]
    pub location: LocationKind,
    #[serde(default)]
    pub farmer: Tile,
    pub items: Vec<ItemDefinition>,
    pub steps: Vec<Step>,
}

#[derive(Debug)]
pub enum SessionError {
    Io(String),
    Parse(String),
    Farm(FarmError),
}

impl From<FarmError> for SessionError {
    fn from(error: FarmError) -> Self {
        Self::Farm(error)
    }
}

fn default_location() -> LocationKind {
    LocationKind::Farm
}

impl Session {
    pub fn load(path: &str) -> Result<Self, SessionError> {
        let data = fs::read_to_string(path).map_err(|error| SessionError::Io(error.to_string()))?;
        info!("Uses session {path}");
        Session::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Self, SessionError> {
        serde_json::from_str(data).map_err(|error| SessionError::Parse(error.to_string()))
    }

    pub fn create_farm(&self) -> Result<Farm, SessionError> {
        let mut farm = Farm::parse(&self.map, self.location)?;
        farm.farmer = self.farmer;
        for item in &self.items {
            farm.put_item(&item.name, item.class, item.stack);
        }
        Ok(farm)
    }
}

pub struct Player {
    pub sowing: Sowing,
    pub farm: Farm,
    pub ticks: usize,
    pub frames: Vec<Vec<String>>,
}

impl Player {
    pub fn new(sowing: Sowing, farm: Farm) -> Self {
        Self {
            sowing,
            farm,
            ticks: 0,
            frames: vec![],
        }
    }

    pub fn play(&mut self, steps: &[Step]) {
        for step in steps {
            debug!("Step {:?}", step);
            self.perform(step);
        }
        info!("Session finished after {} ticks", self.ticks);
    }

    pub fn perform(&mut self, step: &Step) {
        let trigger = self.sowing.config.trigger;
        match step {
            Step::Press { tile } => {
                self.farm.cursor = *tile;
                let events = self.sowing.on_button_pressed(&self.farm, trigger);
                report(&events);
                self.tick();
            }
            Step::Drag { tile } => {
                self.farm.cursor = *tile;
                self.tick();
            }
            Step::Release => {
                let events = self.sowing.on_button_released(trigger);
                report(&events);
            }
            Step::Select { slot } => {
                self.farm.selected = *slot;
                self.tick();
            }
            Step::Walk { path } => {
                for tile in path {
                    self.move_farmer(*tile);
                }
                self.farm.moving = false;
            }
            Step::Wander { steps, seed } => {
                let mut random = StdRng::seed_from_u64(*seed);
                for _ in 0..*steps {
                    let offset = match random.gen_range(0..4) {
                        0 => [1, 0],
                        1 => [-1, 0],
                        2 => [0, 1],
                        _ => [0, -1],
                    };
                    let tile = self.farm.farmer.add_offset(offset);
                    if self.farm.contains(tile) {
                        self.move_farmer(tile);
                    }
                }
                self.farm.moving = false;
            }
            Step::Wait { ticks } => {
                for _ in 0..*ticks {
                    self.tick();
                }
            }
            Step::Travel { location } => {
                self.farm.travel(*location);
                self.tick();
            }
            Step::Set { key, value } => {
                if let Err(error) = self.sowing.config.set(key, value) {
                    warn!("Unable to set option {key}, {error:?}");
                }
            }
            Step::Render => {
                let frame = self.render();
                for line in &frame {
                    println!("{line}");
                }
                println!();
                self.frames.push(frame);
            }
        }
    }

    pub fn render(&self) -> Vec<String> {
        let mut canvas = Canvas::new(&self.farm);
        self.sowing.on_render(&mut canvas);
        canvas.put(self.farm.farmer, Canvas::FARMER);
        canvas.lines()
    }

    fn move_farmer(&mut self, tile: Tile) {
        self.farm.farmer = tile;
        self.farm.moving = true;
        self.tick();
    }

    fn tick(&mut self) {
        self.ticks += 1;
        let events = self.sowing.on_tick(&mut self.farm);
        report(&events);
    }
}

fn report(events: &[Targeting]) {
    for event in events {
        match event {
            Targeting::ItemPlaced { .. } | Targeting::TargetsCleared { .. } => {
                info!("{:?}", event)
            }
            _ => debug!("{:?}", event),
        }
    }
}
