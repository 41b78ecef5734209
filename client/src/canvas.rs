use sowing::api::{RenderSink, Sprite};
use sowing::math::Tile;

use crate::farm::Farm;

pub struct Canvas {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl Canvas {
    pub const CROSSHAIR: char = '+';
    pub const MARQUEE: char = '#';
    pub const FARMER: char = '@';

    pub fn new(farm: &Farm) -> Self {
        let mut rows = vec![vec![Farm::BARE; farm.width]; farm.height];
        for (y, row) in rows.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = farm.code([x as i32, y as i32]);
            }
        }
        Self {
            width: farm.width,
            rows,
        }
    }

    pub fn put(&mut self, tile: Tile, code: char) {
        let [x, y] = tile;
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.rows.len() {
            return;
        }
        self.rows[y as usize][x as usize] = code;
    }

    pub fn get(&self, tile: Tile) -> Option<char> {
        let [x, y] = tile;
        if x < 0 || y < 0 {
            return None;
        }
        self.rows.get(y as usize)?.get(x as usize).copied()
    }

    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|code| code.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl RenderSink for Canvas {
    fn draw(&mut self, sprite: Sprite, tile: Tile) {
        match sprite {
            Sprite::Crosshair => self.put(tile, Canvas::CROSSHAIR),
            Sprite::MarqueeBorder => {
                if self.get(tile) != Some(Canvas::CROSSHAIR) {
                    self.put(tile, Canvas::MARQUEE)
                }
            }
        }
    }
}
