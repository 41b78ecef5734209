use log::info;

pub use actions::*;
pub use domains::*;

use crate::api::{Button, Host, ItemId, LocationId, RenderSink, Sprite};
use crate::config::SowingConfig;
use crate::targeting::{Targeting, TargetingDomain};

mod actions;
pub mod api;
pub mod config;
mod domains;
pub mod math;

/// Targeting controller, one per play session.
pub struct Sowing {
    pub config: SowingConfig,
    pub targeting: TargetingDomain,
    dragging: bool,
    last_item: Option<ItemId>,
    last_location: Option<LocationId>,
}

impl Sowing {
    pub fn new(config: SowingConfig) -> Self {
        info!("Sowing session started with {:?}", config);
        Self {
            config,
            targeting: TargetingDomain::default(),
            dragging: false,
            last_item: None,
            last_location: None,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn on_button_pressed<H: Host>(&mut self, host: &H, button: Button) -> Vec<Targeting> {
        if button != self.config.trigger {
            return vec![];
        }
        self.on_gesture_start(host)
    }

    pub fn on_button_released(&mut self, button: Button) -> Vec<Targeting> {
        if button != self.config.trigger {
            return vec![];
        }
        self.on_gesture_end()
    }

    pub fn on_gesture_start<H: Host>(&mut self, host: &H) -> Vec<Targeting> {
        let (_, mut events) = self.observe_host(host);
        self.dragging = true;
        let tile = host.cursor_tile();
        events.extend(self.infer_mode(host, tile));
        events
    }

    pub fn on_gesture_end(&mut self) -> Vec<Targeting> {
        self.dragging = false;
        self.targeting.release_marquee();
        vec![]
    }

    pub fn on_tick<H: Host>(&mut self, host: &mut H) -> Vec<Targeting> {
        let (item, mut events) = self.observe_host(host);
        let sowable = item.map(|item| item.class.is_sowable()).unwrap_or(false);
        if !sowable {
            events.extend(self.targeting.clear_targets());
            return events;
        }
        if self.dragging {
            let tile = host.cursor_tile();
            events.extend(self.update_targets(host, tile, item));
        }
        events.extend(self.collect_garbage(host, item));
        events.extend(self.scan_and_place(host));
        events
    }

    pub fn on_render<R: RenderSink>(&self, sink: &mut R) {
        for tile in self.targeting.sorted_targets() {
            sink.draw(Sprite::Crosshair, tile);
        }
        if let Some(marquee) = self.targeting.marquee {
            for tile in marquee.rect().border() {
                sink.draw(Sprite::MarqueeBorder, tile);
            }
        }
    }
}
