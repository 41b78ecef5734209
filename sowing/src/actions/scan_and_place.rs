use log::debug;

use crate::api::Host;
use crate::config::MAX_RADIUS;
use crate::math::TileMath;
use crate::targeting::Targeting;
use crate::{Sowing, SowingError};

impl Sowing {
    pub(crate) fn scan_and_place<H: Host>(&mut self, host: &mut H) -> Vec<Targeting> {
        let mut events = vec![];
        let item = match host.held_item() {
            Some(item) if item.class.is_sowable() => item,
            _ => return events,
        };
        if !host.is_moving() {
            return events;
        }
        let center = host.farmer_tile();
        let scan_radius = self.config.scan_radius.min(MAX_RADIUS);
        let execution_radius = self.config.execution_radius.min(MAX_RADIUS);
        if !self.config.always_sow && !self.targeting.any_targeted_within(center, scan_radius) {
            return events;
        }
        for tile in center.around(execution_radius) {
            let current = host.held_item();
            if current.map(|current| current.id) != Some(item.id) {
                debug!("Stops sowing, {:?} is used up", item.id);
                break;
            }
            let eligible = match host.soil(tile) {
                Some(soil) => soil.is_eligible(item.class),
                None => false,
            };
            let targeted = self.targeting.is_targeted(tile);
            if !eligible || !(targeted || self.config.always_sow) {
                continue;
            }
            match self.place_item(host, current, tile) {
                Ok(placed) => {
                    events.extend(placed);
                    if let Ok(untarget) = self.targeting.untarget(tile) {
                        events.extend(untarget());
                    }
                }
                Err(SowingError::PlacementRejected { tile }) => {
                    debug!("Host rejected placement at {:?}", tile);
                    if let Ok(untarget) = self.targeting.untarget(tile) {
                        events.extend(untarget());
                    }
                }
                Err(error) => {
                    debug!("Unable to place {:?} at {:?}, {:?}", item.id, tile, error);
                }
            }
        }
        events
    }
}
