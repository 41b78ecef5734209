use log::info;

use crate::api::{HeldItem, Host};
use crate::targeting::Targeting;
use crate::Sowing;

impl Sowing {
    /// Forgets targets once the farmer switches items or leaves the location.
    pub(crate) fn observe_host<H: Host>(
        &mut self,
        host: &H,
    ) -> (Option<HeldItem>, Vec<Targeting>) {
        let mut events = vec![];
        let item = host.held_item();
        let item_id = item.map(|item| item.id);
        if item_id != self.last_item {
            info!(
                "Held item changed from {:?} to {:?}",
                self.last_item,
                item.map(|item| (item.id, item.class))
            );
            events.extend(self.targeting.clear_targets());
            self.last_item = item_id;
        }
        let location = host.location();
        if self.last_location != Some(location.id) {
            info!("Location changed to {:?}", location);
            events.extend(self.targeting.clear_targets());
            self.targeting.release_marquee();
            self.last_location = Some(location.id);
        }
        (item, events)
    }
}
