use crate::api::{HeldItem, Host, ItemClass};
use crate::targeting::Targeting;
use crate::Sowing;

impl Sowing {
    pub(crate) fn collect_garbage<H: Host>(
        &mut self,
        host: &H,
        item: Option<HeldItem>,
    ) -> Vec<Targeting> {
        let class = item.map(|item| item.class).unwrap_or(ItemClass::Other);
        self.targeting.retain_targets(|tile| match host.soil(tile) {
            Some(soil) => soil.is_eligible(class),
            None => false,
        })
    }
}
