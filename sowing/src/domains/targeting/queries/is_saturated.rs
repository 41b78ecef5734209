use crate::api::HeldItem;
use crate::targeting::TargetingDomain;

impl TargetingDomain {
    /// Whether the targets already claim the whole stack of the held item.
    ///
    /// With nothing held the set counts as saturated only while it is empty,
    /// which blocks the very first addition and nothing after it.
    pub fn is_saturated(&self, item: Option<&HeldItem>) -> bool {
        match item {
            Some(item) => self.targets.len() >= item.stack as usize,
            None => self.targets.is_empty(),
        }
    }
}
