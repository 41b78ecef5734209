use crate::math::Tile;
use crate::targeting::{Marquee, TargetingDomain, TargetingError};

impl TargetingDomain {
    pub fn anchor_marquee(&mut self, tile: Tile) {
        self.marquee = Some(Marquee {
            start: tile,
            last: tile,
        });
    }

    pub fn stretch_marquee(
        &mut self,
        tile: Tile,
    ) -> Result<impl FnOnce() -> Marquee + '_, TargetingError> {
        let marquee = self
            .marquee
            .as_mut()
            .ok_or(TargetingError::MarqueeNotAnchored)?;
        let command = move || {
            marquee.last = tile;
            *marquee
        };
        Ok(command)
    }

    pub fn release_marquee(&mut self) {
        self.marquee = None;
    }
}
