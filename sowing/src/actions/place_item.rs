use crate::api::{HeldItem, Host, ItemClass, ItemId, LocationId};
use crate::math::Tile;
use crate::targeting::Targeting;
use crate::Sowing;

#[derive(Debug, Clone, PartialEq)]
pub enum SowingError {
    LocationNotAllowed { location: LocationId },
    SoilNotFound { tile: Tile },
    NothingHeld,
    ItemClassMismatch { item: ItemId },
    FertilizerWasted { tile: Tile },
    PlacementRejected { tile: Tile },
}

impl Sowing {
    pub fn place_item<H: Host>(
        &self,
        host: &mut H,
        item: Option<HeldItem>,
        tile: Tile,
    ) -> Result<Vec<Targeting>, SowingError> {
        let item = item.ok_or(SowingError::NothingHeld)?;
        let location = host.location();
        if !self.config.sow_anywhere && !location.kind.is_sowable() {
            return Err(SowingError::LocationNotAllowed {
                location: location.id,
            });
        }
        let soil = host.soil(tile).ok_or(SowingError::SoilNotFound { tile })?;
        let fertilizer = match item.class {
            ItemClass::Seed => false,
            ItemClass::Fertilizer => true,
            ItemClass::Other => return Err(SowingError::ItemClassMismatch { item: item.id }),
        };
        if fertilizer && self.config.prevent_fertilizer_waste && !soil.crop {
            return Err(SowingError::FertilizerWasted { tile });
        }
        if !host.plant(&item, tile, fertilizer) {
            return Err(SowingError::PlacementRejected { tile });
        }
        if self.config.consumable {
            if item.stack <= 1 {
                host.remove_item(item.id);
            } else {
                host.decrease_item(item.id);
            }
        }
        Ok(vec![Targeting::ItemPlaced {
            tile,
            item: item.id,
            fertilizer,
        }])
    }
}
