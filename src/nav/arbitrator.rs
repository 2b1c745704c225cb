use crate::nav::{NavEvent, RegionId, RegionSet};

/// What the arbitrator did with a delegated event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delegated {
    /// A cursor or section moved.
    Moved,
    /// The active region's item at `index` was activated; interpretation
    /// (tab switch, launch, open overlay) is up to the caller.
    Activated { region: RegionId, index: usize },
    /// The event has no meaning at this layer.
    Ignored,
}

/// Owns "which region is active" and walks that ownership vertically
/// through the region order. Horizontal movement and activation are
/// delegated verbatim to the active region.
pub struct SectionArbitrator {
    order: Vec<RegionId>,
    active: usize,
    pending_sync: Option<RegionId>,
}

impl SectionArbitrator {
    /// Grants initial focus to the first region in the order.
    pub fn new(order: Vec<RegionId>, regions: &mut RegionSet) -> Self {
        assert!(!order.is_empty());
        let first = order[0];
        regions.get_mut(first).gain_focus();
        Self {
            order,
            active: 0,
            pending_sync: Some(first),
        }
    }

    pub fn active_id(&self) -> RegionId {
        self.order[self.active]
    }

    /// The deferred focus-sync target set by the last section switch, if
    /// one is still waiting. Consumed by the event loop on its next tick,
    /// after the new region has rendered its focus target.
    pub fn take_pending_sync(&mut self) -> Option<RegionId> {
        self.pending_sync.take()
    }

    pub fn handle(&mut self, event: NavEvent, regions: &mut RegionSet) -> Delegated {
        match event {
            NavEvent::MoveDown => {
                if self.active + 1 < self.order.len() {
                    self.switch_to(self.active + 1, regions);
                    Delegated::Moved
                } else {
                    Delegated::Ignored
                }
            }
            NavEvent::MoveUp => {
                if self.active > 0 {
                    self.switch_to(self.active - 1, regions);
                    Delegated::Moved
                } else {
                    Delegated::Ignored
                }
            }
            NavEvent::MoveLeft => {
                regions.get_mut(self.active_id()).move_left();
                Delegated::Moved
            }
            NavEvent::MoveRight => {
                regions.get_mut(self.active_id()).move_right();
                Delegated::Moved
            }
            NavEvent::Activate => {
                let region = self.active_id();
                Delegated::Activated {
                    region,
                    index: regions.get(region).cursor(),
                }
            }
            // Cancel only means something inside the overlay.
            NavEvent::Cancel => Delegated::Ignored,
        }
    }

    fn switch_to(&mut self, index: usize, regions: &mut RegionSet) {
        let from = self.active_id();
        self.active = index;
        let to = self.active_id();
        // Outgoing loses focus before the incoming gains it.
        regions.get_mut(from).lose_focus();
        regions.get_mut(to).gain_focus();
        self.pending_sync = Some(to);
    }
}
