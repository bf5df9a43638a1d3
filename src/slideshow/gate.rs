use crate::foundation::core::SlotId;

/// Collapses per-property settled notifications into one settlement.
///
/// An effect that animates several properties yields one raw notification
/// per property. The gate is armed for the outgoing slot before the effect
/// starts; the first notification from that slot opens it and every later
/// one for the same transition is counted and dropped. Notifications from
/// the other slot belong to a previous transition and never count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleGate {
    scope: Option<SlotId>,
    raw: u32,
}

impl SettleGate {
    /// Reset for a new transition on `outgoing`. Must run before the effect starts.
    pub fn arm(&mut self, outgoing: SlotId) {
        self.scope = Some(outgoing);
        self.raw = 0;
    }

    /// Record one raw notification; `true` only for the first in scope.
    pub fn observe(&mut self, slot: SlotId) -> bool {
        if self.scope != Some(slot) {
            return false;
        }
        self.raw = self.raw.saturating_add(1);
        self.raw == 1
    }

    /// Notifications counted since the last [`SettleGate::arm`].
    pub fn raw_count(&self) -> u32 {
        self.raw
    }

    /// Slot the gate is currently listening to.
    pub fn scope(&self) -> Option<SlotId> {
        self.scope
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slideshow/gate.rs"]
mod tests;
