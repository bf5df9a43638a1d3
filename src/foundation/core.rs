/// Identity of one of the two rendering surfaces.
///
/// Slots never change identity; only their stacking order and content
/// move as the active/pending roles swap.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SlotId(u8);

impl SlotId {
    /// Slot that is active right after scaffolding is created.
    pub const FIRST: SlotId = SlotId(0);
    /// Slot that starts out pending.
    pub const SECOND: SlotId = SlotId(1);
    /// Both slots in scaffolding order.
    pub const ALL: [SlotId; 2] = [SlotId::FIRST, SlotId::SECOND];

    /// Position of this slot in scaffolding order (`0` or `1`).
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The slot that is not `self`.
    pub fn other(self) -> SlotId {
        SlotId(1 - self.0)
    }
}

/// Direction of an advance through the image collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Towards higher indices, wrapping to `0` past the end.
    #[default]
    Forward,
    /// Towards lower indices, wrapping to the last image before `0`.
    Backward,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Direction {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Opaque handle for a one-shot timer armed through a [`crate::Scheduler`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimerHandle(pub u64);

/// Step `current` one position in `dir`, wrapping modulo `len`.
///
/// Returns `0` for an empty collection.
pub fn wrap_index(current: usize, dir: Direction, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current % len;
    match dir {
        Direction::Forward => (current + 1) % len,
        Direction::Backward => (current + len - 1) % len,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
