use std::collections::BTreeMap;

use crate::{effects::property::VisualProperty, media::image_ref::ImageRef};

/// Controller-side model of one rendering surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    pub(crate) z_order: i32,
    pub(crate) current_image: Option<ImageRef>,
    pub(crate) visual_state: BTreeMap<VisualProperty, String>,
}

impl Slot {
    pub(crate) fn new(z_order: i32) -> Self {
        Self {
            z_order,
            ..Self::default()
        }
    }

    /// Relative stacking order; the active slot is always above the pending one.
    pub fn z_order(&self) -> i32 {
        self.z_order
    }

    /// Image currently painted on this slot.
    pub fn current_image(&self) -> Option<&ImageRef> {
        self.current_image.as_ref()
    }

    /// Effect-specific overrides currently applied.
    pub fn visual_state(&self) -> &BTreeMap<VisualProperty, String> {
        &self.visual_state
    }

    /// True when no effect override is left on the slot.
    pub fn is_neutral(&self) -> bool {
        self.visual_state.is_empty()
    }
}
