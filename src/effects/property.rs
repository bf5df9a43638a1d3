/// Visual property a renderer can override on a slot.
///
/// Names follow the CSS properties the browser host writes; other hosts map
/// them onto whatever their surfaces support.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum VisualProperty {
    /// Transition declaration (`"<property> <ms>ms"`); never reports settlement itself.
    Transition,
    /// Surface opacity in `[0, 1]`.
    Opacity,
    /// Surface width.
    Width,
    /// Surface height.
    Height,
    /// Surface transform.
    Transform,
}

impl VisualProperty {
    /// CSS name of the property.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Transition => "transition",
            Self::Opacity => "opacity",
            Self::Width => "width",
            Self::Height => "height",
            Self::Transform => "transform",
        }
    }

    /// Whether changing this property produces a settled notification.
    pub fn is_animated(self) -> bool {
        !matches!(self, Self::Transition)
    }
}

impl std::fmt::Display for VisualProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_name())
    }
}
