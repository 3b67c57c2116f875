use super::viewport::ViewportSample;
use super::visibility::ScrollPosition;

/// What received focus, as far as keyboard avoidance cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    /// An element that brings up a soft keyboard.
    Field,
    Other,
}

impl FocusTarget {
    pub fn from_tag_name(tag: &str) -> Self {
        if ["INPUT", "SELECT", "TEXTAREA"]
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
        {
            FocusTarget::Field
        } else {
            FocusTarget::Other
        }
    }
}

/// Environment notifications the widget reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostSignal {
    Scroll(ScrollPosition),
    ViewportResized(ViewportSample),
    FocusIn(FocusTarget),
    FocusOut,
}
