//! Card hover transforms.

/// Card-like elements that lift on hover.
pub const CARD_SELECTOR: &str = ".game-card, .console-card, .accessory-card, .deal-card, .category-card";

/// Pointer phase over a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverPhase {
    Enter,
    Leave,
}

impl HoverPhase {
    /// DOM event name bound for this phase.
    pub fn event(self) -> &'static str {
        match self {
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
        }
    }

    /// Inline `transform` value applied for this phase.
    pub fn transform(self) -> &'static str {
        match self {
            Self::Enter => "translateY(-10px) scale(1.02)",
            Self::Leave => "translateY(0) scale(1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_lifts_and_leave_resets() {
        assert_eq!(HoverPhase::Enter.transform(), "translateY(-10px) scale(1.02)");
        assert_eq!(HoverPhase::Leave.transform(), "translateY(0) scale(1)");
    }

    #[test]
    fn phases_bind_pointer_events() {
        assert_eq!(HoverPhase::Enter.event(), "mouseenter");
        assert_eq!(HoverPhase::Leave.event(), "mouseleave");
    }
}
