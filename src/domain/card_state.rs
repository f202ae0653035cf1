//! Local interaction state for a single suggestion card.

use std::fmt;

use super::suggestion::{Placement, PlacementType};

/// A user choice forwarded to the caller's handlers.
#[derive(Clone, Debug, PartialEq)]
pub enum MergeIntent {
    Accept,
    Reject,
    CreateSeparate,
    Custom(Placement),
}

impl MergeIntent {
    pub fn kind(&self) -> IntentKind {
        match self {
            MergeIntent::Accept => IntentKind::Accept,
            MergeIntent::Reject => IntentKind::Reject,
            MergeIntent::CreateSeparate => IntentKind::CreateSeparate,
            MergeIntent::Custom(_) => IntentKind::Custom,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentKind {
    Accept,
    Reject,
    CreateSeparate,
    Custom,
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IntentKind::Accept => "accept",
            IntentKind::Reject => "reject",
            IntentKind::CreateSeparate => "create_separate",
            IntentKind::Custom => "custom_placement",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPhase {
    #[default]
    Idle,
    Processing(IntentKind),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardState {
    pub details_expanded: bool,
    pub phase: CardPhase,
}

impl CardState {
    pub fn toggle_details(&mut self) {
        self.details_expanded = !self.details_expanded;
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.phase, CardPhase::Processing(_))
    }

    /// Moves to `Processing`. Returns `false` if an intent is already in flight.
    pub fn try_begin(&mut self, intent: &MergeIntent) -> bool {
        if self.is_processing() {
            return false;
        }
        self.phase = CardPhase::Processing(intent.kind());
        true
    }

    pub fn finish(&mut self) {
        self.phase = CardPhase::Idle;
    }
}

/// Where a pointer press landed relative to the open menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggle(&mut self, disabled: bool) {
        if disabled {
            return;
        }
        *self = match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
    }

    /// Closes the menu and returns the original placement with only its type replaced.
    pub fn select(&mut self, kind: PlacementType, original: Option<&Placement>) -> Placement {
        *self = MenuState::Closed;
        match original {
            Some(original) => Placement {
                kind,
                ..original.clone()
            },
            None => Placement::with_kind(kind),
        }
    }

    pub fn pointer_down(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside {
            *self = MenuState::Closed;
        }
    }
}
