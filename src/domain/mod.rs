//! Suggestion data, card interaction state and intent dispatch.

pub mod card_state;
pub mod decision;
pub mod dispatch;
pub mod review_state;
pub mod suggestion;

#[allow(unused_imports)]
pub use card_state::{CardState, IntentKind, MenuState, MergeIntent, PointerTarget};
#[allow(unused_imports)]
pub use decision::{Decision, DecisionRecord};
#[allow(unused_imports)]
pub use dispatch::{
    dispatch_intent, ActionError, ActionFuture, ActionResult, CardController, DispatchOutcome,
    SuggestionActions,
};
#[allow(unused_imports)]
pub use review_state::ReviewState;
#[allow(unused_imports)]
pub use suggestion::{
    badge_label, bar_width, content_preview, describe_placement, percent, AlternativeAction,
    Analysis, ConfidenceTier, Metric, Placement, PlacementType, Suggestion, TargetArtifact,
};
