pub mod analysis_details;
pub mod confidence_badge;
pub mod placement_menu;
pub mod suggestion_card;
pub mod toast;

pub use suggestion_card::{ActionsHandle, MergeSuggestionCard};
