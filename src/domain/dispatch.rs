//! Guarded hand-off of card intents to caller-supplied handlers.

use futures::future::LocalBoxFuture;

use super::card_state::{IntentKind, MergeIntent};
use super::suggestion::Placement;

/// Failure reported by a caller's action handler.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ActionError {
    pub message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type ActionResult = Result<(), ActionError>;
pub type ActionFuture = LocalBoxFuture<'static, ActionResult>;

/// The four handlers a card forwards user choices to.
pub trait SuggestionActions {
    fn accept(&self, id: String) -> ActionFuture;
    fn reject(&self, id: String) -> ActionFuture;
    fn create_separate(&self, id: String) -> ActionFuture;
    fn custom_placement(&self, id: String, placement: Placement) -> ActionFuture;
}

/// Handle onto a card's processing flag. `dispatch_intent` takes it by value, so copies
/// must share the flag with the card.
pub trait CardController {
    fn try_begin(&mut self, intent: &MergeIntent) -> bool;
    fn finish(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DispatchOutcome {
    /// Another intent was already in flight; no handler was called.
    Skipped,
    Completed,
    Failed(ActionError),
}

pub async fn dispatch_intent<C, A>(
    mut controller: C,
    actions: &A,
    id: &str,
    intent: MergeIntent,
) -> DispatchOutcome
where
    C: CardController,
    A: SuggestionActions + ?Sized,
{
    if !controller.try_begin(&intent) {
        tracing::debug!(suggestion = id, "ignoring intent while another is in flight");
        return DispatchOutcome::Skipped;
    }

    let kind = intent.kind();
    let id = id.to_string();
    let result = match intent {
        MergeIntent::Accept => actions.accept(id.clone()).await,
        MergeIntent::Reject => actions.reject(id.clone()).await,
        MergeIntent::CreateSeparate => actions.create_separate(id.clone()).await,
        MergeIntent::Custom(placement) => actions.custom_placement(id.clone(), placement).await,
    };

    controller.finish();

    match result {
        Ok(()) => {
            tracing::debug!(suggestion = %id, intent = %kind, "suggestion action completed");
            DispatchOutcome::Completed
        }
        Err(err) => {
            log_failure(&id, kind, &err);
            DispatchOutcome::Failed(err)
        }
    }
}

fn log_failure(id: &str, kind: IntentKind, err: &ActionError) {
    tracing::warn!(suggestion = id, intent = %kind, error = %err, "suggestion action failed");
}
