//! In-memory record of what the reviewer decided for each suggestion.

use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use uuid::Uuid;

use super::suggestion::{describe_placement, Placement};

#[derive(Clone, Debug, PartialEq)]
pub enum Decision {
    Merged(Option<Placement>),
    Rejected,
    CreatedSeparate,
    Placed(Placement),
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Merged(_) => "Merged",
            Decision::Rejected => "Rejected",
            Decision::CreatedSeparate => "Created separate",
            Decision::Placed(_) => "Custom placement",
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            Decision::Merged(placement) => Some(describe_placement(placement.as_ref())),
            Decision::Placed(placement) => Some(describe_placement(Some(placement))),
            Decision::Rejected | Decision::CreatedSeparate => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecisionRecord {
    pub id: Uuid,
    pub suggestion_id: String,
    pub target_title: String,
    pub decision: Decision,
    pub decided_at: OffsetDateTime,
}

impl DecisionRecord {
    pub fn new(suggestion_id: impl Into<String>, target_title: impl Into<String>, decision: Decision) -> Self {
        Self {
            id: Uuid::new_v4(),
            suggestion_id: suggestion_id.into(),
            target_title: target_title.into(),
            decision,
            decided_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn decided_at_label(&self) -> String {
        self.decided_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown time".to_string())
    }
}
