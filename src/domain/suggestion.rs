use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of characters shown in a card's content preview.
pub const PREVIEW_CHARS: usize = 150;

/// A proposed merge of new content into an existing artifact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub analysis: Analysis,
    pub target_artifact: TargetArtifact,
    #[serde(default)]
    pub content: String,
}

/// Precomputed scores for a suggestion. Every score is expected in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub confidence: f64,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_placement: Option<Placement>,
    pub topic_similarity: f64,
    pub content_type_compatibility: f64,
    pub structural_fit: f64,
    pub size_feasibility: f64,
    pub user_context: f64,
    pub temporal_relevance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_actions: Option<Vec<AlternativeAction>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlternativeAction {
    pub reason: String,
    pub confidence: f64,
}

/// The existing document a suggestion would merge into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetArtifact {
    pub title: String,
    /// Host-side flag; the card itself only reads `title`.
    #[serde(default)]
    pub locked: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    #[serde(rename = "type")]
    pub kind: PlacementType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_title: Option<String>,
}

impl Placement {
    pub fn with_kind(kind: PlacementType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementType {
    #[default]
    AppendToEnd,
    NewSection,
    InsertAfterSection,
    #[serde(other)]
    Unrecognized,
}

impl PlacementType {
    /// Overrides offered by the custom placement menu, in display order.
    pub const MENU_OPTIONS: [PlacementType; 3] = [
        PlacementType::AppendToEnd,
        PlacementType::NewSection,
        PlacementType::InsertAfterSection,
    ];

    pub fn menu_label(&self) -> &'static str {
        match self {
            PlacementType::AppendToEnd => "Append to end",
            PlacementType::NewSection => "New section",
            PlacementType::InsertAfterSection => "Insert after section",
            PlacementType::Unrecognized => "Smart placement",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn classify(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceTier::High
        } else if confidence >= 0.5 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A `[0, 1]` score as a whole percentage, rounded half away from zero.
pub fn percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Unrounded CSS width for a score bar, clamped to the bar.
pub fn bar_width(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    (value * 100.0).clamp(0.0, 100.0)
}

pub fn content_preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

pub fn describe_placement(placement: Option<&Placement>) -> String {
    let Some(placement) = placement else {
        return "Smart placement".to_string();
    };
    match placement.kind {
        PlacementType::AppendToEnd => "End of document".to_string(),
        PlacementType::NewSection => {
            format!("New section: \"{}\"", placement.title.as_deref().unwrap_or(""))
        }
        PlacementType::InsertAfterSection => format!(
            "After \"{}\"",
            placement.section_title.as_deref().unwrap_or("")
        ),
        PlacementType::Unrecognized => "Smart placement".to_string(),
    }
}

/// One labelled sub-score shown in the analysis breakdown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: f64,
}

impl Analysis {
    /// The six sub-scores in their fixed display order.
    pub fn metrics(&self) -> [Metric; 6] {
        [
            Metric {
                label: "Topic similarity",
                value: self.topic_similarity,
            },
            Metric {
                label: "Content-type fit",
                value: self.content_type_compatibility,
            },
            Metric {
                label: "Structural fit",
                value: self.structural_fit,
            },
            Metric {
                label: "Size feasibility",
                value: self.size_feasibility,
            },
            Metric {
                label: "User context",
                value: self.user_context,
            },
            Metric {
                label: "Temporal relevance",
                value: self.temporal_relevance,
            },
        ]
    }

    /// Alternatives to show; `None` and an empty list both render nothing.
    pub fn alternatives(&self) -> &[AlternativeAction] {
        self.alternative_actions.as_deref().unwrap_or(&[])
    }

    /// Names of scores that fall outside `[0, 1]`.
    pub fn out_of_range_scores(&self) -> Vec<&'static str> {
        let in_range = |value: f64| (0.0..=1.0).contains(&value);
        let mut names = Vec::new();
        if !in_range(self.confidence) {
            names.push("confidence");
        }
        names.extend(
            self.metrics()
                .iter()
                .filter(|metric| !in_range(metric.value))
                .map(|metric| metric.label),
        );
        if self.alternatives().iter().any(|alt| !in_range(alt.confidence)) {
            names.push("alternative confidence");
        }
        names
    }
}

impl AlternativeAction {
    pub fn summary(&self) -> String {
        format!("{} (confidence: {}%)", self.reason, percent(self.confidence))
    }
}

pub fn badge_label(confidence: f64) -> String {
    format!(
        "{} ({}%)",
        ConfidenceTier::classify(confidence),
        percent(confidence)
    )
}

#[cfg(test)]
pub(crate) fn sample_suggestion() -> Suggestion {
    Suggestion {
        id: "s1".into(),
        analysis: Analysis {
            confidence: 0.92,
            reasoning: "...".into(),
            suggested_placement: None,
            topic_similarity: 0.9,
            content_type_compatibility: 0.8,
            structural_fit: 0.7,
            size_feasibility: 0.95,
            user_context: 0.6,
            temporal_relevance: 0.5,
            alternative_actions: None,
        },
        target_artifact: TargetArtifact {
            title: "Doc A".into(),
            locked: false,
        },
        content: "hello world".into(),
    }
}
