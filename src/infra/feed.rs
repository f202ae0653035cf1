//! Loading the JSON feed of precomputed merge suggestions.

use std::{collections::HashSet, fs, io, path::Path};

use crate::{domain::Suggestion, util::assets};

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to read suggestion feed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse suggestion feed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("suggestion id {0:?} appears more than once")]
    DuplicateId(String),
}

/// Where the loaded suggestions came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedSource {
    File(String),
    Bundled,
}

#[derive(Clone, Debug)]
pub struct LoadedFeed {
    pub source: FeedSource,
    pub suggestions: Vec<Suggestion>,
}

pub fn parse_feed(json: &str) -> Result<Vec<Suggestion>, FeedError> {
    let suggestions: Vec<Suggestion> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for suggestion in &suggestions {
        if !seen.insert(suggestion.id.as_str()) {
            return Err(FeedError::DuplicateId(suggestion.id.clone()));
        }
        let out_of_range = suggestion.analysis.out_of_range_scores();
        if !out_of_range.is_empty() {
            tracing::warn!(
                suggestion = %suggestion.id,
                scores = ?out_of_range,
                "scores outside [0, 1]; showing them as given"
            );
        }
    }
    Ok(suggestions)
}

pub fn load_feed_file(path: &Path) -> Result<Vec<Suggestion>, FeedError> {
    let content = fs::read_to_string(path)?;
    parse_feed(&content)
}

/// Loads the configured feed, falling back to the bundled sample when none is set
/// or the configured file does not exist.
pub fn load_feed(path: Option<&Path>) -> Result<LoadedFeed, FeedError> {
    if let Some(path) = path {
        if path.exists() {
            let suggestions = load_feed_file(path)?;
            tracing::info!(
                "Loaded {} suggestions from {}",
                suggestions.len(),
                path.display()
            );
            return Ok(LoadedFeed {
                source: FeedSource::File(path.display().to_string()),
                suggestions,
            });
        }
        tracing::warn!("No suggestion feed at {}; using bundled sample", path.display());
    }

    let suggestions = parse_feed(assets::sample_feed())?;
    tracing::info!("Loaded {} bundled sample suggestions", suggestions.len());
    Ok(LoadedFeed {
        source: FeedSource::Bundled,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = r#"[{
        "id": "s1",
        "analysis": {
            "confidence": 0.92,
            "reasoning": "...",
            "topicSimilarity": 0.9,
            "contentTypeCompatibility": 0.8,
            "structuralFit": 0.7,
            "sizeFeasibility": 0.95,
            "userContext": 0.6,
            "temporalRelevance": 0.5
        },
        "targetArtifact": {"title": "Doc A"},
        "content": "hello world"
    }]"#;

    #[test]
    fn parses_a_feed() {
        let suggestions = parse_feed(ONE).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].id, "s1");
        assert_eq!(suggestions[0].analysis.confidence, 0.92);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut value: serde_json::Value = serde_json::from_str(ONE).unwrap();
        let first = value[0].clone();
        value.as_array_mut().unwrap().push(first);
        let err = parse_feed(&value.to_string()).unwrap_err();
        assert!(matches!(err, FeedError::DuplicateId(id) if id == "s1"));
    }

    #[test]
    fn malformed_feed_is_a_parse_error() {
        assert!(matches!(parse_feed("{}"), Err(FeedError::Parse(_))));
    }

    #[test]
    fn missing_file_falls_back_to_bundled_sample() {
        let path = std::env::temp_dir().join("merge-suggestions-missing-feed.json");
        let feed = load_feed(Some(&path)).unwrap();
        assert_eq!(feed.source, FeedSource::Bundled);
        assert!(!feed.suggestions.is_empty());
    }

    #[test]
    fn reads_configured_file() {
        let path = std::env::temp_dir().join(format!(
            "merge-suggestions-feed-{}.json",
            std::process::id()
        ));
        fs::write(&path, ONE).unwrap();
        let feed = load_feed(Some(&path));
        let _ = fs::remove_file(&path);
        let feed = feed.unwrap();
        assert!(matches!(feed.source, FeedSource::File(_)));
        assert_eq!(feed.suggestions[0].target_artifact.title, "Doc A");
    }
}
