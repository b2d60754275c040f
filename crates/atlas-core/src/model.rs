use serde::{Deserialize, Serialize};

/// One destination entry in the dataset.
///
/// `slug` and `name` must be present in the document. Everything else is
/// optional and defaulted, except `state`, which stays an `Option` so that
/// a record missing it still loads and only the quiz (the one consumer
/// that requires it) can fail on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    /// Unique URL-safe identifier. Uniqueness is a data contract, not
    /// validated here; duplicates resolve to the first match on lookup.
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    pub state: Option<String>,
    pub highlight: Option<String>,
    #[serde(default)]
    pub fun_fact: String,
}

/// A generated multiple-choice question, ready for the quiz template.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub answer: String,
    /// `state` of every sampled destination, in sampled order. Two sampled
    /// destinations sharing a state produce duplicate choices.
    pub choices: Vec<String>,
    pub explain: String,
}
