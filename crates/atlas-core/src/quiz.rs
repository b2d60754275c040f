/// Trivia question generation.
use rand::Rng;

use crate::error::CoreError;
use crate::model::{Destination, QuizQuestion};
use crate::select;

/// Number of answer choices drawn for a question (fewer if the dataset is
/// smaller).
const CHOICE_COUNT: usize = 4;

const FALLBACK_HIGHLIGHT: &str = "a local special event";

/// Build a multiple-choice question from a random sample of destinations.
///
/// The first sampled destination provides the prompt, the answer, and the
/// explanation; every sampled destination contributes its `state` as a
/// choice, in sampled order. A sampled record without a `state` fails the
/// whole question; that field is a data contract the quiz relies on.
pub fn generate_quiz<R: Rng + ?Sized>(
    rng: &mut R,
    records: &[Destination],
) -> Result<QuizQuestion, CoreError> {
    let sample = select::pick_k(rng, records, CHOICE_COUNT);
    let Some(first) = sample.first() else {
        return Err(CoreError::Empty);
    };

    let choices = sample
        .iter()
        .map(|d| state_of(d))
        .collect::<Result<Vec<String>, CoreError>>()?;

    let highlight = first.highlight.as_deref().unwrap_or(FALLBACK_HIGHLIGHT);

    Ok(QuizQuestion {
        prompt: format!("Which state hosts the festival: {highlight}?"),
        answer: state_of(first)?,
        choices,
        explain: first.fun_fact.clone(),
    })
}

fn state_of(dest: &Destination) -> Result<String, CoreError> {
    dest.state.clone().ok_or_else(|| CoreError::MissingState {
        slug: dest.slug.clone(),
    })
}
