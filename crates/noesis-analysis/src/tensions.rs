//! Dialectic tension detection between configured pole pairs.

use std::collections::{BTreeSet, HashMap};

use noesis_core::config::AnalysisConfig;
use noesis_core::models::{Concept, Tension};

/// A pole is present when some extracted concept matches it by
/// bidirectional substring, mirroring thematic keyword matching.
fn find_pole<'a>(concepts: &'a HashMap<String, Concept>, pole: &str) -> Option<&'a Concept> {
    if let Some(exact) = concepts.get(pole) {
        return Some(exact);
    }
    let mut candidates: Vec<&Concept> = concepts
        .values()
        .filter(|c| c.term.contains(pole) || pole.contains(c.term.as_str()))
        .collect();
    candidates.sort_by(|a, b| {
        b.occurrence_count()
            .cmp(&a.occurrence_count())
            .then_with(|| a.term.cmp(&b.term))
    });
    candidates.into_iter().next()
}

/// Detect tensions: both poles present in the corpus. A tension whose
/// poles share a chapter is a paradox held within a single text rather
/// than a disagreement between texts.
pub fn detect_tensions(
    concepts: &HashMap<String, Concept>,
    config: &AnalysisConfig,
) -> Vec<Tension> {
    let mut tensions = Vec::new();
    for (pole_a, pole_b) in &config.tension_pairs {
        let (Some(a), Some(b)) = (find_pole(concepts, pole_a), find_pole(concepts, pole_b)) else {
            continue;
        };
        let chapters_a: BTreeSet<_> = a.chapters();
        let chapters_b: BTreeSet<_> = b.chapters();
        let shared: Vec<_> = chapters_a.intersection(&chapters_b).map(|k| (*k).clone()).collect();
        let is_paradox = !shared.is_empty();
        let synthesis = if is_paradox {
            format!(
                "The corpus holds {pole_a} and {pole_b} together in the same breath; the tension is lived, not resolved."
            )
        } else {
            format!(
                "{pole_a} and {pole_b} pull in different directions across the corpus; each book leans one way."
            )
        };
        tensions.push(Tension {
            pole_a: pole_a.clone(),
            pole_b: pole_b.clone(),
            shared_chapters: shared,
            synthesis,
            is_paradox,
        });
    }
    tensions
}
