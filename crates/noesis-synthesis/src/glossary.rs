//! Glossary: the corpus's strongest concepts, defined from their
//! analysis record and listed alphabetically.

use noesis_core::constants::MAX_GLOSSARY_ENTRIES;
use noesis_core::models::{AnalysisReport, Concept, GlossaryEntry};

fn define(concept: &Concept) -> String {
    let chapters = concept.chapters().len();
    let mut definition = format!(
        "A recurring concept, observed in {chapters} chapter{}.",
        if chapters == 1 { "" } else { "s" }
    );
    if !concept.categories.is_empty() {
        let cats: Vec<&str> = concept.categories.iter().map(String::as_str).collect();
        definition.push_str(&format!(" Belongs to: {}.", cats.join(", ")));
    }
    if !concept.related_terms.is_empty() {
        let related: Vec<&str> = concept
            .related_terms
            .iter()
            .take(5)
            .map(String::as_str)
            .collect();
        definition.push_str(&format!(" Travels with: {}.", related.join(", ")));
    }
    definition
}

/// Take the top concepts by occurrence count and return them as an
/// alphabetical glossary.
pub fn build_glossary(report: &AnalysisReport) -> Vec<GlossaryEntry> {
    let mut entries: Vec<GlossaryEntry> = report
        .top_concepts(MAX_GLOSSARY_ENTRIES)
        .into_iter()
        .map(|concept| GlossaryEntry {
            term: concept.term.clone(),
            definition: define(concept),
            occurrences: concept.occurrence_count(),
            categories: concept.categories.iter().cloned().collect(),
            related_terms: concept.related_terms.iter().cloned().collect(),
        })
        .collect();
    entries.sort_by(|a, b| a.term.cmp(&b.term));
    entries
}
