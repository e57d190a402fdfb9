//! Thematic classification: tag concepts with keyword-defined
//! categories and promote well-populated categories to themes.

use std::collections::HashMap;

use noesis_core::config::AnalysisConfig;
use noesis_core::models::{Concept, Theme};

/// A concept belongs to a category when its term contains one of the
/// category keywords or a keyword contains the term.
fn matches_category(term: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|k| term.contains(k.as_str()) || k.contains(term))
}

/// Tag every concept with its categories, then build one theme per
/// category that gathered at least `theme_min_concepts` concepts.
/// Themes come back in category-definition order.
pub fn classify_themes(
    concepts: &mut HashMap<String, Concept>,
    config: &AnalysisConfig,
) -> Vec<Theme> {
    let mut themes = Vec::new();

    for category in &config.categories {
        let mut members: Vec<(String, usize)> = Vec::new();
        for concept in concepts.values_mut() {
            if matches_category(&concept.term, &category.keywords) {
                concept.categories.insert(category.id.clone());
                members.push((concept.term.clone(), concept.occurrences.len()));
            }
        }
        if members.len() < config.theme_min_concepts {
            continue;
        }
        members.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        themes.push(Theme {
            id: category.id.clone(),
            name: category.name.clone(),
            concept_count: members.len(),
            top_terms: members.iter().take(5).map(|(t, _)| t.clone()).collect(),
            keywords: category.keywords.clone(),
        });
    }
    themes
}
