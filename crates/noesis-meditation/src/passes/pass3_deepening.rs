//! Deepening: dwell on each theme and on the strongest concept
//! connections within it.

use noesis_core::models::{AnalysisReport, Insight, InsightKind};

/// Strongest connections to dwell on beyond the themes themselves.
const TOP_CONNECTIONS: usize = 10;

pub fn deepen(report: &AnalysisReport, pass_number: usize) -> Vec<Insight> {
    let mut insights = Vec::new();

    for theme in &report.themes {
        insights.push(Insight::new(
            InsightKind::Deepening,
            format!("theme:{}", theme.id),
            format!(
                "The theme \"{}\" gathers {} concepts; at its center sit {}.",
                theme.name,
                theme.concept_count,
                theme.top_terms.join(", ")
            ),
            pass_number,
        ));
    }

    for connection in report.connections.iter().take(TOP_CONNECTIONS) {
        insights.push(Insight::new(
            InsightKind::Deepening,
            format!("connection:{}+{}", connection.source, connection.target),
            format!(
                "\"{}\" and \"{}\" keep appearing together, across {} chapters; each deepens the other.",
                connection.source, connection.target, connection.strength
            ),
            pass_number,
        ));
    }

    insights
}
