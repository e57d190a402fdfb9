//! Integration: hold each detected tension and articulate what the
//! corpus does with it.

use noesis_core::models::{AnalysisReport, Insight, InsightKind};

pub fn integrate(report: &AnalysisReport, pass_number: usize) -> Vec<Insight> {
    report
        .tensions
        .iter()
        .map(|tension| {
            let stance = if tension.is_paradox {
                "held as a paradox within single chapters"
            } else {
                "split across different books"
            };
            Insight::new(
                InsightKind::Integration,
                format!("tension:{}-{}", tension.pole_a, tension.pole_b),
                format!(
                    "Between {} and {}, {}. {}",
                    tension.pole_a, tension.pole_b, stance, tension.synthesis
                ),
                pass_number,
            )
        })
        .collect()
}
