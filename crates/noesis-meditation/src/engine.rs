//! The meditation engine: runs the configured number of passes and
//! accumulates deduplicated insights.

use std::collections::HashSet;

use chrono::Utc;
use noesis_core::config::MeditationConfig;
use noesis_core::errors::{NoesisResult, PhaseError};
use noesis_core::models::{
    AnalysisReport, Insight, InsightKind, MeditationHistory, MeditationPass, Phase,
};
use noesis_core::traits::ProgressSink;
use noesis_core::CancelToken;
use noesis_ingest::CorpusIndex;
use tracing::{debug, info};

use crate::passes::{
    pass1_comprehension, pass2_connection, pass3_deepening, pass4_integration,
    pass5_transcendence,
};

pub struct MeditationEngine {
    config: MeditationConfig,
}

impl MeditationEngine {
    pub fn new(config: MeditationConfig) -> Self {
        Self { config }
    }

    /// Run exactly the configured number of passes. Pass kinds follow
    /// the fixed five-kind cycle; each recorded pass contains only
    /// insights whose content was not produced by any earlier pass.
    pub fn meditate(
        &self,
        index: &CorpusIndex,
        report: &AnalysisReport,
        progress: &dyn ProgressSink,
        cancel: &CancelToken,
    ) -> NoesisResult<MeditationHistory> {
        let total = self.config.passes.max(1);
        progress.progress(Phase::Meditating, 0, "beginning meditation");

        let mut history = MeditationHistory::default();
        let mut seen: HashSet<String> = HashSet::new();

        for number in 1..=total {
            if cancel.is_cancelled() {
                return Err(PhaseError::Cancelled {
                    phase: Phase::Meditating,
                }
                .into());
            }

            let kind = InsightKind::for_pass(number);
            let candidates = self.run_pass(kind, number, index, report);
            let fresh: Vec<Insight> = candidates
                .into_iter()
                .filter(|i| seen.insert(i.content_hash.clone()))
                .collect();

            debug!(pass = number, kind = kind.label(), insights = fresh.len(), "pass complete");
            history.insights.extend(fresh.iter().cloned());
            history.passes.push(MeditationPass {
                number,
                kind,
                insights: fresh,
                recorded_at: Utc::now(),
            });

            let percent = (number * 100 / total) as u8;
            let label = format!("pass {number}: {}", kind.label());
            progress.progress(Phase::Meditating, percent, &label);
        }

        info!(
            passes = history.passes.len(),
            insights = history.total_insights(),
            "meditation complete"
        );
        Ok(history)
    }

    fn run_pass(
        &self,
        kind: InsightKind,
        number: usize,
        index: &CorpusIndex,
        report: &AnalysisReport,
    ) -> Vec<Insight> {
        match kind {
            InsightKind::Comprehension => pass1_comprehension::comprehend(index, report, number),
            InsightKind::Connection => pass2_connection::connect(report, &self.config, number),
            InsightKind::Deepening => pass3_deepening::deepen(report, number),
            InsightKind::Integration => pass4_integration::integrate(report, number),
            InsightKind::Transcendence => pass5_transcendence::transcend(index, report, number),
        }
    }
}
