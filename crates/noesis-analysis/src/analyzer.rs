//! The analyzer: orchestrates extraction, themes, connections, and
//! tensions into one [`AnalysisReport`].

use noesis_core::config::AnalysisConfig;
use noesis_core::errors::{NoesisResult, PhaseError};
use noesis_core::models::{AnalysisReport, Phase};
use noesis_core::traits::ProgressSink;
use noesis_core::CancelToken;
use noesis_ingest::CorpusIndex;
use tracing::info;

use crate::extraction::extract_concepts;
use crate::graph::build_connections;
use crate::tensions::detect_tensions;
use crate::themes::classify_themes;

pub struct ConceptAnalyzer {
    config: AnalysisConfig,
}

impl ConceptAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Analyze the corpus. Progress milestones: extraction fills 0..=50,
    /// themes report 60, connections 80, tensions 95, done 100.
    pub fn analyze(
        &self,
        index: &CorpusIndex,
        progress: &dyn ProgressSink,
        cancel: &CancelToken,
    ) -> NoesisResult<AnalysisReport> {
        let check = |label: &str| -> NoesisResult<()> {
            if cancel.is_cancelled() {
                info!(at = label, "analysis cancelled");
                return Err(PhaseError::Cancelled {
                    phase: Phase::Analyzing,
                }
                .into());
            }
            Ok(())
        };

        progress.progress(Phase::Analyzing, 0, "extracting concepts");
        check("extraction")?;
        let mut concepts = extract_concepts(index, &self.config, |done, total| {
            let percent = (done * 50 / total.max(1)) as u8;
            progress.progress(Phase::Analyzing, percent, "extracting concepts");
        });

        check("themes")?;
        let themes = classify_themes(&mut concepts, &self.config);
        progress.progress(Phase::Analyzing, 60, "classifying themes");

        check("connections")?;
        let connections = build_connections(&mut concepts, &self.config);
        progress.progress(Phase::Analyzing, 80, "building connections");

        check("tensions")?;
        let tensions = detect_tensions(&concepts, &self.config);
        progress.progress(Phase::Analyzing, 95, "detecting tensions");

        let report = AnalysisReport {
            concepts,
            themes,
            connections,
            tensions,
        };
        info!(
            concepts = report.concepts.len(),
            themes = report.themes.len(),
            connections = report.connections.len(),
            tensions = report.tensions.len(),
            "analysis complete"
        );
        progress.progress(Phase::Analyzing, 100, "analysis complete");
        Ok(report)
    }
}
