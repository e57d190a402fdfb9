//! The pipeline coordinator: drives Idle -> Ingesting -> Analyzing ->
//! Meditating -> Synthesizing -> Ready, owns every derived artifact and
//! the dialogue history, and is the only place phase transitions happen.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use chrono::Utc;
use noesis_analysis::ConceptAnalyzer;
use noesis_core::config::NoesisConfig;
use noesis_core::errors::{NoesisResult, PhaseError, SynthesisError};
use noesis_core::models::{
    AnalysisReport, CorpusStats, DialogueTurn, ExportFormat, ExportedDocument, GroundedAnswer,
    IngestSummary, MeditationHistory, Phase, PhaseProgress, PhaseStatus, PipelineSnapshot,
    SynthesizedBook,
};
use noesis_core::traits::{CorpusSource, LogNotifier, LogProgressSink, Notifier, ProgressSink};
use noesis_core::CancelToken;
use noesis_dialogue::DialogueEngine;
use noesis_ingest::{CorpusIndex, CorpusLoader};
use noesis_meditation::MeditationEngine;
use noesis_synthesis::{export_book, SynthesisGenerator};
use tracing::{info, warn};

use crate::persistence::StateStore;

/// Records the latest per-phase percent while forwarding everything to
/// the user-provided sink.
struct TrackingSink {
    inner: Arc<dyn ProgressSink>,
    ingestion: AtomicU8,
    analysis: AtomicU8,
    meditation: AtomicU8,
    synthesis: AtomicU8,
}

impl TrackingSink {
    fn new(inner: Arc<dyn ProgressSink>) -> Self {
        Self {
            inner,
            ingestion: AtomicU8::new(0),
            analysis: AtomicU8::new(0),
            meditation: AtomicU8::new(0),
            synthesis: AtomicU8::new(0),
        }
    }

    fn snapshot(&self) -> PhaseProgress {
        PhaseProgress {
            ingestion: self.ingestion.load(Ordering::Relaxed),
            analysis: self.analysis.load(Ordering::Relaxed),
            meditation: self.meditation.load(Ordering::Relaxed),
            synthesis: self.synthesis.load(Ordering::Relaxed),
        }
    }

    fn restore(&self, progress: PhaseProgress) {
        self.ingestion.store(progress.ingestion, Ordering::Relaxed);
        self.analysis.store(progress.analysis, Ordering::Relaxed);
        self.meditation.store(progress.meditation, Ordering::Relaxed);
        self.synthesis.store(progress.synthesis, Ordering::Relaxed);
    }
}

impl ProgressSink for TrackingSink {
    fn progress(&self, phase: Phase, percent: u8, label: &str) {
        match phase {
            Phase::Ingesting => self.ingestion.store(percent, Ordering::Relaxed),
            Phase::Analyzing => self.analysis.store(percent, Ordering::Relaxed),
            Phase::Meditating => self.meditation.store(percent, Ordering::Relaxed),
            Phase::Synthesizing => self.synthesis.store(percent, Ordering::Relaxed),
            _ => {}
        }
        self.inner.progress(phase, percent, label);
    }

    fn phase_status(&self, phase: Phase, status: PhaseStatus) {
        self.inner.phase_status(phase, status);
    }
}

pub struct PipelineCoordinator {
    config: NoesisConfig,
    loader: CorpusLoader,
    analyzer: ConceptAnalyzer,
    meditation: MeditationEngine,
    generator: SynthesisGenerator,
    dialogue: DialogueEngine,
    tracker: Arc<TrackingSink>,
    notifier: Arc<dyn Notifier>,
    cancel: CancelToken,

    phase: Phase,
    index: CorpusIndex,
    ingest_summary: Option<IngestSummary>,
    report: Option<AnalysisReport>,
    history: MeditationHistory,
    book: Option<SynthesizedBook>,
    turns: Vec<DialogueTurn>,
}

impl PipelineCoordinator {
    /// Build a coordinator with every component constructed from the
    /// config. Equivalent to [`with_components`](Self::with_components)
    /// with the default component set.
    pub fn new(config: NoesisConfig, source: Arc<dyn CorpusSource>) -> Self {
        let loader = CorpusLoader::new(source, config.corpus.clone());
        let analyzer = ConceptAnalyzer::new(config.analysis.clone());
        let meditation = MeditationEngine::new(config.meditation.clone());
        let generator = SynthesisGenerator::new(config.synthesis.clone());
        let dialogue = DialogueEngine::new(config.dialogue.clone());
        Self::with_components(config, loader, analyzer, meditation, generator, dialogue)
    }

    /// Build a coordinator from already-constructed components. All
    /// wiring is explicit; nothing is resolved from ambient state.
    pub fn with_components(
        config: NoesisConfig,
        loader: CorpusLoader,
        analyzer: ConceptAnalyzer,
        meditation: MeditationEngine,
        generator: SynthesisGenerator,
        dialogue: DialogueEngine,
    ) -> Self {
        Self {
            config,
            loader,
            analyzer,
            meditation,
            generator,
            dialogue,
            tracker: Arc::new(TrackingSink::new(Arc::new(LogProgressSink))),
            notifier: Arc::new(LogNotifier),
            cancel: CancelToken::new(),
            phase: Phase::Idle,
            index: CorpusIndex::new(),
            ingest_summary: None,
            report: None,
            history: MeditationHistory::default(),
            book: None,
            turns: Vec::new(),
        }
    }

    pub fn with_progress(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.tracker = Arc::new(TrackingSink::new(sink));
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Token shared with all phases; cancel it from another thread to
    /// abort the run at the next progress boundary.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> PhaseProgress {
        self.tracker.snapshot()
    }

    pub fn corpus_stats(&self) -> &CorpusStats {
        self.index.stats()
    }

    pub fn ingest_summary(&self) -> Option<&IngestSummary> {
        self.ingest_summary.as_ref()
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn history(&self) -> &MeditationHistory {
        &self.history
    }

    pub fn book(&self) -> Option<&SynthesizedBook> {
        self.book.as_ref()
    }

    pub fn dialogue_history(&self) -> &[DialogueTurn] {
        &self.turns
    }

    /// Run the whole pipeline to `Ready`. A failed pipeline must be
    /// [`reset`](Self::reset) before it can run again; running from
    /// `Ready` regenerates everything from the source.
    pub fn run(&mut self) -> NoesisResult<()> {
        if self.phase == Phase::Failed {
            return Err(PhaseError::AlreadyFailed.into());
        }
        info!("pipeline run starting");
        match self.run_phases() {
            Ok(()) => {
                self.phase = Phase::Ready;
                self.notifier.pipeline_ready();
                info!("pipeline ready");
                Ok(())
            }
            Err(e) => {
                // Artifacts from completed phases stay available.
                self.phase = Phase::Failed;
                self.notifier.pipeline_failed(&e.to_string());
                warn!(error = %e, "pipeline failed");
                Err(e)
            }
        }
    }

    fn run_phases(&mut self) -> NoesisResult<()> {
        self.enter(Phase::Ingesting);
        let (index, summary) = self.loader.ingest_all(&*self.tracker, &self.cancel)?;
        self.index = index;
        self.ingest_summary = Some(summary);
        self.complete(Phase::Ingesting);

        self.enter(Phase::Analyzing);
        let report = self
            .analyzer
            .analyze(&self.index, &*self.tracker, &self.cancel)?;
        self.report = Some(report);
        self.complete(Phase::Analyzing);

        self.enter(Phase::Meditating);
        // run_phases just assigned the report; missing here means a
        // phase-ordering bug, not user error.
        let report = self.report.as_ref().ok_or(PhaseError::Failed {
            phase: Phase::Meditating,
            reason: "analysis report missing".to_string(),
        })?;
        self.history = self
            .meditation
            .meditate(&self.index, report, &*self.tracker, &self.cancel)?;
        self.complete(Phase::Meditating);

        self.enter(Phase::Synthesizing);
        let report = self.report.as_ref().ok_or(PhaseError::Failed {
            phase: Phase::Synthesizing,
            reason: "analysis report missing".to_string(),
        })?;
        let book = self.generator.generate(
            &self.index,
            report,
            &self.history,
            &*self.tracker,
            &self.cancel,
        )?;
        self.book = Some(book);
        self.complete(Phase::Synthesizing);
        Ok(())
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.tracker.phase_status(phase, PhaseStatus::Running);
    }

    fn complete(&mut self, phase: Phase) {
        self.tracker.phase_status(phase, PhaseStatus::Completed);
        self.notifier.phase_completed(phase);
    }

    /// Clear a failed or cancelled pipeline back to `Idle` with a fresh
    /// cancel token. Derived artifacts and dialogue are kept.
    pub fn reset(&mut self) {
        self.cancel = CancelToken::new();
        self.phase = Phase::Idle;
    }

    /// Ask a question and record the exchange. History is bounded by
    /// the configured maximum; the oldest turns fall off first.
    pub fn ask(&mut self, question: &str) -> GroundedAnswer {
        let empty_report;
        let report = match &self.report {
            Some(r) => r,
            None => {
                empty_report = AnalysisReport::default();
                &empty_report
            }
        };
        let answer = self.dialogue.ask(
            &self.index,
            report,
            &self.history,
            self.book.as_ref(),
            question,
        );
        self.turns.push(DialogueTurn {
            id: uuid::Uuid::new_v4(),
            question: question.to_string(),
            answer: answer.text.clone(),
            references: answer.references.clone(),
            asked_at: Utc::now(),
        });
        let max = self.config.dialogue.max_history;
        if self.turns.len() > max {
            let excess = self.turns.len() - max;
            self.turns.drain(..excess);
        }
        answer
    }

    pub fn clear_dialogue(&mut self) {
        self.turns.clear();
    }

    /// Starter questions for an empty conversation.
    pub fn suggested_questions(&self) -> Vec<String> {
        match &self.report {
            Some(report) => noesis_dialogue::suggested_questions(report),
            None => noesis_dialogue::suggested_questions(&AnalysisReport::default()),
        }
    }

    /// Export the synthesized book, if one exists.
    pub fn export(&self, format: ExportFormat) -> NoesisResult<ExportedDocument> {
        let book = self.book.as_ref().ok_or(SynthesisError::NothingToExport)?;
        export_book(book, format)
    }

    /// Everything except the corpus itself; books are re-ingested from
    /// the source after a restore.
    pub fn snapshot(&self) -> PipelineSnapshot {
        let mut snapshot = PipelineSnapshot::new(self.phase, self.tracker.snapshot());
        snapshot.analysis = self.report.clone();
        snapshot.meditation = self.history.clone();
        snapshot.synthesis = self.book.clone();
        snapshot.dialogue = self.turns.clone();
        snapshot
    }

    /// Persist current state. Failures are logged and swallowed; a
    /// failed save never disturbs the running pipeline.
    pub fn save_state(&self, store: &StateStore) {
        if let Err(e) = store.save(&self.snapshot()) {
            warn!(error = %e, "state save failed, continuing without persistence");
        }
    }

    /// Restore persisted state. On any load error the in-memory state
    /// is left untouched and `false` is returned.
    pub fn restore_state(&mut self, store: &StateStore) -> bool {
        let snapshot = match store.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "state load failed, keeping in-memory state");
                return false;
            }
        };
        self.phase = snapshot.phase;
        self.tracker.restore(snapshot.progress);
        self.report = snapshot.analysis;
        self.history = snapshot.meditation;
        self.book = snapshot.synthesis;
        self.turns = snapshot.dialogue;
        info!(phase = %self.phase, "state restored, corpus requires re-ingestion");
        true
    }
}
