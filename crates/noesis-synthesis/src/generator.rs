//! The synthesis generator: composes the derivative book from the
//! corpus, the analysis report, and the accumulated insights.

use chrono::Utc;
use noesis_core::config::SynthesisConfig;
use noesis_core::errors::{NoesisResult, PhaseError};
use noesis_core::models::{
    AnalysisReport, Epigraph, MeditationHistory, Phase, SynthChapter, SynthesizedBook,
};
use noesis_core::traits::ProgressSink;
use noesis_core::CancelToken;
use noesis_ingest::CorpusIndex;
use tracing::info;

use crate::glossary::build_glossary;
use crate::practices::distill_practices;
use crate::structure::plan_parts;

/// A planned chapter before it is placed into a part.
struct Seed {
    id: String,
    title: String,
    body: String,
    closing_question: String,
    source_theme: Option<String>,
}

pub struct SynthesisGenerator {
    config: SynthesisConfig,
}

impl SynthesisGenerator {
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Generate the whole book. The output is rebuilt from scratch on
    /// every call; nothing is merged from a previous synthesis.
    pub fn generate(
        &self,
        index: &CorpusIndex,
        report: &AnalysisReport,
        history: &MeditationHistory,
        progress: &dyn ProgressSink,
        cancel: &CancelToken,
    ) -> NoesisResult<SynthesizedBook> {
        let check = || -> NoesisResult<()> {
            if cancel.is_cancelled() {
                return Err(PhaseError::Cancelled {
                    phase: Phase::Synthesizing,
                }
                .into());
            }
            Ok(())
        };

        progress.progress(Phase::Synthesizing, 0, "planning structure");
        check()?;

        let epigraphs = corpus_epigraphs(index);
        let mut chapters = Vec::new();

        // An empty corpus yields a book with no chapters; practices and
        // glossary below still make it well formed.
        if !index.is_empty() {
            chapters.push(self.prologue(index, history));
        }
        if !report.is_empty() {
            let mut seeds = self.seed_chapters(report, history);
            let parts = plan_parts(self.config.chapters);
            let mut epigraph_cycle = epigraphs.iter().cycle();
            let mut chapter_no = 1;
            for part in parts {
                for _ in 0..part.chapters {
                    let Some(seed) = seeds.next() else { break };
                    chapters.push(SynthChapter {
                        id: format!("ch-{chapter_no}"),
                        part: part.title.clone(),
                        title: seed.title,
                        epigraph: epigraph_cycle.next().cloned(),
                        body: seed.body,
                        closing_question: Some(seed.closing_question),
                        source_theme: seed.source_theme,
                    });
                    chapter_no += 1;
                }
            }
        }
        progress.progress(Phase::Synthesizing, 60, "chapters composed");
        check()?;

        let practices = distill_practices(index, &self.config);
        progress.progress(Phase::Synthesizing, 80, "practices distilled");
        check()?;

        let glossary = build_glossary(report);
        progress.progress(Phase::Synthesizing, 90, "glossary built");

        let book = SynthesizedBook {
            title: self.config.book_title.clone(),
            subtitle: self.config.book_subtitle.clone(),
            generated_at: Utc::now(),
            source_books: index.stats().books_loaded,
            chapters,
            practices,
            glossary,
        };
        info!(
            chapters = book.chapters.len(),
            practices = book.practices.len(),
            glossary = book.glossary.len(),
            "synthesis complete"
        );
        progress.progress(Phase::Synthesizing, 100, "synthesis complete");
        Ok(book)
    }

    fn prologue(&self, index: &CorpusIndex, history: &MeditationHistory) -> SynthChapter {
        let stats = index.stats();
        let mut body = format!(
            "This book distills {} source books ({} chapters, {} words) into a single \
             evolving argument. It was not written; it was grown.",
            stats.books_loaded, stats.total_chapters, stats.total_words
        );
        for insight in history
            .insights
            .iter()
            .filter(|i| i.source.starts_with("corpus"))
        {
            body.push_str("\n\n");
            body.push_str(&insight.content);
        }
        SynthChapter {
            id: "prologue".to_string(),
            part: "Prologue".to_string(),
            title: "How This Book Came to Be".to_string(),
            epigraph: None,
            body,
            closing_question: Some("What would these books say to each other?".to_string()),
            source_theme: None,
        }
    }

    /// Seed chapters in priority order: themes, then tensions, then the
    /// remaining strongest concepts.
    fn seed_chapters<'a>(
        &self,
        report: &'a AnalysisReport,
        history: &'a MeditationHistory,
    ) -> impl Iterator<Item = Seed> + 'a {
        let insights_for = move |source_prefix: String| -> Vec<&'a str> {
            history
                .insights
                .iter()
                .filter(move |i| i.source.starts_with(&source_prefix))
                .map(|i| i.content.as_str())
                .collect()
        };

        let mut seeds: Vec<Seed> = Vec::new();

        for theme in &report.themes {
            let mut body = format!(
                "The corpus keeps returning to {}. Its vocabulary here is {}.",
                theme.name.to_lowercase(),
                theme.top_terms.join(", ")
            );
            for content in insights_for(format!("theme:{}", theme.id)) {
                body.push_str("\n\n");
                body.push_str(content);
            }
            seeds.push(Seed {
                id: theme.id.clone(),
                title: theme.name.clone(),
                body,
                closing_question: format!(
                    "Where does {} already show up in your own days?",
                    theme.top_terms.first().map(String::as_str).unwrap_or("this theme")
                ),
                source_theme: Some(theme.id.clone()),
            });
        }

        for tension in &report.tensions {
            let mut body = tension.synthesis.clone();
            for content in insights_for(format!("tension:{}-{}", tension.pole_a, tension.pole_b)) {
                body.push_str("\n\n");
                body.push_str(content);
            }
            seeds.push(Seed {
                id: format!("tension-{}-{}", tension.pole_a, tension.pole_b),
                title: format!(
                    "Between {} and {}",
                    capitalize(&tension.pole_a),
                    capitalize(&tension.pole_b)
                ),
                body,
                closing_question: format!(
                    "When did you last have to choose between {} and {}?",
                    tension.pole_a, tension.pole_b
                ),
                source_theme: None,
            });
        }

        let used: Vec<String> = seeds.iter().map(|s| s.id.clone()).collect();
        for concept in report.top_concepts(self.config.chapters) {
            if used.iter().any(|id| id == &concept.term) {
                continue;
            }
            let mut body = format!(
                "\"{}\" surfaces in {} chapters of the corpus.",
                concept.term,
                concept.chapters().len()
            );
            if !concept.related_terms.is_empty() {
                let related: Vec<&str> = concept
                    .related_terms
                    .iter()
                    .take(4)
                    .map(String::as_str)
                    .collect();
                body.push_str(&format!(" It travels with {}.", related.join(", ")));
            }
            for content in insights_for(format!("thread:{}", concept.term)) {
                body.push_str("\n\n");
                body.push_str(content);
            }
            seeds.push(Seed {
                id: concept.term.clone(),
                title: format!("On {}", capitalize(&concept.term)),
                body,
                closing_question: format!("What does {} ask of you?", concept.term),
                source_theme: None,
            });
        }

        seeds.into_iter()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Every epigraph in the corpus, attributed to its source book.
fn corpus_epigraphs(index: &CorpusIndex) -> Vec<Epigraph> {
    index
        .chapters_sorted()
        .into_iter()
        .filter_map(|chapter| {
            let text = chapter.epigraph.clone()?;
            let author = index
                .book(&chapter.book_id)
                .map(|b| b.title.clone())
                .unwrap_or_else(|| chapter.book_id.clone());
            Some(Epigraph { text, author })
        })
        .collect()
}
