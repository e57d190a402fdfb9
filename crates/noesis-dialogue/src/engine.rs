//! The dialogue engine: classifies the question, retrieves grounding
//! context, and composes an answer that cites its sources.

use noesis_core::config::DialogueConfig;
use noesis_core::models::{
    AnalysisReport, GroundedAnswer, MeditationHistory, QuestionMode, SynthesizedBook,
};
use noesis_ingest::CorpusIndex;
use tracing::debug;

use crate::context::{question_keywords, retrieve_context};

/// How many follow-up questions an answer suggests.
const FOLLOW_UPS: usize = 3;

pub struct DialogueEngine {
    config: DialogueConfig,
}

impl DialogueEngine {
    pub fn new(config: DialogueConfig) -> Self {
        Self { config }
    }

    /// Answer a question. The answer cites chapter references unless
    /// the corpus is empty or nothing relevant was found, and both of
    /// those cases say so explicitly.
    pub fn ask(
        &self,
        index: &CorpusIndex,
        report: &AnalysisReport,
        history: &MeditationHistory,
        synthesis: Option<&SynthesizedBook>,
        question: &str,
    ) -> GroundedAnswer {
        let mode = detect_mode(question);

        if index.is_empty() {
            return GroundedAnswer {
                text: "No corpus is available yet; ingest at least one book before asking \
                       questions."
                    .to_string(),
                mode,
                references: Vec::new(),
                suggested_practices: Vec::new(),
                follow_up_questions: Vec::new(),
                context_fragments: 0,
            };
        }

        let fragments = retrieve_context(index, question, &self.config);
        debug!(?mode, fragments = fragments.len(), "composing answer");

        let mut text = String::new();
        if fragments.is_empty() {
            text.push_str(
                "Nothing in the corpus speaks directly to that. The books gathered here \
                 circle other ground",
            );
            let top: Vec<&str> = report
                .top_concepts(3)
                .iter()
                .map(|c| c.term.as_str())
                .collect();
            if top.is_empty() {
                text.push('.');
            } else {
                text.push_str(&format!(": {}.", top.join(", ")));
            }
        } else {
            text.push_str(match mode {
                QuestionMode::Practice => "The corpus answers this in practice as much as in words. ",
                QuestionMode::Synthesis => "Several books bear on this together. ",
                QuestionMode::Exploration => "The corpus circles this question from a few directions. ",
                QuestionMode::Default => "",
            });
            for fragment in &fragments {
                text.push_str(&format!(
                    "\n\nIn \"{}\" ({}): {}",
                    fragment.reference.title, fragment.reference.book_id, fragment.text
                ));
            }
        }

        let insights = history.insights_matching(question, self.config.max_insights);
        if !insights.is_empty() {
            text.push_str("\n\nFrom the meditation on the corpus:");
            for insight in &insights {
                text.push_str(&format!("\n- {}", insight.content));
            }
        }

        GroundedAnswer {
            context_fragments: fragments.len(),
            references: fragments.into_iter().map(|f| f.reference).collect(),
            suggested_practices: self.suggest_practices(synthesis, question),
            follow_up_questions: follow_ups(report, question),
            mode,
            text,
        }
    }

    /// Practices from the synthesized book whose wording touches the
    /// question's keywords.
    fn suggest_practices(
        &self,
        synthesis: Option<&SynthesizedBook>,
        question: &str,
    ) -> Vec<String> {
        let Some(book) = synthesis else {
            return Vec::new();
        };
        let keywords = question_keywords(question);
        let mut suggested = Vec::new();
        for practice in &book.practices {
            if suggested.len() >= self.config.max_exercises {
                break;
            }
            let haystack =
                format!("{} {} {}", practice.category, practice.title, practice.description)
                    .to_lowercase();
            if keywords.iter().any(|k| haystack.contains(k.as_str())) {
                suggested.push(practice.title.clone());
            }
        }
        suggested
    }
}

fn detect_mode(question: &str) -> QuestionMode {
    let q = question.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| q.contains(n));
    if has(&["practice", "exercise", "how do i", "how can i", "what should i do"]) {
        QuestionMode::Practice
    } else if has(&["connect", "relate", "relation", "between", "compare", "common", "together"]) {
        QuestionMode::Synthesis
    } else if has(&["what", "why", "meaning", "explore", "tell me"]) {
        QuestionMode::Exploration
    } else {
        QuestionMode::Default
    }
}

/// Follow-up questions built from concepts related to the question's
/// strongest keyword, falling back to the corpus-wide top concepts.
fn follow_ups(report: &AnalysisReport, question: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for keyword in question_keywords(question) {
        for (related, _) in report.related_concepts(&keyword, FOLLOW_UPS) {
            if !terms.contains(&related) {
                terms.push(related);
            }
        }
        if !terms.is_empty() {
            break;
        }
    }
    if terms.is_empty() {
        terms = report
            .top_concepts(FOLLOW_UPS)
            .iter()
            .map(|c| c.term.clone())
            .collect();
    }
    terms.truncate(FOLLOW_UPS);
    terms
        .into_iter()
        .map(|t| format!("What does the corpus say about {t}?"))
        .collect()
}

/// Starter questions offered before the user has asked anything.
pub fn suggested_questions(report: &AnalysisReport) -> Vec<String> {
    let mut questions: Vec<String> = report
        .themes
        .iter()
        .take(3)
        .map(|t| format!("What does the corpus teach about {}?", t.name.to_lowercase()))
        .collect();
    for tension in report.tensions.iter().take(2) {
        questions.push(format!(
            "How do the books hold {} against {}?",
            tension.pole_a, tension.pole_b
        ));
    }
    if questions.is_empty() {
        questions.push("What are these books about?".to_string());
    }
    questions
}
