//! Meditation passes and the insights they accumulate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five distinct pass kinds, run in this order. Configured pass
/// counts above five cycle through the kinds again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Comprehension,
    Connection,
    Deepening,
    Integration,
    Transcendence,
}

impl InsightKind {
    /// Pass kind for a 1-indexed pass number.
    pub fn for_pass(number: usize) -> Self {
        const ORDER: [InsightKind; 5] = [
            InsightKind::Comprehension,
            InsightKind::Connection,
            InsightKind::Deepening,
            InsightKind::Integration,
            InsightKind::Transcendence,
        ];
        ORDER[(number.saturating_sub(1)) % ORDER.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            InsightKind::Comprehension => "Comprehension",
            InsightKind::Connection => "Connection",
            InsightKind::Deepening => "Deepening",
            InsightKind::Integration => "Integration",
            InsightKind::Transcendence => "Transcendence",
        }
    }
}

/// One unit of understanding produced by a meditation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    /// What this insight was derived from (a book id, `theme:<id>`,
    /// `tension:<a>-<b>`, ...).
    pub source: String,
    pub content: String,
    /// 1-indexed pass that produced this insight.
    pub pass_number: usize,
    /// blake3 hash of the content, used for incremental dedup.
    pub content_hash: String,
}

impl Insight {
    pub fn new(kind: InsightKind, source: impl Into<String>, content: impl Into<String>, pass_number: usize) -> Self {
        let content = content.into();
        let content_hash = blake3::hash(content.as_bytes()).to_hex().to_string();
        Self {
            kind,
            source: source.into(),
            content,
            pass_number,
            content_hash,
        }
    }
}

/// The record of one completed meditation pass. Append-only: never
/// mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeditationPass {
    /// 1-indexed pass number.
    pub number: usize,
    pub kind: InsightKind,
    /// Insights first discovered in this pass (strictly incremental
    /// relative to all prior passes). May be empty.
    pub insights: Vec<Insight>,
    pub recorded_at: DateTime<Utc>,
}

/// All passes plus the flattened, order-preserving insight accumulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeditationHistory {
    pub passes: Vec<MeditationPass>,
    pub insights: Vec<Insight>,
}

impl MeditationHistory {
    pub fn pass(&self, number: usize) -> Option<&MeditationPass> {
        self.passes.iter().find(|p| p.number == number)
    }

    pub fn total_insights(&self) -> usize {
        self.insights.len()
    }

    /// Insights whose source or content mentions any of the query words.
    pub fn insights_matching(&self, query: &str, limit: usize) -> Vec<&Insight> {
        let words: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(|w| w.to_string())
            .collect();
        self.insights
            .iter()
            .filter(|i| {
                let haystack = format!("{} {}", i.source, i.content).to_lowercase();
                words.iter().any(|w| haystack.contains(w.as_str()))
            })
            .take(limit)
            .collect()
    }
}
