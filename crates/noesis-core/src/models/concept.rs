//! Extracted concepts, thematic groupings, and the relations between them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::keys::ChapterKey;

/// Where a concept was observed. Every concept carries at least one
/// occurrence — provenance is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub chapter: ChapterKey,
    pub book_id: String,
    pub frequency: usize,
}

/// A named idea extracted from the corpus, tagged with the chapters it
/// occurs in and the thematic categories it was classified under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub term: String,
    pub occurrences: Vec<Occurrence>,
    /// BTreeSet keeps category order deterministic across runs.
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub related_terms: BTreeSet<String>,
}

impl Concept {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            occurrences: Vec::new(),
            categories: BTreeSet::new(),
            related_terms: BTreeSet::new(),
        }
    }

    pub fn occurrence_count(&self) -> usize {
        self.occurrences.len()
    }

    /// Distinct chapters this concept was observed in, sorted.
    pub fn chapters(&self) -> BTreeSet<&ChapterKey> {
        self.occurrences.iter().map(|o| &o.chapter).collect()
    }
}

/// A grouping of related concepts under a thematic category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub concept_count: usize,
    pub top_terms: Vec<String>,
    pub keywords: Vec<String>,
}

/// The kind of relation between two concepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// The concepts reinforce each other (co-occurrence).
    Reinforcing,
    /// The concepts pull in opposite directions (dialectic tension).
    Conflicting,
}

/// An undirected co-occurrence relation between two concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
    pub kind: RelationKind,
    /// Number of shared chapters.
    pub strength: usize,
    pub shared_chapters: Vec<ChapterKey>,
}

/// An unresolved conflict between two concept poles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tension {
    pub pole_a: String,
    pub pole_b: String,
    pub shared_chapters: Vec<ChapterKey>,
    /// One-line synthesis of the dialectic.
    pub synthesis: String,
    pub is_paradox: bool,
}

/// A keyword-defined category used for thematic classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThematicCategory {
    pub id: String,
    pub name: String,
    pub keywords: Vec<String>,
}

impl ThematicCategory {
    /// The built-in category set covering the corpus the pipeline was
    /// designed around. Deployments override this through config.
    pub fn builtin() -> Vec<Self> {
        let raw: [(&str, &str, &[&str]); 6] = [
            (
                "awareness",
                "Awareness and Awakening",
                &["awareness", "awakening", "meditation", "attention", "presence", "mindfulness", "observer", "witness"],
            ),
            (
                "ecology",
                "Ecology and Reconnection",
                &["ecology", "nature", "earth", "biosphere", "reconnection", "interdependence", "life", "wilderness"],
            ),
            (
                "action",
                "Transformative Action",
                &["action", "change", "transformation", "transition", "movement", "praxis", "commitment", "engagement"],
            ),
            (
                "community",
                "Relationship and Community",
                &["relationship", "community", "love", "bond", "collective", "communication", "empathy", "belonging"],
            ),
            (
                "creativity",
                "Creativity and Simplicity",
                &["creativity", "art", "simplicity", "minimalism", "essential", "flow", "expression", "play"],
            ),
            (
                "machine",
                "Human-Machine Integration",
                &["intelligence", "machine", "algorithm", "technology", "artificial", "symbiosis", "coevolution", "automation"],
            ),
        ];
        raw.into_iter()
            .map(|(id, name, kws)| Self {
                id: id.to_string(),
                name: name.to_string(),
                keywords: kws.iter().map(|k| k.to_string()).collect(),
            })
            .collect()
    }
}
