//! Concept connection graph.
//!
//! Two concepts are connected when they co-occur in at least
//! `min_shared_chapters` chapters. The graph is undirected; each edge
//! carries the set of shared chapters.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use noesis_core::config::AnalysisConfig;
use noesis_core::constants::MAX_CONCEPT_CONNECTIONS;
use noesis_core::models::{ChapterKey, Concept, Connection, RelationKind};
use petgraph::graph::{NodeIndex, UnGraph};

/// Build the co-occurrence graph and flatten it to a capped connection
/// list, ordered by descending strength then pair. Also fills in each
/// concept's `related_terms` from its graph neighborhood.
pub fn build_connections(
    concepts: &mut HashMap<String, Concept>,
    config: &AnalysisConfig,
) -> Vec<Connection> {
    // Invert provenance: chapter -> terms present in it. BTree keeps
    // pair enumeration deterministic.
    let mut by_chapter: BTreeMap<ChapterKey, BTreeSet<String>> = BTreeMap::new();
    for concept in concepts.values() {
        for occurrence in &concept.occurrences {
            by_chapter
                .entry(occurrence.chapter.clone())
                .or_default()
                .insert(concept.term.clone());
        }
    }

    let mut shared: BTreeMap<(String, String), BTreeSet<ChapterKey>> = BTreeMap::new();
    for (chapter, terms) in &by_chapter {
        let terms: Vec<&String> = terms.iter().collect();
        for (i, a) in terms.iter().enumerate() {
            for b in &terms[i + 1..] {
                shared
                    .entry(((*a).clone(), (*b).clone()))
                    .or_default()
                    .insert(chapter.clone());
            }
        }
    }

    let mut graph: UnGraph<String, BTreeSet<ChapterKey>> = UnGraph::new_undirected();
    let mut nodes: HashMap<String, NodeIndex> = HashMap::new();
    for ((a, b), chapters) in shared {
        if chapters.len() < config.min_shared_chapters {
            continue;
        }
        let na = *nodes
            .entry(a.clone())
            .or_insert_with(|| graph.add_node(a.clone()));
        let nb = *nodes
            .entry(b.clone())
            .or_insert_with(|| graph.add_node(b.clone()));
        graph.add_edge(na, nb, chapters);
    }

    // Neighborhoods feed the concepts' related_terms.
    for (term, node) in &nodes {
        if let Some(concept) = concepts.get_mut(term) {
            for neighbor in graph.neighbors(*node) {
                concept.related_terms.insert(graph[neighbor].clone());
            }
        }
    }

    let mut connections: Vec<Connection> = graph
        .edge_indices()
        .filter_map(|edge| {
            let (na, nb) = graph.edge_endpoints(edge)?;
            let chapters = &graph[edge];
            Some(Connection {
                source: graph[na].clone(),
                target: graph[nb].clone(),
                kind: RelationKind::Reinforcing,
                strength: chapters.len(),
                shared_chapters: chapters.iter().cloned().collect(),
            })
        })
        .collect();
    connections.sort_by(|a, b| {
        b.strength
            .cmp(&a.strength)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.target.cmp(&b.target))
    });
    connections.truncate(MAX_CONCEPT_CONNECTIONS);
    connections
}
