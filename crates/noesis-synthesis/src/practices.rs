//! Practice distillation: corpus exercises sorted into seven fixed
//! categories, padded with generated practices where the corpus is thin.

use noesis_core::config::SynthesisConfig;
use noesis_core::models::Practice;
use noesis_ingest::{CorpusIndex, IndexedExercise};

/// The seven practice categories, with the keywords that route an
/// exercise into them. An exercise lands in the first category whose
/// keywords match; unmatched exercises land in "integration".
pub const PRACTICE_CATEGORIES: [(&str, &[&str]); 7] = [
    ("attention", &["attention", "breath", "focus", "observe", "notice", "mindful"]),
    ("embodiment", &["body", "walk", "movement", "posture", "senses", "physical"]),
    ("reflection", &["journal", "write", "reflect", "question", "review", "remember"]),
    ("connection", &["conversation", "listen", "share", "community", "together", "relationship"]),
    ("action", &["act", "change", "commit", "start", "practice", "daily"]),
    ("creativity", &["create", "draw", "imagine", "play", "experiment", "art"]),
    ("integration", &[]),
];

fn categorize(exercise: &IndexedExercise) -> &'static str {
    let haystack = format!(
        "{} {}",
        exercise.exercise.title, exercise.exercise.description
    )
    .to_lowercase();
    for (category, keywords) in &PRACTICE_CATEGORIES {
        if keywords.iter().any(|k| haystack.contains(k)) {
            return category;
        }
    }
    "integration"
}

fn generated_practice(category: &str, slot: usize) -> (String, String, Vec<String>) {
    let title = format!("A {category} practice");
    let description = match category {
        "attention" => "Choose one routine act today and give it your full attention from start to finish.".to_string(),
        "embodiment" => "Walk for ten minutes without a destination, letting the body set the pace.".to_string(),
        "reflection" => "Write three sentences about what this reading changed in you.".to_string(),
        "connection" => "Ask someone a real question today and listen to the whole answer.".to_string(),
        "action" => "Pick the smallest act that points toward what matters, and do it before sunset.".to_string(),
        "creativity" => "Make something small with your hands, without judging the result.".to_string(),
        _ => "Take one idea from the corpus and live with it for a day before forming an opinion.".to_string(),
    };
    let steps = vec![
        "Set aside a few undisturbed minutes.".to_string(),
        description.clone(),
        format!("Afterwards, note one thing you noticed (round {}).", slot + 1),
    ];
    (title, description, steps)
}

/// Distill the practice set: `practices_per_category` per category,
/// drawn from corpus exercises first, generated where the corpus has
/// nothing to offer. Practices are numbered sequentially.
pub fn distill_practices(index: &CorpusIndex, config: &SynthesisConfig) -> Vec<Practice> {
    let exercises = index.exercises_sorted();

    let mut practices = Vec::with_capacity(config.practices);
    let mut number = 1;
    for (category, _) in &PRACTICE_CATEGORIES {
        let mut from_corpus: Vec<&IndexedExercise> = exercises
            .iter()
            .copied()
            .filter(|e| categorize(e) == *category)
            .collect();
        from_corpus.truncate(config.practices_per_category);

        for exercise in &from_corpus {
            practices.push(Practice {
                number,
                category: category.to_string(),
                title: exercise.exercise.title.clone(),
                duration: exercise.exercise.duration.clone(),
                description: exercise.exercise.description.clone(),
                steps: exercise.exercise.steps.clone(),
                reflection: exercise.exercise.reflection.clone(),
                source_book: exercise.book_id.clone(),
                source_exercise: Some(exercise.key.clone()),
            });
            number += 1;
        }
        for slot in from_corpus.len()..config.practices_per_category {
            let (title, description, steps) = generated_practice(category, slot);
            practices.push(Practice {
                number,
                category: category.to_string(),
                title,
                duration: Some("10 minutes".to_string()),
                description,
                steps,
                reflection: None,
                source_book: "synthesis".to_string(),
                source_exercise: None,
            });
            number += 1;
        }
    }
    practices
}
