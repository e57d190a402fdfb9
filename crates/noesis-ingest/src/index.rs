//! The in-memory corpus index: four lookup maps plus corpus stats,
//! rebuilt from scratch on every ingestion run.

use std::collections::HashMap;

use noesis_core::models::{
    word_count, Book, BookStats, ChapterKey, CorpusStats, Exercise, ExerciseKey,
};

/// Denormalized chapter record, the unit of retrieval for analysis,
/// dialogue, and search.
#[derive(Debug, Clone)]
pub struct IndexedChapter {
    pub key: ChapterKey,
    pub book_id: String,
    pub section_id: String,
    pub section_title: String,
    pub title: String,
    pub epigraph: Option<String>,
    pub content: String,
    pub closing_question: Option<String>,
    pub exercise_keys: Vec<ExerciseKey>,
    pub word_count: usize,
}

#[derive(Debug, Clone)]
pub struct IndexedExercise {
    pub key: ExerciseKey,
    pub chapter: ChapterKey,
    pub book_id: String,
    pub exercise: Exercise,
}

/// All four lookup maps are kept consistent by construction: every
/// chapter key in the full-text map exists in the chapter map, every
/// chapter's book exists in the book map, and every exercise points at
/// an indexed chapter.
#[derive(Debug, Default)]
pub struct CorpusIndex {
    books: HashMap<String, Book>,
    chapters: HashMap<ChapterKey, IndexedChapter>,
    exercises: HashMap<ExerciseKey, IndexedExercise>,
    full_text: HashMap<ChapterKey, String>,
    book_order: Vec<String>,
    book_stats: HashMap<String, BookStats>,
    stats: CorpusStats,
}

impl CorpusIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one book. Re-indexing the same book id replaces its
    /// previous entries, so indexing is idempotent per id.
    pub fn index_book(&mut self, book: Book) {
        if self.books.contains_key(&book.id) {
            self.remove_book(&book.id);
        }

        let mut stats = BookStats::default();
        for section in &book.sections {
            for chapter in &section.chapters {
                let key = ChapterKey::derive(&book.id, &section.id, &chapter.id);

                let mut text_parts = vec![chapter.title.clone()];
                if let Some(epigraph) = &chapter.epigraph {
                    text_parts.push(epigraph.clone());
                }
                text_parts.push(chapter.content.clone());
                if let Some(question) = &chapter.closing_question {
                    text_parts.push(question.clone());
                }

                let mut exercise_keys = Vec::with_capacity(chapter.exercises.len());
                for exercise in &chapter.exercises {
                    let ex_key = ExerciseKey::derive(&key, &exercise.id);
                    text_parts.push(exercise.title.clone());
                    text_parts.push(exercise.description.clone());
                    self.exercises.insert(
                        ex_key.clone(),
                        IndexedExercise {
                            key: ex_key.clone(),
                            chapter: key.clone(),
                            book_id: book.id.clone(),
                            exercise: exercise.clone(),
                        },
                    );
                    exercise_keys.push(ex_key);
                    stats.exercises += 1;
                }

                let full = text_parts.join("\n");
                let words = word_count(&chapter.content);
                stats.chapters += 1;
                stats.words += words;

                self.full_text.insert(key.clone(), full);
                self.chapters.insert(
                    key.clone(),
                    IndexedChapter {
                        key,
                        book_id: book.id.clone(),
                        section_id: section.id.clone(),
                        section_title: section.title.clone(),
                        title: chapter.title.clone(),
                        epigraph: chapter.epigraph.clone(),
                        content: chapter.content.clone(),
                        closing_question: chapter.closing_question.clone(),
                        exercise_keys,
                        word_count: words,
                    },
                );
            }
        }

        self.stats.books_loaded += 1;
        self.stats.total_chapters += stats.chapters;
        self.stats.total_exercises += stats.exercises;
        self.stats.total_words += stats.words;
        self.book_stats.insert(book.id.clone(), stats);
        self.book_order.push(book.id.clone());
        self.books.insert(book.id.clone(), book);
    }

    fn remove_book(&mut self, book_id: &str) {
        let Some(stats) = self.book_stats.remove(book_id) else {
            return;
        };
        self.stats.books_loaded -= 1;
        self.stats.total_chapters -= stats.chapters;
        self.stats.total_exercises -= stats.exercises;
        self.stats.total_words -= stats.words;
        self.chapters.retain(|_, c| c.book_id != book_id);
        self.full_text.retain(|k, _| k.book_id() != book_id);
        self.exercises.retain(|_, e| e.book_id != book_id);
        self.book_order.retain(|id| id != book_id);
        self.books.remove(book_id);
    }

    pub fn book(&self, book_id: &str) -> Option<&Book> {
        self.books.get(book_id)
    }

    pub fn chapter(&self, key: &ChapterKey) -> Option<&IndexedChapter> {
        self.chapters.get(key)
    }

    pub fn exercise(&self, key: &ExerciseKey) -> Option<&IndexedExercise> {
        self.exercises.get(key)
    }

    pub fn full_text(&self, key: &ChapterKey) -> Option<&str> {
        self.full_text.get(key).map(String::as_str)
    }

    /// Book ids in ingestion order.
    pub fn book_ids(&self) -> &[String] {
        &self.book_order
    }

    /// Chapters in deterministic key order.
    pub fn chapters_sorted(&self) -> Vec<&IndexedChapter> {
        let mut all: Vec<&IndexedChapter> = self.chapters.values().collect();
        all.sort_by(|a, b| a.key.cmp(&b.key));
        all
    }

    /// Exercises in deterministic key order.
    pub fn exercises_sorted(&self) -> Vec<&IndexedExercise> {
        let mut all: Vec<&IndexedExercise> = self.exercises.values().collect();
        all.sort_by(|a, b| a.key.cmp(&b.key));
        all
    }

    pub fn book_stats(&self, book_id: &str) -> Option<&BookStats> {
        self.book_stats.get(book_id)
    }

    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
