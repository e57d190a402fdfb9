//! Book structure: a prologue followed by four named parts. The
//! configured chapter count is split evenly across the parts, with the
//! remainder going to the final part.

/// The four movements of the synthesized book, in order.
pub const PART_TITLES: [&str; 4] = [
    "Part I: Awakening",
    "Part II: Reconnection",
    "Part III: Action",
    "Part IV: Synthesis",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartPlan {
    pub title: String,
    pub chapters: usize,
}

/// Split `total_chapters` across the four parts. The default 21 gives
/// 5 + 5 + 5 + 6.
pub fn plan_parts(total_chapters: usize) -> Vec<PartPlan> {
    let base = total_chapters / PART_TITLES.len();
    let remainder = total_chapters % PART_TITLES.len();
    PART_TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| PartPlan {
            title: title.to_string(),
            // Remainder lands in the last part.
            chapters: if i == PART_TITLES.len() - 1 {
                base + remainder
            } else {
                base
            },
        })
        .collect()
}
