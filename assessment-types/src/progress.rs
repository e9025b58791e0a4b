use serde::{Deserialize, Serialize};

use crate::{AnswerStore, Catalog};

/// Completion metrics for the progress bar and the "answered / total" counter.
///
/// Always derived from an `AnswerStore` and a `Catalog`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Catalog questions that have an answer.
    pub answered: usize,

    /// Number of questions in the catalog.
    pub total: usize,

    /// `answered / total` as a whole percentage, rounded half up, in `0..=100`.
    pub percentage: u8,
}

impl Progress {
    /// Compute the progress of `answers` over `catalog`.
    pub fn compute(answers: &AnswerStore, catalog: &Catalog) -> Self {
        let answered = answers.answered_in(catalog);
        let total = catalog.len();
        Self {
            answered,
            total,
            percentage: percentage(answered, total),
        }
    }

    /// Check if every question is answered. An empty catalog is never complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }

    /// Number of questions still open.
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }
}

fn percentage(answered: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let answered = answered.min(total) as u64;
    let total = total as u64;
    // round(100 * a / t) with halves rounded up, in integers.
    let rounded = (200 * answered + total) / (2 * total);
    rounded.min(100) as u8
}
