use crate::{AnswerStore, Catalog, Scored};

/// Survey-specific scoring rules.
///
/// A strategy turns a complete set of answers into a scalar score and the
/// sub-dimension values shown on the radar chart. The result engine calls it
/// only after checking that every catalog question is answered, so
/// implementations may rely on `answers.get_answer(id)` being `Some` for every
/// `id` in `catalog`.
///
/// Implementations must be pure: the same catalog and answers always give the
/// same `Scored`. Iterate the catalog (display order) rather than relying on
/// any other ordering when the order affects floating-point sums.
///
/// Closures `Fn(&Catalog, &AnswerStore) -> Scored` implement this trait, which
/// is handy for one-off surveys and tests.
pub trait ScoringStrategy {
    /// Score a complete set of answers.
    fn score(&self, catalog: &Catalog, answers: &AnswerStore) -> Scored;
}

impl<F> ScoringStrategy for F
where
    F: Fn(&Catalog, &AnswerStore) -> Scored,
{
    fn score(&self, catalog: &Catalog, answers: &AnswerStore) -> Scored {
        self(catalog, answers)
    }
}
