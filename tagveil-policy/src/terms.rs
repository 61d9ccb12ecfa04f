//! Taxonomy term filtering.

use crate::context::PolicyContext;
use tagveil_core::{PolicyMode, Term};

/// Term-list hook: the subset of `terms` visible to the current visitor.
///
/// Authenticated visitors see the full taxonomy unchanged. For anonymous
/// visitors, exclusive mode drops terms whose slug is excluded and
/// inclusive mode keeps only terms whose slug is included. Surviving
/// terms keep their input order; this is a filter, not a resort. Pure
/// function, no I/O.
pub fn filter_terms(terms: &[Term], ctx: &PolicyContext) -> Vec<Term> {
    if ctx.visitor.is_authenticated() {
        return terms.to_vec();
    }
    terms
        .iter()
        .filter(|term| match ctx.config.mode {
            PolicyMode::Exclusive => !ctx.config.excluded.contains(&term.slug),
            PolicyMode::Inclusive => ctx.config.included.contains(&term.slug),
        })
        .cloned()
        .collect()
}
