//! Visibility policy: row, join, and distinct query modifications.
//!
//! Three hook functions, each receiving and returning a [`QueryFragment`].
//! The host's listing pipeline calls all three while assembling a query;
//! each is independently callable and idempotent.
//!
//! Exclusive mode resolves excluded post ids through the term index and
//! excludes those rows in a single NOT-IN constraint, so it needs neither
//! a join nor distinct rows. Inclusive mode constrains on term slugs,
//! which requires the post→term join chain and, because that join can
//! multiply post rows, distinct results. In both modes an authenticated
//! author's own posts stay visible regardless of tags.
//!
//! Index lookup failures never propagate: the row filter logs them and
//! skips the exclusion (fail open). The worst failure mode is a listing
//! with no filtering, never a failed listing.

use crate::context::PolicyContext;
use crate::index::TermPostIndex;
use std::collections::BTreeSet;
use tagveil_core::{PolicyMode, PostId};
use tagveil_query::{JoinKey, Predicate, QueryFragment};

/// Row-filter hook: add this request's row constraint to `fragment`.
pub fn apply_row_filter(
    mut fragment: QueryFragment,
    ctx: &PolicyContext,
    index: &dyn TermPostIndex,
) -> QueryFragment {
    match ctx.config.mode {
        PolicyMode::Exclusive => {
            let excluded = resolve_excluded_posts(ctx, index);
            // Nothing to exclude: add no constraint at all, never an
            // empty NOT-IN.
            if excluded.is_empty() {
                return fragment;
            }
            tracing::debug!(excluded_posts = excluded.len(), "applying exclusive row filter");
            let not_in = Predicate::PostNotIn(excluded);
            fragment.and_where(with_author_exception(not_in, ctx));
        }
        PolicyMode::Inclusive => {
            let included = &ctx.config.included;
            match (included.is_empty(), ctx.visitor.id()) {
                // No restriction configured and no author to except.
                (true, None) => {}
                (true, Some(author)) => fragment.and_where(Predicate::AuthorIs(author)),
                (false, _) => {
                    tracing::debug!(
                        included_tags = included.len(),
                        "applying inclusive row filter"
                    );
                    let slug_in = Predicate::SlugIn(included.clone());
                    fragment.and_where(with_author_exception(slug_in, ctx));
                }
            }
        }
    }
    fragment
}

/// Join hook: require the joins this request's row constraint depends on.
///
/// Inclusive mode selects on term slugs and needs the post→term chain;
/// exclusive mode resolves ids through the index and needs no join. Chain
/// insertion is idempotent by join key, so calling this on a fragment
/// that already carries the joins changes nothing.
pub fn apply_join_filter(mut fragment: QueryFragment, ctx: &PolicyContext) -> QueryFragment {
    if ctx.config.mode == PolicyMode::Inclusive {
        for key in JoinKey::CHAIN {
            fragment.require_join(key);
        }
    }
    fragment
}

/// Distinct hook: require distinct rows when the term join is in play.
///
/// The join emits one row per matching term, so inclusive-mode results
/// must be deduplicated.
pub fn apply_distinct_filter(mut fragment: QueryFragment, ctx: &PolicyContext) -> QueryFragment {
    if ctx.config.mode == PolicyMode::Inclusive {
        fragment.set_distinct();
    }
    fragment
}

/// OR the author-ownership exception onto `predicate` when the visitor is
/// authenticated.
fn with_author_exception(predicate: Predicate, ctx: &PolicyContext) -> Predicate {
    match ctx.visitor.id() {
        Some(author) => Predicate::any_of(vec![predicate, Predicate::AuthorIs(author)]),
        None => predicate,
    }
}

/// Excluded post ids for exclusive mode.
///
/// An empty configured tag set and a failed index lookup both resolve to
/// "no excluded posts" so the listing request proceeds unrestricted.
fn resolve_excluded_posts(ctx: &PolicyContext, index: &dyn TermPostIndex) -> BTreeSet<PostId> {
    let excluded = &ctx.config.excluded;
    if excluded.is_empty() {
        return BTreeSet::new();
    }
    match index.posts_tagged_with(excluded) {
        Ok(ids) => ids,
        Err(e) => {
            tracing::warn!(error = %e, "excluded-post lookup failed, skipping exclusion");
            BTreeSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolicyError;
    use crate::index::{MemoryTermIndex, NoOpTermIndex};
    use tagveil_core::{AuthorId, RawPolicySettings, Slug, Visitor};

    fn slug(s: &str) -> Slug {
        Slug::new(s).unwrap()
    }

    fn ctx(mode: &str, excluded: &str, included: &str, visitor: Visitor) -> PolicyContext {
        PolicyContext::from_raw(
            &RawPolicySettings {
                mode: mode.to_string(),
                excluded_tags: excluded.to_string(),
                included_tags: included.to_string(),
            },
            visitor,
        )
    }

    fn private_index() -> MemoryTermIndex {
        let mut index = MemoryTermIndex::new();
        index.tag_post(PostId(1), slug("private"));
        index.tag_post(PostId(5), slug("private"));
        index
    }

    /// Index whose lookups always fail, for the fail-open path.
    struct BrokenIndex;

    impl TermPostIndex for BrokenIndex {
        fn posts_tagged_with(
            &self,
            _slugs: &BTreeSet<Slug>,
        ) -> crate::error::Result<BTreeSet<PostId>> {
            Err(PolicyError::index_lookup("relationship table unavailable"))
        }
    }

    #[test]
    fn test_exclusive_anonymous_excludes_tagged_posts() {
        let ctx = ctx("exclusive", "private", "", Visitor::anonymous());
        let fragment = apply_row_filter(QueryFragment::new(), &ctx, &private_index());
        assert_eq!(fragment.where_sql(), "(posts.id NOT IN (1, 5))");
    }

    #[test]
    fn test_exclusive_author_gets_ownership_exception() {
        let ctx = ctx(
            "exclusive",
            "private",
            "",
            Visitor::authenticated(AuthorId(7)),
        );
        let fragment = apply_row_filter(QueryFragment::new(), &ctx, &private_index());
        assert_eq!(
            fragment.where_sql(),
            "((posts.id NOT IN (1, 5) OR posts.author_id = 7))"
        );
    }

    #[test]
    fn test_exclusive_empty_tag_set_adds_nothing() {
        let ctx = ctx("exclusive", "", "", Visitor::anonymous());
        let fragment = apply_row_filter(QueryFragment::new(), &ctx, &private_index());
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_exclusive_empty_index_adds_nothing() {
        let ctx = ctx("exclusive", "private", "", Visitor::anonymous());
        let fragment = apply_row_filter(QueryFragment::new(), &ctx, &NoOpTermIndex);
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_exclusive_lookup_failure_fails_open() {
        let ctx = ctx("exclusive", "private", "", Visitor::anonymous());
        let fragment = apply_row_filter(QueryFragment::new(), &ctx, &BrokenIndex);
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_exclusive_needs_no_join_or_distinct() {
        let ctx = ctx("exclusive", "private", "", Visitor::anonymous());
        let fragment = apply_join_filter(QueryFragment::new(), &ctx);
        assert!(fragment.joins().is_empty());
        let fragment = apply_distinct_filter(fragment, &ctx);
        assert!(!fragment.is_distinct());
    }

    #[test]
    fn test_inclusive_anonymous_constrains_on_slugs() {
        let ctx = ctx("inclusive", "", "public", Visitor::anonymous());
        let fragment = apply_row_filter(QueryFragment::new(), &ctx, &NoOpTermIndex);
        assert_eq!(fragment.where_sql(), "(terms.slug IN ('public'))");
    }

    #[test]
    fn test_inclusive_author_gets_ownership_exception() {
        let ctx = ctx("inclusive", "", "public", Visitor::authenticated(AuthorId(9)));
        let fragment = apply_row_filter(QueryFragment::new(), &ctx, &NoOpTermIndex);
        assert_eq!(
            fragment.where_sql(),
            "((terms.slug IN ('public') OR posts.author_id = 9))"
        );
    }

    #[test]
    fn test_inclusive_empty_tags_reduces_to_author_clause() {
        let ctx = ctx("inclusive", "", "", Visitor::authenticated(AuthorId(9)));
        let fragment = apply_row_filter(QueryFragment::new(), &ctx, &NoOpTermIndex);
        assert_eq!(fragment.where_sql(), "(posts.author_id = 9)");
    }

    #[test]
    fn test_inclusive_empty_tags_anonymous_adds_nothing() {
        let ctx = ctx("inclusive", "", "", Visitor::anonymous());
        let fragment = apply_row_filter(QueryFragment::new(), &ctx, &NoOpTermIndex);
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_inclusive_requires_join_chain_and_distinct() {
        let ctx = ctx("inclusive", "", "public", Visitor::anonymous());
        let fragment = apply_join_filter(QueryFragment::new(), &ctx);
        assert_eq!(fragment.joins().len(), 3);
        let fragment = apply_distinct_filter(fragment, &ctx);
        assert!(fragment.is_distinct());
    }

    #[test]
    fn test_join_augmentation_is_idempotent() {
        let ctx = ctx("inclusive", "", "public", Visitor::anonymous());
        let once = apply_join_filter(QueryFragment::new(), &ctx);
        let twice = apply_join_filter(once.clone(), &ctx);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tag_matching_is_case_insensitive() {
        // Config tag "Private" matches posts tagged with slug "private".
        let ctx = ctx("exclusive", "Private", "", Visitor::anonymous());
        let fragment = apply_row_filter(QueryFragment::new(), &ctx, &private_index());
        assert_eq!(fragment.where_sql(), "(posts.id NOT IN (1, 5))");
    }
}
