//! Term-relationship index seam.
//!
//! The host platform owns the post↔term relationship data. Exclusive-mode
//! row filtering needs exactly one lookup from it: all post ids linked to
//! any term whose slug is in a given set. The trait keeps that lookup
//! synchronous; the decision path has no suspension points.
//!
//! Two implementations ship here: [`MemoryTermIndex`] for embedding and
//! tests, and [`NoOpTermIndex`] for hosts that resolve exclusions
//! elsewhere (it reports no relationships, so exclusive-mode filtering
//! excludes nothing).

use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet};
use tagveil_core::{PostId, Slug};

/// Host-owned lookup from term slugs to tagged posts.
pub trait TermPostIndex: Send + Sync {
    /// All post ids linked to any term whose slug is in `slugs`.
    fn posts_tagged_with(&self, slugs: &BTreeSet<Slug>) -> Result<BTreeSet<PostId>>;
}

/// In-memory term-relationship index.
#[derive(Debug, Default, Clone)]
pub struct MemoryTermIndex {
    by_slug: BTreeMap<Slug, BTreeSet<PostId>>,
}

impl MemoryTermIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `post` is tagged with `slug`.
    pub fn tag_post(&mut self, post: PostId, slug: Slug) {
        self.by_slug.entry(slug).or_default().insert(post);
    }
}

impl TermPostIndex for MemoryTermIndex {
    fn posts_tagged_with(&self, slugs: &BTreeSet<Slug>) -> Result<BTreeSet<PostId>> {
        Ok(slugs
            .iter()
            .filter_map(|slug| self.by_slug.get(slug))
            .flatten()
            .copied()
            .collect())
    }
}

/// An index that knows no relationships.
///
/// With no excluded posts resolvable, exclusive-mode filtering excludes
/// nothing. This is the conservative stand-in when the host has not wired
/// a real index.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpTermIndex;

impl TermPostIndex for NoOpTermIndex {
    fn posts_tagged_with(&self, _slugs: &BTreeSet<Slug>) -> Result<BTreeSet<PostId>> {
        Ok(BTreeSet::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(s: &str) -> Slug {
        Slug::new(s).unwrap()
    }

    #[test]
    fn test_memory_index_unions_across_slugs() {
        let mut index = MemoryTermIndex::new();
        index.tag_post(PostId(1), slug("private"));
        index.tag_post(PostId(2), slug("drafts"));
        index.tag_post(PostId(2), slug("private"));
        index.tag_post(PostId(3), slug("public"));

        let lookup: BTreeSet<Slug> = [slug("private"), slug("drafts")].into_iter().collect();
        let posts = index.posts_tagged_with(&lookup).unwrap();
        assert_eq!(posts, [PostId(1), PostId(2)].into_iter().collect());
    }

    #[test]
    fn test_memory_index_unknown_slug_is_empty() {
        let index = MemoryTermIndex::new();
        let lookup: BTreeSet<Slug> = [slug("private")].into_iter().collect();
        assert!(index.posts_tagged_with(&lookup).unwrap().is_empty());
    }

    #[test]
    fn test_noop_index_is_always_empty() {
        let lookup: BTreeSet<Slug> = [slug("private")].into_iter().collect();
        assert!(NoOpTermIndex.posts_tagged_with(&lookup).unwrap().is_empty());
    }
}
