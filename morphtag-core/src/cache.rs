//! Memoised tag spaces
//!
//! Each language key owns a compute-once cell. The map lock is only held
//! while the cell is fetched or inserted, so enumeration for one language
//! never blocks requests for another, and concurrent first requests for the
//! same language enumerate once.

use crate::analyzer::TagAnalyzer;
use crate::constraint::ConstraintEngine;
use crate::language::LanguageKey;
use crate::tag::Tag;
use std::collections::{btree_set, BTreeSet, HashMap};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// The set of valid tags for one language key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSpace {
    tags: BTreeSet<Tag>,
}

impl TagSpace {
    /// Whether `tag` belongs to the space
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the space is empty
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags in lexical order
    pub fn iter(&self) -> btree_set::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Whether every tag of `self` is in `other`
    pub fn is_subset(&self, other: &TagSpace) -> bool {
        self.tags.is_subset(&other.tags)
    }
}

impl FromIterator<Tag> for TagSpace {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TagSpace {
    type Item = &'a Tag;
    type IntoIter = btree_set::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

type Slot = Arc<OnceLock<Arc<TagSpace>>>;

/// Per-language cache of tag spaces
///
/// Entries are computed on first request and kept for the life of the
/// cache. A cache belongs to exactly one analyzer: it is created and filled
/// by the [`MorphtagValidator`](crate::MorphtagValidator) that owns it, and
/// is public only for inspection.
#[derive(Debug, Default)]
pub struct TagSpaceCache {
    slots: Mutex<HashMap<Option<LanguageKey>, Slot>>,
}

impl TagSpaceCache {
    /// Create an empty cache
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Tag space for `language`, enumerating on first request
    ///
    /// `analyzer` must be the same on every call.
    pub(crate) fn tag_space<A: TagAnalyzer + ?Sized>(
        &self,
        analyzer: &A,
        engine: &ConstraintEngine,
        language: Option<&LanguageKey>,
    ) -> Arc<TagSpace> {
        let slot = self.slot(language);

        if let Some(space) = slot.get() {
            tracing::trace!(language = ?language.map(LanguageKey::code), "tag space cache hit");
            return Arc::clone(space);
        }

        Arc::clone(slot.get_or_init(|| self.compute(analyzer, engine, language)))
    }

    /// Language keys with a computed tag space
    pub fn cached_languages(&self) -> Vec<Option<LanguageKey>> {
        let mut keys: Vec<_> = self
            .lock()
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    /// Number of computed entries
    pub fn len(&self) -> usize {
        self.lock().values().filter(|slot| slot.get().is_some()).count()
    }

    /// Whether nothing has been computed yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Option<LanguageKey>, Slot>> {
        // The map only ever gains complete cells, so a poisoned lock is still consistent
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot(&self, language: Option<&LanguageKey>) -> Slot {
        Arc::clone(self.lock().entry(language.cloned()).or_default())
    }

    fn compute<A: TagAnalyzer + ?Sized>(
        &self,
        analyzer: &A,
        engine: &ConstraintEngine,
        language: Option<&LanguageKey>,
    ) -> Arc<TagSpace> {
        let Some(language) = language else {
            tracing::debug!("enumerating unrestricted tag space");
            let space: TagSpace = analyzer.generate().collect();
            tracing::info!(tags = space.len(), "unrestricted tag space computed");
            return Arc::new(space);
        };

        if engine.blacklist(language).is_empty() {
            tracing::debug!(language = language.code(), "no restrictions, sharing unrestricted tag space");
            return self.tag_space(analyzer, engine, None);
        }

        tracing::debug!(language = language.code(), "enumerating tag space");
        let space = filter_admissible(analyzer, engine, language);
        tracing::info!(
            language = language.code(),
            tags = space.len(),
            "tag space computed"
        );
        Arc::new(space)
    }
}

#[cfg(feature = "parallel")]
fn filter_admissible<A: TagAnalyzer + ?Sized>(
    analyzer: &A,
    engine: &ConstraintEngine,
    language: &LanguageKey,
) -> TagSpace {
    use rayon::prelude::*;

    let tags: Vec<Tag> = analyzer.generate().collect();
    let admissible: Vec<Tag> = tags
        .into_par_iter()
        .filter(|tag| engine.is_admissible(tag.as_str(), Some(language)))
        .collect();
    admissible.into_iter().collect()
}

#[cfg(not(feature = "parallel"))]
fn filter_admissible<A: TagAnalyzer + ?Sized>(
    analyzer: &A,
    engine: &ConstraintEngine,
    language: &LanguageKey,
) -> TagSpace {
    analyzer
        .generate()
        .filter(|tag| engine.is_admissible(tag.as_str(), Some(language)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FeatureBundle;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fixed tag list that counts enumerations
    struct Listed {
        tags: Vec<&'static str>,
        generated: AtomicUsize,
    }

    impl Listed {
        fn new(tags: Vec<&'static str>) -> Self {
            Self {
                tags,
                generated: AtomicUsize::new(0),
            }
        }
    }

    impl TagAnalyzer for Listed {
        fn analyze(&self, tag: &str) -> Vec<FeatureBundle> {
            if self.tags.contains(&tag) {
                vec![FeatureBundle::new("listed")]
            } else {
                vec![]
            }
        }

        fn generate(&self) -> Box<dyn Iterator<Item = Tag> + Send + '_> {
            self.generated.fetch_add(1, Ordering::SeqCst);
            Box::new(self.tags.iter().map(|t| Tag::from(*t)))
        }
    }

    fn analyzer() -> Listed {
        Listed::new(vec![
            "Nb-s---fn---",
            "Nb-d---fn---",
            "V-3saia-----",
            "S--s---mn---",
            "A--s---mnp--",
        ])
    }

    #[test]
    fn test_unrestricted_space_keeps_everything() {
        let cache = TagSpaceCache::new();
        let analyzer = analyzer();
        let space = cache.tag_space(&analyzer, &ConstraintEngine::new(), None);
        assert_eq!(space.len(), 5);
    }

    #[test]
    fn test_language_space_filters() {
        let cache = TagSpaceCache::new();
        let analyzer = analyzer();
        let la = cache.tag_space(&analyzer, &ConstraintEngine::new(), Some(&LanguageKey::Latin));

        let tags: Vec<&str> = la.iter().map(Tag::as_str).collect();
        assert_eq!(tags, vec!["A--s---mnp--", "Nb-s---fn---"]);
    }

    #[test]
    fn test_second_request_is_memoised() {
        let cache = TagSpaceCache::new();
        let analyzer = analyzer();
        let engine = ConstraintEngine::new();

        let first = cache.tag_space(&analyzer, &engine, Some(&LanguageKey::Gothic));
        let second = cache.tag_space(&analyzer, &engine, Some(&LanguageKey::Gothic));

        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(analyzer.generated.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_unknown_language_shares_unrestricted_space() {
        let cache = TagSpaceCache::new();
        let analyzer = analyzer();
        let engine = ConstraintEngine::new();

        let zz = cache.tag_space(&analyzer, &engine, Some(&LanguageKey::parse("zz")));
        let none = cache.tag_space(&analyzer, &engine, None);

        assert!(Arc::ptr_eq(&zz, &none));
        assert_eq!(analyzer.generated.load(Ordering::SeqCst), 1);
        assert_eq!(
            cache.cached_languages(),
            vec![None, Some(LanguageKey::parse("zz"))]
        );
    }

    #[test]
    fn test_empty_cache() {
        let cache = TagSpaceCache::new();
        assert!(cache.is_empty());
        assert!(cache.cached_languages().is_empty());
    }
}
