//! Session result cache.
//!
//! Keys are a report identity plus its bound arguments. Entries live until the
//! cache is dropped or [`ResultCache::clear`] is called; there is no eviction.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use wrapped_core::ReportKind;

use crate::statement::SqlParam;
use crate::table::ResultTable;

/// Report identity plus argument tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub report: ReportKind,
    pub args: Vec<SqlParam>,
}

impl CacheKey {
    #[must_use]
    pub const fn new(report: ReportKind, args: Vec<SqlParam>) -> Self {
        Self { report, args }
    }
}

/// Memoized report results, shared between readers.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: RwLock<HashMap<CacheKey, Arc<ResultTable>>>,
}

impl ResultCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<Arc<ResultTable>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Return the cached table for `key`, computing and storing it on a miss.
    ///
    /// Errors from `compute` are returned as-is and nothing is stored, so the
    /// next call retries.
    ///
    /// # Errors
    ///
    /// Whatever `compute` returns.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: CacheKey,
        compute: impl FnOnce() -> Result<ResultTable, E>,
    ) -> Result<Arc<ResultTable>, E> {
        if let Some(hit) = self.get(&key) {
            tracing::trace!(report = %key.report, args = ?key.args, "result cache hit");
            return Ok(hit);
        }

        tracing::debug!(report = %key.report, args = ?key.args, "result cache miss");
        let table = Arc::new(compute()?);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(entries.entry(key).or_insert(table)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;
    use std::cell::Cell as Counter;

    fn key(name: &str) -> CacheKey {
        CacheKey::new(ReportKind::TopListeners, vec![name.into(), 1971_i64.into()])
    }

    fn one_row(value: i64) -> ResultTable {
        ResultTable::new(vec!["n".into()], vec![vec![Cell::Int(value)]])
    }

    #[test]
    fn second_lookup_skips_compute() {
        let cache = ResultCache::new();
        let calls = Counter::new(0);
        for _ in 0..3 {
            let table = cache
                .get_or_try_insert_with(key("Imagine"), || {
                    calls.set(calls.get() + 1);
                    Ok::<_, ()>(one_row(1))
                })
                .unwrap();
            assert_eq!(table.len(), 1);
        }
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn arguments_are_part_of_the_key() {
        let cache = ResultCache::new();
        cache
            .get_or_try_insert_with(key("Imagine"), || Ok::<_, ()>(one_row(1)))
            .unwrap();
        let other = cache
            .get_or_try_insert_with(key("Creep"), || Ok::<_, ()>(one_row(2)))
            .unwrap();
        assert_eq!(other.rows[0][0], Cell::Int(2));
        assert_eq!(cache.len(), 2);

        let other_report = CacheKey::new(ReportKind::SongsWithCommonListeners, key("Imagine").args);
        assert!(cache.get(&other_report).is_none());
    }

    #[test]
    fn failures_are_not_cached() {
        let cache = ResultCache::new();
        let err = cache.get_or_try_insert_with(key("Imagine"), || Err("offline"));
        assert_eq!(err.unwrap_err(), "offline");
        assert!(cache.is_empty());

        let table = cache
            .get_or_try_insert_with(key("Imagine"), || Ok::<_, &str>(one_row(5)))
            .unwrap();
        assert_eq!(table.rows[0][0], Cell::Int(5));
    }

    #[test]
    fn clear_forgets_everything() {
        let cache = ResultCache::new();
        cache
            .get_or_try_insert_with(key("Imagine"), || Ok::<_, ()>(one_row(1)))
            .unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}
