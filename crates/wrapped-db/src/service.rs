//! Report service binding the catalog, the result cache and an executor.
//!
//! One `Reports` value serves one session. Every report method goes through
//! [`Reports::run`], which consults the session cache before executing.

use std::sync::Arc;

use wrapped_core::{AwardFilter, SongKey, UserKey, YearRange};

use crate::cache::ResultCache;
use crate::catalog::{ReportCatalog, ReportRequest};
use crate::error::QueryError;
use crate::executor::QueryExecutor;
use crate::table::ResultTable;

/// Runs catalog reports with per-session memoization.
pub struct Reports<E: QueryExecutor> {
    executor: E,
    catalog: ReportCatalog,
    cache: ResultCache,
    caching: bool,
}

impl<E: QueryExecutor> Reports<E> {
    /// A service whose catalog uses the executor's table names.
    #[must_use]
    pub fn new(executor: E) -> Self {
        let catalog = ReportCatalog::new(executor.table_names());
        Self {
            executor,
            catalog,
            cache: ResultCache::new(),
            caching: true,
        }
    }

    /// Execute every request, never consulting or filling the cache.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.caching = false;
        self
    }

    #[must_use]
    pub const fn executor(&self) -> &E {
        &self.executor
    }

    #[must_use]
    pub const fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Run a report, answering repeated requests from the cache.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails. Failures are not cached.
    pub fn run(&self, request: &ReportRequest) -> Result<Arc<ResultTable>, QueryError> {
        if !self.caching {
            return self.run_uncached(request).map(Arc::new);
        }
        self.cache
            .get_or_try_insert_with(request.cache_key(), || self.run_uncached(request))
    }

    /// Run a report against the store, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn run_uncached(&self, request: &ReportRequest) -> Result<ResultTable, QueryError> {
        let statement = self.catalog.statement(request);
        tracing::debug!(report = %request.kind(), "running report");
        self.executor.execute(&statement)
    }

    // ── One method per report ──────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn users(&self, most_active: bool) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::Users { most_active })
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn recently_played_songs(&self, user: &UserKey) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::RecentlyPlayedSongs(user.clone()))
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn most_played_songs(&self, user: &UserKey) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::MostPlayedSongs(user.clone()))
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn most_played_genres(&self, user: &UserKey) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::MostPlayedGenres(user.clone()))
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn recommended_songs(&self, user: &UserKey) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::RecommendedSongs(user.clone()))
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn songs(&self, most_played: bool) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::Songs { most_played })
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn top_listeners(&self, song: &SongKey) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::TopListeners(song.clone()))
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn songs_with_common_listeners(
        &self,
        song: &SongKey,
    ) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::SongsWithCommonListeners(song.clone()))
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn artists_with_most_song_releases(
        &self,
        years: YearRange,
        award: AwardFilter,
    ) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::ArtistsWithMostSongReleases { years, award })
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn artists_with_most_album_releases(
        &self,
        years: YearRange,
        award: AwardFilter,
    ) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::ArtistsWithMostAlbumReleases { years, award })
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn artists_in_bands(&self) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::ArtistsInBands)
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn bands(&self, most_albums: bool) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::Bands { most_albums })
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn genres(&self) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::Genres)
    }

    /// Genre names as plain strings, for selection lists.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn genre_names(&self) -> Result<Vec<String>, QueryError> {
        let table = self.genres()?;
        Ok(table
            .rows
            .iter()
            .filter_map(|row| row.first().and_then(|c| c.as_str()).map(str::to_string))
            .collect())
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn bands_with_most_song_plays(
        &self,
        year: i32,
        genre: &str,
    ) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::BandsWithMostSongPlays {
            year,
            genre: genre.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] if the statement fails.
    pub fn albums_most_featured_in_libraries(
        &self,
        year: i32,
        genre: &str,
    ) -> Result<Arc<ResultTable>, QueryError> {
        self.run(&ReportRequest::AlbumsMostFeaturedInLibraries {
            year,
            genre: genre.to_string(),
        })
    }
}
