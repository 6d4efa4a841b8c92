//! Table names of the listening store.
//!
//! The store owns the schema; this module only names it. Report builders take a
//! [`TableNames`] value so the same catalog can run against a bare local
//! database or a schema-qualified attached one.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Every table the report catalog reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Users,
    Songs,
    Artists,
    Bands,
    Albums,
    SongPlays,
    ArtistsCreateSongs,
    AlbumsListSongs,
    BandsCreateAlbums,
    BandsCreateSongs,
    ArtistsCreateAlbums,
    UserLibraries,
    ArtistsWinAwards,
    ArtistsFormBands,
}

impl Table {
    /// All tables, entities first, relationships after.
    pub const ALL: [Self; 14] = [
        Self::Users,
        Self::Songs,
        Self::Artists,
        Self::Bands,
        Self::Albums,
        Self::SongPlays,
        Self::ArtistsCreateSongs,
        Self::AlbumsListSongs,
        Self::BandsCreateAlbums,
        Self::BandsCreateSongs,
        Self::ArtistsCreateAlbums,
        Self::UserLibraries,
        Self::ArtistsWinAwards,
        Self::ArtistsFormBands,
    ];

    /// The table name as it exists in the store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Songs => "Songs",
            Self::Artists => "Artists",
            Self::Bands => "Bands",
            Self::Albums => "Albums",
            Self::SongPlays => "Song_Plays",
            Self::ArtistsCreateSongs => "Artists_Create_Songs",
            Self::AlbumsListSongs => "Albums_List_Songs",
            Self::BandsCreateAlbums => "Bands_Create_Albums",
            Self::BandsCreateSongs => "Bands_Create_Songs",
            Self::ArtistsCreateAlbums => "Artists_Create_Albums",
            Self::UserLibraries => "Users_Libraries",
            Self::ArtistsWinAwards => "Artists_Win_Awards",
            Self::ArtistsFormBands => "Artists_Form_Bands",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves [`Table`] values to the identifiers used in SQL text.
///
/// ```
/// use wrapped_core::{Table, TableNames};
///
/// assert_eq!(TableNames::default().get(Table::SongPlays), "Song_Plays");
/// assert_eq!(TableNames::qualified("store.public").get(Table::Users), "store.public.Users");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TableNames {
    schema: Option<String>,
}

impl TableNames {
    /// Names qualified with a schema (or `catalog.schema`) prefix.
    #[must_use]
    pub fn qualified(schema: impl Into<String>) -> Self {
        let schema = schema.into();
        Self {
            schema: (!schema.is_empty()).then_some(schema),
        }
    }

    /// The schema prefix, if any.
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// The SQL identifier for `table`.
    #[must_use]
    pub fn get(&self, table: Table) -> Cow<'static, str> {
        match &self.schema {
            Some(schema) => Cow::Owned(format!("{schema}.{}", table.as_str())),
            None => Cow::Borrowed(table.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_names_are_unique() {
        let names: HashSet<&str> = Table::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names.len(), Table::ALL.len());
    }

    #[test]
    fn relationship_tables_keep_store_spelling() {
        assert_eq!(Table::UserLibraries.as_str(), "Users_Libraries");
        assert_eq!(Table::SongPlays.to_string(), "Song_Plays");
    }

    #[test]
    fn empty_schema_is_unqualified() {
        let names = TableNames::qualified("");
        assert_eq!(names.schema(), None);
        assert_eq!(names.get(Table::Bands), "Bands");
    }
}
