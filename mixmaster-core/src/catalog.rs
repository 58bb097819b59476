//! The cocktail catalog: loaded once, immutable afterwards.
//!
//! Loading is all-or-nothing. The first malformed record aborts construction
//! and is reported by its name (or by its position when the name itself is
//! unusable). Records keep the order of the source, which is the order every
//! listing and every tie-break uses.

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::{CocktailDraft, CocktailRecord, CocktailRecordError};

/// Catalog source bundled with the crate.
pub const BUNDLED_CATALOG: &str = include_str!("../data/cocktails.json");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogSource {
    cocktails: Vec<Value>,
}

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The source file could not be read.
    #[error("failed to read catalog source at {path}: {source}")]
    Read {
        /// Requested source path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The source was not a well-formed catalog document.
    #[error("failed to parse catalog source: {source}")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A record did not have the shape of a cocktail entry.
    #[error("malformed cocktail '{key}': {source}")]
    MalformedRecord {
        /// Record name, or its position when the name is missing.
        key: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A record broke an invariant.
    #[error("invalid cocktail '{key}': {source}")]
    InvalidRecord {
        /// Record name, or its position when the name is blank.
        key: String,
        /// The broken invariant.
        #[source]
        source: CocktailRecordError,
    },
    /// Two records share a name.
    #[error("cocktail '{name}' appears more than once")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}

/// Raised by [`Catalog::by_name`] for unknown names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no cocktail named '{name}' in the catalog")]
pub struct NotFound {
    /// The requested name.
    pub name: String,
}

/// Immutable, ordered set of cocktail records.
///
/// # Examples
/// ```
/// use mixmaster_core::Catalog;
///
/// let catalog = Catalog::load(
///     r#"{"cocktails": [{
///         "name": "Negroni",
///         "base_spirit": "gin",
///         "flavor_tags": ["herbal", "strong"],
///         "skill_required": "beginner",
///         "strength_rating": 7,
///         "occasion_tags": ["aperitif"],
///         "season_tags": ["all_seasons"]
///     }]}"#,
/// )
/// .expect("valid catalog");
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.by_name("Negroni").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CocktailRecord>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Parse and validate a JSON catalog source.
    ///
    /// # Errors
    /// Returns [`CatalogLoadError::Parse`] for malformed documents,
    /// [`CatalogLoadError::MalformedRecord`] for the first record with
    /// missing, mistyped or unknown fields,
    /// [`CatalogLoadError::InvalidRecord`] for the first invalid record and
    /// [`CatalogLoadError::DuplicateName`] for repeated names.
    pub fn load(source: &str) -> Result<Self, CatalogLoadError> {
        let document: CatalogSource = serde_json::from_str(source)
            .map_err(|source| CatalogLoadError::Parse { source })?;
        let records = document
            .cocktails
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let key = record_key(entry.get("name").and_then(Value::as_str), index);
                let draft = serde_json::from_value::<CocktailDraft>(entry).map_err(|source| {
                    CatalogLoadError::MalformedRecord {
                        key: key.clone(),
                        source,
                    }
                })?;
                CocktailRecord::new(draft)
                    .map_err(|source| CatalogLoadError::InvalidRecord { key, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// Read and load a catalog source file.
    ///
    /// # Errors
    /// Returns [`CatalogLoadError::Read`] when the file cannot be read, and
    /// otherwise the errors of [`Catalog::load`].
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogLoadError> {
        let source =
            mixmaster_fs::read_utf8_to_string(path).map_err(|source| CatalogLoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::load(&source)?;
        info!("loaded {} cocktails from {path}", catalog.len());
        Ok(catalog)
    }

    /// Load the catalog bundled with the crate.
    ///
    /// # Errors
    /// Propagates the errors of [`Catalog::load`].
    pub fn bundled() -> Result<Self, CatalogLoadError> {
        Self::load(BUNDLED_CATALOG)
    }

    /// Assemble a catalog from already validated records.
    ///
    /// # Errors
    /// Returns [`CatalogLoadError::DuplicateName`] when two records share a
    /// name.
    pub fn from_records(records: Vec<CocktailRecord>) -> Result<Self, CatalogLoadError> {
        let mut positions = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if positions.insert(record.name().to_owned(), index).is_some() {
                return Err(CatalogLoadError::DuplicateName {
                    name: record.name().to_owned(),
                });
            }
        }
        Ok(Self { records, positions })
    }

    /// Every record, in source order.
    #[must_use]
    pub fn all(&self) -> &[CocktailRecord] {
        &self.records
    }

    /// Look a record up by its exact name.
    ///
    /// # Errors
    /// Returns [`NotFound`] when no record carries `name`.
    pub fn by_name(&self, name: &str) -> Result<&CocktailRecord, NotFound> {
        self.positions
            .get(name)
            .and_then(|&index| self.records.get(index))
            .ok_or_else(|| NotFound {
                name: name.to_owned(),
            })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, CocktailRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CocktailRecord;
    type IntoIter = std::slice::Iter<'a, CocktailRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn record_key(name: Option<&str>, index: usize) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => format!("entry {}", index.saturating_add(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entry(name: &str, base_spirit: &str) -> String {
        format!(
            r#"{{"name": "{name}", "base_spirit": "{base_spirit}",
                "flavor_tags": ["citrus"], "skill_required": "beginner",
                "strength_rating": 5, "occasion_tags": ["party"],
                "season_tags": ["summer"]}}"#
        )
    }

    fn document(entries: &[String]) -> String {
        format!(r#"{{"cocktails": [{}]}}"#, entries.join(","))
    }

    #[rstest]
    fn keeps_source_order() {
        let catalog = Catalog::load(&document(&[
            entry("Zombie", "rum"),
            entry("Aviation", "gin"),
            entry("Margarita", "tequila"),
        ]))
        .unwrap();
        let names: Vec<_> = catalog.iter().map(CocktailRecord::name).collect();
        assert_eq!(names, vec!["Zombie", "Aviation", "Margarita"]);
    }

    #[rstest]
    fn first_invalid_record_is_fatal() {
        let err = Catalog::load(&document(&[
            entry("Daiquiri", "rum"),
            entry("Mystery", "absinthe"),
            entry("Sazerac", "mead"),
        ]))
        .unwrap_err();
        match err {
            CatalogLoadError::InvalidRecord { key, .. } => assert_eq!(key, "Mystery"),
            other => panic!("expected InvalidRecord, found {other:?}"),
        }
    }

    #[rstest]
    fn blank_names_are_keyed_by_position() {
        let err = Catalog::load(&document(&[entry("Daiquiri", "rum"), entry(" ", "gin")]))
            .unwrap_err();
        match err {
            CatalogLoadError::InvalidRecord { key, source } => {
                assert_eq!(key, "entry 2");
                assert_eq!(source, CocktailRecordError::BlankName);
            }
            other => panic!("expected InvalidRecord, found {other:?}"),
        }
    }

    #[rstest]
    fn duplicate_names_are_rejected() {
        let err = Catalog::load(&document(&[entry("Daiquiri", "rum"), entry("Daiquiri", "gin")]))
            .unwrap_err();
        assert!(matches!(err, CatalogLoadError::DuplicateName { name } if name == "Daiquiri"));
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"drinks": []}"#)]
    #[case(r#"{"cocktails": {"name": "Half"}}"#)]
    fn malformed_documents_fail_to_parse(#[case] source: &str) {
        assert!(matches!(
            Catalog::load(source),
            Err(CatalogLoadError::Parse { .. })
        ));
    }

    fn malformed_key(source: &str) -> String {
        match Catalog::load(source) {
            Err(CatalogLoadError::MalformedRecord { key, .. }) => key,
            other => panic!("expected MalformedRecord, found {other:?}"),
        }
    }

    #[rstest]
    fn records_missing_fields_are_keyed_by_name() {
        assert_eq!(malformed_key(r#"{"cocktails": [{"name": "Half"}]}"#), "Half");
        let gimlet = entry("Gimlet", "gin").replace(r#""strength_rating": 5, "#, "");
        let err = Catalog::load(&document(&[entry("Daiquiri", "rum"), gimlet])).unwrap_err();
        assert!(err.to_string().contains("Gimlet"), "unexpected error: {err}");
        assert!(err.to_string().contains("strength_rating"));
    }

    #[rstest]
    fn mistyped_fields_are_keyed_by_name() {
        let rickey = entry("Rickey", "gin")
            .replace(r#""strength_rating": 5"#, r#""strength_rating": "strong""#);
        assert_eq!(
            malformed_key(&document(&[entry("Daiquiri", "rum"), rickey])),
            "Rickey"
        );
    }

    #[rstest]
    fn unknown_record_fields_are_keyed_by_name() {
        let fizz = entry("Fizz", "gin")
            .replace(r#""name": "Fizz","#, r#""name": "Fizz", "garnish": "lemon","#);
        let err = Catalog::load(&document(&[fizz])).unwrap_err();
        match err {
            CatalogLoadError::MalformedRecord { key, source } => {
                assert_eq!(key, "Fizz");
                assert!(source.to_string().contains("garnish"));
            }
            other => panic!("expected MalformedRecord, found {other:?}"),
        }
    }

    #[rstest]
    fn nameless_malformed_records_are_keyed_by_position() {
        let source = document(&[
            entry("Daiquiri", "rum"),
            r#"{"base_spirit": "gin"}"#.to_owned(),
        ]);
        assert_eq!(malformed_key(&source), "entry 2");
    }

    #[rstest]
    fn lookup_reports_missing_names() {
        let catalog = Catalog::load(&document(&[entry("Daiquiri", "rum")])).unwrap();
        assert_eq!(
            catalog.by_name("Gimlet"),
            Err(NotFound {
                name: "Gimlet".into()
            })
        );
        assert_eq!(catalog.by_name("Daiquiri").map(CocktailRecord::name), Ok("Daiquiri"));
    }

    #[rstest]
    fn empty_catalogs_are_valid() {
        let catalog = Catalog::load(r#"{"cocktails": []}"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[rstest]
    fn bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.len() >= 15);
        assert!(catalog.by_name("Mojito").is_ok());
    }
}
