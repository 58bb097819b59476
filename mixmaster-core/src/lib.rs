//! Core domain types for the Mixmaster recommendation engine.
//!
//! The crate owns the closed vocabularies, the validated cocktail catalog,
//! per-query preference sets and the [`Scorer`] seam that scoring engines
//! implement. Constructors return `Result` so invalid data is caught where it
//! enters the system rather than where it is used.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod cocktail;
pub mod preference;
pub mod scorer;
pub mod vocabulary;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{BUNDLED_CATALOG, Catalog, CatalogLoadError, NotFound};
pub use cocktail::{CocktailDraft, CocktailRecord, CocktailRecordError};
pub use preference::{Assertion, DEFAULT_STRENGTH, InvalidPreferenceError, PreferenceSet};
pub use scorer::{MatchScore, Scorer};
pub use vocabulary::{
    Dimension, Flavor, Occasion, Season, Skill, Spirit, Strength, StrengthError, VocabularyError,
};
