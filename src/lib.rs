//! Facade crate for the MixMaster recommendation engine.
//!
//! This crate re-exports the catalog and preference model, the scoring and
//! ranking engine, and the request protocol so embedders can depend on a
//! single crate.
//!
//! ```
//! use std::sync::Arc;
//!
//! use mixmaster::{Catalog, Engine};
//!
//! let catalog = Arc::new(Catalog::bundled().expect("bundled catalog"));
//! let engine = Engine::new(catalog);
//! let response = engine.handle("spirit=gin season=winter recommend");
//! assert!(!response.is_failed());
//! ```

#![forbid(unsafe_code)]

pub use mixmaster_core::{
    Assertion, BUNDLED_CATALOG, Catalog, CatalogLoadError, CocktailDraft, CocktailRecord,
    CocktailRecordError, DEFAULT_STRENGTH, Dimension, Flavor, InvalidPreferenceError, MatchScore,
    NotFound, Occasion, PreferenceSet, Scorer, Season, Skill, Spirit, Strength, StrengthError,
    VocabularyError,
};

pub use mixmaster_scorer::{
    DimensionWeights, PreferenceScorer, Ranker, ScoredEntry, ScoringConfig, ScoringConfigError,
};

pub use mixmaster_protocol::{
    Diagnostic, Engine, Evaluation, Phase, ProtocolError, RenderMode, Report, Request, Response,
    SEPARATOR, parse_request, render,
};

#[cfg(feature = "test-support")]
pub use mixmaster_core::test_support;
