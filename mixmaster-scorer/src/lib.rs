//! Preference scoring and ranking for Mixmaster cocktails.
//!
//! The crate provides the request-time half of a recommendation:
//! - [`PreferenceScorer`] implements the
//!   [`Scorer`](mixmaster_core::Scorer) trait with configurable
//!   per-dimension weights and a linear strength taper.
//! - [`Ranker`] scores a whole [`Catalog`](mixmaster_core::Catalog), drops
//!   non-matches, orders the rest by score and caps the result. It also
//!   produces the unscored browse-all listing.
//!
//! # Examples
//!
//! ```
//! use mixmaster_core::{Catalog, PreferenceSet, Season};
//! use mixmaster_scorer::{Ranker, ScoringConfig};
//!
//! let catalog = Catalog::bundled().expect("bundled catalog");
//! let ranker = Ranker::from_config(ScoringConfig::default()).expect("valid config");
//! let preferences = PreferenceSet::new().with_season(Season::Winter);
//! for entry in ranker.rank(&preferences, &catalog) {
//!     assert!(entry.total().is_some_and(|total| total > 0));
//! }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod engine;
mod error;
mod ranker;

pub use config::{DimensionWeights, ScoringConfig};
pub use engine::PreferenceScorer;
pub use error::ScoringConfigError;
pub use ranker::{Ranker, ScoredEntry};
