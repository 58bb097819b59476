//! Drive one request from text to report.
//!
//! Every request walks the same cycle:
//! `Idle -> ParsingRequest -> Computing -> Rendering -> Idle`. A request that
//! breaks the protocol stops in `Failed` with an empty body. Preference
//! values outside their vocabulary do not stop the cycle; they surface as
//! diagnostics next to a normal body.

use std::sync::Arc;

use log::debug;
use mixmaster_core::{Catalog, InvalidPreferenceError, PreferenceSet, Scorer};
use mixmaster_scorer::{PreferenceScorer, Ranker, ScoredEntry};
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::{ProtocolError, RenderMode, Request, parse_request, render};

/// Lifecycle phase of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for a request, or finished with one.
    Idle,
    /// Tokenising the request text.
    ParsingRequest,
    /// Scoring or listing the catalog.
    Computing,
    /// Producing the block report.
    Rendering,
    /// The request broke the protocol.
    Failed,
}

/// A message for the caller's diagnostic channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The request broke the protocol grammar.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    /// A preference value was rejected; its dimension scored nothing.
    #[error(transparent)]
    InvalidPreference(#[from] InvalidPreferenceError),
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of [`Engine::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Block report; empty when nothing matched or the request failed.
    pub body: String,
    /// Diagnostics, kept apart from the body.
    pub diagnostics: Vec<Diagnostic>,
    /// Terminal phase: [`Phase::Idle`] or [`Phase::Failed`].
    pub state: Phase,
}

impl Response {
    /// Report whether the request was rejected by the protocol.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.state == Phase::Failed
    }
}

/// Ranked entries for one request, before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation<'a> {
    /// Listing the request asked for.
    pub mode: RenderMode,
    /// Preferences applied, absent for browse-all requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<PreferenceSet>,
    /// Entries in report order.
    pub entries: Vec<ScoredEntry<'a>>,
    /// Rejected preference values.
    pub diagnostics: Vec<Diagnostic>,
}

struct Cycle {
    phase: Phase,
}

impl Cycle {
    const fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    fn advance(&mut self, next: Phase) {
        debug!("request phase {:?} -> {next:?}", self.phase);
        self.phase = next;
    }
}

/// Answers requests against a shared, read-only catalog.
///
/// Engines are cheap to clone and safe to share across threads; each request
/// is an independent pass with no state carried between calls.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use mixmaster_core::Catalog;
/// use mixmaster_protocol::{Engine, Phase};
///
/// let catalog = Arc::new(Catalog::bundled().expect("bundled catalog"));
/// let engine = Engine::new(catalog);
/// let response = engine.handle("spirit=rum flavor=citrus season=summer recommend");
/// assert_eq!(response.state, Phase::Idle);
/// assert!(response.body.starts_with("[Match Score: "));
///
/// let failed = engine.handle("spirit=rum");
/// assert_eq!(failed.state, Phase::Failed);
/// assert!(failed.body.is_empty());
/// ```
#[derive(Debug)]
pub struct Engine<S = PreferenceScorer> {
    catalog: Arc<Catalog>,
    ranker: Arc<Ranker<S>>,
}

impl<S> Clone for Engine<S> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            ranker: Arc::clone(&self.ranker),
        }
    }
}

impl Engine<PreferenceScorer> {
    /// Build an engine with the default scoring configuration.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_ranker(catalog, Ranker::default())
    }
}

impl<S: Scorer> Engine<S> {
    /// Build an engine around a custom ranker.
    #[must_use]
    pub fn with_ranker(catalog: Arc<Catalog>, ranker: Ranker<S>) -> Self {
        Self {
            catalog,
            ranker: Arc::new(ranker),
        }
    }

    /// Catalog the engine answers from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn compute(&self, cycle: &mut Cycle, text: &str) -> Result<Evaluation<'_>, ProtocolError> {
        cycle.advance(Phase::ParsingRequest);
        let request = match parse_request(text) {
            Ok(request) => request,
            Err(err) => {
                cycle.advance(Phase::Failed);
                return Err(err);
            }
        };
        cycle.advance(Phase::Computing);
        let evaluation = match request {
            Request::Recommend { assertions } => {
                let (preferences, rejections) = PreferenceSet::assemble(assertions);
                let entries = self.ranker.rank(&preferences, &self.catalog);
                Evaluation {
                    mode: RenderMode::Recommend,
                    preferences: Some(preferences),
                    entries,
                    diagnostics: rejections.into_iter().map(Diagnostic::from).collect(),
                }
            }
            Request::BrowseAll => Evaluation {
                mode: RenderMode::BrowseAll,
                preferences: None,
                entries: self.ranker.browse_all(&self.catalog),
                diagnostics: Vec::new(),
            },
        };
        debug!(
            "{:?} request produced {} entries and {} diagnostics",
            evaluation.mode,
            evaluation.entries.len(),
            evaluation.diagnostics.len()
        );
        Ok(evaluation)
    }

    /// Parse and compute a request without rendering it.
    ///
    /// # Errors
    /// Returns [`ProtocolError`] when the request breaks the grammar.
    pub fn evaluate(&self, text: &str) -> Result<Evaluation<'_>, ProtocolError> {
        let mut cycle = Cycle::new();
        let evaluation = self.compute(&mut cycle, text)?;
        cycle.advance(Phase::Idle);
        Ok(evaluation)
    }

    /// Answer a request with a rendered body and diagnostics.
    #[must_use]
    pub fn handle(&self, text: &str) -> Response {
        let mut cycle = Cycle::new();
        match self.compute(&mut cycle, text) {
            Ok(evaluation) => {
                cycle.advance(Phase::Rendering);
                let body = render(&evaluation.entries, evaluation.mode);
                cycle.advance(Phase::Idle);
                Response {
                    body,
                    diagnostics: evaluation.diagnostics,
                    state: cycle.phase,
                }
            }
            Err(err) => Response {
                body: String::new(),
                diagnostics: vec![Diagnostic::from(err)],
                state: cycle.phase,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixmaster_core::test_support::{CocktailBuilder, catalog_of};
    use mixmaster_core::{Dimension, Flavor, Occasion, Season, Skill, Spirit};
    use rstest::{fixture, rstest};

    #[fixture]
    fn engine() -> Engine {
        let catalog = catalog_of([
            CocktailBuilder::new("Whiskey Sour")
                .spirit(Spirit::Whiskey)
                .flavors(&[Flavor::Sweet])
                .skill(Skill::Expert)
                .strength(9)
                .occasions(&[Occasion::AfterDinner])
                .seasons(&[Season::Winter]),
            CocktailBuilder::new("Mojito")
                .spirit(Spirit::Rum)
                .flavors(&[Flavor::Citrus, Flavor::Herbal])
                .skill(Skill::Beginner)
                .strength(5)
                .occasions(&[Occasion::CasualRelaxing])
                .seasons(&[Season::Summer]),
        ])
        .unwrap();
        Engine::new(Arc::new(catalog))
    }

    const MOJITO_REQUEST: &str = "spirit=rum flavor=citrus skill=beginner strength=5 \
                                  occasion=casual_relaxing season=summer recommend";

    #[rstest]
    fn recommend_renders_scored_blocks(engine: Engine) {
        let response = engine.handle(MOJITO_REQUEST);
        assert_eq!(response.state, Phase::Idle);
        assert!(response.diagnostics.is_empty());
        assert!(response.body.starts_with("[Match Score: 100]\n**Mojito**\n"));
        assert!(!response.body.contains("Whiskey Sour"));
    }

    #[rstest]
    fn browse_all_lists_everything(engine: Engine) {
        let response = engine.handle("browseAll");
        assert_eq!(response.state, Phase::Idle);
        assert!(response.body.starts_with("**Whiskey Sour**\n"));
        assert_eq!(response.body.matches(crate::SEPARATOR).count(), 2);
        assert!(!response.body.contains("Match Score"));
    }

    #[rstest]
    fn protocol_errors_fail_with_an_empty_body(engine: Engine) {
        let response = engine.handle("spirit=rum");
        assert!(response.is_failed());
        assert!(response.body.is_empty());
        assert_eq!(
            response.diagnostics,
            vec![Diagnostic::Protocol(ProtocolError::MissingTrigger)]
        );
    }

    #[rstest]
    fn invalid_values_degrade_to_diagnostics(engine: Engine) {
        let response = engine.handle("spirit=absinthe season=summer recommend");
        assert_eq!(response.state, Phase::Idle);
        assert_eq!(response.diagnostics.len(), 1);
        assert!(matches!(
            response.diagnostics.first(),
            Some(Diagnostic::InvalidPreference(err)) if err.dimension() == Dimension::Spirit
        ));
        assert!(response.body.contains("**Mojito**"));
    }

    #[rstest]
    fn empty_results_render_an_empty_body(engine: Engine) {
        let catalog = Arc::new(Catalog::from_records(Vec::new()).unwrap());
        let empty = Engine::with_ranker(catalog, engine.ranker.as_ref().clone());
        let response = empty.handle("recommend");
        assert_eq!(response.state, Phase::Idle);
        assert!(response.body.is_empty());
    }

    #[rstest]
    fn evaluation_exposes_scores(engine: Engine) {
        let evaluation = engine.evaluate(MOJITO_REQUEST).unwrap();
        assert_eq!(evaluation.mode, RenderMode::Recommend);
        let totals: Vec<_> = evaluation.entries.iter().map(ScoredEntry::total).collect();
        assert_eq!(totals, vec![Some(100)]);
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["mode"], "recommend");
        assert_eq!(json["entries"][0]["score"]["total"], 100);
    }

    #[rstest]
    fn evaluation_reports_protocol_errors(engine: Engine) {
        assert_eq!(
            engine.evaluate("recommend now"),
            Err(ProtocolError::TrailingTokens {
                trigger: "recommend".into(),
                token: "now".into()
            })
        );
    }

    #[rstest]
    fn diagnostics_serialise_as_messages() {
        let json = serde_json::to_value(Diagnostic::from(ProtocolError::Empty)).unwrap();
        assert_eq!(json, "request is empty");
    }
}
