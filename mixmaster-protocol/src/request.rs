//! Parse the whitespace-separated request protocol.
//!
//! A recommend request is any number of `dimension=value` assertions followed
//! by the `recommend` trigger. A browse request is the single token
//! `browseAll`. A trailing `.` on the trigger is tolerated.
//!
//! # Examples
//!
//! ```
//! use mixmaster_core::Dimension;
//! use mixmaster_protocol::{Request, parse_request};
//!
//! let request = parse_request("spirit=gin season=winter recommend").expect("valid request");
//! let Request::Recommend { assertions } = request else {
//!     panic!("expected a recommend request");
//! };
//! assert_eq!(assertions.len(), 2);
//! assert_eq!(assertions[0].dimension, Dimension::Spirit);
//! ```

use mixmaster_core::{Assertion, Dimension};
use thiserror::Error;

/// Trigger asking for ranked recommendations.
pub const RECOMMEND: &str = "recommend";
/// Trigger asking for the unscored catalog listing.
pub const BROWSE_ALL: &str = "browseAll";

const RECOMMEND_ALIAS: &str = "find_and_display_recommendations";
const BROWSE_ALL_ALIAS: &str = "browse_all_cocktails";

/// A parsed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Score and rank the catalog for the asserted preferences.
    Recommend {
        /// Assertions in request order; the last one per dimension wins.
        assertions: Vec<Assertion>,
    },
    /// List the whole catalog without scores.
    BrowseAll,
}

/// Errors raised for requests that break the protocol grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// The request held no tokens.
    #[error("request is empty")]
    Empty,
    /// No trigger ended the request.
    #[error("request must end with 'recommend' or 'browseAll'")]
    MissingTrigger,
    /// A token was not of the form `dimension=value`.
    #[error("malformed assertion '{token}' (expected dimension=value)")]
    MalformedAssertion {
        /// The offending token.
        token: String,
    },
    /// An assertion named a dimension outside the protocol.
    #[error("unknown dimension '{name}' (expected one of: {expected})")]
    UnknownDimension {
        /// The unrecognised name.
        name: String,
        /// Comma-separated list of accepted names.
        expected: String,
    },
    /// Tokens followed the trigger.
    #[error("unexpected '{token}' after '{trigger}'")]
    TrailingTokens {
        /// The trigger that should have ended the request.
        trigger: String,
        /// The first token after it.
        token: String,
    },
    /// Assertions preceded `browseAll`.
    #[error("'browseAll' takes no assertions")]
    AssertionsWithBrowseAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Recommend,
    BrowseAll,
}

fn trigger(token: &str) -> Option<Trigger> {
    let word = token.strip_suffix('.').unwrap_or(token);
    match word {
        RECOMMEND | RECOMMEND_ALIAS => Some(Trigger::Recommend),
        BROWSE_ALL | BROWSE_ALL_ALIAS => Some(Trigger::BrowseAll),
        _ => None,
    }
}

/// Resolve a protocol dimension name, accepting the long-form aliases.
///
/// ```
/// use mixmaster_core::Dimension;
/// use mixmaster_protocol::dimension_from_name;
///
/// assert_eq!(dimension_from_name("flavor_notes"), Some(Dimension::Flavor));
/// assert_eq!(dimension_from_name("garnish"), None);
/// ```
#[must_use]
pub fn dimension_from_name(name: &str) -> Option<Dimension> {
    match name {
        "spirit_preference" => Some(Dimension::Spirit),
        "flavor_notes" => Some(Dimension::Flavor),
        "skill_level" => Some(Dimension::Skill),
        "occasion_type" => Some(Dimension::Occasion),
        "current_season" => Some(Dimension::Season),
        _ => name.parse().ok(),
    }
}

fn parse_assertion(token: &str) -> Result<Assertion, ProtocolError> {
    let malformed = || ProtocolError::MalformedAssertion {
        token: token.to_owned(),
    };
    let (name, value) = token.split_once('=').ok_or_else(malformed)?;
    if name.is_empty() || value.is_empty() {
        return Err(malformed());
    }
    let dimension = dimension_from_name(name).ok_or_else(|| ProtocolError::UnknownDimension {
        name: name.to_owned(),
        expected: Dimension::ALL
            .iter()
            .map(|dimension| dimension.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    })?;
    Ok(Assertion::new(dimension, value))
}

/// Parse one request.
///
/// # Errors
/// Returns the first [`ProtocolError`] met while reading tokens left to
/// right.
pub fn parse_request(text: &str) -> Result<Request, ProtocolError> {
    let mut tokens = text.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Err(ProtocolError::Empty);
    }
    let mut assertions = Vec::new();
    while let Some(token) = tokens.next() {
        let Some(found) = trigger(token) else {
            assertions.push(parse_assertion(token)?);
            continue;
        };
        if let Some(extra) = tokens.next() {
            return Err(ProtocolError::TrailingTokens {
                trigger: token.to_owned(),
                token: extra.to_owned(),
            });
        }
        return match found {
            Trigger::Recommend => Ok(Request::Recommend { assertions }),
            Trigger::BrowseAll if assertions.is_empty() => Ok(Request::BrowseAll),
            Trigger::BrowseAll => Err(ProtocolError::AssertionsWithBrowseAll),
        };
    }
    Err(ProtocolError::MissingTrigger)
}
