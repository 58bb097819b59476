//! Text protocol for the Mixmaster recommendation engine.
//!
//! Callers send a request such as
//! `spirit=gin flavor=herbal strength=6 recommend` or `browseAll` and get
//! back a block report plus a separate list of diagnostics. The [`Engine`]
//! ties the pieces together: [`parse_request`] reads the tokens, the
//! [`Ranker`](mixmaster_scorer::Ranker) scores the catalog, and [`render`]
//! writes the blocks.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod render;
mod request;

pub use engine::{Diagnostic, Engine, Evaluation, Phase, Response};
pub use render::{RenderMode, Report, SEPARATOR, render};
pub use request::{BROWSE_ALL, ProtocolError, RECOMMEND, Request, dimension_from_name, parse_request};
