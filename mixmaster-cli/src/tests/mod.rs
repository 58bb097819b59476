//! Shared test harness modules for the MixMaster CLI.
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use super::*;

mod catalog_unit;
mod helpers;
