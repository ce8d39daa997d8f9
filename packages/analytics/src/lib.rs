#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Analytical core for the inspection dashboard.
//!
//! Every interaction re-runs the same pipeline: the rank-filter query
//! materializes the visible window ([`query::rank_filter`]), and the two
//! aggregators reduce that window into the linked views
//! ([`community::community_statistics`],
//! [`facility::top_failing_facilities`]). All of it is synchronous, pure,
//! and cheap enough to recompute in full on every state change.

pub mod community;
pub mod facility;
pub mod query;

pub use query::FilteredView;
