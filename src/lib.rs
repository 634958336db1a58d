// ytmonetize: heuristic YouTube monetization checker
//
// This is the library root. Each module corresponds to one stage of the
// check: URL resolution and fetching (youtube), flattening (snapshot),
// scoring, and the pipeline that ties them together.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod snapshot;
pub mod youtube;

#[cfg(feature = "web")]
pub mod web;
