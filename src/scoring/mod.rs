// Scoring: the monetization heuristic, revenue tables, and display lookups.
//
// Everything here is a pure function of snapshot data plus, for revenue,
// an injected random source.

pub mod lookups;
pub mod monetization;
pub mod revenue;
