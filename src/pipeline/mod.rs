// Pipeline: glue between URL resolution, fetching, and scoring.

pub mod check;
