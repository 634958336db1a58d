// YouTube Data API v3 access: URL resolution, the HTTP client, and the
// fetch/fallback chain that turns a reference into a snapshot.
//
// Each submodule handles one stage. The `YoutubeApi` trait is the seam
// between the fallback logic and the network.

pub mod client;
pub mod duration;
pub mod fetch;
pub mod models;
pub mod traits;
pub mod url;
