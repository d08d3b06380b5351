//! Well-known counter keys.
//!
//! A counter is a named integer held entirely by the external store. It is
//! created implicitly on first increment (zero-initialized), only ever grows
//! by one, and is never read without incrementing: the post-increment value
//! returned by the store is the only view of it this service has.

/// Key of the page-visit counter, incremented on every home page view.
pub const HITS: &str = "hits";

/// Key of the vote counter, incremented on every vote submission.
pub const VOTES: &str = "votes";
