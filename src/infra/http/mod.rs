mod middleware;
mod public;

pub use public::{HttpState, build_router};

/// Body returned for `/robots.txt`; the export path writes the same bytes.
pub(crate) const ROBOTS_TXT: &str = "User-agent: *\nAllow: /\n";
