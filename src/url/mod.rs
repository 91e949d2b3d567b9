//! URL handling for link resolution and topic routing
//!
//! This module covers the two URL concerns of the crawler:
//! - Resolving anchor hrefs against a source's base URL into absolute URLs
//! - Deriving the seen-set domain and the message-bus topic from a link's
//!   own host (not from the source that discovered it)

mod resolve;
mod topic;

pub use resolve::resolve_href;
pub use topic::{domain_and_topic, link_domain, topic_for_host};
