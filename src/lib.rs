//! # Reddit Links
//!
//! Normalization and classification of Reddit links for in-app routing.
//!
//! ## Architecture
//!
//! The crate is a two-stage pipeline of pure functions:
//!
//! - **Domain** ([`domain`]) - [`CanonicalLink`], [`RedditHost`] and [`LinkCategory`]
//! - **Normalizer** ([`normalizer`]) - raw string to canonical link, or `None`
//!   for anything that is not a Reddit link
//! - **Classifier** ([`classifier`]) - canonical link to exactly one category
//! - **Resolver** ([`resolver`]) - both stages in one call
//!
//! Nothing here performs I/O or holds mutable state, so every function is safe
//! to call from any thread.
//!
//! ## Quick Start
//!
//! ```
//! use reddit_links::{LinkCategory, classify, normalize};
//!
//! let link = normalize("https://www.reddit.com/r/announcements/comments/eorhm/reddit_30_less_typing/")
//!     .expect("reddit link");
//! assert_eq!(link.to_string(), "https://reddit.com/r/announcements/comments/eorhm/reddit_30_less_typing/");
//! assert_eq!(classify(&link), LinkCategory::Submission);
//!
//! // Separate services on reddit.com subdomains are not routable.
//! assert!(normalize("https://store.reddit.com/").is_none());
//! ```
//!
//! ## Configuration
//!
//! The `reddit-links` binary reads its settings from environment variables via
//! [`config::Config`]. The library needs none.

pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod normalizer;
pub mod resolver;
pub mod telemetry;

pub use classifier::classify;
pub use domain::entities::{CanonicalLink, LinkCategory, RedditHost};
pub use error::NormalizeError;
pub use normalizer::{normalize, try_normalize};
pub use resolver::{ResolvedLink, categorize, resolve};

/// Commonly used types for external consumers.
///
/// Re-exports the pipeline entry points and their types to simplify imports
/// for library users and integration tests.
pub mod prelude {
    pub use crate::classifier::classify;
    pub use crate::domain::entities::{CanonicalLink, LinkCategory, RedditHost};
    pub use crate::error::NormalizeError;
    pub use crate::normalizer::{normalize, try_normalize};
    pub use crate::resolver::{ResolvedLink, categorize, resolve};
}
