//! Core domain entities representing the link model.
//!
//! # Entity Types
//!
//! - [`CanonicalLink`] - A normalized Reddit link
//! - [`RedditHost`] - The closed set of hosts a canonical link can use
//! - [`LinkCategory`] - What a link points at

pub mod canonical_link;
pub mod link_category;

pub use canonical_link::{CanonicalLink, RedditHost};
pub use link_category::LinkCategory;
