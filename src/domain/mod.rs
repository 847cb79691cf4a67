//! Domain layer containing the link model.
//!
//! # Architecture
//!
//! - [`entities`] - Canonical links, hosts and categories
//!
//! # Design Principles
//!
//! - Entities carry no normalization or classification logic of their own
//! - A [`entities::CanonicalLink`] is only produced by [`crate::normalizer`],
//!   so every value upholds the host and scheme invariants
//! - [`entities::LinkCategory`] is closed; call sites match on it exhaustively

pub mod entities;
