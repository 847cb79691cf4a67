//! Canonical Reddit link produced by the normalizer.

use crate::error::NormalizeError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Hosts a canonical link can live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedditHost {
    /// `reddit.com`, the target of every transparent alias.
    Reddit,
    /// `npreddit.com`, "no participation" browsing of `reddit.com` content.
    NoParticipation,
    /// `redd.it` shortlinks.
    Shortlink,
}

impl RedditHost {
    pub const fn as_str(self) -> &'static str {
        match self {
            RedditHost::Reddit => "reddit.com",
            RedditHost::NoParticipation => "npreddit.com",
            RedditHost::Shortlink => "redd.it",
        }
    }

    /// Matches a host that is already in canonical form.
    pub fn from_canonical(host: &str) -> Option<Self> {
        [
            RedditHost::Reddit,
            RedditHost::NoParticipation,
            RedditHost::Shortlink,
        ]
        .into_iter()
        .find(|candidate| candidate.as_str().eq_ignore_ascii_case(host))
    }

    /// Returns true for hosts serving regular `reddit.com` pages.
    pub fn serves_pages(self) -> bool {
        matches!(self, RedditHost::Reddit | RedditHost::NoParticipation)
    }
}

impl fmt::Display for RedditHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized Reddit link.
///
/// The scheme is always `https` and the host is one of [`RedditHost`]. Path,
/// query and fragment are kept as they were supplied, after alias and help
/// page rewriting. Two links are equal when they serialize to the same string.
///
/// Only the normalizer constructs these; parse one with
/// [`crate::normalize`] or `str::parse`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalLink {
    host: RedditHost,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl CanonicalLink {
    pub(crate) fn new(
        host: RedditHost,
        path: String,
        query: Option<String>,
        fragment: Option<String>,
    ) -> Self {
        Self {
            host,
            path,
            query,
            fragment,
        }
    }

    pub fn host(&self) -> RedditHost {
        self.host
    }

    /// Path exactly as it will be serialized; empty when the input had none.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns true if the link carries a non-empty query string.
    pub fn has_query(&self) -> bool {
        self.query.as_deref().is_some_and(|q| !q.is_empty())
    }

    /// Splits the path into positional segments.
    ///
    /// The leading slash and any trailing slashes are dropped. Empty segments
    /// between two slashes are kept, so `/comments/id//c1` yields
    /// `["comments", "id", "", "c1"]`.
    pub fn segments(&self) -> Vec<&str> {
        let path = self.path.strip_prefix('/').unwrap_or(&self.path);
        let mut segments: Vec<&str> = path.split('/').collect();
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
        segments
    }
}

impl fmt::Display for CanonicalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "https://{}{}", self.host, self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl FromStr for CanonicalLink {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::normalizer::try_normalize(s)
    }
}

impl Serialize for CanonicalLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
