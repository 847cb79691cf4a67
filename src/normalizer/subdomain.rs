//! Host resolution for `reddit.com` and its subdomains.
//!
//! Subdomain handling is table driven: every label is looked up in the sets
//! below, in the order [`SubdomainKind::of`] checks them.

use crate::domain::entities::RedditHost;
use crate::error::NormalizeError;
use regex::Regex;
use std::sync::LazyLock;

const REDDIT_DOMAIN: &str = "reddit.com";

/// Shortlink host accepted with a `www.` prefix.
const SHORTLINK_WWW: &str = "www.redd.it";

/// Subdomain switching to "no participation" mode.
const NO_PARTICIPATION: &str = "np";

/// Subdomains hosting separate services rather than mirrors of `reddit.com`.
const SERVICE_SUBDOMAINS: &[&str] = &["beta", "blog", "code", "mod", "out", "store"];

/// Subdomains serving the same content as `reddit.com`.
const TRANSPARENT_ALIASES: &[&str] = &["www", "ssl", "pay", "us", "amp", "old", "new"];

/// Language tags (`de`, `en-gb`) and one- or two-letter hosts (`i`, `m`).
static LOCALE_SUBDOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[_a-z0-9]{2}-)?[_a-z0-9]{1,2}$").expect("locale pattern is valid")
});

/// How a single subdomain label is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubdomainKind {
    NoParticipation,
    Service,
    Alias,
    Subreddit,
}

impl SubdomainKind {
    /// Looks up a lowercase label. `np` is checked before the locale pattern,
    /// which it would otherwise match.
    pub(crate) fn of(label: &str) -> Self {
        if label == NO_PARTICIPATION {
            SubdomainKind::NoParticipation
        } else if SERVICE_SUBDOMAINS.contains(&label) {
            SubdomainKind::Service
        } else if TRANSPARENT_ALIASES.contains(&label) || LOCALE_SUBDOMAIN.is_match(label) {
            SubdomainKind::Alias
        } else {
            SubdomainKind::Subreddit
        }
    }
}

/// Canonical host plus the subreddit encoded in the original host, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedHost {
    pub host: RedditHost,
    pub subreddit: Option<String>,
}

impl ResolvedHost {
    fn plain(host: RedditHost) -> Self {
        Self {
            host,
            subreddit: None,
        }
    }
}

/// Maps a lowercase host to its canonical form.
///
/// Leading aliases are peeled off one label at a time. A subreddit shorthand
/// is only accepted as the label directly in front of `reddit.com`.
///
/// # Errors
///
/// Returns [`NormalizeError::ForeignHost`] for hosts outside `reddit.com`,
/// [`NormalizeError::ServiceSubdomain`] for service subdomains and
/// [`NormalizeError::NestedSubdomain`] when an unrecognized label is followed
/// by further labels.
pub(crate) fn resolve_host(host: &str) -> Result<ResolvedHost, NormalizeError> {
    let host = host.trim_end_matches('.');

    if let Some(canonical) = RedditHost::from_canonical(host) {
        return Ok(ResolvedHost::plain(canonical));
    }
    if host == SHORTLINK_WWW {
        return Ok(ResolvedHost::plain(RedditHost::Shortlink));
    }

    let Some(subdomains) = host
        .strip_suffix(REDDIT_DOMAIN)
        .and_then(|rest| rest.strip_suffix('.'))
    else {
        return Err(NormalizeError::ForeignHost(host.to_string()));
    };

    let mut resolved = ResolvedHost::plain(RedditHost::Reddit);
    let mut labels = subdomains.split('.').peekable();

    while let Some(label) = labels.next() {
        if label.is_empty() {
            return Err(NormalizeError::InvalidFormat(format!(
                "empty label in host `{host}`"
            )));
        }

        match SubdomainKind::of(label) {
            SubdomainKind::Alias => {}
            SubdomainKind::NoParticipation => resolved.host = RedditHost::NoParticipation,
            SubdomainKind::Service => {
                return Err(NormalizeError::ServiceSubdomain(label.to_string()));
            }
            SubdomainKind::Subreddit if labels.peek().is_none() => {
                resolved.subreddit = Some(label.to_string());
            }
            SubdomainKind::Subreddit => {
                return Err(NormalizeError::NestedSubdomain(host.to_string()));
            }
        }
    }

    Ok(resolved)
}
