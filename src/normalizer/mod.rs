//! Reddit link normalization.
//!
//! Turns absolute URLs, scheme-less hosts and site-relative paths into a
//! [`CanonicalLink`] on one of the recognized hosts.

mod path;
mod subdomain;

use crate::domain::entities::{CanonicalLink, RedditHost};
use crate::error::NormalizeError;
use std::borrow::Cow;
use url::{ParseError, Url};

/// Normalizes a link to its canonical form.
///
/// Returns `None` when the input is not a Reddit link. Rejection is an
/// expected outcome, so the reason is only logged at `debug` level; use
/// [`try_normalize`] to inspect it.
///
/// # Examples
///
/// ```
/// use reddit_links::normalize;
///
/// let link = normalize("https://np.reddit.com/live/wbjbjba8zrl6").unwrap();
/// assert_eq!(link.to_string(), "https://npreddit.com/live/wbjbjba8zrl6");
///
/// assert!(normalize("https://blog.reddit.com/").is_none());
/// ```
pub fn normalize(raw: &str) -> Option<CanonicalLink> {
    match try_normalize(raw) {
        Ok(link) => Some(link),
        Err(reason) => {
            tracing::debug!(input = raw, %reason, "not a reddit link");
            None
        }
    }
}

/// Normalizes a link to its canonical form.
///
/// # Normalization Rules
///
/// 1. **Relative input**: `/path` is resolved against `https://reddit.com`,
///    `//host/path` against `https:`, a bare `host/path` gets `https://`
/// 2. **Protocol**: `http` and `https` in any letter case become `https`
/// 3. **Host**: `www`, `ssl`, `pay`, locale and other alias subdomains are
///    dropped, `np` becomes `npreddit.com`, `<sub>.reddit.com` becomes
///    `reddit.com/r/<sub>`
/// 4. **Help pages**: `/help` and `/wiki` move under `/r/reddit.com/wiki`
/// 5. **Path, query, fragment**: preserved, trailing slash included
/// 6. **Port and credentials**: removed
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidFormat`] for unparsable input,
/// [`NormalizeError::UnsupportedScheme`] for non-HTTP(S) schemes and the host
/// errors of the subdomain rules for anything not served by Reddit.
pub fn try_normalize(raw: &str) -> Result<CanonicalLink, NormalizeError> {
    let absolute = absolutize(raw.trim());
    let url = Url::parse(&absolute).map_err(|e| NormalizeError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(NormalizeError::UnsupportedScheme(other.to_string())),
    }

    let host = url
        .host_str()
        .ok_or_else(|| NormalizeError::InvalidFormat("missing host".to_string()))?;
    let resolved = subdomain::resolve_host(host)?;

    let mut link_path = explicit_path(&absolute, &url).to_string();
    if let Some(subreddit) = &resolved.subreddit {
        link_path = path::prefix_subreddit(subreddit, &link_path);
    }
    if resolved.host.serves_pages() {
        link_path = path::rewrite_help_pages(&link_path).into_owned();
    }

    Ok(CanonicalLink::new(
        resolved.host,
        link_path,
        url.query().map(str::to_owned),
        url.fragment().map(str::to_owned),
    ))
}

/// Gives every accepted input shape a scheme and a host.
fn absolutize(raw: &str) -> Cow<'_, str> {
    if raw.starts_with("//") {
        Cow::Owned(format!("https:{raw}"))
    } else if raw.starts_with('/') {
        Cow::Owned(format!("https://{}{raw}", RedditHost::Reddit))
    } else if lacks_scheme(raw) {
        Cow::Owned(format!("https://{raw}"))
    } else {
        Cow::Borrowed(raw)
    }
}

/// A host with a port (`www.reddit.com:8080/r/x`) parses with the host as its
/// scheme. Real schemes never contain a dot.
fn lacks_scheme(raw: &str) -> bool {
    match Url::parse(raw) {
        Err(ParseError::RelativeUrlWithoutBase) => true,
        Ok(url) => url.scheme().contains('.'),
        Err(_) => false,
    }
}

/// Returns the parsed path, or an empty path when the input had none.
///
/// `Url` always reports at least `/` for HTTP URLs, which would turn
/// `https://reddit.com` into `https://reddit.com/`.
///
/// The scheme may be followed by any number of slashes (`https:reddit.com`,
/// `https:/reddit.com`), so the authority starts after them.
fn explicit_path<'u>(absolute: &str, url: &'u Url) -> &'u str {
    let Some(after_scheme) = absolute.get(url.scheme().len() + 1..) else {
        return url.path();
    };
    let authority = after_scheme.trim_start_matches(['/', '\\']);

    let authority_end = authority
        .find(['/', '\\', '?', '#'])
        .unwrap_or(authority.len());

    if authority[authority_end..].starts_with(['/', '\\']) {
        url.path()
    } else {
        ""
    }
}
