//! Path rewriting applied after host resolution.

use std::borrow::Cow;

/// Reddit serves its help pages as the wiki of this subreddit.
const HELP_WIKI_ROOT: &str = "/r/reddit.com/wiki";

/// Root-level segments that address the help wiki.
const HELP_SEGMENTS: &[&str] = &["help", "wiki"];

/// Rewrites `/help...` and `/wiki...` to the help wiki.
///
/// Only a whole first segment matches (`/helpful` is left alone) and the
/// remainder of the path, trailing slash included, is kept.
pub(crate) fn rewrite_help_pages(path: &str) -> Cow<'_, str> {
    let Some(rest) = path.strip_prefix('/') else {
        return Cow::Borrowed(path);
    };

    let (first, tail) = rest.split_at(rest.find('/').unwrap_or(rest.len()));

    if HELP_SEGMENTS
        .iter()
        .any(|segment| first.eq_ignore_ascii_case(segment))
    {
        Cow::Owned(format!("{HELP_WIKI_ROOT}{tail}"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Prefixes the path with the subreddit taken from a `<sub>.reddit.com` host.
pub(crate) fn prefix_subreddit(subreddit: &str, path: &str) -> String {
    format!("/r/{subreddit}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_help_root() {
        assert_eq!(rewrite_help_pages("/help"), "/r/reddit.com/wiki");
        assert_eq!(rewrite_help_pages("/help/"), "/r/reddit.com/wiki/");
    }

    #[test]
    fn test_rewrite_help_page() {
        assert_eq!(
            rewrite_help_pages("/help/registration"),
            "/r/reddit.com/wiki/registration"
        );
        assert_eq!(rewrite_help_pages("/HELP/faq"), "/r/reddit.com/wiki/faq");
    }

    #[test]
    fn test_rewrite_root_wiki() {
        assert_eq!(
            rewrite_help_pages("/wiki/reddiquette"),
            "/r/reddit.com/wiki/reddiquette"
        );
    }

    #[test]
    fn test_untouched_paths() {
        for path in ["", "/", "/helpful", "/r/android/wiki/index", "/r/reddit.com/wiki"] {
            assert!(matches!(rewrite_help_pages(path), Cow::Borrowed(_)), "path: {path}");
        }
    }

    #[test]
    fn test_prefix_subreddit() {
        assert_eq!(prefix_subreddit("android", ""), "/r/android");
        assert_eq!(prefix_subreddit("android", "/top"), "/r/android/top");
    }
}
