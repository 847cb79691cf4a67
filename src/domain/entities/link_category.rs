//! Semantic category of a Reddit link.

use serde::Serialize;
use std::fmt;

/// What a Reddit link points at.
///
/// Every input maps to exactly one category. [`LinkCategory::NotReddit`] is
/// only produced for inputs the normalizer rejects; classifying a canonical
/// link never yields it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkCategory {
    /// Front page (`/`).
    Home,
    /// Subreddit listing (`/r/android`, `/r/android/top`).
    Subreddit,
    /// Submission inside a subreddit (`/r/sub/comments/id/title`).
    Submission,
    /// Submission addressed without its subreddit (`/comments/id/title`).
    SubmissionWithoutSub,
    /// Single comment thread (`/r/sub/comments/id/title/comment`).
    CommentPermalink,
    /// User profile (`/u/name`, `/user/name`).
    User,
    /// Wiki or help page.
    Wiki,
    /// Search results.
    Search,
    /// Live thread (`/live/id`).
    Live,
    /// `redd.it` shortlink.
    Shortened,
    /// Reddit-hosted page without a dedicated route.
    Other,
    /// Not a Reddit link at all.
    NotReddit,
}

impl LinkCategory {
    /// All categories in declaration order.
    pub const ALL: [LinkCategory; 12] = [
        LinkCategory::Home,
        LinkCategory::Subreddit,
        LinkCategory::Submission,
        LinkCategory::SubmissionWithoutSub,
        LinkCategory::CommentPermalink,
        LinkCategory::User,
        LinkCategory::Wiki,
        LinkCategory::Search,
        LinkCategory::Live,
        LinkCategory::Shortened,
        LinkCategory::Other,
        LinkCategory::NotReddit,
    ];

    /// Stable tag used in logs and JSON output.
    pub const fn as_str(self) -> &'static str {
        match self {
            LinkCategory::Home => "HOME",
            LinkCategory::Subreddit => "SUBREDDIT",
            LinkCategory::Submission => "SUBMISSION",
            LinkCategory::SubmissionWithoutSub => "SUBMISSION_WITHOUT_SUB",
            LinkCategory::CommentPermalink => "COMMENT_PERMALINK",
            LinkCategory::User => "USER",
            LinkCategory::Wiki => "WIKI",
            LinkCategory::Search => "SEARCH",
            LinkCategory::Live => "LIVE",
            LinkCategory::Shortened => "SHORTENED",
            LinkCategory::Other => "OTHER",
            LinkCategory::NotReddit => "NOT_REDDIT",
        }
    }

    /// Returns true for categories the app opens in a dedicated screen.
    pub fn is_routable(self) -> bool {
        !matches!(self, LinkCategory::Other | LinkCategory::NotReddit)
    }
}

impl fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_tag() {
        for category in LinkCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn test_multi_word_tags() {
        assert_eq!(
            LinkCategory::SubmissionWithoutSub.to_string(),
            "SUBMISSION_WITHOUT_SUB"
        );
        assert_eq!(
            LinkCategory::CommentPermalink.to_string(),
            "COMMENT_PERMALINK"
        );
        assert_eq!(LinkCategory::NotReddit.to_string(), "NOT_REDDIT");
    }

    #[test]
    fn test_routable() {
        assert!(LinkCategory::Submission.is_routable());
        assert!(LinkCategory::Home.is_routable());
        assert!(!LinkCategory::Other.is_routable());
        assert!(!LinkCategory::NotReddit.is_routable());
    }
}
