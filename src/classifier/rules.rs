//! Ordered classification rules.
//!
//! Each rule pairs a predicate over the link's shape with the category it
//! yields. Rules are evaluated top to bottom and the first match wins, so the
//! more specific shapes (comments, wiki, search) sit above the generic
//! subreddit and path rules.

use crate::domain::entities::{CanonicalLink, LinkCategory, RedditHost};

/// Sort orders that still render a plain subreddit listing.
const LISTING_SORTS: &[&str] = &[
    "hot",
    "new",
    "top",
    "rising",
    "controversial",
    "gilded",
    "best",
];

/// The parts of a canonical link classification looks at.
#[derive(Debug)]
pub(crate) struct LinkShape<'a> {
    pub host: RedditHost,
    pub segments: Vec<&'a str>,
    pub has_query: bool,
}

impl<'a> LinkShape<'a> {
    pub(crate) fn of(link: &'a CanonicalLink) -> Self {
        Self {
            host: link.host(),
            segments: link.segments(),
            has_query: link.has_query(),
        }
    }
}

pub(crate) struct Rule {
    pub name: &'static str,
    pub category: LinkCategory,
    pub matches: fn(&LinkShape<'_>) -> bool,
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "shortlink-host",
        category: LinkCategory::Shortened,
        matches: shortlink_host,
    },
    Rule {
        name: "front-page",
        category: LinkCategory::Home,
        matches: front_page,
    },
    Rule {
        name: "comment-without-sub",
        category: LinkCategory::CommentPermalink,
        matches: comment_without_sub,
    },
    Rule {
        name: "submission-without-sub",
        category: LinkCategory::SubmissionWithoutSub,
        matches: submission_without_sub,
    },
    Rule {
        name: "subreddit-comment",
        category: LinkCategory::CommentPermalink,
        matches: subreddit_comment,
    },
    Rule {
        name: "subreddit-submission",
        category: LinkCategory::Submission,
        matches: subreddit_submission,
    },
    Rule {
        name: "subreddit-wiki",
        category: LinkCategory::Wiki,
        matches: subreddit_wiki,
    },
    Rule {
        name: "subreddit-search",
        category: LinkCategory::Search,
        matches: subreddit_search,
    },
    Rule {
        name: "subreddit-listing",
        category: LinkCategory::Subreddit,
        matches: subreddit_listing,
    },
    Rule {
        name: "subreddit-page",
        category: LinkCategory::Other,
        matches: subreddit_page,
    },
    Rule {
        name: "user-profile",
        category: LinkCategory::User,
        matches: user_profile,
    },
    Rule {
        name: "live-thread",
        category: LinkCategory::Live,
        matches: live_thread,
    },
    Rule {
        name: "live-thread-page",
        category: LinkCategory::Other,
        matches: live_thread_page,
    },
    Rule {
        name: "site-search",
        category: LinkCategory::Search,
        matches: site_search,
    },
    Rule {
        name: "site-help",
        category: LinkCategory::Wiki,
        matches: site_help,
    },
];

fn is(segment: &str, keyword: &str) -> bool {
    segment.eq_ignore_ascii_case(keyword)
}

fn shortlink_host(shape: &LinkShape<'_>) -> bool {
    shape.host == RedditHost::Shortlink
}

fn front_page(shape: &LinkShape<'_>) -> bool {
    shape.segments.is_empty()
}

// Trailing empty segments are already trimmed, so any segment after the
// title slot means a comment id is present. The title itself may be empty.
fn comment_without_sub(shape: &LinkShape<'_>) -> bool {
    matches!(
        shape.segments.as_slice(),
        [comments, id, _title, _comment, ..] if is(comments, "comments") && !id.is_empty()
    )
}

fn submission_without_sub(shape: &LinkShape<'_>) -> bool {
    matches!(
        shape.segments.as_slice(),
        [comments, id] | [comments, id, _] if is(comments, "comments") && !id.is_empty()
    )
}

fn subreddit_comment(shape: &LinkShape<'_>) -> bool {
    matches!(
        shape.segments.as_slice(),
        [r, sub, comments, id, _title, _comment, ..]
            if is(r, "r") && !sub.is_empty() && is(comments, "comments") && !id.is_empty()
    )
}

fn subreddit_submission(shape: &LinkShape<'_>) -> bool {
    matches!(
        shape.segments.as_slice(),
        [r, sub, comments, id] | [r, sub, comments, id, _]
            if is(r, "r") && !sub.is_empty() && is(comments, "comments") && !id.is_empty()
    )
}

fn subreddit_wiki(shape: &LinkShape<'_>) -> bool {
    matches!(
        shape.segments.as_slice(),
        [r, sub, page, ..]
            if is(r, "r") && !sub.is_empty() && (is(page, "wiki") || is(page, "help"))
    )
}

fn subreddit_search(shape: &LinkShape<'_>) -> bool {
    matches!(
        shape.segments.as_slice(),
        [r, sub, search, ..] if is(r, "r") && !sub.is_empty() && is(search, "search")
    )
}

fn subreddit_listing(shape: &LinkShape<'_>) -> bool {
    match shape.segments.as_slice() {
        [r, sub] => is(r, "r") && !sub.is_empty(),
        [r, sub, sort] => {
            is(r, "r") && !sub.is_empty() && LISTING_SORTS.iter().any(|s| is(sort, s))
        }
        _ => false,
    }
}

fn subreddit_page(shape: &LinkShape<'_>) -> bool {
    matches!(shape.segments.as_slice(), [r, ..] if is(r, "r"))
}

fn user_profile(shape: &LinkShape<'_>) -> bool {
    matches!(
        shape.segments.as_slice(),
        [user, name, ..] if (is(user, "u") || is(user, "user")) && !name.is_empty()
    )
}

fn live_thread(shape: &LinkShape<'_>) -> bool {
    matches!(
        shape.segments.as_slice(),
        [live, id] if is(live, "live") && !id.is_empty()
    )
}

fn live_thread_page(shape: &LinkShape<'_>) -> bool {
    matches!(shape.segments.as_slice(), [live, ..] if is(live, "live"))
}

fn site_search(shape: &LinkShape<'_>) -> bool {
    shape.has_query && matches!(shape.segments.as_slice(), [search, ..] if is(search, "search"))
}

// Normalization already rewrites these to /r/reddit.com/wiki.
fn site_help(shape: &LinkShape<'_>) -> bool {
    matches!(
        shape.segments.as_slice(),
        [page, ..] if is(page, "help") || is(page, "wiki")
    )
}
