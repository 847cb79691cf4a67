mod common;

use common::{format_url, link_type};
use reddit_links::LinkCategory;

#[test]
fn test_detects_shortened() {
    assert_eq!(link_type("https://redd.it/eorhm/"), LinkCategory::Shortened);
}

#[test]
fn test_detects_wiki() {
    assert_eq!(
        link_type("https://www.reddit.com/r/Android/wiki/index"),
        LinkCategory::Wiki
    );
    assert_eq!(
        link_type("https://www.reddit.com/r/Android/help"),
        LinkCategory::Wiki
    );
    assert_eq!(link_type("https://reddit.com/help"), LinkCategory::Wiki);
    assert_eq!(
        link_type("https://reddit.com/help/registration"),
        LinkCategory::Wiki
    );
}

#[test]
fn test_detects_comment() {
    assert_eq!(
        link_type(
            "https://www.reddit.com/r/announcements/comments/eorhm/reddit_30_less_typing/c19qk6j"
        ),
        LinkCategory::CommentPermalink
    );
    assert_eq!(
        link_type("https://www.reddit.com/r/announcements/comments/eorhm//c19qk6j"),
        LinkCategory::CommentPermalink
    );
}

#[test]
fn test_detects_submission() {
    assert_eq!(
        link_type("https://www.reddit.com/r/announcements/comments/eorhm/reddit_30_less_typing/"),
        LinkCategory::Submission
    );
}

#[test]
fn test_detects_submission_without_sub() {
    assert_eq!(
        link_type("https://www.reddit.com/comments/eorhm/reddit_30_less_typing/"),
        LinkCategory::SubmissionWithoutSub
    );
}

#[test]
fn test_detects_subreddit() {
    assert_eq!(
        link_type("https://www.reddit.com/r/android"),
        LinkCategory::Subreddit
    );
}

#[test]
fn test_detects_search() {
    assert_eq!(
        link_type("https://www.reddit.com/search?q=test"),
        LinkCategory::Search
    );
    assert_eq!(
        link_type("https://www.reddit.com/r/Android/search?q=test&restrict_sr=on&sort=relevance&t=all"),
        LinkCategory::Search
    );
}

#[test]
fn test_detects_user() {
    assert_eq!(link_type("https://www.reddit.com/u/l3d00m"), LinkCategory::User);
}

#[test]
fn test_detects_home() {
    assert_eq!(link_type("https://www.reddit.com/"), LinkCategory::Home);
}

#[test]
fn test_detects_other() {
    assert_eq!(
        link_type("https://www.reddit.com/r/pics/about/moderators"),
        LinkCategory::Other
    );
    assert_eq!(
        link_type("https://www.reddit.com/live/x9gf3donjlkq/discussions"),
        LinkCategory::Other
    );
    assert_eq!(
        link_type("https://www.reddit.com/live/x9gf3donjlkq/contributors"),
        LinkCategory::Other
    );
}

#[test]
fn test_detects_live() {
    assert_eq!(
        link_type("https://www.reddit.com/live/x9gf3donjlkq"),
        LinkCategory::Live
    );
}

#[test]
fn test_formats_basic() {
    assert_eq!(
        format_url("https://www.reddit.com/live/wbjbjba8zrl6").as_deref(),
        Some("https://reddit.com/live/wbjbjba8zrl6")
    );
}

#[test]
fn test_formats_np() {
    assert_eq!(
        format_url("https://np.reddit.com/live/wbjbjba8zrl6").as_deref(),
        Some("https://npreddit.com/live/wbjbjba8zrl6")
    );
}

#[test]
fn test_formats_subdomains() {
    assert_eq!(format_url("https://beta.reddit.com/"), None);
    assert_eq!(format_url("https://blog.reddit.com/"), None);
    assert_eq!(format_url("https://code.reddit.com/"), None);
    assert_eq!(format_url("https://mod.reddit.com/"), None);
    assert_eq!(format_url("https://out.reddit.com/"), None);
    assert_eq!(format_url("https://store.reddit.com/"), None);
    assert_eq!(
        format_url("https://pay.reddit.com/").as_deref(),
        Some("https://reddit.com/")
    );
    assert_eq!(
        format_url("https://ssl.reddit.com/").as_deref(),
        Some("https://reddit.com/")
    );
    assert_eq!(
        format_url("https://en-gb.reddit.com/").as_deref(),
        Some("https://reddit.com/")
    );
    assert_eq!(
        format_url("https://us.reddit.com/").as_deref(),
        Some("https://reddit.com/")
    );
}

#[test]
fn test_formats_subreddit() {
    assert_eq!(
        format_url("/r/android").as_deref(),
        Some("https://reddit.com/r/android")
    );
    assert_eq!(
        format_url("https://android.reddit.com").as_deref(),
        Some("https://reddit.com/r/android")
    );
}

#[test]
fn test_formats_wiki() {
    assert_eq!(
        format_url("https://reddit.com/help").as_deref(),
        Some("https://reddit.com/r/reddit.com/wiki")
    );
    assert_eq!(
        format_url("https://reddit.com/help/registration").as_deref(),
        Some("https://reddit.com/r/reddit.com/wiki/registration")
    );
    assert_eq!(
        format_url("https://www.reddit.com/r/android/wiki/index").as_deref(),
        Some("https://reddit.com/r/android/wiki/index")
    );
}

#[test]
fn test_formats_protocol() {
    assert_eq!(
        format_url("http://reddit.com").as_deref(),
        Some("https://reddit.com")
    );
    assert_eq!(
        format_url("Https://reddit.com").as_deref(),
        Some("https://reddit.com")
    );
    assert_eq!(
        format_url("https://reddit.com").as_deref(),
        Some("https://reddit.com")
    );
}

#[test]
fn test_rejects_unrelated_domains() {
    assert_eq!(format_url("https://example.com/r/android"), None);
    assert_eq!(format_url("https://notreddit.com/"), None);
    assert_eq!(format_url("https://reddit.com.evil.example/"), None);
}
