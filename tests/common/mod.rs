#![allow(dead_code)]

use reddit_links::prelude::*;

/// Canonical string form, or `None` when the input is rejected.
pub fn format_url(raw: &str) -> Option<String> {
    normalize(raw).map(|link| link.to_string())
}

/// Category of a link that must normalize successfully.
pub fn link_type(raw: &str) -> LinkCategory {
    let link = normalize(raw).unwrap_or_else(|| panic!("expected a reddit link: {raw}"));
    classify(&link)
}

/// Inputs accepted by the normalizer, covering every host rule.
pub const ACCEPTED_INPUTS: &[&str] = &[
    "http://reddit.com",
    "Https://reddit.com",
    "https://www.reddit.com/",
    "https://pay.reddit.com/",
    "https://ssl.reddit.com/",
    "https://en-gb.reddit.com/",
    "https://us.reddit.com/",
    "https://np.reddit.com/live/wbjbjba8zrl6",
    "https://android.reddit.com",
    "/r/android",
    "https://reddit.com/help",
    "https://reddit.com/help/registration",
    "https://www.reddit.com/r/Android/wiki/index",
    "https://www.reddit.com/r/Android/help",
    "https://www.reddit.com/r/announcements/comments/eorhm/reddit_30_less_typing/c19qk6j",
    "https://www.reddit.com/r/announcements/comments/eorhm//c19qk6j",
    "https://www.reddit.com/r/announcements/comments/eorhm/reddit_30_less_typing/",
    "https://www.reddit.com/comments/eorhm/reddit_30_less_typing/",
    "https://www.reddit.com/r/Android/search?q=test&restrict_sr=on&sort=relevance&t=all",
    "https://www.reddit.com/search?q=test",
    "https://www.reddit.com/u/l3d00m",
    "https://www.reddit.com/r/pics/about/moderators",
    "https://www.reddit.com/live/x9gf3donjlkq",
    "https://www.reddit.com/live/x9gf3donjlkq/discussions",
    "https://redd.it/eorhm/",
];
