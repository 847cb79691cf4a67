//! Classification of canonical links into [`LinkCategory`] values.

mod rules;

use crate::domain::entities::{CanonicalLink, LinkCategory};
use rules::{LinkShape, RULES};

/// Classifies a canonical link.
///
/// Looks only at the host, the path segments and whether a query string is
/// present. Links no rule recognizes are [`LinkCategory::Other`]; this never
/// returns [`LinkCategory::NotReddit`].
///
/// # Examples
///
/// ```
/// use reddit_links::{classify, normalize, LinkCategory};
///
/// let link = normalize("https://www.reddit.com/u/l3d00m").unwrap();
/// assert_eq!(classify(&link), LinkCategory::User);
/// ```
pub fn classify(link: &CanonicalLink) -> LinkCategory {
    let shape = LinkShape::of(link);

    match RULES.iter().find(|rule| (rule.matches)(&shape)) {
        Some(rule) => {
            tracing::debug!(
                link = %link,
                rule = rule.name,
                category = %rule.category,
                "classified link"
            );
            rule.category
        }
        None => {
            tracing::debug!(link = %link, category = %LinkCategory::Other, "no rule matched");
            LinkCategory::Other
        }
    }
}
