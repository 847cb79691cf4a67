//! Full pipeline from a raw string to a category.

use crate::classifier::classify;
use crate::domain::entities::{CanonicalLink, LinkCategory};
use crate::normalizer::normalize;
use serde::Serialize;

/// A canonical link together with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub link: CanonicalLink,
    pub category: LinkCategory,
}

/// Normalizes and classifies `raw` in one step.
///
/// Returns `None` when the input is not a Reddit link; callers then fall back
/// to generic link handling.
pub fn resolve(raw: &str) -> Option<ResolvedLink> {
    let link = normalize(raw)?;
    let category = classify(&link);
    Some(ResolvedLink { link, category })
}

/// Categorizes `raw`, mapping rejected inputs to [`LinkCategory::NotReddit`].
pub fn categorize(raw: &str) -> LinkCategory {
    resolve(raw).map_or(LinkCategory::NotReddit, |resolved| resolved.category)
}
