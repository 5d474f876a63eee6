//! Search-result preview for blog posts.
//!
//! Shows how a post's title and meta description will look in a search
//! listing and how close each is to the length search engines display.

use serde::Serialize;

/// Host shown in preview URLs.
pub const SITE_HOST: &str = "www.kamiluwelding.com";

/// Title length beyond which search engines truncate.
pub const TITLE_LIMIT: usize = 60;

/// Meta description length beyond which search engines truncate.
pub const DESCRIPTION_LIMIT: usize = 160;

const PLACEHOLDER_TITLE: &str = "Your Blog Post Title";
const PLACEHOLDER_DESCRIPTION: &str = "Enter a meta description to see how it looks in search results. A good description is concise and invites users to click.";
const PLACEHOLDER_SLUG: &str = "new-post";

/// How a length compares to its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthStatus {
    /// At most 85% of the limit.
    Ok,
    /// Above 85% of the limit.
    Warning,
    /// Above the limit.
    Over,
}

/// A measured field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthMeter {
    pub length: usize,
    pub limit: usize,
    pub status: LengthStatus,
    /// Meter fill, capped at 100.
    pub fill_percent: f64,
}

impl LengthMeter {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn measure(text: &str, limit: usize) -> Self {
        let length = text.chars().count();
        let percent = length as f64 / limit.max(1) as f64 * 100.0;
        let status = if percent > 100.0 {
            LengthStatus::Over
        } else if percent > 85.0 {
            LengthStatus::Warning
        } else {
            LengthStatus::Ok
        };
        Self {
            length,
            limit,
            status,
            fill_percent: percent.min(100.0),
        }
    }
}

/// A rendered search-result preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerpPreview {
    pub display_url: String,
    pub display_title: String,
    pub display_description: String,
    pub title: LengthMeter,
    pub description: LengthMeter,
}

impl SerpPreview {
    /// Preview a post. Empty fields show placeholders; meters always measure
    /// the real input.
    #[must_use]
    pub fn new(title: &str, meta_description: &str, slug: &str) -> Self {
        let or = |value: &str, fallback: &str| {
            if value.is_empty() {
                fallback.to_owned()
            } else {
                value.to_owned()
            }
        };

        Self {
            display_url: format!("{SITE_HOST}/blog/{}", or(slug, PLACEHOLDER_SLUG)),
            display_title: or(title, PLACEHOLDER_TITLE),
            display_description: or(meta_description, PLACEHOLDER_DESCRIPTION),
            title: LengthMeter::measure(title, TITLE_LIMIT),
            description: LengthMeter::measure(meta_description, DESCRIPTION_LIMIT),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_show_placeholders() {
        let preview = SerpPreview::new("", "", "");
        assert_eq!(preview.display_url, "www.kamiluwelding.com/blog/new-post");
        assert_eq!(preview.display_title, "Your Blog Post Title");
        assert!(preview.display_description.starts_with("Enter a meta description"));
        assert_eq!(preview.title.length, 0);
        assert_eq!(preview.title.status, LengthStatus::Ok);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(LengthMeter::measure(&"a".repeat(51), 60).status, LengthStatus::Ok);
        assert_eq!(LengthMeter::measure(&"a".repeat(52), 60).status, LengthStatus::Warning);
        assert_eq!(LengthMeter::measure(&"a".repeat(60), 60).status, LengthStatus::Warning);
        assert_eq!(LengthMeter::measure(&"a".repeat(61), 60).status, LengthStatus::Over);
    }

    #[test]
    fn fill_is_capped() {
        let meter = LengthMeter::measure(&"a".repeat(320), DESCRIPTION_LIMIT);
        assert_eq!(meter.fill_percent, 100.0);
        assert_eq!(meter.status, LengthStatus::Over);
    }

    #[test]
    fn preview_uses_the_post_slug() {
        let preview = SerpPreview::new(
            "Why Stainless Steel is Essential",
            "Hygiene and durability.",
            "stainless-steel-in-food-processing",
        );
        assert_eq!(
            preview.display_url,
            "www.kamiluwelding.com/blog/stainless-steel-in-food-processing"
        );
        assert_eq!(preview.title.length, 32);
    }
}
