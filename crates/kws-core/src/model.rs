//! Catalog and submission records.
//!
//! Records serialize with camelCase field names, which is the JSON shape
//! stored under `kws-submissions` and served by the site API. Each mutable
//! record has a matching `*Draft` carrying everything except the fields the
//! store assigns itself (id, slug, view count, timestamp).

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered specification table, e.g. `Capacity → 100 Liters/Batch`.
pub type Specifications = IndexMap<String, String>;

/// A fabricated product shown in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub specifications: Specifications,
    pub spec_sheet_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
}

/// Editable product fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub specifications: Specifications,
    #[serde(default)]
    pub spec_sheet_url: String,
}

impl Product {
    /// Overwrite the editable fields, keeping id, slug and view count.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.image_url = draft.image_url;
        self.gallery = draft.gallery;
        self.category = draft.category;
        self.applications = draft.applications;
        self.materials = draft.materials;
        self.specifications = draft.specifications;
        self.spec_sheet_url = draft.spec_sheet_url;
    }
}

/// A blog article. `content` is HTML produced by the rich-text editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub author: String,
    pub publish_date: String,
    pub meta_description: String,
    #[serde(default)]
    pub meta_keywords: Vec<String>,
}

/// Editable blog post fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub author: String,
    pub publish_date: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub meta_keywords: Vec<String>,
}

impl BlogPost {
    /// Overwrite the editable fields, keeping id and slug.
    pub fn apply(&mut self, draft: BlogPostDraft) {
        self.title = draft.title;
        self.excerpt = draft.excerpt;
        self.content = draft.content;
        self.image_url = draft.image_url;
        self.author = draft.author;
        self.publish_date = draft.publish_date;
        self.meta_description = draft.meta_description;
        self.meta_keywords = draft.meta_keywords;
    }
}

/// Icon shown next to a service card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceIcon {
    Fabrication,
    Structural,
    OnSite,
    Pipe,
    Support,
    Consultation,
}

/// A service line. The list is fixed: services are edited, never added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub detailed_description: String,
    pub image_url: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub icon: ServiceIcon,
}

/// Editable service fields. The icon is optional on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub detailed_description: String,
    pub image_url: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub icon: Option<ServiceIcon>,
}

impl Service {
    /// Overwrite the editable fields, keeping id, slug and (unless given) icon.
    pub fn apply(&mut self, draft: ServiceDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.detailed_description = draft.detailed_description;
        self.image_url = draft.image_url;
        self.features = draft.features;
        if let Some(icon) = draft.icon {
            self.icon = icon;
        }
    }
}

/// A customer quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub quote: String,
    pub author: String,
    pub company: String,
}

/// Editable testimonial fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDraft {
    pub quote: String,
    pub author: String,
    pub company: String,
}

impl Testimonial {
    pub fn apply(&mut self, draft: TestimonialDraft) {
        self.quote = draft.quote;
        self.author = draft.author;
        self.company = draft.company;
    }
}

/// Social profile links of a team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,
}

/// A member of the company team. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image_url: String,
    pub socials: SocialLinks,
}

/// A main navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub path: String,
}

/// A headline figure on the home page (`10+` / `Years of Experience`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Which public form produced a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionKind {
    Contact,
    Inquiry,
    Callback,
}

/// A contact, inquiry or callback request sent through the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SubmissionKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Submission fields supplied by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDraft {
    #[serde(rename = "type")]
    pub kind: SubmissionKind,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub preferred_time: Option<String>,
}

impl SubmissionDraft {
    /// Stamp the draft with its id and receive time.
    #[must_use]
    pub fn into_submission(self, id: String, timestamp: DateTime<Utc>) -> Submission {
        Submission {
            id,
            kind: self.kind,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            product_name: self.product_name,
            phone: self.phone,
            preferred_time: self.preferred_time,
            timestamp,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn submission_uses_type_and_camel_case_on_the_wire() {
        let sub = SubmissionDraft {
            kind: SubmissionKind::Callback,
            name: "Aisha".to_owned(),
            email: None,
            subject: None,
            message: None,
            product_name: None,
            phone: Some("0800".to_owned()),
            preferred_time: Some("Morning".to_owned()),
        }
        .into_submission("sub_1".to_owned(), DateTime::UNIX_EPOCH);

        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(json["type"], "Callback");
        assert_eq!(json["preferredTime"], "Morning");
        assert_eq!(json["timestamp"], "1970-01-01T00:00:00Z");
        assert!(json.get("email").is_none());
    }

    #[test]
    fn product_apply_keeps_identity_and_views() {
        let mut product = crate::seed::products().remove(0);
        let (id, slug, views) = (product.id, product.slug.clone(), product.views);

        product.apply(ProductDraft {
            name: "Renamed Processor".to_owned(),
            image_url: "x.png".to_owned(),
            ..ProductDraft::default()
        });

        assert_eq!(product.id, id);
        assert_eq!(product.slug, slug);
        assert_eq!(product.views, views);
        assert_eq!(product.name, "Renamed Processor");
    }

    #[test]
    fn service_icon_is_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ServiceIcon::OnSite).unwrap(),
            "\"on-site\""
        );
    }
}
