//! Admin form parsing and validation.
//!
//! Forms arrive as flat text fields: comma-separated lists and a
//! `Key: Value` block for product specifications. These types turn them into
//! drafts for the [`AdminStore`](crate::store::AdminStore), rejecting missing
//! required fields and missing main images.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::editor::RichTextEditor;
use crate::error::FormError;
use crate::model::{
    BlogPost, BlogPostDraft, Product, ProductDraft, Specifications, SubmissionDraft,
    SubmissionKind, TestimonialDraft,
};

const MISSING_PRODUCT_IMAGE: &str = "Please upload a main image.";
const MISSING_POST_IMAGE: &str = "Please upload an image for the blog post.";

/// Split a comma-separated field into trimmed, non-empty items.
#[must_use]
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse `Key: Value` lines into a specification table.
///
/// Each line splits on its first `:`; later colons stay in the value. Lines
/// without a colon, or with an empty key or value after trimming, are
/// skipped. A repeated key keeps its first position and takes the last value.
#[must_use]
pub fn parse_specifications(text: &str) -> Specifications {
    let mut specs = Specifications::new();
    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }
        specs.insert(key.to_owned(), value.to_owned());
    }
    specs
}

/// Render a specification table back into the editable `Key: Value` block.
#[must_use]
pub fn specifications_text(specs: &Specifications) -> String {
    specs
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn required(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required { field })
    } else {
        Ok(())
    }
}

fn required_opt(value: Option<&String>, field: &'static str) -> Result<(), FormError> {
    required(value.map_or("", String::as_str), field)
}

// ── Products ─────────────────────────────────────────────────────────

/// The product editor's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub gallery: Vec<String>,
    pub category: String,
    pub applications: String,
    pub materials: String,
    pub specifications: String,
    pub spec_sheet_url: String,
}

impl ProductForm {
    /// Prefill the form from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            gallery: product.gallery.clone(),
            category: product.category.clone(),
            applications: product.applications.join(", "),
            materials: product.materials.join(", "),
            specifications: specifications_text(&product.specifications),
            spec_sheet_url: product.spec_sheet_url.clone(),
        }
    }

    /// # Errors
    ///
    /// - [`FormError::Required`] if name, description or category is empty.
    /// - [`FormError::MissingImage`] if no main image was given.
    pub fn into_draft(self) -> Result<ProductDraft, FormError> {
        required(&self.name, "name")?;
        required(&self.description, "description")?;
        required(&self.category, "category")?;
        if self.image_url.trim().is_empty() {
            return Err(FormError::MissingImage {
                message: MISSING_PRODUCT_IMAGE,
            });
        }

        Ok(ProductDraft {
            name: self.name.trim().to_owned(),
            description: self.description,
            image_url: self.image_url,
            gallery: self.gallery,
            category: self.category,
            applications: split_list(&self.applications),
            materials: split_list(&self.materials),
            specifications: parse_specifications(&self.specifications),
            spec_sheet_url: self.spec_sheet_url,
        })
    }
}

// ── Blog posts ───────────────────────────────────────────────────────

/// Blog form fields other than the body, which lives in the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogFields {
    pub title: String,
    pub excerpt: String,
    pub image_url: String,
    pub author: String,
    /// ISO date; empty means today.
    pub publish_date: String,
    pub meta_description: String,
    pub meta_keywords: String,
}

/// The blog editor: plain fields plus a rich-text body.
pub struct BlogForm {
    pub fields: BlogFields,
    editor: Box<dyn RichTextEditor>,
    content_changed: Arc<AtomicBool>,
}

impl BlogForm {
    /// Wrap `editor`, tracking whether its content changes from here on.
    #[must_use]
    pub fn new(fields: BlogFields, mut editor: Box<dyn RichTextEditor>) -> Self {
        let content_changed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&content_changed);
        editor.on_change(Box::new(move |_| flag.store(true, Ordering::Relaxed)));
        Self {
            fields,
            editor,
            content_changed,
        }
    }

    /// Open an existing post: fields prefilled and its body loaded into the
    /// editor before change tracking starts.
    #[must_use]
    pub fn from_post(post: &BlogPost, mut editor: Box<dyn RichTextEditor>) -> Self {
        editor.set_content(&post.content);
        let fields = BlogFields {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            image_url: post.image_url.clone(),
            author: post.author.clone(),
            publish_date: post.publish_date.clone(),
            meta_description: post.meta_description.clone(),
            meta_keywords: post.meta_keywords.join(", "),
        };
        Self::new(fields, editor)
    }

    pub fn editor_mut(&mut self) -> &mut dyn RichTextEditor {
        self.editor.as_mut()
    }

    pub fn content(&self) -> &str {
        self.editor.content()
    }

    /// Whether the body was edited since the form was opened.
    pub fn content_changed(&self) -> bool {
        self.content_changed.load(Ordering::Relaxed)
    }

    /// # Errors
    ///
    /// - [`FormError::Required`] if title, excerpt or author is empty.
    /// - [`FormError::MissingImage`] if no image was given.
    pub fn into_draft(self, today: NaiveDate) -> Result<BlogPostDraft, FormError> {
        let fields = self.fields;
        required(&fields.title, "title")?;
        required(&fields.excerpt, "excerpt")?;
        required(&fields.author, "author")?;
        if fields.image_url.trim().is_empty() {
            return Err(FormError::MissingImage {
                message: MISSING_POST_IMAGE,
            });
        }

        let publish_date = if fields.publish_date.trim().is_empty() {
            today.format("%Y-%m-%d").to_string()
        } else {
            fields.publish_date
        };

        Ok(BlogPostDraft {
            title: fields.title.trim().to_owned(),
            excerpt: fields.excerpt,
            content: self.editor.content().to_owned(),
            image_url: fields.image_url,
            author: fields.author,
            publish_date,
            meta_description: fields.meta_description,
            meta_keywords: split_list(&fields.meta_keywords),
        })
    }
}

impl std::fmt::Debug for BlogForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogForm")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

// ── Testimonials ─────────────────────────────────────────────────────

/// # Errors
///
/// Returns [`FormError::Required`] for the first empty field.
pub fn validate_testimonial(draft: &TestimonialDraft) -> Result<(), FormError> {
    required(&draft.quote, "quote")?;
    required(&draft.author, "author")?;
    required(&draft.company, "company")
}

// ── Public submissions ───────────────────────────────────────────────

/// Check the fields each public form requires: a name always, email and
/// message for contact, a product for inquiries, a phone for callbacks.
///
/// # Errors
///
/// Returns [`FormError::Required`] for the first missing field.
pub fn validate_submission(draft: &SubmissionDraft) -> Result<(), FormError> {
    required(&draft.name, "name")?;
    match draft.kind {
        SubmissionKind::Contact => {
            required_opt(draft.email.as_ref(), "email")?;
            required_opt(draft.message.as_ref(), "message")
        }
        SubmissionKind::Inquiry => required_opt(draft.product_name.as_ref(), "productName"),
        SubmissionKind::Callback => required_opt(draft.phone.as_ref(), "phone"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::editor::BufferEditor;
    use crate::seed;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn lists_split_on_commas_and_trim() {
        assert_eq!(
            split_list(" Food Processing ,Apiculture,, "),
            vec!["Food Processing", "Apiculture"]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn specifications_parse_key_value_lines() {
        let specs = parse_specifications(
            "Capacity: 100 Liters/Batch\nno colon here\n: orphan value\nEmpty:   \nSchedule: 08:00 - 17:00",
        );
        let pairs: Vec<_> = specs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            pairs,
            vec![("Capacity", "100 Liters/Batch"), ("Schedule", "08:00 - 17:00")]
        );
    }

    #[test]
    fn specifications_text_round_trips_seed_data() {
        let product = &seed::products()[0];
        let text = specifications_text(&product.specifications);
        assert!(text.starts_with("Capacity: 100 Liters/Batch\n"));
        assert_eq!(parse_specifications(&text), product.specifications);
    }

    #[test]
    fn product_form_builds_draft() {
        let form = ProductForm {
            name: " Industrial Fryer ".to_owned(),
            description: "Continuous fryer for snack lines.".to_owned(),
            category: "Food Processing".to_owned(),
            image_url: "https://example.com/fryer.jpg".to_owned(),
            applications: "Snacks, Restaurants".to_owned(),
            materials: "304 Stainless Steel".to_owned(),
            specifications: "Capacity: 50 kg/hour".to_owned(),
            ..ProductForm::default()
        };

        let draft = form.into_draft().unwrap();
        assert_eq!(draft.name, "Industrial Fryer");
        assert_eq!(draft.applications, vec!["Snacks", "Restaurants"]);
        assert_eq!(draft.specifications["Capacity"], "50 kg/hour");
    }

    #[test]
    fn product_form_requires_main_image() {
        let form = ProductForm {
            name: "Fryer".to_owned(),
            description: "Batch fryer".to_owned(),
            category: "Food Processing".to_owned(),
            ..ProductForm::default()
        };
        let err = form.into_draft().unwrap_err();
        assert_eq!(err.to_string(), "Please upload a main image.");
    }

    #[test]
    fn product_form_requires_description_and_category() {
        let mut form = ProductForm {
            name: "Fryer".to_owned(),
            image_url: "https://example.com/fryer.jpg".to_owned(),
            category: "Food Processing".to_owned(),
            description: "   ".to_owned(),
            ..ProductForm::default()
        };
        assert!(matches!(
            form.clone().into_draft(),
            Err(FormError::Required {
                field: "description"
            })
        ));

        form.description = "Batch fryer".to_owned();
        form.category.clear();
        let err = form.into_draft().unwrap_err();
        assert_eq!(err.to_string(), "field 'category' is required");
    }

    #[test]
    fn product_form_prefills_from_product() {
        let product = &seed::products()[1];
        let form = ProductForm::from_product(product);
        assert_eq!(
            form.applications,
            "Farming Cooperatives, Large-Scale Farms, Post-Harvest Processing"
        );
        let draft = form.into_draft().unwrap();
        assert_eq!(draft.applications, product.applications);
        assert_eq!(draft.specifications, product.specifications);
    }

    fn blog_fields() -> BlogFields {
        BlogFields {
            title: "Cold Chains".to_owned(),
            excerpt: "Keeping produce fresh".to_owned(),
            image_url: "https://example.com/cold.jpg".to_owned(),
            author: "Muhammad Hamza".to_owned(),
            meta_keywords: "cold room, chiller".to_owned(),
            ..BlogFields::default()
        }
    }

    #[test]
    fn blog_form_reads_body_from_editor_and_defaults_date() {
        let mut form = BlogForm::new(blog_fields(), Box::new(BufferEditor::new()));
        form.editor_mut().set_content("<p>Body</p>");
        assert!(form.content_changed());

        let draft = form.into_draft(today()).unwrap();
        assert_eq!(draft.content, "<p>Body</p>");
        assert_eq!(draft.publish_date, "2024-06-01");
        assert_eq!(draft.meta_keywords, vec!["cold room", "chiller"]);
    }

    #[test]
    fn blog_form_opened_from_post_starts_unchanged() {
        let post = &seed::blog_posts()[0];
        let form = BlogForm::from_post(post, Box::new(BufferEditor::new()));
        assert!(!form.content_changed());
        assert_eq!(form.content(), post.content);

        let draft = form.into_draft(today()).unwrap();
        assert_eq!(draft.publish_date, "March 15, 2024");
        assert_eq!(draft.meta_keywords, post.meta_keywords);
    }

    #[test]
    fn blog_form_requires_image_and_title() {
        let mut fields = blog_fields();
        fields.image_url.clear();
        let err = BlogForm::new(fields, Box::new(BufferEditor::new()))
            .into_draft(today())
            .unwrap_err();
        assert_eq!(err.to_string(), "Please upload an image for the blog post.");

        let mut fields = blog_fields();
        fields.title = "  ".to_owned();
        let err = BlogForm::new(fields, Box::new(BufferEditor::new()))
            .into_draft(today())
            .unwrap_err();
        assert!(matches!(err, FormError::Required { field: "title" }));
    }

    #[test]
    fn testimonial_requires_every_field() {
        let draft = TestimonialDraft {
            quote: "Great".to_owned(),
            author: "Aisha".to_owned(),
            company: String::new(),
        };
        assert!(matches!(
            validate_testimonial(&draft),
            Err(FormError::Required { field: "company" })
        ));
    }

    #[test]
    fn submission_requirements_depend_on_kind() {
        let mut draft = SubmissionDraft {
            kind: SubmissionKind::Callback,
            name: "Emeka".to_owned(),
            email: None,
            subject: None,
            message: None,
            product_name: None,
            phone: Some(String::new()),
            preferred_time: None,
        };
        assert!(matches!(
            validate_submission(&draft),
            Err(FormError::Required { field: "phone" })
        ));

        draft.phone = Some("08031234567".to_owned());
        assert!(validate_submission(&draft).is_ok());

        draft.kind = SubmissionKind::Contact;
        assert!(matches!(
            validate_submission(&draft),
            Err(FormError::Required { field: "email" })
        ));

        draft.kind = SubmissionKind::Inquiry;
        draft.product_name = Some("Vegetable Dryer".to_owned());
        assert!(validate_submission(&draft).is_ok());
    }
}
