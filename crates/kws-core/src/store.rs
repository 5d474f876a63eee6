//! The admin store: the single owner of catalog state.
//!
//! One [`AdminStore`] is built at startup and handed to whoever needs it; there
//! is no global instance. Catalog collections are seeded from [`crate::seed`]
//! and live in memory only. Submissions go through the persisted
//! [`SubmissionLog`].
//!
//! Every add/update/delete follows the same shape: new records get a
//! timestamp id and (for products and posts) a slug derived from the display
//! name, and are placed at the front of their list. Updates replace the
//! editable fields and keep id and slug, so renaming a record never changes
//! its URL.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use kws_storage::StorageBackend;

use crate::error::CatalogError;
use crate::ids::IdGenerator;
use crate::model::{
    BlogPost, BlogPostDraft, NavLink, Product, ProductDraft, Service, ServiceDraft, Stat,
    Submission, SubmissionDraft, TeamMember, Testimonial, TestimonialDraft,
};
use crate::seed;
use crate::slug::slugify;
use crate::submissions::SubmissionLog;

const PRODUCT: &str = "product";
const BLOG_POST: &str = "blog post";
const SERVICE: &str = "service";
const TESTIMONIAL: &str = "testimonial";

/// All catalog collections.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub blog_posts: Vec<BlogPost>,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub team_members: Vec<TeamMember>,
    pub nav_links: Vec<NavLink>,
    pub stats: Vec<Stat>,
}

impl Catalog {
    /// The company's static catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: seed::products(),
            blog_posts: seed::blog_posts(),
            services: seed::services(),
            testimonials: seed::testimonials(),
            team_members: seed::team_members(),
            nav_links: seed::nav_links(),
            stats: seed::stats(),
        }
    }
}

/// Counts shown on the dashboard overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogCounts {
    pub products: usize,
    pub blog_posts: usize,
    pub services: usize,
}

/// In-memory catalog plus the persisted submissions log.
pub struct AdminStore {
    catalog: RwLock<Catalog>,
    submissions: SubmissionLog,
    ids: IdGenerator,
}

impl AdminStore {
    #[must_use]
    pub fn new(catalog: Catalog, submissions: SubmissionLog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            submissions,
            ids: IdGenerator::new(),
        }
    }

    /// Seeded catalog with submissions rehydrated from `storage`.
    pub async fn seeded(storage: Arc<dyn StorageBackend>) -> Self {
        Self::new(Catalog::seeded(), SubmissionLog::load(storage).await)
    }

    pub async fn counts(&self) -> CatalogCounts {
        let catalog = self.catalog.read().await;
        CatalogCounts {
            products: catalog.products.len(),
            blog_posts: catalog.blog_posts.len(),
            services: catalog.services.len(),
        }
    }

    // ── Products ─────────────────────────────────────────────────────

    pub async fn products(&self) -> Vec<Product> {
        self.catalog.read().await.products.clone()
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has this id.
    pub async fn product(&self, id: i64) -> Result<Product, CatalogError> {
        self.catalog
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound { kind: PRODUCT, id })
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::SlugNotFound`] if no product has this slug.
    pub async fn product_by_slug(&self, slug: &str) -> Result<Product, CatalogError> {
        self.catalog
            .read()
            .await
            .products
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or_else(|| slug_not_found(PRODUCT, slug))
    }

    /// Add a product at the front of the list.
    pub async fn add_product(&self, draft: ProductDraft) -> Product {
        let product = Product {
            id: self.ids.next_id(),
            slug: slugify(&draft.name),
            name: draft.name,
            description: draft.description,
            image_url: draft.image_url,
            gallery: draft.gallery,
            category: draft.category,
            applications: draft.applications,
            materials: draft.materials,
            specifications: draft.specifications,
            spec_sheet_url: draft.spec_sheet_url,
            views: None,
        };

        self.catalog.write().await.products.insert(0, product.clone());
        info!(id = product.id, slug = %product.slug, "product added");
        product
    }

    /// Replace a product's editable fields. Id, slug and views are kept.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has this id.
    pub async fn update_product(&self, id: i64, draft: ProductDraft) -> Result<Product, CatalogError> {
        let mut catalog = self.catalog.write().await;
        let product = catalog
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound { kind: PRODUCT, id })?;
        product.apply(draft);
        info!(id, "product updated");
        Ok(product.clone())
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has this id.
    pub async fn delete_product(&self, id: i64) -> Result<Product, CatalogError> {
        let removed = remove_by_id(&mut self.catalog.write().await.products, id, |p| p.id)
            .ok_or(CatalogError::NotFound { kind: PRODUCT, id })?;
        info!(id, "product deleted");
        Ok(removed)
    }

    /// Count one page view of a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SlugNotFound`] if no product has this slug.
    pub async fn record_product_view(&self, slug: &str) -> Result<Product, CatalogError> {
        let mut catalog = self.catalog.write().await;
        let product = catalog
            .products
            .iter_mut()
            .find(|p| p.slug == slug)
            .ok_or_else(|| slug_not_found(PRODUCT, slug))?;
        product.views = Some(product.views.unwrap_or(0).saturating_add(1));
        Ok(product.clone())
    }

    // ── Blog posts ───────────────────────────────────────────────────

    pub async fn blog_posts(&self) -> Vec<BlogPost> {
        self.catalog.read().await.blog_posts.clone()
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no post has this id.
    pub async fn blog_post(&self, id: i64) -> Result<BlogPost, CatalogError> {
        self.catalog
            .read()
            .await
            .blog_posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound { kind: BLOG_POST, id })
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::SlugNotFound`] if no post has this slug.
    pub async fn blog_post_by_slug(&self, slug: &str) -> Result<BlogPost, CatalogError> {
        self.catalog
            .read()
            .await
            .blog_posts
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or_else(|| slug_not_found(BLOG_POST, slug))
    }

    /// Add a post at the front of the list, slugged from its title.
    pub async fn add_blog_post(&self, draft: BlogPostDraft) -> BlogPost {
        let post = BlogPost {
            id: self.ids.next_id(),
            slug: slugify(&draft.title),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            image_url: draft.image_url,
            author: draft.author,
            publish_date: draft.publish_date,
            meta_description: draft.meta_description,
            meta_keywords: draft.meta_keywords,
        };

        self.catalog.write().await.blog_posts.insert(0, post.clone());
        info!(id = post.id, slug = %post.slug, "blog post added");
        post
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no post has this id.
    pub async fn update_blog_post(
        &self,
        id: i64,
        draft: BlogPostDraft,
    ) -> Result<BlogPost, CatalogError> {
        let mut catalog = self.catalog.write().await;
        let post = catalog
            .blog_posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound { kind: BLOG_POST, id })?;
        post.apply(draft);
        info!(id, "blog post updated");
        Ok(post.clone())
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no post has this id.
    pub async fn delete_blog_post(&self, id: i64) -> Result<BlogPost, CatalogError> {
        let removed = remove_by_id(&mut self.catalog.write().await.blog_posts, id, |p| p.id)
            .ok_or(CatalogError::NotFound { kind: BLOG_POST, id })?;
        info!(id, "blog post deleted");
        Ok(removed)
    }

    // ── Services (fixed list, update only) ───────────────────────────

    pub async fn services(&self) -> Vec<Service> {
        self.catalog.read().await.services.clone()
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::SlugNotFound`] if no service has this slug.
    pub async fn service_by_slug(&self, slug: &str) -> Result<Service, CatalogError> {
        self.catalog
            .read()
            .await
            .services
            .iter()
            .find(|s| s.slug == slug)
            .cloned()
            .ok_or_else(|| slug_not_found(SERVICE, slug))
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no service has this id.
    pub async fn update_service(&self, id: i64, draft: ServiceDraft) -> Result<Service, CatalogError> {
        let mut catalog = self.catalog.write().await;
        let service = catalog
            .services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(CatalogError::NotFound { kind: SERVICE, id })?;
        service.apply(draft);
        info!(id, "service updated");
        Ok(service.clone())
    }

    // ── Testimonials ─────────────────────────────────────────────────

    pub async fn testimonials(&self) -> Vec<Testimonial> {
        self.catalog.read().await.testimonials.clone()
    }

    pub async fn add_testimonial(&self, draft: TestimonialDraft) -> Testimonial {
        let testimonial = Testimonial {
            id: self.ids.next_id(),
            quote: draft.quote,
            author: draft.author,
            company: draft.company,
        };
        self.catalog
            .write()
            .await
            .testimonials
            .insert(0, testimonial.clone());
        info!(id = testimonial.id, "testimonial added");
        testimonial
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no testimonial has this id.
    pub async fn update_testimonial(
        &self,
        id: i64,
        draft: TestimonialDraft,
    ) -> Result<Testimonial, CatalogError> {
        let mut catalog = self.catalog.write().await;
        let testimonial = catalog
            .testimonials
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CatalogError::NotFound { kind: TESTIMONIAL, id })?;
        testimonial.apply(draft);
        info!(id, "testimonial updated");
        Ok(testimonial.clone())
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no testimonial has this id.
    pub async fn delete_testimonial(&self, id: i64) -> Result<Testimonial, CatalogError> {
        let removed = remove_by_id(&mut self.catalog.write().await.testimonials, id, |t| t.id)
            .ok_or(CatalogError::NotFound { kind: TESTIMONIAL, id })?;
        info!(id, "testimonial deleted");
        Ok(removed)
    }

    // ── Read-only site data ──────────────────────────────────────────

    pub async fn team_members(&self) -> Vec<TeamMember> {
        self.catalog.read().await.team_members.clone()
    }

    pub async fn nav_links(&self) -> Vec<NavLink> {
        self.catalog.read().await.nav_links.clone()
    }

    pub async fn stats(&self) -> Vec<Stat> {
        self.catalog.read().await.stats.clone()
    }

    // ── Submissions ──────────────────────────────────────────────────

    pub async fn submissions(&self) -> Vec<Submission> {
        self.submissions.list().await
    }

    pub async fn add_submission(&self, draft: SubmissionDraft) -> Submission {
        self.submissions.add(draft).await
    }
}

impl std::fmt::Debug for AdminStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminStore").finish_non_exhaustive()
    }
}

fn slug_not_found(kind: &'static str, slug: &str) -> CatalogError {
    CatalogError::SlugNotFound {
        kind,
        slug: slug.to_owned(),
    }
}

/// Remove the single record with `id`, if present.
fn remove_by_id<T>(items: &mut Vec<T>, id: i64, id_of: impl Fn(&T) -> i64) -> Option<T> {
    let index = items.iter().position(|item| id_of(item) == id)?;
    Some(items.remove(index))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use kws_storage::MemoryBackend;

    use super::*;
    use crate::model::SubmissionKind;

    async fn store() -> AdminStore {
        AdminStore::seeded(Arc::new(MemoryBackend::new())).await
    }

    fn product_draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_owned(),
            description: "Custom fryer".to_owned(),
            image_url: "https://example.com/fryer.jpg".to_owned(),
            category: "Industrial Equipment".to_owned(),
            ..ProductDraft::default()
        }
    }

    fn post_draft(title: &str) -> BlogPostDraft {
        BlogPostDraft {
            title: title.to_owned(),
            excerpt: "Short".to_owned(),
            content: "<p>Body</p>".to_owned(),
            image_url: "https://example.com/post.jpg".to_owned(),
            author: "Muhammad Hamza".to_owned(),
            publish_date: "2024-05-01".to_owned(),
            ..BlogPostDraft::default()
        }
    }

    #[tokio::test]
    async fn seeded_store_exposes_catalog() {
        let store = store().await;
        assert_eq!(
            store.counts().await,
            CatalogCounts {
                products: 6,
                blog_posts: 3,
                services: 4
            }
        );
        assert_eq!(store.testimonials().await.len(), 3);
        assert_eq!(store.team_members().await.len(), 4);
        assert!(store.submissions().await.is_empty());
    }

    #[tokio::test]
    async fn add_product_prepends_with_new_id_and_slug() {
        let store = store().await;
        let existing: HashSet<i64> = store.products().await.iter().map(|p| p.id).collect();

        let added = store.add_product(product_draft("Industrial Fryer")).await;

        assert!(!existing.contains(&added.id));
        assert_eq!(added.slug, "industrial-fryer");
        assert_eq!(added.views, None);
        let products = store.products().await;
        assert_eq!(products.len(), 7);
        assert_eq!(products[0], added);
    }

    #[tokio::test]
    async fn back_to_back_adds_get_distinct_ids() {
        let store = store().await;
        let a = store.add_product(product_draft("A")).await;
        let b = store.add_product(product_draft("B")).await;
        assert_ne!(a.id, b.id);
        assert_eq!(store.products().await[0].id, b.id);
    }

    #[tokio::test]
    async fn update_product_keeps_slug_on_rename() {
        let store = store().await;
        let original = store.product_by_slug("vegetable-dryer").await.unwrap();

        let updated = store
            .update_product(original.id, product_draft("Solar Vegetable Dryer"))
            .await
            .unwrap();

        assert_eq!(updated.slug, "vegetable-dryer");
        assert_eq!(updated.name, "Solar Vegetable Dryer");
        assert_eq!(updated.views, original.views);
        assert_eq!(store.product(original.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_unknown_product_is_not_found() {
        let store = store().await;
        let err = store.update_product(999, product_draft("X")).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { kind: "product", id: 999 }));
    }

    #[tokio::test]
    async fn delete_product_removes_exactly_one() {
        let store = store().await;
        let removed = store.delete_product(3).await.unwrap();
        assert_eq!(removed.id, 3);

        let products = store.products().await;
        assert_eq!(products.len(), 5);
        assert!(products.iter().all(|p| p.id != 3));

        assert!(store.delete_product(3).await.is_err());
        assert_eq!(store.products().await.len(), 5);
    }

    #[tokio::test]
    async fn product_views_are_counted() {
        let store = store().await;
        let before = store.product_by_slug("multi-crop-thresher").await.unwrap();
        let after = store.record_product_view("multi-crop-thresher").await.unwrap();
        assert_eq!(after.views, before.views.map(|v| v + 1));

        let fresh = store.add_product(product_draft("New Mill")).await;
        let viewed = store.record_product_view(&fresh.slug).await.unwrap();
        assert_eq!(viewed.views, Some(1));
    }

    #[tokio::test]
    async fn blog_post_crud() {
        let store = store().await;
        let post = store.add_blog_post(post_draft("Welding Safety 101")).await;
        assert_eq!(post.slug, "welding-safety-101");
        assert_eq!(store.blog_posts().await[0], post);
        assert_eq!(store.blog_post(post.id).await.unwrap(), post);

        let mut draft = post_draft("Welding Safety 102");
        draft.meta_keywords = vec!["safety".to_owned()];
        let updated = store.update_blog_post(post.id, draft).await.unwrap();
        assert_eq!(updated.slug, "welding-safety-101");
        assert_eq!(updated.meta_keywords, vec!["safety"]);

        store.delete_blog_post(post.id).await.unwrap();
        assert!(store.blog_post(post.id).await.is_err());
        assert!(store.blog_post_by_slug("welding-safety-101").await.is_err());
        assert_eq!(store.blog_posts().await.len(), 3);
    }

    #[tokio::test]
    async fn services_are_updated_in_place() {
        let store = store().await;
        let before = store.services().await;

        let updated = store
            .update_service(
                2,
                ServiceDraft {
                    name: "Agro Processing".to_owned(),
                    description: "Short".to_owned(),
                    detailed_description: "<p>Long</p>".to_owned(),
                    image_url: before[1].image_url.clone(),
                    features: vec!["Durable".to_owned()],
                    icon: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.slug, before[1].slug);
        assert_eq!(updated.icon, before[1].icon);
        let after = store.services().await;
        assert_eq!(after.len(), before.len());
        assert_eq!(after[1], updated);
    }

    #[tokio::test]
    async fn services_cannot_be_created_by_update() {
        let store = store().await;
        let draft = ServiceDraft {
            name: "Pipe Works".to_owned(),
            description: String::new(),
            detailed_description: String::new(),
            image_url: String::new(),
            features: Vec::new(),
            icon: None,
        };
        assert!(store.update_service(42, draft).await.is_err());
        assert_eq!(store.services().await.len(), 4);
    }

    #[tokio::test]
    async fn testimonial_crud() {
        let store = store().await;
        let added = store
            .add_testimonial(TestimonialDraft {
                quote: "Great boiler".to_owned(),
                author: "Ngozi".to_owned(),
                company: "Laundry Co".to_owned(),
            })
            .await;
        assert_eq!(store.testimonials().await[0], added);

        let updated = store
            .update_testimonial(
                added.id,
                TestimonialDraft {
                    quote: "Great boiler, fast delivery".to_owned(),
                    author: "Ngozi".to_owned(),
                    company: "Laundry Co".to_owned(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, added.id);

        store.delete_testimonial(added.id).await.unwrap();
        assert_eq!(store.testimonials().await.len(), 3);
        assert!(store.delete_testimonial(added.id).await.is_err());
    }

    #[tokio::test]
    async fn submissions_flow_through_the_log() {
        let store = store().await;
        let sub = store
            .add_submission(SubmissionDraft {
                kind: SubmissionKind::Inquiry,
                name: "Emeka".to_owned(),
                email: Some("e@example.com".to_owned()),
                subject: None,
                message: Some("Price?".to_owned()),
                product_name: Some("Vegetable Dryer".to_owned()),
                phone: None,
                preferred_time: None,
            })
            .await;
        assert_eq!(store.submissions().await, vec![sub]);
    }
}
