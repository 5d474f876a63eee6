//! Server-rendered site pages.
//!
//! Renders the home page and the product, service and blog detail pages
//! straight from the store. Visitor-facing text is HTML-escaped; blog bodies
//! and service descriptions are admin-authored HTML and inserted as is.

use std::fmt::Write as _;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use kws_core::model::NavLink;

use crate::state::AppState;

/// Build the UI router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home_page))
        .route("/products/{slug}", get(product_page))
        .route("/services/{slug}", get(service_page))
        .route("/blog/{slug}", get(blog_page))
}

/// Escape text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ── Pages ────────────────────────────────────────────────────────────

async fn home_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let store = &state.store;
    let mut body = String::with_capacity(16384);
    body.push_str(HERO);

    body.push_str(r#"<section class="stats">"#);
    for stat in store.stats().await {
        let _ = write!(
            body,
            r#"<div class="stat"><strong>{}</strong><span>{}</span></div>"#,
            escape(&stat.value),
            escape(&stat.label)
        );
    }
    body.push_str("</section>");

    body.push_str(r#"<section class="grid"><h2>Our Services</h2>"#);
    for service in store.services().await {
        let _ = write!(
            body,
            r#"<a class="card" href="/services/{}"><h3>{}</h3><p>{}</p></a>"#,
            escape(&service.slug),
            escape(&service.name),
            escape(&service.description)
        );
    }
    body.push_str("</section>");

    body.push_str(r#"<section class="grid"><h2>Featured Products</h2>"#);
    for product in store.products().await {
        let _ = write!(
            body,
            r#"<a class="card" href="/products/{}"><img src="{}" alt="{}"/><h3>{}</h3><p>{}</p></a>"#,
            escape(&product.slug),
            escape(&product.image_url),
            escape(&product.name),
            escape(&product.name),
            escape(&product.category)
        );
    }
    body.push_str("</section>");

    body.push_str(r#"<section class="grid"><h2>What Our Clients Say</h2>"#);
    for t in store.testimonials().await {
        let _ = write!(
            body,
            r#"<blockquote class="card"><p>&ldquo;{}&rdquo;</p><footer>{}, {}</footer></blockquote>"#,
            escape(&t.quote),
            escape(&t.author),
            escape(&t.company)
        );
    }
    body.push_str("</section>");

    body.push_str(r#"<section class="grid"><h2>From the Blog</h2>"#);
    for post in store.blog_posts().await {
        let _ = write!(
            body,
            r#"<a class="card" href="/blog/{}"><h3>{}</h3><p>{}</p><small>{} &middot; {}</small></a>"#,
            escape(&post.slug),
            escape(&post.title),
            escape(&post.excerpt),
            escape(&post.author),
            escape(&post.publish_date)
        );
    }
    body.push_str("</section>");

    Html(page(
        "Kamilu Welding Services",
        "Industrial fabrication, agro-allied machinery and welding services in Kano, Nigeria.",
        &store.nav_links().await,
        &body,
    ))
}

async fn product_page(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    let nav = state.store.nav_links().await;
    let Ok(product) = state.store.record_product_view(&slug).await else {
        return not_found("Product", &nav);
    };

    let mut body = String::with_capacity(8192);
    let _ = write!(
        body,
        r#"<article class="detail"><p class="eyebrow">{}</p><h1>{}</h1><img src="{}" alt="{}"/><p>{}</p>"#,
        escape(&product.category),
        escape(&product.name),
        escape(&product.image_url),
        escape(&product.name),
        escape(&product.description)
    );

    if !product.gallery.is_empty() {
        body.push_str(r#"<div class="gallery">"#);
        for url in &product.gallery {
            let _ = write!(body, r#"<img src="{}" alt=""/>"#, escape(url));
        }
        body.push_str("</div>");
    }

    body.push_str("<h2>Specifications</h2><table>");
    for (key, value) in &product.specifications {
        let _ = write!(body, "<tr><th>{}</th><td>{}</td></tr>", escape(key), escape(value));
    }
    body.push_str("</table>");

    push_list(&mut body, "Applications", &product.applications);
    push_list(&mut body, "Materials", &product.materials);

    if !product.spec_sheet_url.is_empty() {
        let _ = write!(
            body,
            r#"<p><a class="btn" href="{}">Download Spec Sheet</a></p>"#,
            escape(&product.spec_sheet_url)
        );
    }
    body.push_str("</article>");

    Html(page(&product.name, &product.description, &nav, &body)).into_response()
}

async fn service_page(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    let nav = state.store.nav_links().await;
    let Ok(service) = state.store.service_by_slug(&slug).await else {
        return not_found("Service", &nav);
    };

    let mut body = String::with_capacity(8192);
    let _ = write!(
        body,
        r#"<article class="detail"><h1>{}</h1><img src="{}" alt="{}"/><p class="lead">{}</p>{}"#,
        escape(&service.name),
        escape(&service.image_url),
        escape(&service.name),
        escape(&service.description),
        service.detailed_description
    );
    push_list(&mut body, "Key Features", &service.features);
    body.push_str("</article>");

    Html(page(&service.name, &service.description, &nav, &body)).into_response()
}

async fn blog_page(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    let nav = state.store.nav_links().await;
    let Ok(post) = state.store.blog_post_by_slug(&slug).await else {
        return not_found("Blog post", &nav);
    };

    let mut body = String::with_capacity(8192);
    let _ = write!(
        body,
        r#"<article class="detail"><h1>{}</h1><p class="eyebrow">By {} &middot; {}</p><img src="{}" alt="{}"/>{}</article>"#,
        escape(&post.title),
        escape(&post.author),
        escape(&post.publish_date),
        escape(&post.image_url),
        escape(&post.title),
        post.content
    );

    let mut html = page(&post.title, &post.meta_description, &nav, &body);
    if !post.meta_keywords.is_empty() {
        let keywords = format!(
            r#"<meta name="keywords" content="{}"/></head>"#,
            escape(&post.meta_keywords.join(", "))
        );
        html = html.replacen("</head>", &keywords, 1);
    }
    Html(html).into_response()
}

fn not_found(kind: &str, nav: &[NavLink]) -> Response {
    let message = format!("{kind} not found");
    let body = format!(
        r#"<section class="detail"><h1>{}</h1><p><a class="btn" href="/">Back to home</a></p></section>"#,
        escape(&message)
    );
    (StatusCode::NOT_FOUND, Html(page(&message, &message, nav, &body))).into_response()
}

// ── Layout ───────────────────────────────────────────────────────────

fn push_list(body: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = write!(body, "<h2>{}</h2><ul>", escape(heading));
    for item in items {
        let _ = write!(body, "<li>{}</li>", escape(item));
    }
    body.push_str("</ul>");
}

/// Wrap a page body in the shared head, navigation and footer.
fn page(title: &str, description: &str, nav: &[NavLink], body: &str) -> String {
    let mut links = String::new();
    for link in nav {
        let _ = write!(
            links,
            r#"<a href="{}">{}</a>"#,
            escape(&link.path),
            escape(&link.name)
        );
    }

    let mut html = String::with_capacity(PAGE_HEAD.len() + body.len() + PAGE_FOOT.len() + 512);
    let (title, description) = (escape(title), escape(description));
    fill(
        &mut html,
        PAGE_HEAD,
        &[
            ("TITLE", title.as_str()),
            ("DESCRIPTION", description.as_str()),
            ("NAV", links.as_str()),
        ],
    );
    html.push_str("<main>");
    html.push_str(body);
    html.push_str("</main>");
    html.push_str(PAGE_FOOT);
    html
}

/// Append `template` to `out`, substituting each `{{NAME}}` from `values`.
///
/// The template is scanned once, so substituted text is never re-expanded.
/// Unknown placeholders are kept verbatim.
fn fill(out: &mut String, template: &str, values: &[(&str, &str)]) {
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
}

/// Document head, styles and site navigation.
const PAGE_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>{{TITLE}}</title>
<meta name="description" content="{{DESCRIPTION}}"/>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,'Segoe UI',Roboto,sans-serif;background:#f7f7f5;color:#1f2933;line-height:1.6}
a{color:inherit;text-decoration:none}
.nav{display:flex;align-items:center;justify-content:space-between;max-width:1100px;margin:0 auto;padding:20px 24px}
.nav-logo{font-weight:800;font-size:20px;color:#0b3d91}
.nav-links{display:flex;gap:8px}
.nav-links a{padding:8px 14px;border-radius:6px;font-size:14px;font-weight:600;color:#52606d}
.nav-links a:hover{background:#e4e7eb;color:#1f2933}
main{max-width:1100px;margin:0 auto;padding:0 24px 64px}
.hero{padding:80px 0 48px;text-align:center}
.hero h1{font-size:48px;line-height:1.1;color:#0b3d91;margin-bottom:16px}
.hero p{max-width:640px;margin:0 auto 24px;color:#52606d;font-size:18px}
.btn{display:inline-block;padding:12px 24px;border-radius:6px;background:#f5a623;color:#1f2933;font-weight:700}
.stats{display:grid;grid-template-columns:repeat(4,1fr);gap:16px;margin:32px 0}
.stat{background:#fff;border-radius:8px;padding:24px;text-align:center}
.stat strong{display:block;font-size:28px;color:#0b3d91}
.grid{display:grid;grid-template-columns:repeat(3,1fr);gap:16px;margin-top:48px}
.grid h2{grid-column:1/-1;font-size:28px}
.card{display:block;background:#fff;border-radius:8px;padding:20px;box-shadow:0 1px 3px rgba(0,0,0,.08)}
.card img{width:100%;border-radius:6px;margin-bottom:12px}
.card h3{font-size:18px;margin-bottom:6px}
.card p,.card small{color:#52606d}
.detail{background:#fff;border-radius:8px;padding:40px;margin-top:32px}
.detail h1{font-size:36px;color:#0b3d91;margin-bottom:12px}
.detail h2,.detail h3{margin:24px 0 8px}
.detail img{max-width:100%;border-radius:8px;margin:16px 0}
.detail p,.detail li{margin-bottom:8px}
.detail ul{padding-left:20px}
.detail table{border-collapse:collapse;width:100%}
.detail th,.detail td{text-align:left;padding:8px;border-bottom:1px solid #e4e7eb}
.eyebrow{color:#f5a623;font-weight:700;text-transform:uppercase;font-size:13px}
.gallery{display:grid;grid-template-columns:repeat(3,1fr);gap:12px}
.footer{border-top:1px solid #e4e7eb;max-width:1100px;margin:0 auto;padding:24px;font-size:13px;color:#7b8794}
@media(max-width:768px){.hero h1{font-size:32px}.grid,.stats,.gallery{grid-template-columns:1fr}.nav-links{display:none}}
</style></head>
<body>
<nav class="nav">
  <a class="nav-logo" href="/">Kamilu Welding Services</a>
  <div class="nav-links">{{NAV}}</div>
</nav>
"##;

/// Site footer and document close.
const PAGE_FOOT: &str = r##"
<footer class="footer">
  <span>&copy; Kamilu Welding Services, Kano, Nigeria</span>
</footer>
</body></html>
"##;

/// Home page hero.
const HERO: &str = r##"<section class="hero">
  <h1>Precision Fabrication for Industry and Agriculture</h1>
  <p>Custom stainless steel equipment, agro-allied machinery and structural welding, built in Kano for businesses across Nigeria.</p>
  <a class="btn" href="/contact">Request a Quote</a>
</section>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn page_fills_placeholders() {
        let nav = vec![NavLink {
            name: "Home".to_owned(),
            path: "/".to_owned(),
        }];
        let html = page("Cold <Rooms>", "desc", &nav, "<p>body</p>");
        assert!(html.contains("<title>Cold &lt;Rooms&gt;</title>"));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains("<main><p>body</p></main>"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn placeholder_text_in_a_title_is_not_expanded() {
        let nav = vec![NavLink {
            name: "Products".to_owned(),
            path: "/products".to_owned(),
        }];
        let html = page("{{NAV}}", "{{TITLE}}", &nav, "");
        assert!(html.contains("<title>{{NAV}}</title>"));
        assert!(html.contains(r#"content="{{TITLE}}""#));
        assert_eq!(html.matches(r#"<a href="/products">Products</a>"#).count(), 1);
    }

    #[test]
    fn fill_keeps_unknown_and_unclosed_placeholders() {
        let mut out = String::new();
        fill(&mut out, "a {{X}} b {{Y}} c {{", &[("X", "1")]);
        assert_eq!(out, "a 1 b {{Y}} c {{");
    }
}
