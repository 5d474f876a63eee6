//! Read-side figures for the admin dashboard.
//!
//! Everything here is derived from the store on request: record counts, the
//! most viewed products, and submissions per day over the last week. Bar
//! widths are returned as percentages so any front end can draw them.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::model::{Product, Submission};
use crate::store::AdminStore;

/// How many products the "most viewed" list shows.
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Length of the submissions chart, in days, today included.
pub const CHART_DAYS: u64 = 7;

/// One row of the "most viewed products" list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub views: u64,
    /// Bar width relative to the most viewed entry.
    pub percent: f64,
}

/// One bar of the submissions chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    pub date: NaiveDate,
    /// Short weekday label, e.g. `Mon`.
    pub weekday: String,
    pub count: usize,
    /// Bar height relative to the busiest day.
    pub percent: f64,
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_products: usize,
    pub total_blog_posts: usize,
    pub total_services: usize,
    pub total_submissions: usize,
    pub top_products: Vec<TopProduct>,
    pub daily_submissions: Vec<DailyCount>,
}

/// Build the dashboard for the day `today` (UTC).
pub async fn overview(store: &AdminStore, today: NaiveDate) -> Overview {
    let counts = store.counts().await;
    let products = store.products().await;
    let submissions = store.submissions().await;

    Overview {
        total_products: counts.products,
        total_blog_posts: counts.blog_posts,
        total_services: counts.services,
        total_submissions: submissions.len(),
        top_products: top_products(&products, TOP_PRODUCTS_LIMIT),
        daily_submissions: daily_submissions(&submissions, today),
    }
}

/// The `limit` most viewed products, most viewed first. Products without a
/// view count rank as zero; ties keep catalog order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn top_products(products: &[Product], limit: usize) -> Vec<TopProduct> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by(|a, b| b.views.unwrap_or(0).cmp(&a.views.unwrap_or(0)));
    ranked.truncate(limit);

    let max_views = ranked
        .iter()
        .map(|p| p.views.unwrap_or(0))
        .max()
        .unwrap_or(0)
        .max(1);

    ranked
        .into_iter()
        .map(|p| {
            let views = p.views.unwrap_or(0);
            TopProduct {
                id: p.id,
                slug: p.slug.clone(),
                name: p.name.clone(),
                views,
                percent: views as f64 / max_views as f64 * 100.0,
            }
        })
        .collect()
}

/// Submission counts for the [`CHART_DAYS`] days ending on `today`, oldest
/// first. A submission counts toward the UTC calendar day of its timestamp.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn daily_submissions(submissions: &[Submission], today: NaiveDate) -> Vec<DailyCount> {
    let days: Vec<NaiveDate> = (0..CHART_DAYS)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .collect();

    let counts: Vec<usize> = days
        .iter()
        .map(|day| {
            submissions
                .iter()
                .filter(|s| s.timestamp.date_naive() == *day)
                .count()
        })
        .collect();

    let max_count = counts.iter().copied().max().unwrap_or(0).max(1);

    days.into_iter()
        .zip(counts)
        .map(|(date, count)| DailyCount {
            date,
            weekday: date.format("%a").to_string(),
            count,
            percent: count as f64 / max_count as f64 * 100.0,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use kws_storage::MemoryBackend;

    use super::*;
    use crate::model::{SubmissionDraft, SubmissionKind};
    use crate::seed;

    fn submission_on(y: i32, m: u32, d: u32, h: u32) -> Submission {
        SubmissionDraft {
            kind: SubmissionKind::Contact,
            name: "Visitor".to_owned(),
            email: None,
            subject: None,
            message: None,
            product_name: None,
            phone: None,
            preferred_time: None,
        }
        .into_submission(
            format!("sub_{y}{m}{d}{h}"),
            Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
        )
    }

    #[test]
    fn top_products_rank_by_views() {
        let top = top_products(&seed::products(), TOP_PRODUCTS_LIMIT);
        let names: Vec<_> = top.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "animal-feed-mill",
                "vegetable-dryer",
                "multi-crop-thresher",
                "branded-cold-room",
                "stainless-steel-honey-processor",
            ]
        );
        assert_eq!(top[0].percent, 100.0);
        assert_eq!(top[1].percent, 310.0 / 480.0 * 100.0);
    }

    #[test]
    fn missing_views_count_as_zero_without_dividing_by_zero() {
        let mut products = seed::products();
        for p in &mut products {
            p.views = None;
        }
        let top = top_products(&products, 3);
        assert_eq!(top.len(), 3);
        assert!(top.iter().all(|p| p.views == 0 && p.percent == 0.0));
        // Stable: catalog order survives a full tie.
        assert_eq!(top[0].id, 1);
    }

    #[test]
    fn daily_submissions_cover_seven_days_oldest_first() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
        let subs = vec![
            submission_on(2024, 5, 12, 9),
            submission_on(2024, 5, 12, 17),
            submission_on(2024, 5, 6, 8),
            submission_on(2024, 5, 5, 23),
        ];

        let chart = daily_submissions(&subs, today);

        assert_eq!(chart.len(), 7);
        assert_eq!(chart[0].date, NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
        assert_eq!(chart[6].date, today);
        assert_eq!(chart[0].count, 1);
        assert_eq!(chart[6].count, 2);
        assert_eq!(chart.iter().map(|d| d.count).sum::<usize>(), 3);
        assert_eq!(chart[6].percent, 100.0);
        assert_eq!(chart[0].percent, 50.0);
        assert_eq!(chart[6].weekday, "Sun");
    }

    #[test]
    fn empty_chart_has_zero_bars() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let chart = daily_submissions(&[], today);
        assert!(chart.iter().all(|d| d.count == 0 && d.percent == 0.0));
    }

    #[tokio::test]
    async fn overview_reports_store_totals() {
        let store = AdminStore::seeded(Arc::new(MemoryBackend::new())).await;
        let today = Utc::now().date_naive();

        let overview = overview(&store, today).await;

        assert_eq!(overview.total_products, 6);
        assert_eq!(overview.total_blog_posts, 3);
        assert_eq!(overview.total_services, 4);
        assert_eq!(overview.total_submissions, 0);
        assert_eq!(overview.top_products.len(), TOP_PRODUCTS_LIMIT);
        assert_eq!(overview.daily_submissions.len(), 7);
    }
}
