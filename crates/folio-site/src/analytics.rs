//! Local analytics.
//!
//! Views, visits, custom events and client errors are recorded in the
//! key-value store, under the same keys the site has always used. Nothing is
//! sent anywhere; the logs are capped so the store stays small.
//!
//! | Key | Value |
//! |-----|-------|
//! | `portfolio_page_views` | total views, decimal |
//! | `portfolio_<page>_views` | views of one page, decimal |
//! | `visitorId` | `visitor_<unix millis>`, created on first visit |
//! | `visitors` | JSON array of [`Visit`], last 100 |
//! | `portfolio_events` | JSON array of [`TrackedEvent`], last 50 |
//! | `portfolio_errors` | JSON array of [`ErrorLog`], last 10 |

use chrono::{DateTime, Utc};
use folio_store::json::{self, Order};
use folio_store::KeyValueStore;
use serde::{Deserialize, Serialize};

use crate::page::Page;

pub const PAGE_VIEWS_KEY: &str = "portfolio_page_views";
pub const VISITOR_ID_KEY: &str = "visitorId";
pub const VISITORS_KEY: &str = "visitors";
pub const EVENTS_KEY: &str = "portfolio_events";
pub const ERRORS_KEY: &str = "portfolio_errors";

pub const VISITOR_LOG_CAP: usize = 100;
pub const EVENT_LOG_CAP: usize = 50;
pub const ERROR_LOG_CAP: usize = 10;

/// Referrer recorded when the visit did not come from a link.
pub const DIRECT_REFERRER: &str = "direct";

/// One page visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: String,
    pub page: Page,
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub referrer: String,
}

/// A named interaction, such as a contact form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedEvent {
    pub name: String,
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
    pub page: Page,
}

/// A client-side error kept for debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLog {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub url: String,
    pub user_agent: String,
}

/// View counts after a page view was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageViews {
    pub total: u64,
    pub page: u64,
}

/// Who is browsing, as far as the page can tell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub user_agent: String,
    pub referrer: Option<String>,
    pub url: String,
}

/// Records analytics for the current page.
#[derive(Debug, Clone)]
pub struct Analytics<S> {
    store: S,
    page: Page,
    client: ClientInfo,
}

impl<S: KeyValueStore> Analytics<S> {
    pub fn new(store: S, page: Page) -> Self {
        Self {
            store,
            page,
            client: ClientInfo::default(),
        }
    }

    pub fn with_client(mut self, client: ClientInfo) -> Self {
        self.client = client;
        self
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Counts a view of `page` and logs the visit.
    pub fn track_page_view(&mut self, page: Page, now: DateTime<Utc>) -> PageViews {
        let total = json::increment_counter(&mut self.store, PAGE_VIEWS_KEY);
        let page_views = json::increment_counter(&mut self.store, &page.views_key());
        self.track_visitor(page, now);

        tracing::debug!(%page, total, page_views, "tracked page view");
        PageViews {
            total,
            page: page_views,
        }
    }

    /// Appends a visit to the visitor log, creating the visitor id if needed.
    pub fn track_visitor(&mut self, page: Page, now: DateTime<Utc>) -> Visit {
        let visit = Visit {
            id: self.visitor_id(now),
            page,
            timestamp: now,
            user_agent: self.client.user_agent.clone(),
            referrer: self
                .client
                .referrer
                .clone()
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| DIRECT_REFERRER.to_string()),
        };
        json::push_capped(
            &mut self.store,
            VISITORS_KEY,
            &visit,
            VISITOR_LOG_CAP,
            Order::Append,
        );
        visit
    }

    /// The persistent visitor id, created from `now` on first use.
    pub fn visitor_id(&mut self, now: DateTime<Utc>) -> String {
        if let Some(id) = self.store.get(VISITOR_ID_KEY) {
            return id;
        }
        let id = format!("visitor_{}", now.timestamp_millis());
        self.store.set(VISITOR_ID_KEY, &id);
        id
    }

    /// Logs a named event on the current page.
    pub fn track_event(
        &mut self,
        name: &str,
        data: serde_json::Value,
        now: DateTime<Utc>,
    ) -> TrackedEvent {
        let event = TrackedEvent {
            name: name.to_string(),
            data,
            timestamp: now,
            page: self.page,
        };
        json::push_capped(
            &mut self.store,
            EVENTS_KEY,
            &event,
            EVENT_LOG_CAP,
            Order::Append,
        );
        tracing::debug!(event = name, page = %self.page, "tracked event");
        event
    }

    /// Logs a client error.
    pub fn log_error(
        &mut self,
        kind: &str,
        message: &str,
        stack: Option<&str>,
        now: DateTime<Utc>,
    ) -> ErrorLog {
        let entry = ErrorLog {
            kind: kind.to_string(),
            message: message.to_string(),
            stack: stack.map(str::to_string),
            timestamp: now,
            url: self.client.url.clone(),
            user_agent: self.client.user_agent.clone(),
        };
        json::push_capped(
            &mut self.store,
            ERRORS_KEY,
            &entry,
            ERROR_LOG_CAP,
            Order::Append,
        );
        tracing::warn!(kind, message, "logged client error");
        entry
    }

    pub fn total_views(&self) -> u64 {
        json::read_counter(&self.store, PAGE_VIEWS_KEY)
    }

    pub fn views_of(&self, page: Page) -> u64 {
        json::read_counter(&self.store, &page.views_key())
    }

    /// Readable visits, oldest first. Entries that no longer parse are skipped.
    pub fn visits(&self) -> Vec<Visit> {
        read_records(&self.store, VISITORS_KEY)
    }

    pub fn events(&self) -> Vec<TrackedEvent> {
        read_records(&self.store, EVENTS_KEY)
    }

    pub fn errors(&self) -> Vec<ErrorLog> {
        read_records(&self.store, ERRORS_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

fn read_records<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: serde::de::DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    json::read_list::<serde_json::Value, _>(store, key)
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use folio_store::MemoryStore;
    use serde_json::json;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn analytics() -> Analytics<MemoryStore> {
        Analytics::new(MemoryStore::new(), Page::Home).with_client(ClientInfo {
            user_agent: "test-agent".into(),
            referrer: None,
            url: "https://example.com/pages/Home/index.html".into(),
        })
    }

    #[test]
    fn test_track_page_view_counts() {
        let mut analytics = analytics();
        let first = analytics.track_page_view(Page::Home, at(1_000));
        let second = analytics.track_page_view(Page::Projects, at(2_000));
        let third = analytics.track_page_view(Page::Home, at(3_000));

        assert_eq!(first, PageViews { total: 1, page: 1 });
        assert_eq!(second, PageViews { total: 2, page: 1 });
        assert_eq!(third, PageViews { total: 3, page: 2 });
        assert_eq!(analytics.views_of(Page::Projects), 1);
        assert_eq!(
            analytics.store().get("portfolio_home_views").as_deref(),
            Some("2")
        );
    }

    #[test]
    fn test_visitor_id_is_created_once() {
        let mut analytics = analytics();
        assert_eq!(analytics.visitor_id(at(1_700_000_000_000)), "visitor_1700000000000");
        assert_eq!(analytics.visitor_id(at(5)), "visitor_1700000000000");
    }

    #[test]
    fn test_visit_defaults_to_direct_referrer() {
        let mut analytics = analytics();
        let visit = analytics.track_visitor(Page::Home, at(0));
        assert_eq!(visit.referrer, "direct");
        assert_eq!(visit.user_agent, "test-agent");

        let stored = analytics.visits();
        assert_eq!(stored, vec![visit]);
    }

    #[test]
    fn test_visit_serializes_camel_case() {
        let mut analytics = analytics();
        analytics.track_visitor(Page::Skills, at(0));

        let raw = analytics.store().get(VISITORS_KEY).unwrap();
        assert!(raw.contains("\"userAgent\":\"test-agent\""));
        assert!(raw.contains("\"page\":\"skills\""));
    }

    #[test]
    fn test_visitor_log_is_capped() {
        let mut analytics = analytics();
        for i in 0..(VISITOR_LOG_CAP as i64 + 5) {
            analytics.track_visitor(Page::Home, at(i));
        }
        let visits = analytics.visits();
        assert_eq!(visits.len(), VISITOR_LOG_CAP);
        assert_eq!(visits[0].timestamp, at(5));
    }

    #[test]
    fn test_track_event_uses_current_page() {
        let mut analytics = Analytics::new(MemoryStore::new(), Page::Contact);
        analytics.track_event("contact_form_submit", json!({"subject": "Hi"}), at(0));

        let events = analytics.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].page, Page::Contact);
        assert_eq!(events[0].data["subject"], "Hi");
    }

    #[test]
    fn test_error_log_is_capped() {
        let mut analytics = analytics();
        for i in 0..15 {
            analytics.log_error("JavaScript Error", &format!("boom {}", i), None, at(i));
        }
        let errors = analytics.errors();
        assert_eq!(errors.len(), ERROR_LOG_CAP);
        assert_eq!(errors[0].message, "boom 5");
        assert_eq!(errors[9].url, "https://example.com/pages/Home/index.html");

        let raw = analytics.store().get(ERRORS_KEY).unwrap();
        assert!(raw.contains("\"type\":\"JavaScript Error\""));
        assert!(!raw.contains("stack"));
    }

    #[test]
    fn test_corrupt_logs_start_over() {
        let store = MemoryStore::new()
            .with_entry(VISITORS_KEY, "{ not json")
            .with_entry(PAGE_VIEWS_KEY, "many");
        let mut analytics = Analytics::new(store, Page::Home);

        let views = analytics.track_page_view(Page::Home, at(0));
        assert_eq!(views.total, 1);
        assert_eq!(analytics.visits().len(), 1);
    }

    #[test]
    fn test_unreadable_entries_are_skipped() {
        let store = MemoryStore::new().with_entry(EVENTS_KEY, r#"[{"legacy": true}]"#);
        let mut analytics = Analytics::new(store, Page::Home);
        analytics.track_event("opened", json!({}), at(0));

        let events = analytics.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "opened");
        // The legacy entry is still stored.
        assert_eq!(json::read_list::<serde_json::Value, _>(analytics.store(), EVENTS_KEY).len(), 2);
    }
}
