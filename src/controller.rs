use std::sync::mpsc;

use chrono::{DateTime, Local};
use log::debug;

use crate::client::{SearchClient, TOP_K};
use crate::types::SearchResult;

pub const MISSING_QUERY_MESSAGE: &str = "Please enter a search query.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong while fetching results.";

/// Outcome of one search request, tagged with the generation it belongs to so
/// that responses from superseded submissions can be dropped.
struct SearchOutcome {
    generation: u64,
    outcome: Result<crate::types::SearchResponse, String>,
}

/// Human-readable state of the result list, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Summary {
    NotSearched,
    Searching,
    Error,
    Empty,
    Showing { shown: usize, total: usize },
}

/// Owns the query text and the full request lifecycle: idle, loading,
/// success, error. All mutation happens on the UI thread; the network request
/// runs on the tokio runtime and reports back over a channel.
pub struct SearchController {
    query: String,
    results: Vec<SearchResult>,
    loading: bool,
    error: Option<String>,
    search_performed: bool,
    total: Option<usize>,
    last_updated: Option<DateTime<Local>>,
    // Sequencing token: only the outcome of the latest submission is applied.
    // Bumped on submit and on reset, which logically cancels whatever is
    // still in flight.
    generation: u64,

    client: SearchClient,
    runtime: tokio::runtime::Handle,
    outcome_tx: mpsc::Sender<SearchOutcome>,
    outcome_rx: mpsc::Receiver<SearchOutcome>,
}

impl SearchController {
    pub fn new(client: SearchClient, runtime: tokio::runtime::Handle) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        Self {
            query: String::new(),
            results: Vec::new(),
            loading: false,
            error: None,
            search_performed: false,
            total: None,
            last_updated: None,
            generation: 0,
            client,
            runtime,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Mutable access for the text edit widget; equivalent to replacing the
    /// held text on every keystroke.
    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn update_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_performed(&self) -> bool {
        self.search_performed
    }

    pub fn total(&self) -> Option<usize> {
        self.total
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn can_reset(&self) -> bool {
        !self.query.trim().is_empty()
            || !self.results.is_empty()
            || self.error.is_some()
            || self.search_performed
    }

    /// Validates the query and, when non-empty after trimming, starts one
    /// search request on the runtime. A whitespace-only query sets the
    /// missing-query error and never reaches the network.
    pub fn submit(&mut self) {
        let trimmed = self.query.trim().to_string();
        if trimmed.is_empty() {
            self.error = Some(MISSING_QUERY_MESSAGE.to_string());
            return;
        }

        self.loading = true;
        self.error = None;
        self.search_performed = true;
        self.generation += 1;
        let generation = self.generation;
        debug!("search: query=\"{}\" generation={}", trimmed, generation);

        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let outcome = client
                .search(&trimmed, TOP_K)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(SearchOutcome { generation, outcome });
        });
    }

    /// Clears everything back to the initial idle state. An in-flight request
    /// is not aborted, but its response will carry a stale generation and be
    /// dropped on arrival.
    pub fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
        self.error = None;
        self.search_performed = false;
        self.total = None;
        self.last_updated = None;
        self.loading = false;
        self.generation += 1;
    }

    /// Drains pending outcomes and applies the ones matching the current
    /// generation. Returns true when state changed and a repaint is due.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(response) = self.outcome_rx.try_recv() {
            if response.generation != self.generation {
                debug!("dropping stale search outcome (generation {})", response.generation);
                continue;
            }
            match response.outcome {
                Ok(data) => {
                    // results and total move together, wholesale
                    self.total = Some(data.total.unwrap_or(data.results.len()));
                    self.results = data.results;
                    self.last_updated = Some(Local::now());
                    self.error = None;
                }
                Err(message) => {
                    self.error = Some(if message.trim().is_empty() {
                        GENERIC_FAILURE_MESSAGE.to_string()
                    } else {
                        message
                    });
                    self.results.clear();
                    self.total = None;
                    self.last_updated = None;
                }
            }
            self.loading = false;
            changed = true;
        }
        changed
    }

    pub fn summary(&self) -> Summary {
        if !self.search_performed {
            Summary::NotSearched
        } else if self.loading {
            Summary::Searching
        } else if self.error.is_some() {
            Summary::Error
        } else {
            let total = self.total.unwrap_or(self.results.len());
            if total == 0 {
                Summary::Empty
            } else {
                Summary::Showing { shown: self.results.len(), total }
            }
        }
    }

    /// True exactly when a search ran, finished, found nothing and raised no
    /// error. Drives the "no results" panel.
    pub fn is_empty_state(&self) -> bool {
        self.search_performed && !self.loading && self.results.is_empty() && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn controller_for(server: &MockServer) -> SearchController {
        SearchController::new(
            SearchClient::new(server.uri()),
            tokio::runtime::Handle::current(),
        )
    }

    async fn poll_until_settled(controller: &mut SearchController) {
        for _ in 0..500 {
            if controller.poll() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("timed out waiting for a search outcome");
    }

    fn single_result_body() -> serde_json::Value {
        serde_json::json!({
            "results": [{
                "id": 1,
                "content": "Climate risk report",
                "score": 0.842,
                "metadata": { "year": 2024 }
            }],
            "query": "risk",
            "total": 1
        })
    }

    #[tokio::test]
    async fn test_whitespace_query_never_reaches_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(single_result_body()))
            .expect(0)
            .mount(&server)
            .await;

        let mut controller = controller_for(&server);
        controller.update_query("  ");
        controller.submit();

        assert_eq!(controller.error(), Some(MISSING_QUERY_MESSAGE));
        assert!(!controller.loading());
        assert!(!controller.search_performed());
        assert!(controller.results().is_empty());
    }

    #[tokio::test]
    async fn test_successful_search() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_json(serde_json::json!({ "query": "risk", "top_k": 10 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(single_result_body()))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = controller_for(&server);
        // leading/trailing whitespace is trimmed before the request
        controller.update_query("  risk ");
        controller.submit();
        assert!(controller.loading());
        assert!(controller.search_performed());

        poll_until_settled(&mut controller).await;

        assert_eq!(controller.results().len(), 1);
        assert_eq!(controller.results()[0].content, "Climate risk report");
        assert_eq!(controller.total(), Some(1));
        assert_eq!(controller.summary(), Summary::Showing { shown: 1, total: 1 });
        assert!(controller.last_updated().is_some());
        assert!(controller.error().is_none());
        assert!(!controller.loading());
    }

    #[tokio::test]
    async fn test_total_falls_back_to_result_count() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    { "id": 1, "content": "a", "score": 0.9 },
                    { "id": 2, "content": "b", "score": 0.8 }
                ],
                "query": "q"
            })))
            .mount(&server)
            .await;

        let mut controller = controller_for(&server);
        controller.update_query("q");
        controller.submit();
        poll_until_settled(&mut controller).await;

        assert_eq!(controller.total(), Some(2));
        assert_eq!(controller.summary(), Summary::Showing { shown: 2, total: 2 });
    }

    #[tokio::test]
    async fn test_http_error_clears_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(single_result_body()))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = controller_for(&server);
        controller.update_query("risk");
        controller.submit();
        poll_until_settled(&mut controller).await;
        assert_eq!(controller.results().len(), 1);

        server.reset().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        controller.submit();
        poll_until_settled(&mut controller).await;

        let error = controller.error().expect("error state expected");
        assert!(error.contains("500"), "unexpected error: {}", error);
        assert!(controller.results().is_empty());
        assert_eq!(controller.total(), None);
        assert!(controller.last_updated().is_none());
        assert!(!controller.loading());
        assert_eq!(controller.summary(), Summary::Error);
    }

    #[tokio::test]
    async fn test_submit_clears_previous_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(single_result_body()))
            .mount(&server)
            .await;

        let mut controller = controller_for(&server);
        controller.update_query(" ");
        controller.submit();
        assert!(controller.error().is_some());

        controller.update_query("risk");
        controller.submit();
        assert!(controller.error().is_none());
        assert!(controller.loading());

        poll_until_settled(&mut controller).await;
        assert!(controller.error().is_none());
        assert_eq!(controller.results().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_state_flag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [], "query": "nothing", "total": 0
            })))
            .mount(&server)
            .await;

        let mut controller = controller_for(&server);
        assert!(!controller.is_empty_state());

        controller.update_query("nothing");
        controller.submit();
        assert!(!controller.is_empty_state(), "still loading");

        poll_until_settled(&mut controller).await;
        assert!(controller.is_empty_state());
        assert_eq!(controller.summary(), Summary::Empty);
    }

    #[tokio::test]
    async fn test_reset_is_idempotent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(single_result_body()))
            .mount(&server)
            .await;

        let mut controller = controller_for(&server);
        controller.update_query("risk");
        controller.submit();
        poll_until_settled(&mut controller).await;
        assert!(controller.can_reset());

        let snapshot = |c: &SearchController| {
            (
                c.query().to_string(),
                c.results().len(),
                c.error().map(str::to_string),
                c.search_performed(),
                c.total(),
                c.last_updated(),
                c.loading(),
            )
        };

        controller.reset();
        let once = snapshot(&controller);
        controller.reset();
        let twice = snapshot(&controller);

        assert_eq!(once, twice);
        assert_eq!(once.0, "");
        assert_eq!(once.1, 0);
        assert!(!controller.can_reset());
        assert_eq!(controller.summary(), Summary::NotSearched);
    }

    #[tokio::test]
    async fn test_reset_drops_in_flight_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(single_result_body())
                    .set_delay(Duration::from_millis(150)),
            )
            .mount(&server)
            .await;

        let mut controller = controller_for(&server);
        controller.update_query("risk");
        controller.submit();
        controller.reset();

        tokio::time::sleep(Duration::from_millis(400)).await;
        // The stale outcome arrives but must not repopulate state
        controller.poll();

        assert!(controller.results().is_empty());
        assert!(controller.error().is_none());
        assert!(!controller.search_performed());
        assert!(!controller.loading());
        assert_eq!(controller.summary(), Summary::NotSearched);
    }

    #[tokio::test]
    async fn test_rapid_resubmission_keeps_latest() {
        let server = MockServer::start().await;
        // First query is slow, second is fast: the slow response lands last
        // but belongs to a superseded generation and must be dropped.
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_json(serde_json::json!({ "query": "slow", "top_k": 10 })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({
                        "results": [{ "id": 1, "content": "slow result", "score": 0.5 }],
                        "query": "slow",
                        "total": 8
                    }))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_json(serde_json::json!({ "query": "fast", "top_k": 10 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{ "id": 2, "content": "fast result", "score": 0.9 }],
                "query": "fast",
                "total": 1
            })))
            .mount(&server)
            .await;

        let mut controller = controller_for(&server);
        controller.update_query("slow");
        controller.submit();
        controller.update_query("fast");
        controller.submit();

        tokio::time::sleep(Duration::from_millis(600)).await;
        controller.poll();

        assert_eq!(controller.results().len(), 1);
        assert_eq!(controller.results()[0].content, "fast result");
        assert_eq!(controller.total(), Some(1));
        assert!(controller.error().is_none());
        assert!(!controller.loading());
    }

    #[tokio::test]
    async fn test_result_order_preserved() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    { "id": 9, "content": "first", "score": 0.3 },
                    { "id": 4, "content": "second", "score": 0.9 },
                    { "id": 7, "content": "third", "score": 0.6 }
                ],
                "query": "order",
                "total": 3
            })))
            .mount(&server)
            .await;

        let mut controller = controller_for(&server);
        controller.update_query("order");
        controller.submit();
        poll_until_settled(&mut controller).await;

        // Ranking order is authoritative; no client-side re-sorting by score
        let ids: Vec<i64> = controller.results().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 4, 7]);
    }
}
