//! Transient search session.
//!
//! The session owns the interaction state the search UI renders from:
//! the current query, the displayed view, and the open/closed flag. It
//! runs as a background task consuming discrete input events, so the
//! debounce window and the simulated result latency are explicit
//! suspension points instead of ad hoc timer closures.
//!
//! Supersession is a provable invariant here: every query-changing
//! event increments a generation counter, an executed search carries
//! the generation it was issued under, and a result is only published
//! if its generation is still current. Only the newest query's results
//! are ever delivered.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::debug;

use oud_eire_core::Product;

use super::{Category, SearchIndex};
use crate::config::SearchConfig;

/// The four mutually exclusive displayed views, plus the transient
/// typing affordance for queries below the minimum length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchView {
    /// Initial/idle: no query, or query cleared.
    #[default]
    Suggestions,
    /// A query too short to search; shows neither suggestions nor
    /// results. A UI debounce affordance, not a data state.
    Typing,
    /// Query submitted, awaiting result delivery.
    Loading,
    /// Non-empty match set, in catalog order.
    Results(Vec<Product>),
    /// Query executed and yielded exactly zero matches.
    Empty,
}

/// Point-in-time view of the session, published on every change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    /// The current (trimmed) query text.
    pub query: String,
    /// The view the collaborator should render.
    pub view: SearchView,
    /// Whether the search surface is open.
    pub open: bool,
}

/// Events the presentation collaborator feeds into the session.
#[derive(Debug)]
enum SessionEvent {
    Open,
    Close,
    Clear,
    /// Keystroke-level query change; debounced.
    Input(String),
    /// Explicit submission ("Enter"); immediate path.
    Submit(String),
    /// Category suggestion click; immediate path.
    Category(Category),
}

/// Handle to a running search session task.
///
/// Cheap to clone; the task exits when the last handle is dropped.
#[derive(Clone)]
pub struct SearchSession {
    events: mpsc::UnboundedSender<SessionEvent>,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
    executed: Arc<AtomicU64>,
}

impl SearchSession {
    /// Spawn a session task over `index`.
    #[must_use]
    pub fn spawn(index: SearchIndex, config: &SearchConfig) -> Self {
        let (events, event_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(SessionSnapshot::default());
        let executed = Arc::new(AtomicU64::new(0));

        let task = SessionTask {
            index,
            config: config.clone(),
            snapshot_tx,
            executed: Arc::clone(&executed),
            query: String::new(),
            view: SearchView::Suggestions,
            open: false,
            generation: 0,
            debounce: None,
            in_flight: None,
        };
        tokio::spawn(task.run(event_rx));

        Self {
            events,
            snapshot_rx,
            executed,
        }
    }

    /// Open the search surface. Always resets to Suggestions.
    pub fn open(&self) {
        self.send(SessionEvent::Open);
    }

    /// Close the search surface. Clears the query and resets to
    /// Suggestions.
    pub fn close(&self) {
        self.send(SessionEvent::Close);
    }

    /// Clear the query, returning to Suggestions.
    pub fn clear(&self) {
        self.send(SessionEvent::Clear);
    }

    /// Feed a keystroke-level query change. Coalesced by the debounce
    /// window; only the most recent query is executed.
    pub fn input(&self, query: impl Into<String>) {
        self.send(SessionEvent::Input(query.into()));
    }

    /// Submit a query explicitly, bypassing the debounce.
    pub fn submit(&self, query: impl Into<String>) {
        self.send(SessionEvent::Submit(query.into()));
    }

    /// Run a category search, bypassing the debounce.
    pub fn select_category(&self, category: Category) {
        self.send(SessionEvent::Category(category));
    }

    /// The latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Subscribe to session snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Number of searches actually executed (as opposed to requested),
    /// so debounce coalescing is observable.
    #[must_use]
    pub fn executed_searches(&self) -> u64 {
        self.executed.load(Ordering::Relaxed)
    }

    fn send(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            debug!("Search session task has exited; event dropped");
        }
    }
}

/// A scheduled, not-yet-executed text search.
struct PendingSearch {
    query: String,
    deadline: Instant,
}

/// An executed search whose result has not been delivered yet.
///
/// The delay between execution and delivery is a reserved suspension
/// point for a future remote data source; it must not change the
/// result, only its timing.
struct InFlightResult {
    results: Vec<Product>,
    generation: u64,
    deliver_at: Instant,
}

struct SessionTask {
    index: SearchIndex,
    config: SearchConfig,
    snapshot_tx: watch::Sender<SessionSnapshot>,
    executed: Arc<AtomicU64>,
    query: String,
    view: SearchView,
    open: bool,
    generation: u64,
    debounce: Option<PendingSearch>,
    in_flight: Option<InFlightResult>,
}

impl SessionTask {
    async fn run(mut self, mut events: mpsc::UnboundedReceiver<SessionEvent>) {
        loop {
            let debounce_deadline = self.debounce.as_ref().map(|p| p.deadline);
            let delivery_deadline = self.in_flight.as_ref().map(|f| f.deliver_at);

            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event),
                    None => break,
                },
                () = sleep_until_opt(debounce_deadline), if debounce_deadline.is_some() => {
                    self.fire_debounce();
                }
                () = sleep_until_opt(delivery_deadline), if delivery_deadline.is_some() => {
                    self.deliver_result();
                }
            }
        }
        debug!("Search session task exiting");
    }

    fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Open => {
                self.open = true;
                self.reset_to_suggestions();
            }
            SessionEvent::Close => {
                self.open = false;
                self.reset_to_suggestions();
            }
            SessionEvent::Clear => self.reset_to_suggestions(),
            SessionEvent::Input(raw) => self.handle_input(raw),
            SessionEvent::Submit(raw) => self.handle_submit(raw),
            SessionEvent::Category(category) => self.handle_category(category),
        }
        self.publish();
    }

    /// Clear the query and return to the idle view, invalidating any
    /// pending or in-flight search.
    fn reset_to_suggestions(&mut self) {
        self.generation += 1;
        self.query.clear();
        self.debounce = None;
        self.in_flight = None;
        self.view = SearchView::Suggestions;
    }

    fn handle_input(&mut self, raw: String) {
        let query = raw.trim().to_string();
        self.generation += 1;
        self.query.clone_from(&query);

        if query.is_empty() {
            self.debounce = None;
            self.view = SearchView::Suggestions;
        } else if query.chars().count() < self.config.min_query_len {
            self.debounce = None;
            self.view = SearchView::Typing;
        } else {
            self.view = SearchView::Loading;
            self.debounce = Some(PendingSearch {
                query,
                deadline: Instant::now() + self.config.debounce_window,
            });
        }
    }

    fn handle_submit(&mut self, raw: String) {
        let query = raw.trim().to_string();
        self.generation += 1;
        self.debounce = None;
        self.query.clone_from(&query);

        if query.is_empty() {
            self.view = SearchView::Suggestions;
            return;
        }
        self.view = SearchView::Loading;
        self.execute_text_search(query);
    }

    fn handle_category(&mut self, category: Category) {
        self.generation += 1;
        self.debounce = None;
        self.in_flight = None;
        self.query = category.as_str().to_string();

        self.executed.fetch_add(1, Ordering::Relaxed);
        let results = self.index.search_by_category(category);
        // Category clicks deliver immediately; only text searches go
        // through the simulated latency.
        self.view = view_for(results);
    }

    /// The debounce window elapsed with no newer keystroke.
    fn fire_debounce(&mut self) {
        if let Some(pending) = self.debounce.take() {
            self.execute_text_search(pending.query);
            self.publish();
        }
    }

    /// Run the match now; hold the result until the delivery deadline.
    fn execute_text_search(&mut self, query: String) {
        self.executed.fetch_add(1, Ordering::Relaxed);
        let results = self.index.search_by_text(&query);
        self.in_flight = Some(InFlightResult {
            results,
            generation: self.generation,
            deliver_at: Instant::now() + self.config.result_latency,
        });
    }

    /// The delivery latency elapsed; publish unless superseded.
    fn deliver_result(&mut self) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };
        if in_flight.generation != self.generation {
            debug!(
                stale = in_flight.generation,
                current = self.generation,
                "Discarding superseded search result"
            );
            return;
        }
        self.view = view_for(in_flight.results);
        self.publish();
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(SessionSnapshot {
            query: self.query.clone(),
            view: self.view.clone(),
            open: self.open,
        });
    }
}

fn view_for(results: Vec<Product>) -> SearchView {
    if results.is_empty() {
        SearchView::Empty
    } else {
        SearchView::Results(results)
    }
}

async fn sleep_until_opt(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::search::tests::sample_index;

    fn spawn_session() -> SearchSession {
        SearchSession::spawn(sample_index(), &SearchConfig::default())
    }

    async fn wait_for_view(
        session: &SearchSession,
        pred: impl Fn(&SearchView) -> bool,
    ) -> SessionSnapshot {
        let mut rx = session.subscribe();
        rx.wait_for(|s| pred(&s.view)).await.unwrap().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_coalesces_rapid_keystrokes() {
        let session = spawn_session();
        session.open();
        session.input("o");
        session.input("ou");
        session.input("oud");

        let snapshot =
            wait_for_view(&session, |v| matches!(v, SearchView::Results(_))).await;

        // Exactly one search executed, for the final query.
        assert_eq!(session.executed_searches(), 1);
        assert_eq!(snapshot.query, "oud");
        let SearchView::Results(results) = snapshot.view else {
            panic!("expected results");
        };
        let names: Vec<_> = results.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"Badee al Oud - Lattafa"));
        assert!(names.contains(&"Oud Najdia - Lattafa"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_result_is_distinct_from_idle() {
        let session = spawn_session();
        session.open();
        session.input("zzzznotfound");
        let snapshot = wait_for_view(&session, |v| *v == SearchView::Empty).await;
        assert_eq!(snapshot.query, "zzzznotfound");

        // Clearing the query returns to Suggestions, not Empty.
        session.input("");
        let snapshot = wait_for_view(&session, |v| *v == SearchView::Suggestions).await;
        assert!(snapshot.query.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_char_query_is_typing_state() {
        let session = spawn_session();
        session.open();
        session.input("o");
        let snapshot = wait_for_view(&session, |v| *v == SearchView::Typing).await;
        assert_eq!(snapshot.query, "o");
        // No search was scheduled, let alone executed.
        assert_eq!(session.executed_searches(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_query_supersedes_in_flight_result() {
        let session = spawn_session();
        session.open();
        // Submit executes immediately, then waits out the delivery latency.
        session.submit("oud");
        // A newer keystroke arrives before delivery: the old result must
        // never be published.
        session.input("zzzznotfound");

        let snapshot = wait_for_view(&session, |v| {
            matches!(v, SearchView::Empty | SearchView::Results(_))
        })
        .await;
        assert_eq!(snapshot.view, SearchView::Empty);
        assert_eq!(snapshot.query, "zzzznotfound");
        assert_eq!(session.executed_searches(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_bypasses_debounce() {
        let session = spawn_session();
        session.open();
        session.submit("saffron");
        let snapshot =
            wait_for_view(&session, |v| matches!(v, SearchView::Results(_))).await;
        let SearchView::Results(results) = snapshot.view else {
            panic!("expected results");
        };
        assert_eq!(results.len(), 1);
        assert_eq!(results.first().unwrap().name, "Oud Najdia - Lattafa");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_empty_query_shows_suggestions() {
        let session = spawn_session();
        session.open();
        session.submit("   ");
        let snapshot = wait_for_view(&session, |v| *v == SearchView::Suggestions).await;
        assert!(snapshot.query.is_empty());
        assert_eq!(session.executed_searches(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_category_click_is_immediate() {
        let session = spawn_session();
        session.open();
        session.select_category(Category::parse("unknown-token"));
        let snapshot =
            wait_for_view(&session, |v| matches!(v, SearchView::Results(_))).await;
        let SearchView::Results(results) = snapshot.view else {
            panic!("expected results");
        };
        // Unknown token falls back to the entire catalog.
        assert_eq!(results.len(), 6);
        assert_eq!(snapshot.query, "all");
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_clears_query_and_resets() {
        let session = spawn_session();
        session.open();
        session.submit("oud");
        wait_for_view(&session, |v| matches!(v, SearchView::Results(_))).await;

        session.close();
        let snapshot = wait_for_view(&session, |v| *v == SearchView::Suggestions).await;
        assert!(snapshot.query.is_empty());
        assert!(!snapshot.open);

        // Reopening starts from a clean Suggestions state.
        session.open();
        let snapshot = wait_for_view(&session, |v| *v == SearchView::Suggestions).await;
        assert!(snapshot.open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_debounce_cancelled_by_close() {
        let session = spawn_session();
        session.open();
        session.input("oud");
        session.close();

        let snapshot = wait_for_view(&session, |v| *v == SearchView::Suggestions).await;
        assert!(!snapshot.open);

        // Let any stray timers elapse: nothing must execute.
        tokio::time::sleep(std::time::Duration::from_secs(2)).await;
        assert_eq!(session.executed_searches(), 0);
        assert_eq!(session.snapshot().view, SearchView::Suggestions);
    }
}
