//! Pagination controller for a recommendation batch.
//!
//! The whole batch is fetched once; "loading more" only reveals the next
//! `page_size` items after a short UX delay. Both trigger sources (an explicit
//! "load more" and the scroll sentinel coming into view) go through
//! `request_advance`, which enforces single-flight.
//!
//! ```text
//! Idle ──load──▶ LoadingInitial ──ok──▶ Ready ◀──complete── LoadingMore
//!                    │    ▲               └──request_advance──▶┘
//!                  error  └──retry── Error
//! ```

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::client::{PortalError, RecommendationSource};
use crate::models::JobCard;

pub const PAGE_SIZE: usize = 5;

/// Delay between an advance request and the reveal.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LoadingInitial,
    Ready,
    LoadingMore,
    /// Initial load failed; holds the user-facing message.
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceTrigger {
    LoadMore,
    SentinelVisible,
}

#[derive(Debug, Clone)]
pub struct PaginationState {
    all_items: Vec<JobCard>,
    visible_count: usize,
    page_size: usize,
    phase: Phase,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            all_items: Vec::new(),
            visible_count: 0,
            page_size: page_size.max(1),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn visible(&self) -> &[JobCard] {
        &self.all_items[..self.visible_count]
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn total(&self) -> usize {
        self.all_items.len()
    }

    pub fn is_loading_more(&self) -> bool {
        self.phase == Phase::LoadingMore
    }

    pub fn has_more(&self) -> bool {
        self.visible_count < self.all_items.len()
    }

    /// Ready with every item revealed; further triggers are no-ops.
    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Ready && !self.has_more()
    }

    /// Idle (mount) or Error (retry) → LoadingInitial. Returns false otherwise.
    pub fn begin_initial_load(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::Error(_) => {
                self.phase = Phase::LoadingInitial;
                true
            }
            _ => false,
        }
    }

    /// LoadingInitial → Ready (first page visible) or Error.
    pub fn finish_initial_load(&mut self, result: Result<Vec<JobCard>, PortalError>) {
        if self.phase != Phase::LoadingInitial {
            return;
        }
        match result {
            Ok(items) => {
                self.visible_count = self.page_size.min(items.len());
                self.all_items = items;
                self.phase = Phase::Ready;
            }
            Err(e) => {
                self.all_items.clear();
                self.visible_count = 0;
                self.phase = Phase::Error(e.user_message());
            }
        }
    }

    /// Single entry point for both triggers. Starts an advance only when Ready
    /// with unrevealed items; returns whether one was started.
    pub fn request_advance(&mut self, trigger: AdvanceTrigger) -> bool {
        if self.phase != Phase::Ready || !self.has_more() {
            debug!(
                "Ignoring {trigger:?}: phase={:?}, visible={}/{}",
                self.phase,
                self.visible_count,
                self.all_items.len()
            );
            return false;
        }
        self.phase = Phase::LoadingMore;
        true
    }

    /// LoadingMore → Ready, revealing up to one more page.
    pub fn complete_advance(&mut self) {
        if self.phase != Phase::LoadingMore {
            return;
        }
        self.visible_count = (self.visible_count + self.page_size).min(self.all_items.len());
        self.phase = Phase::Ready;
    }
}

/// Async driver: owns the source and serializes state changes behind a mutex.
///
/// The lock is never held across the fetch or the reveal delay, so triggers that
/// arrive mid-advance observe `LoadingMore` and are dropped.
pub struct JobFeed<S> {
    source: S,
    state: Mutex<PaginationState>,
    advance_delay: Duration,
}

impl<S: RecommendationSource> JobFeed<S> {
    pub fn new(source: S) -> Self {
        Self::with_settings(source, PAGE_SIZE, ADVANCE_DELAY)
    }

    pub fn with_settings(source: S, page_size: usize, advance_delay: Duration) -> Self {
        Self {
            source,
            state: Mutex::new(PaginationState::new(page_size)),
            advance_delay,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Initial load, or retry after an error. Exactly one fetch per call that
    /// actually starts a load.
    pub async fn load(&self) -> Phase {
        if !self.state.lock().await.begin_initial_load() {
            return self.state.lock().await.phase().clone();
        }

        let result = self.source.fetch_recommendations().await;
        match &result {
            Ok(items) => info!("Loaded {} job suggestions", items.len()),
            Err(e) => warn!("Failed to load job suggestions: {e}"),
        }

        let mut state = self.state.lock().await;
        state.finish_initial_load(result);
        state.phase().clone()
    }

    /// Reveals the next page if allowed. Returns whether this call advanced.
    pub async fn advance(&self, trigger: AdvanceTrigger) -> bool {
        if !self.state.lock().await.request_advance(trigger) {
            return false;
        }

        tokio::time::sleep(self.advance_delay).await;

        self.state.lock().await.complete_advance();
        true
    }

    /// Read access to the current state.
    pub async fn with_state<R>(&self, f: impl FnOnce(&PaginationState) -> R) -> R {
        f(&*self.state.lock().await)
    }
}
