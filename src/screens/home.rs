use std::sync::Arc;
use tracing::{debug, error};

use crate::api::{FacilityFeedSource, FacilityQuery};
use crate::domain::FacilitySummary;
use crate::navigation::{Navigation, Route};

/// Shown in place of the feed when loading failed
pub const LOAD_ERROR_MESSAGE: &str = "데이터를 불러오지 못했어요. 잠시 후 다시 시도해 주세요.";

/// National health insurance site opened by the insurance card
pub const INSURANCE_SITE_URL: &str = "https://www.nhis.or.kr";

#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Loading,
    Loaded(Vec<FacilitySummary>),
    Failed { message: String },
}

/// Shortcut cards above the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    GetGrade,
    DayCare,
    NursingHome,
    Calculator,
    Insurance,
}

impl HomeAction {
    pub const ALL: [HomeAction; 5] = [
        HomeAction::GetGrade,
        HomeAction::DayCare,
        HomeAction::NursingHome,
        HomeAction::Calculator,
        HomeAction::Insurance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HomeAction::GetGrade => "등급받기",
            HomeAction::DayCare => "주·야간보호",
            HomeAction::NursingHome => "요양원/요양병원",
            HomeAction::Calculator => "계산기",
            HomeAction::Insurance => "보험공단",
        }
    }

    pub fn navigation(&self) -> Navigation {
        match self {
            HomeAction::GetGrade => Navigation::Push(Route::Grade),
            HomeAction::DayCare | HomeAction::NursingHome => Navigation::Push(Route::Search),
            HomeAction::Calculator => Navigation::Push(Route::Calculator("1".to_string())),
            HomeAction::Insurance => Navigation::OpenUrl(INSURANCE_SITE_URL.to_string()),
        }
    }
}

/// Home tab facility feed
pub struct HomeFeed {
    source: Arc<dyn FacilityFeedSource>,
    query: FacilityQuery,
    state: FeedState,
    refreshing: bool,
}

impl HomeFeed {
    pub fn new(source: Arc<dyn FacilityFeedSource>) -> Self {
        Self {
            source,
            query: FacilityQuery::default(),
            state: FeedState::Loading,
            refreshing: false,
        }
    }

    /// Narrow the feed by text, service type, page or location
    pub fn with_query(mut self, query: FacilityQuery) -> Self {
        self.query = query;
        self
    }

    pub fn query(&self) -> &FacilityQuery {
        &self.query
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Fetch the feed. Failures are kept in the state rather than returned.
    pub async fn load(&mut self) -> &FeedState {
        self.state = match self.source.load_feed(&self.query).await {
            Ok(items) => {
                debug!("Home feed loaded {} facilities", items.len());
                FeedState::Loaded(items)
            }
            Err(e) => {
                error!("Failed to load home feed: {}", e);
                FeedState::Failed {
                    message: LOAD_ERROR_MESSAGE.to_string(),
                }
            }
        };
        self.refreshing = false;
        &self.state
    }

    /// Inline retry after a failure: the same request again
    pub async fn retry(&mut self) -> &FeedState {
        self.state = FeedState::Loading;
        self.load().await
    }

    /// Pull to refresh keeps the current list visible while reloading
    pub async fn refresh(&mut self) -> &FeedState {
        self.refreshing = true;
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails the first `failures` calls, then serves one row
    struct FlakySource {
        calls: AtomicUsize,
        failures: usize,
    }

    #[async_trait]
    impl FacilityFeedSource for FlakySource {
        async fn load_feed(&self, _query: &FacilityQuery) -> Result<Vec<FacilitySummary>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(Error::Http {
                    status: 503,
                    message: "maintenance".to_string(),
                });
            }
            Ok(vec![FacilitySummary {
                id: "1".to_string(),
                name: "해피케어요양원".to_string(),
                fee_range: None,
                rating: Some(4.3),
                address: None,
            }])
        }
    }

    #[tokio::test]
    async fn test_failure_then_retry() {
        let source = Arc::new(FlakySource {
            calls: AtomicUsize::new(0),
            failures: 1,
        });
        let mut feed = HomeFeed::new(source.clone());
        assert_eq!(feed.state(), &FeedState::Loading);

        let state = feed.load().await.clone();
        assert_eq!(
            state,
            FeedState::Failed {
                message: LOAD_ERROR_MESSAGE.to_string()
            }
        );

        match feed.retry().await {
            FeedState::Loaded(items) => assert_eq!(items[0].name, "해피케어요양원"),
            other => panic!("expected loaded feed, got {other:?}"),
        }
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_refresh_clears_refreshing_flag() {
        let source = Arc::new(FlakySource {
            calls: AtomicUsize::new(0),
            failures: 0,
        });
        let mut feed = HomeFeed::new(source);
        feed.refresh().await;
        assert!(!feed.is_refreshing());
        assert!(matches!(feed.state(), FeedState::Loaded(_)));
    }

    #[test]
    fn test_home_actions() {
        assert_eq!(HomeAction::GetGrade.navigation(), Navigation::Push(Route::Grade));
        assert_eq!(HomeAction::DayCare.navigation(), Navigation::Push(Route::Search));
        assert_eq!(
            HomeAction::Insurance.navigation(),
            Navigation::OpenUrl(INSURANCE_SITE_URL.to_string())
        );
        assert_eq!(HomeAction::ALL.len(), 5);
    }
}
