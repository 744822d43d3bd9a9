//! Facility directory backed by the remote API: free-text search and the
//! featured list on the home page

use std::sync::Arc;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::domain::FacilityDetail;
use crate::error::Result;

/// Facilities listed when the search box is empty
pub const BROWSE_PAGE_SIZE: u32 = 20;

/// Facilities shown in the home page's featured list
pub const FEATURED_PAGE_SIZE: u32 = 8;

pub const MSG_NO_RESULTS: &str = "검색 결과가 없습니다.";

pub struct FacilityDirectory {
    api: Arc<ApiClient>,
    query: String,
    items: Vec<FacilityDetail>,
}

impl FacilityDirectory {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            query: String::new(),
            items: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items(&self) -> &[FacilityDetail] {
        &self.items
    }

    /// Search by name or address; a blank query lists the first facilities instead
    pub async fn search(&mut self, query: &str) -> Result<&[FacilityDetail]> {
        self.query = query.trim().to_string();
        self.items = if self.query.is_empty() {
            self.api.list_facilities(BROWSE_PAGE_SIZE).await?
        } else {
            self.api.search_facilities(&self.query).await?
        };
        debug!("Directory search {:?} -> {} facilities", self.query, self.items.len());
        Ok(&self.items)
    }

    /// Featured list; failures leave it empty
    pub async fn featured(&mut self) -> &[FacilityDetail] {
        self.query.clear();
        self.items = match self.api.list_facilities(FEATURED_PAGE_SIZE).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Featured facilities not loaded: {}", e);
                Vec::new()
            }
        };
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::time::Duration;

    #[tokio::test]
    async fn test_featured_swallows_network_errors() {
        let api = ApiClient::new(
            "http://127.0.0.1:9/api",
            Duration::from_millis(50),
            Arc::new(MemoryStore::new()),
        )
        .unwrap();
        let mut directory = FacilityDirectory::new(Arc::new(api));
        assert!(directory.featured().await.is_empty());
        assert!(directory.search("요양원").await.is_err());
    }
}
