use std::sync::Arc;
use tracing::{debug, info};

use crate::api::ApiClient;
use crate::core::validation::validate_review;
use crate::domain::{FacilityDetail, NewReview, Review};
use crate::error::{Error, Result};
use crate::navigation::{Navigation, Route};

pub const MSG_LOGIN_REQUIRED: &str = "로그인이 필요합니다.";

/// Reviews fetched with the detail page
pub const REVIEWS_PER_PAGE: u32 = 10;

/// Facility detail page with its reviews and the review form
pub struct FacilityDetailScreen {
    api: Arc<ApiClient>,
    facility_id: String,
    detail: Option<FacilityDetail>,
    reviews: Vec<Review>,
}

impl FacilityDetailScreen {
    pub fn new(api: Arc<ApiClient>, facility_id: impl Into<String>) -> Self {
        Self {
            api,
            facility_id: facility_id.into(),
            detail: None,
            reviews: Vec::new(),
        }
    }

    pub fn detail(&self) -> Option<&FacilityDetail> {
        self.detail.as_ref()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    fn numeric_id(&self) -> Result<u64> {
        self.facility_id
            .trim()
            .parse()
            .map_err(|_| Error::Validation(format!("잘못된 시설 번호입니다: {}", self.facility_id)))
    }

    /// Load the facility and the first page of its reviews
    pub async fn load(&mut self) -> Result<()> {
        let id = self.numeric_id()?;
        self.detail = Some(self.api.get_facility(&self.facility_id).await?);
        self.reviews = self.api.list_reviews(id, 1, REVIEWS_PER_PAGE).await?;
        debug!("Facility {} has {} reviews", self.facility_id, self.reviews.len());
        Ok(())
    }

    /// Validate and send a review; the created review goes to the top of the list
    pub async fn submit_review(&mut self, content: &str, rating: u8) -> Result<&Review> {
        validate_review(content, rating).into_result()?;
        if !self.api.is_authenticated().await? {
            return Err(Error::Unauthorized(MSG_LOGIN_REQUIRED.to_string()));
        }

        let review = NewReview {
            facility_id: self.numeric_id()?,
            content: content.trim().to_string(),
            rating,
            photo_url: None,
        };
        let created = self.api.create_review(&review).await?;
        info!("Review posted for facility {}", self.facility_id);

        self.reviews.insert(0, created);
        self.reviews.first().ok_or_else(|| Error::NotFound("created review".to_string()))
    }

    pub fn open_calculator(&self) -> Navigation {
        Navigation::Push(Route::Calculator(self.facility_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{MSG_RATING_RANGE, MSG_REVIEW_EMPTY};
    use crate::storage::MemoryStore;
    use std::time::Duration;

    /// Nothing listens here; these tests must fail before any request
    fn offline_api() -> Arc<ApiClient> {
        let api = ApiClient::new("http://127.0.0.1:9/api", Duration::from_millis(50), Arc::new(MemoryStore::new()));
        Arc::new(api.unwrap())
    }

    #[tokio::test]
    async fn test_review_validation_runs_before_login_check() {
        let mut screen = FacilityDetailScreen::new(offline_api(), "1");

        let err = screen.submit_review("  ", 5).await.unwrap_err();
        assert!(err.to_string().contains(MSG_REVIEW_EMPTY));

        let err = screen.submit_review("좋아요", 0).await.unwrap_err();
        assert!(err.to_string().contains(MSG_RATING_RANGE));

        let err = screen.submit_review("좋아요", 5).await.unwrap_err();
        assert!(err.requires_login());
        assert!(screen.reviews().is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let mut screen = FacilityDetailScreen::new(offline_api(), "abc");
        assert!(screen.load().await.unwrap_err().is_validation());
        assert_eq!(
            screen.open_calculator(),
            Navigation::Push(Route::Calculator("abc".to_string()))
        );
    }
}
