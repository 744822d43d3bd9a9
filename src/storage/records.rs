//! Typed access to the persisted app state
//!
//! | key | value |
//! |---|---|
//! | `onboarding.done` | `"1"` or absent |
//! | `onboarding.hasGrade` | `"true"` / `"false"` |
//! | `onboarding.serviceType` | service type label or `""` |
//! | `filters` | JSON [`FilterCriteria`] |
//! | `auth.token` | bearer token |
//! | `care.record` | JSON [`CareRecord`] |

use tracing::warn;

use super::error::StorageResult;
use super::traits::KeyValueStore;
use crate::core::care_record::CareRecord;
use crate::core::onboarding::OnboardingOutcome;
use crate::domain::{FilterCriteria, ServiceType};

pub const ONBOARDING_DONE: &str = "onboarding.done";
pub const ONBOARDING_HAS_GRADE: &str = "onboarding.hasGrade";
pub const ONBOARDING_SERVICE_TYPE: &str = "onboarding.serviceType";
pub const FILTERS: &str = "filters";
pub const AUTH_TOKEN: &str = "auth.token";
pub const CARE_RECORD: &str = "care.record";

/// Write the three onboarding keys in one call
pub async fn save_onboarding(
    store: &dyn KeyValueStore,
    outcome: &OnboardingOutcome,
) -> StorageResult<()> {
    let service_type = outcome
        .service_type
        .map(|t| t.as_str().to_string())
        .unwrap_or_default();

    store
        .multi_set(&[
            (ONBOARDING_DONE, "1".to_string()),
            (ONBOARDING_HAS_GRADE, outcome.has_grade.to_string()),
            (ONBOARDING_SERVICE_TYPE, service_type),
        ])
        .await
}

pub async fn is_onboarding_done(store: &dyn KeyValueStore) -> StorageResult<bool> {
    Ok(store.get(ONBOARDING_DONE).await?.as_deref() == Some("1"))
}

pub async fn load_has_grade(store: &dyn KeyValueStore) -> StorageResult<Option<bool>> {
    Ok(store
        .get(ONBOARDING_HAS_GRADE)
        .await?
        .and_then(|v| v.parse::<bool>().ok()))
}

/// Last chosen service type. Empty or unknown values read as unset.
pub async fn load_service_type(store: &dyn KeyValueStore) -> StorageResult<Option<ServiceType>> {
    let Some(raw) = store.get(ONBOARDING_SERVICE_TYPE).await? else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse() {
        Ok(kind) => Ok(Some(kind)),
        Err(e) => {
            warn!("Ignoring stored service type: {}", e);
            Ok(None)
        }
    }
}

pub async fn save_service_type(store: &dyn KeyValueStore, kind: ServiceType) -> StorageResult<()> {
    store.set(ONBOARDING_SERVICE_TYPE, kind.as_str()).await
}

pub async fn save_filters(store: &dyn KeyValueStore, criteria: &FilterCriteria) -> StorageResult<()> {
    store.set(FILTERS, &criteria.to_json()?).await
}

/// Stored filter criteria; an unreadable value reads back as defaults
pub async fn load_filters(store: &dyn KeyValueStore) -> StorageResult<FilterCriteria> {
    let Some(raw) = store.get(FILTERS).await? else {
        return Ok(FilterCriteria::default());
    };
    Ok(FilterCriteria::from_json(&raw).unwrap_or_else(|e| {
        warn!("Stored filters unreadable, using defaults: {}", e);
        FilterCriteria::default()
    }))
}

pub async fn load_token(store: &dyn KeyValueStore) -> StorageResult<Option<String>> {
    Ok(store.get(AUTH_TOKEN).await?.filter(|t| !t.is_empty()))
}

pub async fn save_token(store: &dyn KeyValueStore, token: &str) -> StorageResult<()> {
    store.set(AUTH_TOKEN, token).await
}

pub async fn clear_token(store: &dyn KeyValueStore) -> StorageResult<()> {
    store.remove(AUTH_TOKEN).await
}

pub async fn save_care_record(store: &dyn KeyValueStore, record: &CareRecord) -> StorageResult<()> {
    store.set(CARE_RECORD, &serde_json::to_string(record)?).await
}

/// Saved care record; an unreadable value reads as no record
pub async fn load_care_record(store: &dyn KeyValueStore) -> StorageResult<Option<CareRecord>> {
    let Some(raw) = store.get(CARE_RECORD).await? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            warn!("Stored care record unreadable, ignoring it: {}", e);
            Ok(None)
        }
    }
}
