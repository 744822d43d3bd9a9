use super::facility::{Facility, ServiceType};

/// Fixed catalog backing the search screen and the local mock API
pub fn mock_catalog() -> Vec<Facility> {
    vec![
        Facility {
            id: "1".to_string(),
            name: "해피케어요양원".to_string(),
            fee_range: "85~110만원".to_string(),
            rating: 4.3,
            distance_km: Some(1.2),
            address: "서울 중구 동호로25길 33".to_string(),
            kind: ServiceType::FacilityBased,
        },
        Facility {
            id: "2".to_string(),
            name: "든든재가센터".to_string(),
            fee_range: "60~80만원".to_string(),
            rating: 4.5,
            distance_km: Some(2.8),
            address: "서울 성동구 성수이로 99".to_string(),
            kind: ServiceType::HomeBased,
        },
        Facility {
            id: "3".to_string(),
            name: "한결요양원".to_string(),
            fee_range: "70~95만원".to_string(),
            rating: 4.1,
            distance_km: Some(4.6),
            address: "서울 강동구 천호대로 11".to_string(),
            kind: ServiceType::FacilityBased,
        },
    ]
}
