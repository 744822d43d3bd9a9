//! Local facility API backed by the fixed mock catalog
//!
//! Serves the same routes as the remote API under `/api`, so the CLI and the
//! integration tests can run without a backend. State lives in memory and is
//! lost on exit.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::core::filter::filter_facilities;
use crate::core::validation::{
    validate_review, MAX_MEMBERSHIP_MONTHS, MSG_MONTHS_MAX, MSG_MONTHS_MIN,
};
use crate::domain::{
    mock_catalog, Facility, FacilityDetail, FacilitySummary, LoginRequest, MonthlyPayment,
    NewReview, PaymentCalculation, PaymentRequest, Profile, RegisterRequest, Review,
    ReviewAuthor, ServiceType,
};

const TOKEN_PREFIX: &str = "mock-token-";
const MSG_NO_FACILITY: &str = "존재하지 않는 시설입니다.";
const MSG_LOGIN_REQUIRED: &str = "로그인이 필요합니다.";
const MAX_PAGE_SIZE: usize = 100;

#[derive(Default)]
struct MockData {
    reviews: Vec<Review>,
    profiles: HashMap<String, Profile>,
}

struct MockState {
    catalog: Vec<Facility>,
    data: RwLock<MockData>,
}

type SharedState = Arc<MockState>;

/// Router with every mock route nested under `/api`
pub fn router() -> Router {
    let state = Arc::new(MockState {
        catalog: mock_catalog(),
        data: RwLock::new(MockData::default()),
    });

    let api = Router::new()
        .route("/facilities", get(feed))
        .route("/facilities/list", get(list_facilities))
        .route("/facilities/search", get(search_facilities))
        .route("/facilities/{id}", get(get_facility))
        .route("/reviews", get(list_reviews).post(create_review))
        .route("/payments/calculate", post(calculate_payments))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/users/profile", get(get_profile).put(update_profile))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
}

/// Serve until the process is stopped
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Mock facility API listening on http://{}/api", listener.local_addr()?);
    axum::serve(listener, router()).await?;
    Ok(())
}

/// Serve in the background; returns the bound address (useful with port 0)
pub async fn spawn(addr: SocketAddr) -> Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router()).await {
            tracing::error!("Mock facility API stopped: {}", e);
        }
    });
    debug!("Mock facility API spawned on {}", local);
    Ok((local, handle))
}

fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Username behind a mock bearer token
fn bearer_user(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    token
        .strip_prefix(TOKEN_PREFIX)
        .filter(|user| !user.is_empty())
        .map(str::to_string)
}

/// Lower bound of a fee range such as `"85~110만원"`, in won
fn lower_fee_won(fee_range: &str) -> Option<f64> {
    let lower = fee_range.split('~').next()?.trim().trim_end_matches("만원");
    lower.parse::<f64>().ok().map(|man| man * 10_000.0)
}

/// Items to skip for a 1-based page; page sizes are capped at `MAX_PAGE_SIZE`
fn page_window(page: Option<usize>, page_size: Option<usize>, default_size: usize) -> (usize, usize, usize) {
    let page = page.unwrap_or(1).max(1);
    let size = page_size.unwrap_or(default_size).clamp(1, MAX_PAGE_SIZE);
    (page, size, (page - 1).saturating_mul(size))
}

fn to_detail(facility: &Facility) -> FacilityDetail {
    FacilityDetail {
        facility_id: facility.id.clone(),
        name: facility.name.clone(),
        address: Some(facility.address.clone()),
        grade: Some(facility.rating),
        monthly_cost: lower_fee_won(&facility.fee_range),
        capacity: None,
        phone: None,
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedQuery {
    q: Option<String>,
    #[serde(rename = "type")]
    service_type: Option<ServiceType>,
    page: Option<usize>,
    page_size: Option<usize>,
}

async fn feed(State(state): State<SharedState>, Query(query): Query<FeedQuery>) -> Json<Value> {
    let matched = filter_facilities(
        &state.catalog,
        query.q.as_deref().unwrap_or(""),
        query.service_type,
    );
    let total = matched.len();
    let (page, page_size, offset) = page_window(query.page, query.page_size, 20);
    let items: Vec<FacilitySummary> = matched
        .into_iter()
        .skip(offset)
        .take(page_size)
        .map(FacilitySummary::from)
        .collect();

    Json(json!({ "items": items, "total": total, "page": page, "pageSize": page_size }))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    per_page: Option<usize>,
}

async fn list_facilities(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Json<Value> {
    let details: Vec<FacilityDetail> = state
        .catalog
        .iter()
        .take(query.per_page.unwrap_or(10).min(MAX_PAGE_SIZE))
        .map(to_detail)
        .collect();
    Json(json!({ "data": details }))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

async fn search_facilities(
    State(state): State<SharedState>,
    Query(query): Query<SearchQuery>,
) -> Json<Value> {
    let details: Vec<FacilityDetail> = filter_facilities(&state.catalog, &query.q, None)
        .iter()
        .map(to_detail)
        .collect();
    Json(json!({ "data": details }))
}

async fn get_facility(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    match state.catalog.iter().find(|f| f.id == id) {
        Some(facility) => Json(json!({ "data": to_detail(facility) })).into_response(),
        None => failure(StatusCode::NOT_FOUND, MSG_NO_FACILITY),
    }
}

#[derive(Debug, Deserialize)]
struct ReviewQuery {
    facility_id: u64,
    page: Option<usize>,
    per_page: Option<usize>,
}

async fn list_reviews(
    State(state): State<SharedState>,
    Query(query): Query<ReviewQuery>,
) -> Json<Value> {
    let data = state.data.read().await;
    let facility = query.facility_id.to_string();
    let (page, per_page, offset) = page_window(query.page, query.per_page, 10);
    let reviews: Vec<&Review> = data
        .reviews
        .iter()
        .filter(|r| r.review_id.split(':').next() == Some(facility.as_str()))
        .skip(offset)
        .take(per_page)
        .collect();
    Json(json!({ "data": { "data": reviews, "page": page, "per_page": per_page } }))
}

async fn create_review(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(review): Json<NewReview>,
) -> Response {
    let Some(user) = bearer_user(&headers) else {
        return failure(StatusCode::UNAUTHORIZED, MSG_LOGIN_REQUIRED);
    };
    let check = validate_review(&review.content, review.rating);
    if !check.is_valid {
        return failure(StatusCode::BAD_REQUEST, &check.errors.join(" "));
    }
    if !state.catalog.iter().any(|f| f.id == review.facility_id.to_string()) {
        return failure(StatusCode::NOT_FOUND, MSG_NO_FACILITY);
    }

    let mut data = state.data.write().await;
    // Review ids carry their facility so listing needs no extra index
    let created = Review {
        review_id: format!("{}:{}", review.facility_id, data.reviews.len() + 1),
        user: Some(ReviewAuthor { username: user }),
        content: review.content.trim().to_string(),
        rating: review.rating,
        photo_url: review.photo_url,
        created_at: Some(Utc::now().to_rfc3339()),
    };
    data.reviews.insert(0, created.clone());

    (StatusCode::CREATED, Json(json!({ "data": created }))).into_response()
}

async fn calculate_payments(
    State(state): State<SharedState>,
    Json(request): Json<PaymentRequest>,
) -> Response {
    let id = request.facility_id.to_string();
    let Some(facility) = state.catalog.iter().find(|f| f.id == id) else {
        return failure(StatusCode::NOT_FOUND, MSG_NO_FACILITY);
    };
    let Some(monthly) = lower_fee_won(&facility.fee_range) else {
        return failure(StatusCode::UNPROCESSABLE_ENTITY, "가격 정보 없음");
    };
    if request.membership_months < 1 {
        return failure(StatusCode::BAD_REQUEST, MSG_MONTHS_MIN);
    }
    if request.membership_months > MAX_MEMBERSHIP_MONTHS {
        return failure(StatusCode::BAD_REQUEST, MSG_MONTHS_MAX);
    }

    let months = request.membership_months;
    let calculation = PaymentCalculation {
        facility_name: facility.name.clone(),
        months,
        total_amount: monthly * f64::from(months),
        average_monthly_amount: monthly,
        monthly_payments: (1..=months)
            .map(|month_index| MonthlyPayment {
                month_index,
                amount: monthly,
            })
            .collect(),
    };
    Json(json!({ "data": calculation })).into_response()
}

async fn register(State(state): State<SharedState>, Json(account): Json<RegisterRequest>) -> Response {
    if account.username.trim().is_empty() || account.password.is_empty() {
        return failure(StatusCode::BAD_REQUEST, "아이디와 비밀번호를 입력해주세요.");
    }
    let mut data = state.data.write().await;
    if data.profiles.contains_key(&account.username) {
        return failure(StatusCode::CONFLICT, "이미 사용 중인 아이디입니다.");
    }
    data.profiles.insert(
        account.username.clone(),
        Profile {
            username: account.username.clone(),
            email: account.email,
            phone: account.phone.unwrap_or_default(),
        },
    );
    (StatusCode::CREATED, Json(json!({ "message": "registered" }))).into_response()
}

/// Any non-empty credentials are accepted
async fn login(Json(credentials): Json<LoginRequest>) -> Response {
    if credentials.username.trim().is_empty() || credentials.password.is_empty() {
        return failure(StatusCode::UNAUTHORIZED, "아이디 또는 비밀번호가 올바르지 않습니다.");
    }
    let token = format!("{TOKEN_PREFIX}{}", credentials.username.trim());
    Json(json!({ "access_token": token })).into_response()
}

async fn get_profile(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let Some(user) = bearer_user(&headers) else {
        return failure(StatusCode::UNAUTHORIZED, MSG_LOGIN_REQUIRED);
    };
    let data = state.data.read().await;
    let profile = data.profiles.get(&user).cloned().unwrap_or(Profile {
        username: user,
        ..Default::default()
    });
    Json(json!({ "data": profile })).into_response()
}

async fn update_profile(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(profile): Json<Profile>,
) -> Response {
    let Some(user) = bearer_user(&headers) else {
        return failure(StatusCode::UNAUTHORIZED, MSG_LOGIN_REQUIRED);
    };
    state.data.write().await.profiles.insert(user, profile.clone());
    Json(json!({ "data": profile })).into_response()
}
