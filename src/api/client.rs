use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::response;
use crate::domain::{
    FacilityDetail, FacilitySummary, LoginRequest, NewReview, PaymentCalculation,
    PaymentRequest, Profile, RegisterRequest, Review, ServiceType,
};
use crate::error::{Error, Result};
use crate::storage::{records, SharedStore};

/// Query parameters of `GET /facilities`; unset fields are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// One page of the facility feed
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacilityPage {
    pub items: Vec<FacilitySummary>,
    pub total: Option<u64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl FacilityPage {
    /// The feed answers with either a bare list or a page object
    fn from_value(value: Value) -> Result<Self> {
        match response::unwrap_envelope(value) {
            Value::Null => Ok(Self::default()),
            list @ Value::Array(_) => {
                let items: Vec<FacilitySummary> = response::decode(list)?;
                Ok(Self {
                    total: Some(items.len() as u64),
                    items,
                    ..Default::default()
                })
            }
            page => response::decode(page),
        }
    }
}

/// Anything the home feed can load facilities from
#[async_trait]
pub trait FacilityFeedSource: Send + Sync {
    async fn load_feed(&self, query: &FacilityQuery) -> Result<Vec<FacilitySummary>>;
}

/// Client for the facility API
pub struct ApiClient {
    client: Client,
    base_url: Url,
    store: SharedStore,
}

impl ApiClient {
    /// Build a client; the bearer token is read from `store` on every request
    pub fn new(base_url: &str, timeout: Duration, store: SharedStore) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("Invalid API URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("API URL cannot be a base: {base_url}")));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            store,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("API URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        Ok(self.client.request(method, self.endpoint(segments)?))
    }

    /// Send a request and return the parsed body of a 2xx response
    async fn execute(&self, request: RequestBuilder, action: &str) -> Result<Value> {
        let request = match records::load_token(&*self.store).await? {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to {action}: {e}")))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response to {action}: {e}")))?;

        debug!("{} -> {}", action, status);

        if status == StatusCode::UNAUTHORIZED {
            warn!("Credentials rejected while trying to {}, clearing token", action);
            records::clear_token(&*self.store).await?;
            return Err(Error::Unauthorized(response::error_message(status, &text)));
        }
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                message: response::error_message(status, &text),
            });
        }

        Ok(response::parse_body(&text))
    }

    /// `GET /facilities` for the home feed
    pub async fn facilities(&self, query: &FacilityQuery) -> Result<FacilityPage> {
        let request = self.request(Method::GET, &["facilities"])?.query(query);
        let body = self.execute(request, "load facilities").await?;
        FacilityPage::from_value(body)
    }

    /// `GET /facilities/list`
    pub async fn list_facilities(&self, per_page: u32) -> Result<Vec<FacilityDetail>> {
        let request = self
            .request(Method::GET, &["facilities", "list"])?
            .query(&[("per_page", per_page)]);
        response::into_list(self.execute(request, "list facilities").await?)
    }

    /// `GET /facilities/search`
    pub async fn search_facilities(&self, query: &str) -> Result<Vec<FacilityDetail>> {
        let request = self
            .request(Method::GET, &["facilities", "search"])?
            .query(&[("q", query)]);
        response::into_list(self.execute(request, "search facilities").await?)
    }

    /// `GET /facilities/{id}`
    pub async fn get_facility(&self, id: &str) -> Result<FacilityDetail> {
        let request = self.request(Method::GET, &["facilities", id])?;
        match response::unwrap_envelope(self.execute(request, "load facility").await?) {
            Value::Null => Err(Error::NotFound(format!("facility {id}"))),
            detail => response::decode(detail),
        }
    }

    /// `GET /reviews` for one facility
    pub async fn list_reviews(&self, facility_id: u64, page: u32, per_page: u32) -> Result<Vec<Review>> {
        let request = self.request(Method::GET, &["reviews"])?.query(&[
            ("facility_id", facility_id.to_string()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ]);
        response::into_list(self.execute(request, "load reviews").await?)
    }

    /// `POST /reviews`, returning the created review
    pub async fn create_review(&self, review: &NewReview) -> Result<Review> {
        let request = self.request(Method::POST, &["reviews"])?.json(review);
        let body = self.execute(request, "create review").await?;
        response::decode(response::unwrap_envelope(body))
    }

    /// `POST /payments/calculate`
    pub async fn calculate_payments(&self, payment: &PaymentRequest) -> Result<PaymentCalculation> {
        let request = self
            .request(Method::POST, &["payments", "calculate"])?
            .json(payment);
        let body = self.execute(request, "calculate payments").await?;
        response::decode(response::unwrap_envelope(body))
    }

    /// `POST /auth/register`
    pub async fn register(&self, account: &RegisterRequest) -> Result<()> {
        let request = self.request(Method::POST, &["auth", "register"])?.json(account);
        self.execute(request, "register").await?;
        info!("Registered account {}", account.username);
        Ok(())
    }

    /// `POST /auth/login`; the returned access token is stored for later requests
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = self.request(Method::POST, &["auth", "login"])?.json(&credentials);
        let body = self.execute(request, "log in").await?;

        let token = access_token(&body)
            .or_else(|| access_token(&response::unwrap_envelope(body.clone())))
            .ok_or_else(|| Error::Deserialization("Login response has no access_token".to_string()))?;

        records::save_token(&*self.store, &token).await?;
        info!("Logged in as {}", username);
        Ok(token)
    }

    /// Forget the stored token; the server keeps no session
    pub async fn logout(&self) -> Result<()> {
        records::clear_token(&*self.store).await?;
        Ok(())
    }

    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(records::load_token(&*self.store).await?.is_some())
    }

    /// `GET /users/profile`
    pub async fn profile(&self) -> Result<Profile> {
        let request = self.request(Method::GET, &["users", "profile"])?;
        let body = self.execute(request, "load profile").await?;
        response::decode(response::unwrap_envelope(body))
    }

    /// `PUT /users/profile`
    pub async fn update_profile(&self, profile: &Profile) -> Result<()> {
        let request = self.request(Method::PUT, &["users", "profile"])?.json(profile);
        self.execute(request, "update profile").await?;
        Ok(())
    }
}

#[async_trait]
impl FacilityFeedSource for ApiClient {
    async fn load_feed(&self, query: &FacilityQuery) -> Result<Vec<FacilitySummary>> {
        Ok(self.facilities(query).await?.items)
    }
}

fn access_token(body: &Value) -> Option<String> {
    body.get("access_token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;
    use std::sync::Arc;

    fn client(base: &str) -> Result<ApiClient> {
        ApiClient::new(base, Duration::from_secs(5), Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_endpoint_joins_segments_under_base_path() {
        let api = client("http://127.0.0.1:5000/api").unwrap();
        assert_eq!(
            api.endpoint(&["facilities", "list"]).unwrap().as_str(),
            "http://127.0.0.1:5000/api/facilities/list"
        );

        let api = client("http://127.0.0.1:5000/api/").unwrap();
        assert_eq!(
            api.endpoint(&["facilities", "7"]).unwrap().as_str(),
            "http://127.0.0.1:5000/api/facilities/7"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        assert!(matches!(client("not a url"), Err(Error::Config(_))));
        assert!(matches!(client("mailto:care@example.com"), Err(Error::Config(_))));
    }

    #[test]
    fn test_facility_page_from_list_or_object() {
        let row = json!({"id": 1, "name": "해피케어요양원"});

        let page = FacilityPage::from_value(json!([row.clone()])).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, Some(1));

        let page = FacilityPage::from_value(json!({"items": [row], "total": 10, "pageSize": 1})).unwrap();
        assert_eq!(page.items[0].id, "1");
        assert_eq!(page.total, Some(10));
        assert_eq!(page.page_size, Some(1));

        assert!(FacilityPage::from_value(Value::Null).unwrap().items.is_empty());
    }

    #[test]
    fn test_access_token_lookup() {
        assert_eq!(access_token(&json!({"access_token": "abc"})), Some("abc".to_string()));
        assert_eq!(access_token(&json!({"access_token": ""})), None);
        assert_eq!(access_token(&json!({"data": {"access_token": "abc"}})), None);
    }
}
