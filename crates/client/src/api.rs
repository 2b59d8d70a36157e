//! HTTP client for the DanusKu API. Every endpoint answers with the uniform
//! `{ success, message, data }` envelope; this module unwraps it and maps
//! failures onto [`ApiError`].

use std::time::Duration;

use contracts::envelope::ApiResponse;
use contracts::request::{CreateRequestSetor, RequestSetor};
use contracts::setor::UserWithStatus;
use contracts::stok::StokHarian;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct DanusApi {
    http: reqwest::Client,
    base_url: String,
}

impl DanusApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Users joined with today's take/deposit records, pre-aggregated
    /// server-side.
    pub async fn users_with_today_status(&self) -> Result<Vec<UserWithStatus>, ApiError> {
        self.get_data("/users/with-today-status", &[]).await
    }

    /// Same shape, scoped to users holding any un-deposited items regardless
    /// of date.
    pub async fn users_with_pending_deposits(&self) -> Result<Vec<UserWithStatus>, ApiError> {
        self.get_data("/users/with-pending-deposits", &[]).await
    }

    /// Today's stock lots; feeds the item-filter chip list.
    pub async fn stok_hari_ini(&self) -> Result<Vec<StokHarian>, ApiError> {
        self.get_data("/stok/hari-ini", &[]).await
    }

    pub async fn my_requests(&self, user_id: i64) -> Result<Vec<RequestSetor>, ApiError> {
        self.get_data("/requests/my", &[("userId", user_id.to_string())])
            .await
    }

    pub async fn admin_requests(&self, admin_id: i64) -> Result<Vec<RequestSetor>, ApiError> {
        self.get_data("/requests/admin", &[("adminId", admin_id.to_string())])
            .await
    }

    /// Validates client-side first; on validation failure no request is sent.
    pub async fn create_request(
        &self,
        user_id: i64,
        dto: &CreateRequestSetor,
    ) -> Result<RequestSetor, ApiError> {
        dto.validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        let response = self
            .http
            .post(self.url("/requests"))
            .query(&[("userId", user_id.to_string())])
            .json(dto)
            .send()
            .await?;
        Self::read_data(response).await
    }

    pub async fn approve_request(&self, id: i64) -> Result<String, ApiError> {
        let response = self
            .http
            .patch(self.url(&format!("/requests/{}/approve", id)))
            .send()
            .await?;
        Self::read_ack(response).await
    }

    pub async fn reject_request(&self, id: i64) -> Result<String, ApiError> {
        let response = self
            .http
            .patch(self.url(&format!("/requests/{}/reject", id)))
            .send()
            .await?;
        Self::read_ack(response).await
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        Self::read_data(response).await
    }

    /// Unwrap an envelope that must carry data.
    async fn read_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let envelope: ApiResponse<T> = Self::read_envelope(response).await?;
        if !envelope.success {
            return Err(ApiError::Server {
                message: envelope.message,
            });
        }
        envelope.data.ok_or(ApiError::MissingData)
    }

    /// Unwrap a mutation acknowledgment; data is optional, the message is
    /// the result.
    async fn read_ack(response: reqwest::Response) -> Result<String, ApiError> {
        let envelope: ApiResponse<serde_json::Value> = Self::read_envelope(response).await?;
        if !envelope.success {
            return Err(ApiError::Server {
                message: envelope.message,
            });
        }
        Ok(envelope.message)
    }

    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>, ApiError> {
        let status = response.status();
        let text = response.text().await?;
        match serde_json::from_str::<ApiResponse<T>>(&text) {
            Ok(envelope) => Ok(envelope),
            // A 4xx/5xx body that is not even an envelope: surface the code.
            Err(_) if !status.is_success() => Err(ApiError::Status {
                code: status.as_u16(),
            }),
            Err(e) => Err(ApiError::Decode(e)),
        }
    }
}
