//! Stateless HTTP request builder and response parser for the directory API.
//!
//! # Design
//! `DirectoryClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The round trip in between belongs to a `Transport`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::form_urlencoded;

use crate::error::{ApiError, FALLBACK_ERROR_MESSAGE};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    AppointmentConfirmation, AppointmentRequest, Credentials, Doctor, DoctorFilters, ErrorPayload,
    LoginResponse, RegistrationRequest, RegistrationResponse,
};

/// Synchronous, stateless request builder / response parser for the
/// directory API.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_doctors(&self, filters: &DoctorFilters) -> HttpRequest {
        let pairs = filters.query_pairs();
        let mut url = format!("{}/doctors", self.base_url);
        if !pairs.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_appointment(&self, input: &AppointmentRequest) -> Result<HttpRequest, ApiError> {
        self.json_post("/appointments", input)
    }

    pub fn build_register_user(&self, input: &RegistrationRequest) -> Result<HttpRequest, ApiError> {
        self.json_post("/register", input)
    }

    pub fn build_authenticate(&self, input: &Credentials) -> Result<HttpRequest, ApiError> {
        self.json_post("/login", input)
    }

    pub fn parse_list_doctors(&self, response: HttpResponse) -> Result<Vec<Doctor>, ApiError> {
        if !response.is_success() {
            return Err(ApiError::RequestFailed {
                status: response.status,
                message: format!("HTTP error, status {}", response.status),
            });
        }
        decode(&response)
    }

    pub fn parse_create_appointment(&self, response: HttpResponse) -> Result<AppointmentConfirmation, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_register_user(&self, response: HttpResponse) -> Result<RegistrationResponse, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_authenticate(&self, response: HttpResponse) -> Result<LoginResponse, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    fn json_post<T: Serialize>(&self, path: &str, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::Transport(format!("could not encode request body: {e}")))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Map a non-2xx response to `RequestFailed`, preferring the server's `error`
/// message over the fallback.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorPayload>(&response.body)
        .ok()
        .and_then(|payload| payload.error)
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
    Err(ApiError::RequestFailed {
        status: response.status,
        message,
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::RequestFailed {
        status: response.status,
        message: format!("malformed response body: {e}"),
    })
}
