//! Façade running one build → execute → parse cycle per operation.
//!
//! # Design
//! `ApiClient` pairs a `DirectoryClient` with a `Transport`. Nothing is
//! recovered here: every failure is logged and handed back to the caller as
//! an `ApiError`, so the same two error kinds come out of all four
//! operations.

use tracing::{debug, warn};

use crate::client::DirectoryClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    AppointmentConfirmation, AppointmentRequest, Credentials, Doctor, DoctorFilters, LoginResponse,
    RegistrationRequest, RegistrationResponse,
};

#[derive(Clone)]
pub struct ApiClient<T = UreqTransport> {
    client: DirectoryClient,
    transport: T,
}

impl ApiClient<UreqTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(&config.base_url, UreqTransport::new(config.timeout))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: DirectoryClient::new(base_url),
            transport,
        }
    }

    pub fn directory(&self) -> &DirectoryClient {
        &self.client
    }

    pub fn list_doctors(&self, filters: &DoctorFilters) -> Result<Vec<Doctor>, ApiError> {
        let request = self.client.build_list_doctors(filters);
        self.round_trip("list_doctors", Ok(request), |c, r| c.parse_list_doctors(r))
    }

    pub fn create_appointment(&self, input: &AppointmentRequest) -> Result<AppointmentConfirmation, ApiError> {
        let request = self.client.build_create_appointment(input);
        self.round_trip("create_appointment", request, |c, r| c.parse_create_appointment(r))
    }

    pub fn register_user(&self, input: &RegistrationRequest) -> Result<RegistrationResponse, ApiError> {
        let request = self.client.build_register_user(input);
        self.round_trip("register_user", request, |c, r| c.parse_register_user(r))
    }

    pub fn authenticate(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let request = self.client.build_authenticate(credentials);
        self.round_trip("authenticate", request, |c, r| c.parse_authenticate(r))
    }

    fn round_trip<R>(
        &self,
        operation: &'static str,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&DirectoryClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let result = request.and_then(|request| {
            debug!(operation, method = request.method.as_str(), url = %request.url, "sending request");
            let response = self.transport.execute(&request)?;
            debug!(operation, status = response.status, "received response");
            parse(&self.client, response)
        });
        if let Err(e) = &result {
            warn!(operation, error = %e, "api request failed");
        }
        result
    }
}
