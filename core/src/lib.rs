//! Synchronous API client core for the doctor directory service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A `Transport` executes the
//! round trip; `ApiClient` ties the two together behind four operations:
//! list doctors, create an appointment, register, and log in.
//!
//! # Design
//! - `DirectoryClient` is stateless; it holds only `base_url`, which always
//!   comes from a `ClientConfig` or the caller, never from a constant.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and the parsers are testable with canned responses.
//! - Every failure comes out as one of two `ApiError` kinds.
//! - The doctor being booked is carried by a `BookingSession` value rather
//!   than shared state.

pub mod api;
pub mod booking;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::ApiClient;
pub use booking::{BookingError, BookingForm, BookingSession, ValidationError};
pub use client::DirectoryClient;
pub use config::ClientConfig;
pub use error::{ApiError, FALLBACK_ERROR_MESSAGE};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{
    Appointment, AppointmentConfirmation, AppointmentRequest, Credentials, Doctor, DoctorFilters,
    LoginResponse, RegistrationRequest, RegistrationResponse, Role, User,
};
