//! Domain DTOs for the doctor directory API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any schema drift between the two crates. Decoding
//! into explicit records means a malformed server payload fails at the client
//! boundary instead of surfacing later as a missing field.

use serde::{Deserialize, Serialize};

/// Rating shown for a doctor the service has no rating for.
pub const DEFAULT_RATING: f64 = 4.5;

/// Review count shown for a doctor the service has no count for.
pub const DEFAULT_REVIEWS_COUNT: u32 = 0;

/// A directory entry describing one practitioner available for booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub city: String,
    pub address: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews_count: Option<u32>,
}

impl Doctor {
    /// The rating to display: the server's value, or [`DEFAULT_RATING`] when
    /// the field was absent or null.
    pub fn display_rating(&self) -> f64 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    pub fn display_reviews_count(&self) -> u32 {
        self.reviews_count.unwrap_or(DEFAULT_REVIEWS_COUNT)
    }
}

/// Optional narrowing parameters for the doctor listing.
///
/// Blank fields are treated the same as absent ones when the query string is
/// built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorFilters {
    pub search: Option<String>,
    pub specialty: Option<String>,
    pub city: Option<String>,
}

impl DoctorFilters {
    pub fn search(mut self, value: impl Into<String>) -> Self {
        self.search = Some(value.into());
        self
    }

    pub fn specialty(mut self, value: impl Into<String>) -> Self {
        self.specialty = Some(value.into());
        self
    }

    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    /// Present, non-blank filters as `(name, trimmed value)` pairs in query
    /// order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("search", &self.search),
            ("specialty", &self.specialty),
            ("city", &self.city),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (name, v))
        })
        .collect()
    }
}

/// Payload reserving a time slot with a doctor.
///
/// Built through [`crate::booking::BookingForm::validate`], which guarantees
/// every field is filled in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub doctor_id: i64,
    pub patient_name: String,
    pub patient_phone: String,
    pub appointment_date: String,
    pub appointment_time: String,
}

/// A booked appointment as echoed back by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    pub id: i64,
    #[serde(flatten)]
    pub request: AppointmentRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentConfirmation {
    pub message: String,
    #[serde(default)]
    pub appointment: Option<Appointment>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Doctor => write!(f, "doctor"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationResponse {
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
}

/// Failure payload; `error` is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
}
