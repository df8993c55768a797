//! Booking flow: raw form input, validation, and the doctor being booked.
//!
//! A `BookingSession` is opened with the doctor the visitor picked and lives
//! until it is closed. Submitting validates the form locally first, so an
//! incomplete or malformed form never reaches the network.

use thiserror::Error;
use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{AppointmentConfirmation, AppointmentRequest, Doctor};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid appointment date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("appointment date {0} is in the past")]
    DateInPast(String),

    #[error("invalid appointment time {0:?}, expected HH:MM")]
    InvalidTime(String),
}

#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Patient-entered fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub patient_name: String,
    pub patient_phone: String,
    pub appointment_date: String,
    pub appointment_time: String,
}

impl BookingForm {
    /// Check the form and turn it into a request for `doctor_id`.
    ///
    /// Fields are trimmed. The date must be `YYYY-MM-DD` and not before
    /// `today`; the time must be `HH:MM` on a 24-hour clock.
    pub fn validate(&self, doctor_id: i64, today: Date) -> Result<AppointmentRequest, ValidationError> {
        let patient_name = required("patient name", &self.patient_name)?;
        let patient_phone = required("patient phone", &self.patient_phone)?;
        let appointment_date = required("appointment date", &self.appointment_date)?;
        let appointment_time = required("appointment time", &self.appointment_time)?;

        let date = Date::parse(appointment_date, format_description!("[year]-[month]-[day]"))
            .map_err(|_| ValidationError::InvalidDate(appointment_date.to_string()))?;
        if date < today {
            return Err(ValidationError::DateInPast(appointment_date.to_string()));
        }
        Time::parse(appointment_time, format_description!("[hour]:[minute]"))
            .map_err(|_| ValidationError::InvalidTime(appointment_time.to_string()))?;

        Ok(AppointmentRequest {
            doctor_id,
            patient_name: patient_name.to_string(),
            patient_phone: patient_phone.to_string(),
            appointment_date: appointment_date.to_string(),
            appointment_time: appointment_time.to_string(),
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value)
}

/// Today's date in UTC, the earliest day a booking may target.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

#[derive(Debug, Clone)]
pub struct BookingSession {
    doctor: Doctor,
}

impl BookingSession {
    pub fn open(doctor: Doctor) -> Self {
        Self { doctor }
    }

    pub fn doctor(&self) -> &Doctor {
        &self.doctor
    }

    /// Validate `form` for this session's doctor and book it.
    ///
    /// The session stays open on failure so the form can be corrected and
    /// resubmitted.
    pub fn submit<T: Transport>(
        &self,
        api: &ApiClient<T>,
        form: &BookingForm,
        today: Date,
    ) -> Result<AppointmentConfirmation, BookingError> {
        let request = form.validate(self.doctor.id, today)?;
        Ok(api.create_appointment(&request)?)
    }

    /// End the interaction, handing back the doctor that was selected.
    pub fn close(self) -> Doctor {
        self.doctor
    }
}
