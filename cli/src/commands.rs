use anyhow::{Context, Result};
use medbook_core::{
    booking, ApiClient, BookingForm, BookingSession, Credentials, DoctorFilters,
    RegistrationRequest,
};

use crate::cli::{BookArgs, DoctorsArgs, LoginArgs, RegisterArgs};
use crate::output;

pub fn doctors(api: &ApiClient, args: &DoctorsArgs) -> Result<()> {
    let filters = DoctorFilters {
        search: args.search.clone(),
        specialty: args.specialty.clone(),
        city: args.city.clone(),
    };
    let doctors = api
        .list_doctors(&filters)
        .context("Unable to load doctors. Check that the server is running")?;
    output::print_doctors(&doctors);
    Ok(())
}

pub fn book(api: &ApiClient, args: &BookArgs) -> Result<()> {
    let doctor = api
        .list_doctors(&DoctorFilters::default())
        .context("Unable to load doctors. Check that the server is running")?
        .into_iter()
        .find(|d| d.id == args.doctor_id)
        .with_context(|| format!("No doctor with id {}", args.doctor_id))?;

    let session = BookingSession::open(doctor);
    let form = BookingForm {
        patient_name: args.name.clone(),
        patient_phone: args.phone.clone(),
        appointment_date: args.date.clone(),
        appointment_time: args.time.clone(),
    };
    let confirmation = session
        .submit(api, &form, booking::today())
        .context("Booking failed")?;
    output::print_confirmation(&session.close(), &confirmation);
    Ok(())
}

pub fn register(api: &ApiClient, args: &RegisterArgs) -> Result<()> {
    let request = RegistrationRequest {
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        role: args.role.into(),
    };
    let response = api.register_user(&request).context("Registration failed")?;
    output::print_success(&response.message);
    if let Some(user) = &response.user {
        output::print_user(user);
    }
    Ok(())
}

pub fn login(api: &ApiClient, args: &LoginArgs) -> Result<()> {
    let credentials = Credentials {
        email: args.email.clone(),
        password: args.password.clone(),
    };
    let response = api.authenticate(&credentials).context("Login failed")?;
    output::print_success(&response.message);
    output::print_user(&response.user);
    Ok(())
}
