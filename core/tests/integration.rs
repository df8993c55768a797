//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every `ApiClient`
//! operation over real HTTP with `UreqTransport`. Validates that request
//! building and response parsing agree with the server's schema.

use std::net::SocketAddr;
use std::time::Duration;

use medbook_core::{
    ApiClient, ApiError, BookingError, BookingForm, BookingSession, ClientConfig, Credentials,
    DoctorFilters, RegistrationRequest, Role, FALLBACK_ERROR_MESSAGE,
};

fn spawn_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn api(addr: SocketAddr) -> ApiClient {
    ApiClient::new(&ClientConfig::new(format!("http://{addr}/api")).with_timeout(Duration::from_secs(5)))
}

fn registration(email: &str) -> RegistrationRequest {
    RegistrationRequest {
        name: "Omar".to_string(),
        email: email.to_string(),
        password: "s3cret".to_string(),
        role: Role::Patient,
    }
}

#[test]
fn list_doctors_filters_on_the_server() {
    let api = api(spawn_server());

    let all = api.list_doctors(&DoctorFilters::default()).unwrap();
    assert_eq!(all.len(), mock_server::seed_doctors().len());
    let ids: Vec<_> = all.iter().map(|d| d.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);

    let cardiology = api
        .list_doctors(&DoctorFilters::default().specialty("cardiology"))
        .unwrap();
    assert_eq!(cardiology.len(), 2);

    let blank = api
        .list_doctors(&DoctorFilters::default().search("").city("  "))
        .unwrap();
    assert_eq!(blank.len(), all.len());

    let none = api
        .list_doctors(&DoctorFilters::default().city("Tangier"))
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn unrated_doctors_use_display_defaults() {
    let api = api(spawn_server());
    let doctors = api
        .list_doctors(&DoctorFilters::default().search("idrissi"))
        .unwrap();
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].rating, None);
    assert_eq!(doctors[0].display_rating(), 4.5);
    assert_eq!(doctors[0].display_reviews_count(), 0);
}

#[test]
fn booking_round_trip_preserves_fields() {
    let api = api(spawn_server());
    let doctor = api
        .list_doctors(&DoctorFilters::default().search("Tazi"))
        .unwrap()
        .remove(0);

    let session = BookingSession::open(doctor);
    let form = BookingForm {
        patient_name: "Nadia El Amrani".to_string(),
        patient_phone: "+212 600 000 000".to_string(),
        appointment_date: "2099-03-01".to_string(),
        appointment_time: "09:15".to_string(),
    };
    let today = medbook_core::booking::today();
    let expected = form.validate(session.doctor().id, today).unwrap();

    let confirmation = session.submit(&api, &form, today).unwrap();
    assert_eq!(confirmation.message, "appointment confirmed");
    let appointment = confirmation.appointment.expect("server echoes the appointment");
    assert_eq!(appointment.request, expected);
    assert_eq!(session.close().id, 4);
}

#[test]
fn booking_unknown_doctor_reports_server_message() {
    let api = api(spawn_server());
    let form = BookingForm {
        patient_name: "Nadia".to_string(),
        patient_phone: "0600000000".to_string(),
        appointment_date: "2099-03-01".to_string(),
        appointment_time: "09:15".to_string(),
    };
    let request = form.validate(404, medbook_core::booking::today()).unwrap();

    let err = api.create_appointment(&request).unwrap_err();
    assert_eq!(
        err,
        ApiError::RequestFailed {
            status: 404,
            message: "doctor not found".to_string()
        }
    );
}

#[test]
fn invalid_booking_form_is_rejected_locally() {
    let api = api(spawn_server());
    let doctor = api.list_doctors(&DoctorFilters::default()).unwrap().remove(0);
    let session = BookingSession::open(doctor);

    let err = session
        .submit(&api, &BookingForm::default(), medbook_core::booking::today())
        .unwrap_err();
    assert!(matches!(err, BookingError::Invalid(_)));
}

#[test]
fn register_then_authenticate() {
    let api = api(spawn_server());

    let registered = api.register_user(&registration("omar@example.com")).unwrap();
    assert_eq!(registered.message, "registration successful");
    let user = registered.user.unwrap();
    assert_eq!(user.role, Role::Patient);

    let err = api.register_user(&registration("omar@example.com")).unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.message(), "email already registered");

    let login = api
        .authenticate(&Credentials {
            email: "omar@example.com".to_string(),
            password: "s3cret".to_string(),
        })
        .unwrap();
    assert_eq!(login.message, "login successful");
    assert_eq!(login.user, user);

    let err = api
        .authenticate(&Credentials {
            email: "omar@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::RequestFailed {
            status: 401,
            message: "invalid email or password".to_string()
        }
    );
}

#[test]
fn rejection_without_error_field_uses_fallback() {
    // Posting an unknown role is rejected by the server's JSON extractor with
    // a plain-text body, so the client has no `error` field to show.
    let addr = spawn_server();
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();
    let mut response = agent
        .post(&format!("http://{addr}/api/register"))
        .content_type("application/json")
        .send(r#"{"name":"x","email":"x@example.com","password":"x","role":"admin"}"#.as_bytes())
        .unwrap();
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap();

    let client = medbook_core::DirectoryClient::new(&format!("http://{addr}/api"));
    let err = client
        .parse_register_user(medbook_core::HttpResponse::new(status, body))
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.message(), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let api = api(addr);

    let results = [
        api.list_doctors(&DoctorFilters::default()).err(),
        api.register_user(&registration("a@example.com")).err(),
        api.authenticate(&Credentials {
            email: "a@example.com".to_string(),
            password: "pw".to_string(),
        })
        .err(),
    ];
    for err in results {
        assert!(matches!(err, Some(ApiError::Transport(_))), "{err:?}");
    }
}
