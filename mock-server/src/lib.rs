use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub city: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_count: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DoctorQuery {
    pub search: Option<String>,
    pub specialty: Option<String>,
    pub city: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub doctor_id: i64,
    pub patient_name: String,
    pub patient_phone: String,
    pub appointment_date: String,
    pub appointment_time: String,
}

#[derive(Deserialize)]
pub struct CreateAppointment {
    pub doctor_id: i64,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub patient_phone: String,
    #[serde(default)]
    pub appointment_date: String,
    #[serde(default)]
    pub appointment_time: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Deserialize)]
pub struct RegisterUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub role: Role,
}

#[derive(Deserialize)]
pub struct Login {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

struct Account {
    user: User,
    password: String,
}

#[derive(Default)]
pub struct Store {
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    accounts: Vec<Account>,
}

impl Store {
    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        Self {
            doctors,
            ..Self::default()
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

type Rejection = (StatusCode, Json<ErrorBody>);

fn reject(status: StatusCode, message: &str) -> Rejection {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

/// The directory the stub starts with. Two entries carry no rating so clients
/// exercise their display defaults.
pub fn seed_doctors() -> Vec<Doctor> {
    let doctor = |id, name: &str, specialty: &str, city: &str, address: &str, rating, reviews| Doctor {
        id,
        name: name.to_string(),
        specialty: specialty.to_string(),
        city: city.to_string(),
        address: address.to_string(),
        rating,
        reviews_count: reviews,
    };
    vec![
        doctor(1, "Dr. Amina Benali", "cardiology", "Casablanca", "12 Rue Mohammed V", Some(4.8), Some(124)),
        doctor(2, "Dr. Youssef Alaoui", "dermatology", "Rabat", "5 Avenue Hassan II", Some(4.6), Some(87)),
        doctor(3, "Dr. Sara Idrissi", "pediatrics", "Casablanca", "33 Boulevard Anfa", None, None),
        doctor(4, "Dr. Karim Tazi", "cardiology", "Marrakech", "8 Rue de la Koutoubia", Some(4.2), Some(41)),
        doctor(5, "Dr. Leila Fassi", "general practice", "Fes", "2 Place Batha", None, Some(3)),
    ]
}

pub fn app() -> Router {
    app_with_store(Store::with_doctors(seed_doctors()))
}

pub fn app_with_store(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    let api = Router::new()
        .route("/doctors", get(list_doctors))
        .route("/appointments", post(create_appointment))
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn present(param: &Option<String>) -> Option<&str> {
    param.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

async fn list_doctors(State(db): State<Db>, Query(query): Query<DoctorQuery>) -> Json<Vec<Doctor>> {
    let store = db.read().await;
    let search = present(&query.search).map(str::to_lowercase);
    let specialty = present(&query.specialty);
    let city = present(&query.city);

    let doctors = store
        .doctors
        .iter()
        .filter(|d| {
            search.as_ref().is_none_or(|s| {
                d.name.to_lowercase().contains(s) || d.specialty.to_lowercase().contains(s)
            })
        })
        .filter(|d| specialty.is_none_or(|s| d.specialty.eq_ignore_ascii_case(s)))
        .filter(|d| city.is_none_or(|c| d.city.eq_ignore_ascii_case(c)))
        .cloned()
        .collect();
    Json(doctors)
}

async fn create_appointment(
    State(db): State<Db>,
    Json(input): Json<CreateAppointment>,
) -> Result<(StatusCode, Json<serde_json::Value>), Rejection> {
    if blank(&input.patient_name)
        || blank(&input.patient_phone)
        || blank(&input.appointment_date)
        || blank(&input.appointment_time)
    {
        return Err(reject(StatusCode::BAD_REQUEST, "all fields are required"));
    }

    let mut store = db.write().await;
    if !store.doctors.iter().any(|d| d.id == input.doctor_id) {
        return Err(reject(StatusCode::NOT_FOUND, "doctor not found"));
    }

    let appointment = Appointment {
        id: store.appointments.len() as i64 + 1,
        doctor_id: input.doctor_id,
        patient_name: input.patient_name,
        patient_phone: input.patient_phone,
        appointment_date: input.appointment_date,
        appointment_time: input.appointment_time,
    };
    store.appointments.push(appointment.clone());
    tracing::info!(id = appointment.id, doctor_id = appointment.doctor_id, "appointment booked");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "appointment confirmed",
            "appointment": appointment,
        })),
    ))
}

async fn register(
    State(db): State<Db>,
    Json(input): Json<RegisterUser>,
) -> Result<(StatusCode, Json<serde_json::Value>), Rejection> {
    if blank(&input.name) || blank(&input.email) || blank(&input.password) {
        return Err(reject(StatusCode::BAD_REQUEST, "all fields are required"));
    }

    let mut store = db.write().await;
    if store
        .accounts
        .iter()
        .any(|a| a.user.email.eq_ignore_ascii_case(&input.email))
    {
        return Err(reject(StatusCode::CONFLICT, "email already registered"));
    }

    let user = User {
        id: store.accounts.len() as i64 + 1,
        name: input.name,
        email: input.email,
        role: input.role,
    };
    store.accounts.push(Account {
        user: user.clone(),
        password: input.password,
    });
    tracing::info!(id = user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "registration successful",
            "user": user,
        })),
    ))
}

async fn login(
    State(db): State<Db>,
    Json(input): Json<Login>,
) -> Result<Json<serde_json::Value>, Rejection> {
    let store = db.read().await;
    let account = store
        .accounts
        .iter()
        .find(|a| a.user.email.eq_ignore_ascii_case(&input.email) && a.password == input.password)
        .ok_or_else(|| reject(StatusCode::UNAUTHORIZED, "invalid email or password"))?;

    Ok(Json(serde_json::json!({
        "message": "login successful",
        "user": account.user,
    })))
}
