use clap::{Args, Parser, Subcommand, ValueEnum};
use medbook_core::{ClientConfig, Role};

#[derive(Parser)]
#[command(name = "medbook")]
#[command(about = "Find a doctor and book an appointment")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the directory API
    #[arg(long, global = true, env = "MEDBOOK_API_URL", default_value = ClientConfig::DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds (waits indefinitely when omitted)
    #[arg(long, global = true, env = "MEDBOOK_TIMEOUT")]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List doctors, optionally filtered
    Doctors(DoctorsArgs),
    /// Book an appointment with a doctor
    Book(BookArgs),
    /// Create an account
    Register(RegisterArgs),
    /// Log in with an existing account
    Login(LoginArgs),
}

#[derive(Args)]
pub struct DoctorsArgs {
    /// Free-text search on name or specialty
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long)]
    pub specialty: Option<String>,

    #[arg(long)]
    pub city: Option<String>,
}

#[derive(Args)]
pub struct BookArgs {
    /// Identifier of the doctor, as shown by `medbook doctors`
    #[arg(long)]
    pub doctor_id: i64,

    /// Patient full name
    #[arg(long)]
    pub name: String,

    /// Patient phone number
    #[arg(long)]
    pub phone: String,

    /// Appointment date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Appointment time (HH:MM)
    #[arg(long)]
    pub time: String,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    #[arg(long, value_enum, default_value_t = RoleArg::Patient)]
    pub role: RoleArg,
}

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Patient,
    Doctor,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Patient => Role::Patient,
            RoleArg::Doctor => Role::Doctor,
        }
    }
}
