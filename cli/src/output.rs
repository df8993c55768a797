use colored::Colorize;
use medbook_core::{AppointmentConfirmation, Doctor, User};
use tabled::builder::Builder;
use tabled::settings::Style;

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

pub fn results_summary(count: usize) -> String {
    match count {
        0 => "No doctor found".to_string(),
        1 => "1 doctor found".to_string(),
        n => format!("{n} doctors found"),
    }
}

fn doctor_row(doctor: &Doctor) -> [String; 6] {
    [
        doctor.id.to_string(),
        doctor.name.clone(),
        doctor.specialty.clone(),
        format!("{}, {}", doctor.address, doctor.city),
        format!("★ {:.1}", doctor.display_rating()),
        format!("{} reviews", doctor.display_reviews_count()),
    ]
}

pub fn print_doctors(doctors: &[Doctor]) {
    if doctors.is_empty() {
        println!("{}", results_summary(0).yellow());
        println!("Try changing your search criteria.");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Specialty", "Address", "Rating", "Reviews"]);
    for doctor in doctors {
        builder.push_record(doctor_row(doctor));
    }
    let table = builder.build().with(Style::rounded()).to_string();
    println!("{table}");
    println!("{}", results_summary(doctors.len()).cyan());
}

pub fn print_confirmation(doctor: &Doctor, confirmation: &AppointmentConfirmation) {
    print_success(&confirmation.message);
    println!("{}: {}", "Doctor".cyan(), doctor.name);
    if let Some(appointment) = &confirmation.appointment {
        println!("{}: {}", "Reference".cyan(), appointment.id);
        println!(
            "{}: {} at {}",
            "When".cyan(),
            appointment.request.appointment_date,
            appointment.request.appointment_time
        );
    }
}

pub fn print_user(user: &User) {
    println!("{}: {} <{}>", "User".cyan(), user.name, user.email);
    println!("{}: {}", "Role".cyan(), user.role);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_pluralizes() {
        assert_eq!(results_summary(0), "No doctor found");
        assert_eq!(results_summary(1), "1 doctor found");
        assert_eq!(results_summary(7), "7 doctors found");
    }

    #[test]
    fn row_applies_rating_defaults() {
        let doctor = Doctor {
            id: 3,
            name: "Dr. Sara Idrissi".to_string(),
            specialty: "pediatrics".to_string(),
            city: "Casablanca".to_string(),
            address: "33 Boulevard Anfa".to_string(),
            rating: None,
            reviews_count: None,
        };
        let row = doctor_row(&doctor);
        assert_eq!(row[3], "33 Boulevard Anfa, Casablanca");
        assert_eq!(row[4], "★ 4.5");
        assert_eq!(row[5], "0 reviews");
    }
}
