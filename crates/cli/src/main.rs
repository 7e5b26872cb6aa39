use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use patient_core::{
    open_repository, CoreConfig, PatientRequestDto, PatientService, StoreKind,
    DEFAULT_PATIENT_DATA_DIR,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "patient")]
#[command(about = "Patient service CLI")]
struct Cli {
    /// Directory holding patient records
    #[arg(long, global = true, env = "PATIENT_DATA_DIR", default_value = DEFAULT_PATIENT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    List,
    /// Create a patient
    Create {
        /// Full name
        name: String,
        /// Email address (must be unique)
        email: String,
        /// Postal address
        address: String,
        /// Date of birth (YYYY-MM-DD)
        date_of_birth: NaiveDate,
        /// Registration date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        registered_date: Option<NaiveDate>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'patient --help' for commands");
        return Ok(());
    };

    let cfg = Arc::new(CoreConfig::new(cli.data_dir, StoreKind::File)?);
    let service = PatientService::new(open_repository(cfg));

    match command {
        Commands::List => {
            let patients = service.list_patients()?;
            if patients.is_empty() {
                println!("No patients found.");
            } else {
                for patient in patients {
                    println!(
                        "ID: {}, Name: {}, Email: {}, Address: {}, Born: {}",
                        patient.id,
                        patient.name,
                        patient.email,
                        patient.address,
                        patient.date_of_birth
                    );
                }
            }
        }
        Commands::Create {
            name,
            email,
            address,
            date_of_birth,
            registered_date,
        } => {
            let request = PatientRequestDto {
                name,
                email,
                address,
                date_of_birth,
                registered_date: registered_date.unwrap_or_else(|| Local::now().date_naive()),
            };
            let created = service.create_patient(request)?;
            println!("Created patient with ID: {}", created.id);
        }
    }

    Ok(())
}
