use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

use jornada_register::register::{DEFAULT_SCHEDULE, DEFAULT_WORKER_HOURS};

/// Fills the monthly working-day register PDF.
#[derive(Parser, Debug)]
#[command(
    name = "jornada-register",
    version,
    about = "Fill the monthly working-day register (registro de jornada laboral)"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Month to register, as MM-YYYY.
    #[arg(long)]
    pub periodo: String,

    /// First day of the month to register.
    #[arg(long, default_value_t = 1)]
    pub inicio: u32,

    /// Incidence label; repeat once per incidence.
    #[arg(long = "incidencia")]
    pub incidencias: Vec<String>,

    /// Day range of each incidence, as DD-DD, in the same order as the labels.
    #[arg(long = "dias-incidencia")]
    pub dias_incidencia: Vec<String>,

    /// Time window of each incidence, as HH:MM-HH:MM with an optional
    /// `#comment`; a missing or comment-only value means the whole day.
    #[arg(long = "horario-incidencia")]
    pub horario_incidencia: Vec<String>,

    /// Hours drawn on days without incidences.
    #[arg(long = "horas-trabajador", default_value_t = DEFAULT_WORKER_HOURS)]
    pub horas_trabajador: Decimal,

    /// Daily schedule, as HH:MM-HH:MM.
    #[arg(long, default_value = DEFAULT_SCHEDULE)]
    pub horario: String,

    /// Path to a YAML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the template path from config.
    #[arg(long)]
    pub plantilla: Option<PathBuf>,

    /// Override the output directory from config.
    #[arg(long)]
    pub salida: Option<PathBuf>,

    /// Print the planned register as JSON instead of writing the PDF.
    #[arg(long)]
    pub dry_run: bool,
}
