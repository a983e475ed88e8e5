mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use jornada_register::config::{ConfigLoader, RegisterConfig};
use jornada_register::holidays::BuiltinHolidays;
use jornada_register::register::{
    RegisterRequest, RegisterSummary, generate_register, plan_register,
};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let request = RegisterRequest::from_parts(
        &cli.periodo,
        cli.inicio,
        &cli.incidencias,
        &cli.dias_incidencia,
        &cli.horario_incidencia,
        cli.horas_trabajador,
        &cli.horario,
    )?;

    if cli.dry_run {
        let plan = plan_register(&request, &config, &BuiltinHolidays)?;
        let summary = RegisterSummary::from_plan(&plan);
        let json = serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
        println!("{json}");
        return Ok(());
    }

    let outcome = generate_register(&request, &config, &BuiltinHolidays)?;
    println!("{}", outcome.output_path.display());
    Ok(())
}

/// Loads the configuration file (if any) and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<RegisterConfig> {
    let mut config = ConfigLoader::load_or_default(cli.config.as_ref())
        .context("failed to load configuration")?
        .into_config();

    if let Some(template) = &cli.plantilla {
        config.template_path = template.clone();
    }
    if let Some(output_dir) = &cli.salida {
        config.output_dir = output_dir.clone();
    }

    Ok(config)
}
