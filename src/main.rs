use anyhow::Context;
use clap::Parser;

use softuni_hr::{
    cli::{Cli, Command},
    commands,
    config::{AppConfig, defaults::DEFAULT_RUST_LOG},
    db::connection,
    logging::init_tracing,
    services::ServiceContext,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // No-op when the subscriber is already installed.
        init_tracing(DEFAULT_RUST_LOG);
        tracing::error!("softuni failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = AppConfig::from_env().context("failed to load config")?;
    init_tracing(&cfg.logging.rust_log);

    if let Some(url) = cli.database_url {
        cfg.database.url = url;
    }

    let db = connection::connect(&cfg.database).await?;
    let services = ServiceContext::new(&db);

    let output = commands::execute(&services, &cli.command)
        .await
        .with_context(|| format!("{} failed", command_name(&cli.command)))?;
    print!("{output}");

    db.close().await?;
    Ok(())
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Schema => "schema",
        Command::Seed => "seed",
        Command::EmployeesFull => "employees-full",
        Command::SalaryOver { .. } => "salary-over",
        Command::DepartmentEmployees { .. } => "department-employees",
        Command::NewAddress { .. } => "new-address",
        Command::EmployeesInPeriod { .. } => "employees-in-period",
        Command::AddressesByTown { .. } => "addresses-by-town",
        Command::Employee { .. } => "employee",
        Command::DepartmentsOver { .. } => "departments-over",
        Command::LatestProjects { .. } => "latest-projects",
        Command::IncreaseSalaries { .. } => "increase-salaries",
        Command::NamePrefix { .. } => "name-prefix",
        Command::DeleteProject { .. } => "delete-project",
        Command::RemoveTown { .. } => "remove-town",
    }
}
