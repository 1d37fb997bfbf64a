use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use replicon::{RepliconClient, RepliconConfig};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Query a Replicon tenant from the command line.
///
/// Credentials come from REPLICON_COMPANY, REPLICON_USERNAME and
/// REPLICON_PASSWORD, read from the environment or a `.env` file.
#[derive(Parser)]
#[command(version, about)]
struct Options {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all users.
    Users,
    /// List all programs.
    Programs,
    /// List all projects.
    Projects,
    /// List all permission sets.
    Permissions,
    /// List enabled departments.
    Departments,
    /// List break types.
    BreakTypes,
    /// Look up a user by login name.
    User { login_name: String },
    /// Show the details of a project.
    Project { project_uri: String },
    /// Find (or open) the timesheet of a user for a date.
    Timesheet { user_uri: String, date: NaiveDate },
    /// List time off booked by a user in a date range.
    TimeOff {
        user_uri: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    /// List the projects a resource is allocated to in a date range.
    Allocations {
        resource_uri: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = Options::parse();

    let config = RepliconConfig::from_env().context("failed to load Replicon configuration")?;
    info!(company = config.company(), username = config.username(), "connecting to Replicon");
    let client = RepliconClient::new(&config)?;

    match options.command {
        Command::Users => print(&client.get_users().await?),
        Command::Programs => print(&client.get_programs().await?),
        Command::Projects => print(&client.get_projects().await?),
        Command::Permissions => print(&client.get_permissions().await?),
        Command::Departments => print(&client.get_enabled_departments().await?),
        Command::BreakTypes => print(&client.get_all_break_types().await?),
        Command::User { login_name } => print(&client.get_user_by_login_name(&login_name).await?),
        Command::Project { project_uri } => print(&client.get_project(&project_uri).await?),
        Command::Timesheet { user_uri, date } => {
            print(&client.get_timesheet_for_date(&user_uri, date).await?)
        }
        Command::TimeOff {
            user_uri,
            start_date,
            end_date,
        } => print(&client.get_time_off(&user_uri, start_date, end_date).await?),
        Command::Allocations {
            resource_uri,
            start_date,
            end_date,
        } => print(
            &client
                .get_project_allocations(start_date, end_date, &resource_uri)
                .await?,
        ),
    }
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
