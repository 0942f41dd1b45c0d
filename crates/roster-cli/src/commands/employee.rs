//! Employee management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use roster_core::error::AppError;
use roster_database::EmployeeStore;
use roster_entity::employee::{Employee, EmployeeDraft};
use roster_service::employee::EmployeeService;

/// Arguments for employee commands
#[derive(Debug, Args)]
pub struct EmployeeArgs {
    /// Employee subcommand
    #[command(subcommand)]
    pub command: EmployeeCommand,
}

/// Employee subcommands
#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// List all employees
    List,
    /// Show a single employee
    Get {
        /// Employee id
        id: i64,
    },
    /// Add a new employee
    Add {
        /// Given name
        #[arg(long)]
        first_name: String,
        /// Family name
        #[arg(long)]
        last_name: String,
        /// Email address (must be unused)
        #[arg(long)]
        email: String,
    },
    /// Delete an employee
    Delete {
        /// Employee id
        id: i64,
    },
}

/// Employee display row for table output
#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct EmployeeRow {
    /// Employee ID
    id: i64,
    /// First name
    first_name: String,
    /// Last name
    last_name: String,
    /// Email
    email: String,
}

impl From<Employee> for EmployeeRow {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
        }
    }
}

/// Execute employee commands
pub async fn execute(
    args: &EmployeeArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let store = EmployeeStore::connect(&config.database).await?;
    let service = EmployeeService::new(store.repository());

    let result = run(&args.command, &service, format).await;
    store.close().await;
    result
}

async fn run(
    command: &EmployeeCommand,
    service: &EmployeeService,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        EmployeeCommand::List => {
            let rows: Vec<EmployeeRow> = service
                .get_all_employees()
                .await?
                .into_iter()
                .map(EmployeeRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        EmployeeCommand::Get { id } => {
            let employee = service
                .get_employee_by_id(*id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
            output::print_list(&[EmployeeRow::from(employee)], format);
        }
        EmployeeCommand::Add {
            first_name,
            last_name,
            email,
        } => {
            let draft = EmployeeDraft::new(first_name.as_str(), last_name.as_str(), email.as_str());
            let employee = service.save_employee(draft).await?;
            match format {
                OutputFormat::Table => {
                    output::print_success(&format!("Employee {} created", employee.id))
                }
                OutputFormat::Json => output::print_item(&EmployeeRow::from(employee), format),
            }
        }
        EmployeeCommand::Delete { id } => {
            service.delete_employee(*id).await?;
            output::print_success(&format!("Employee {id} deleted"));
        }
    }

    Ok(())
}
