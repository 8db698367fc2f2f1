use clap::{Parser, Subcommand};

use crate::services::TargetKey;

pub const DEFAULT_SALARY_THRESHOLD: f64 = 50_000.0;
pub const DEFAULT_DEPARTMENT: &str = "Research and Development";
pub const DEFAULT_ROW_LIMIT: u64 = 10;
pub const DEFAULT_EMPLOYEE_ID: i32 = 147;
pub const DEFAULT_SALARY_FACTOR: f64 = 1.12;

/// Queries and referential-integrity-safe mutations over the SoftUni HR
/// database. Report text goes to stdout, logs to stderr.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Database URL (overrides SOFTUNI_DATABASE__URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create any missing tables and foreign keys, then exit
    Schema,
    /// Load the demo dataset into an empty database
    Seed,
    /// Every employee with middle name, job title and salary
    EmployeesFull,
    /// First names and salaries above a threshold
    SalaryOver {
        #[arg(long, default_value_t = DEFAULT_SALARY_THRESHOLD)]
        threshold: f64,
    },
    /// Employees of one department, cheapest first
    DepartmentEmployees {
        #[arg(long, default_value = DEFAULT_DEPARTMENT)]
        department: String,
    },
    /// Move an employee to a freshly created address, then list addresses
    NewAddress {
        #[arg(long, default_value = "Nakov")]
        last_name: String,
        #[arg(long, default_value = "Vitoshka 15")]
        text: String,
        #[arg(long, default_value_t = 4)]
        town_id: i32,
        #[arg(long, default_value_t = DEFAULT_ROW_LIMIT)]
        limit: u64,
    },
    /// Employees on projects started within a range of years
    EmployeesInPeriod {
        #[arg(long, default_value_t = 2001)]
        from: i32,
        #[arg(long, default_value_t = 2003)]
        to: i32,
        #[arg(long, default_value_t = DEFAULT_ROW_LIMIT)]
        limit: u64,
    },
    /// Addresses ranked by number of residents
    AddressesByTown {
        #[arg(long, default_value_t = DEFAULT_ROW_LIMIT as usize)]
        limit: usize,
    },
    /// One employee and the projects they work on
    Employee {
        #[arg(long, default_value_t = DEFAULT_EMPLOYEE_ID)]
        id: i32,
    },
    /// Departments with more than N employees
    DepartmentsOver {
        #[arg(long, default_value_t = 5)]
        min_employees: usize,
    },
    /// Most recently started projects
    LatestProjects {
        #[arg(long, default_value_t = DEFAULT_ROW_LIMIT)]
        limit: u64,
    },
    /// Multiply the salaries of whole departments
    IncreaseSalaries {
        #[arg(
            long = "department",
            default_values = ["Engineering", "Tool Design", "Marketing", "Information Services"]
        )]
        departments: Vec<String>,
        #[arg(long, default_value_t = DEFAULT_SALARY_FACTOR)]
        factor: f64,
    },
    /// Employees whose first name starts with a prefix (case-insensitive)
    NamePrefix {
        #[arg(long, default_value = "Sa")]
        prefix: String,
    },
    /// Delete a project with its employee assignments, then list projects
    DeleteProject {
        /// Project id or name
        #[arg(long, default_value = "2")]
        target: TargetKey,
        #[arg(long, default_value_t = DEFAULT_ROW_LIMIT)]
        limit: u64,
    },
    /// Delete a town with its addresses, detaching residents
    RemoveTown {
        /// Town id or name
        #[arg(long, default_value = "Seattle")]
        target: TargetKey,
    },
}
