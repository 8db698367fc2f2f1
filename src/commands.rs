use tracing::debug;

use crate::{
    cli::Command,
    error::AppError,
    report::{AdjustedSalary, render_lines},
    services::{EntityKind, ServiceContext},
};

/// Runs one command and returns the text to print.
pub async fn execute(services: &ServiceContext, command: &Command) -> Result<String, AppError> {
    debug!(?command, "executing");
    let reports = services.reports();
    let mutations = services.mutations();

    let output = match command {
        Command::Schema => "schema is up to date\n".to_string(),
        Command::Seed => {
            let summary = services.seed_demo().await?;
            format!(
                "seeded {} towns, {} addresses, {} departments, {} employees, {} projects, {} assignments\n",
                summary.towns,
                summary.addresses,
                summary.departments,
                summary.employees,
                summary.projects,
                summary.assignments
            )
        }
        Command::EmployeesFull => render_lines(&reports.employees_full().await?),
        Command::SalaryOver { threshold } => {
            render_lines(&reports.salaries_over(*threshold).await?)
        }
        Command::DepartmentEmployees { department } => {
            render_lines(&reports.department_employees(department).await?)
        }
        Command::NewAddress {
            last_name,
            text,
            town_id,
            limit,
        } => {
            mutations.assign_new_address(last_name, text, *town_id).await?;
            render_lines(&reports.addresses_by_employee_desc(*limit).await?)
        }
        Command::EmployeesInPeriod { from, to, limit } => {
            render_lines(&reports.employees_in_period(*from, *to, *limit).await?)
        }
        Command::AddressesByTown { limit } => {
            render_lines(&reports.addresses_by_town(*limit).await?)
        }
        Command::Employee { id } => render_lines(&[reports.employee_with_projects(*id).await?]),
        Command::DepartmentsOver { min_employees } => {
            render_lines(&reports.departments_over(*min_employees).await?)
        }
        Command::LatestProjects { limit } => render_lines(&reports.latest_projects(*limit).await?),
        Command::IncreaseSalaries {
            departments,
            factor,
        } => {
            let adjusted: Vec<AdjustedSalary> = mutations
                .bulk_adjust_salary(departments, *factor)
                .await?
                .into_iter()
                .map(|employee| AdjustedSalary {
                    first_name: employee.first_name,
                    last_name: employee.last_name,
                    salary: employee.salary,
                })
                .collect();
            render_lines(&adjusted)
        }
        Command::NamePrefix { prefix } => {
            render_lines(&reports.employees_by_name_prefix(prefix).await?)
        }
        Command::DeleteProject { target, limit } => {
            mutations
                .delete_entity_cascading(target.clone(), EntityKind::Project)
                .await?;
            render_lines(&reports.project_names(*limit).await?)
        }
        Command::RemoveTown { target } => {
            let report = mutations
                .delete_entity_cascading(target.clone(), EntityKind::Town)
                .await?;
            render_lines(&[report])
        }
    };
    Ok(output)
}
