use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use sea_orm::entity::prelude::DateTime;
use sea_orm::sea_query::{Expr, Func, IntoCondition, LikeExpr, NullOrdering};
use sea_orm::{ColumnTrait, Order, QueryFilter, QueryOrder, QuerySelect};
use tracing::debug;

use crate::{
    db::{
        dao::{DaoContext, DaoScope, HasId},
        entities::{department, employee, project},
    },
    error::AppError,
    report::{
        AddressOccupancy, DepartmentEmployee, DepartmentMember, DepartmentRollup,
        EmployeeAddress, EmployeeFullInfo, EmployeeInPeriod, EmployeeJobSalary, EmployeeProjects,
        EmployeeSalary, ProjectName, ProjectSpan, ProjectSummary,
    },
};

/// Read-only queries over the pooled connection. Dangling references
/// (a manager or department that no longer exists) render as empty text.
#[derive(Clone)]
pub struct ReportService {
    daos: DaoContext,
}

impl ReportService {
    pub fn new(daos: DaoContext) -> Self {
        Self { daos }
    }

    pub async fn employees_full(&self) -> Result<Vec<EmployeeFullInfo>, AppError> {
        let employees = self.daos.employees().find().await?;
        Ok(employees
            .into_iter()
            .map(|employee| EmployeeFullInfo {
                first_name: employee.first_name,
                last_name: employee.last_name,
                middle_name: employee.middle_name,
                job_title: employee.job_title,
                salary: employee.salary,
            })
            .collect())
    }

    pub async fn salaries_over(&self, threshold: f64) -> Result<Vec<EmployeeSalary>, AppError> {
        let employees = self
            .daos
            .employees()
            .query(|query| {
                query
                    .filter(employee::Column::Salary.gt(threshold))
                    .order_by_asc(employee::Column::FirstName)
                    .order_by_asc(employee::Column::Id)
            })
            .await?;
        Ok(employees
            .into_iter()
            .map(|employee| EmployeeSalary {
                first_name: employee.first_name,
                salary: employee.salary,
            })
            .collect())
    }

    /// Employees of one department, cheapest first; equal salaries list
    /// first names in reverse order. An unknown department yields no rows.
    pub async fn department_employees(
        &self,
        department_name: &str,
    ) -> Result<Vec<DepartmentEmployee>, AppError> {
        let Some(department) = self.daos.departments().find_by_name(department_name).await? else {
            return Ok(Vec::new());
        };
        let department_id = department.id;
        let employees = self
            .daos
            .employees()
            .query(move |query| {
                query
                    .filter(employee::Column::DepartmentId.eq(department_id))
                    .order_by_asc(employee::Column::Salary)
                    .order_by_desc(employee::Column::FirstName)
                    .order_by_asc(employee::Column::Id)
            })
            .await?;
        Ok(employees
            .into_iter()
            .map(|employee| DepartmentEmployee {
                first_name: employee.first_name,
                last_name: employee.last_name,
                department: department.name.clone(),
                salary: employee.salary,
            })
            .collect())
    }

    /// Address text of the `limit` employees with the highest address ids;
    /// employees without an address come last.
    pub async fn addresses_by_employee_desc(
        &self,
        limit: u64,
    ) -> Result<Vec<EmployeeAddress>, AppError> {
        let employees = self
            .daos
            .employees()
            .query(move |query| {
                query
                    .order_by_with_nulls(
                        employee::Column::AddressId,
                        Order::Desc,
                        NullOrdering::Last,
                    )
                    .order_by_asc(employee::Column::Id)
                    .limit(limit)
            })
            .await?;

        let address_ids: Vec<i32> = employees.iter().filter_map(|e| e.address_id).collect();
        let addresses: HashMap<i32, String> = self
            .daos
            .addresses()
            .find_by_ids(&address_ids)
            .await?
            .into_iter()
            .map(|address| (address.id, address.address_text))
            .collect();

        Ok(employees
            .into_iter()
            .map(|employee| EmployeeAddress {
                address_text: employee
                    .address_id
                    .and_then(|id| addresses.get(&id).cloned()),
            })
            .collect())
    }

    /// Up to `limit` employees (by id) working on a project that started in
    /// `from_year..=to_year`, each with their manager and all of their
    /// projects.
    pub async fn employees_in_period(
        &self,
        from_year: i32,
        to_year: i32,
        limit: u64,
    ) -> Result<Vec<EmployeeInPeriod>, AppError> {
        if from_year > to_year {
            return Err(AppError::validation(format!(
                "period start {from_year} is after period end {to_year}"
            )));
        }
        let from = start_of_year(from_year)?;
        let until = start_of_year(to_year.saturating_add(1))?;

        let started = self.daos.projects().started_within(from, until).await?;
        let started_ids: Vec<i32> = started.iter().map(|project| project.id).collect();
        let employee_ids: Vec<i32> = self
            .daos
            .employee_projects()
            .for_projects(&started_ids)
            .await?
            .into_iter()
            .map(|link| link.employee_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect();
        debug!(projects = started_ids.len(), employees = employee_ids.len(), "period matches");

        let employees = self.daos.employees().find_by_ids(&employee_ids).await?;
        let manager_ids: Vec<i32> = employees.iter().filter_map(|e| e.manager_id).collect();
        let managers = by_id(self.daos.employees().find_by_ids(&manager_ids).await?);

        let links = self.daos.employee_projects().for_employees(&employee_ids).await?;
        let project_ids: Vec<i32> = links
            .iter()
            .map(|link| link.project_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let projects = by_id(self.daos.projects().find_by_ids(&project_ids).await?);

        let mut projects_of: HashMap<i32, Vec<ProjectSpan>> = HashMap::new();
        for link in &links {
            if let Some(project) = projects.get(&link.project_id) {
                projects_of
                    .entry(link.employee_id)
                    .or_default()
                    .push(ProjectSpan {
                        name: project.name.clone(),
                        start_date: project.start_date,
                        end_date: project.end_date,
                    });
            }
        }

        Ok(employees
            .into_iter()
            .map(|employee| {
                let manager = employee.manager_id.and_then(|id| managers.get(&id));
                EmployeeInPeriod {
                    manager_first_name: manager.map(|m| m.first_name.clone()).unwrap_or_default(),
                    manager_last_name: manager.map(|m| m.last_name.clone()).unwrap_or_default(),
                    projects: projects_of.remove(&employee.id).unwrap_or_default(),
                    first_name: employee.first_name,
                    last_name: employee.last_name,
                }
            })
            .collect())
    }

    /// Addresses ranked by resident count (desc), then town name, then text.
    pub async fn addresses_by_town(&self, limit: usize) -> Result<Vec<AddressOccupancy>, AppError> {
        let addresses = self.daos.addresses().find().await?;
        let towns = by_id(self.daos.towns().find().await?);
        let residents = self
            .daos
            .employees()
            .query(|query| query.filter(employee::Column::AddressId.is_not_null()))
            .await?;

        let mut counts: HashMap<i32, u64> = HashMap::new();
        for address_id in residents.iter().filter_map(|e| e.address_id) {
            *counts.entry(address_id).or_default() += 1;
        }

        let mut rows: Vec<AddressOccupancy> = addresses
            .into_iter()
            .map(|address| AddressOccupancy {
                employee_count: counts.get(&address.id).copied().unwrap_or_default(),
                town_name: towns
                    .get(&address.town_id)
                    .map(|town| town.name.clone())
                    .unwrap_or_default(),
                address_text: address.address_text,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.employee_count
                .cmp(&a.employee_count)
                .then_with(|| a.town_name.cmp(&b.town_name))
                .then_with(|| a.address_text.cmp(&b.address_text))
        });
        rows.truncate(limit);
        Ok(rows)
    }

    pub async fn employee_with_projects(
        &self,
        employee_id: i32,
    ) -> Result<EmployeeProjects, AppError> {
        let employee = self.daos.employees().find_by_id(employee_id).await?;
        let project_ids: Vec<i32> = self
            .daos
            .employee_projects()
            .for_employees(&[employee.id])
            .await?
            .into_iter()
            .map(|link| link.project_id)
            .collect();
        let mut projects: Vec<String> = self
            .daos
            .projects()
            .find_by_ids(&project_ids)
            .await?
            .into_iter()
            .map(|project| project.name)
            .collect();
        projects.sort();

        Ok(EmployeeProjects {
            first_name: employee.first_name,
            last_name: employee.last_name,
            job_title: employee.job_title,
            projects,
        })
    }

    /// Departments with more than `min_employees` employees, smallest first
    /// (ties by name), members sorted by first then last name.
    pub async fn departments_over(
        &self,
        min_employees: usize,
    ) -> Result<Vec<DepartmentRollup>, AppError> {
        let departments = self.daos.departments().find().await?;
        let employees = self.daos.employees().find().await?;
        let people = by_id(employees.clone());

        let mut members: HashMap<i32, Vec<employee::Model>> = HashMap::new();
        for employee in employees {
            members.entry(employee.department_id).or_default().push(employee);
        }

        let mut rollups: Vec<(department::Model, Vec<employee::Model>)> = departments
            .into_iter()
            .filter_map(|department| {
                let staff = members.remove(&department.id).unwrap_or_default();
                (staff.len() > min_employees).then_some((department, staff))
            })
            .collect();
        rollups.sort_by(|(a, a_staff), (b, b_staff)| {
            a_staff.len().cmp(&b_staff.len()).then_with(|| a.name.cmp(&b.name))
        });

        Ok(rollups
            .into_iter()
            .map(|(department, mut staff)| {
                staff.sort_by(|a, b| {
                    a.first_name
                        .cmp(&b.first_name)
                        .then_with(|| a.last_name.cmp(&b.last_name))
                });
                let manager = department.manager_id.and_then(|id| people.get(&id));
                DepartmentRollup {
                    manager_first_name: manager.map(|m| m.first_name.clone()).unwrap_or_default(),
                    manager_last_name: manager.map(|m| m.last_name.clone()).unwrap_or_default(),
                    name: department.name,
                    members: staff
                        .into_iter()
                        .map(|employee| DepartmentMember {
                            first_name: employee.first_name,
                            last_name: employee.last_name,
                            job_title: employee.job_title,
                        })
                        .collect(),
                }
            })
            .collect())
    }

    /// The `limit` most recently started projects, listed by name.
    pub async fn latest_projects(&self, limit: u64) -> Result<Vec<ProjectSummary>, AppError> {
        let mut projects = self
            .daos
            .projects()
            .query(move |query| {
                query
                    .order_by_desc(project::Column::StartDate)
                    .order_by_asc(project::Column::Id)
                    .limit(limit)
            })
            .await?;
        projects.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(projects
            .into_iter()
            .map(|project| ProjectSummary {
                name: project.name,
                description: project.description,
                start_date: project.start_date,
            })
            .collect())
    }

    /// Case-insensitive first-name prefix match, by first then last name.
    pub async fn employees_by_name_prefix(
        &self,
        prefix: &str,
    ) -> Result<Vec<EmployeeJobSalary>, AppError> {
        let condition = first_name_starts_with(prefix);
        let employees = self
            .daos
            .employees()
            .query(move |query| {
                query
                    .filter(condition)
                    .order_by_asc(employee::Column::FirstName)
                    .order_by_asc(employee::Column::LastName)
                    .order_by_asc(employee::Column::Id)
            })
            .await?;

        Ok(employees
            .into_iter()
            .map(|employee| EmployeeJobSalary {
                first_name: employee.first_name,
                last_name: employee.last_name,
                job_title: employee.job_title,
                salary: employee.salary,
            })
            .collect())
    }

    /// First `limit` projects by id. Runs after a committed delete, so it
    /// accepts any limit rather than a bounded page size.
    pub async fn project_names(&self, limit: u64) -> Result<Vec<ProjectName>, AppError> {
        let projects = self
            .daos
            .projects()
            .query(move |query| query.order_by_asc(project::Column::Id).limit(limit))
            .await?;
        Ok(projects
            .into_iter()
            .map(|project| ProjectName(project.name))
            .collect())
    }
}

fn start_of_year(year: i32) -> Result<DateTime, AppError> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| AppError::validation(format!("year {year} is out of range")))
}

fn by_id<T: HasId>(rows: Vec<T>) -> HashMap<i32, T> {
    rows.into_iter().map(|row| (row.id(), row)).collect()
}

fn first_name_starts_with(prefix: &str) -> impl IntoCondition {
    use sea_orm::sea_query::ExprTrait;

    let pattern = format!("{}%", escape_like(&prefix.to_uppercase()));
    Expr::expr(Func::upper(Expr::col(employee::Column::FirstName)))
        .like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_like, start_of_year};

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("SA"), "SA");
        assert_eq!(escape_like("50%_OFF"), "50\\%\\_OFF");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn out_of_range_years_are_validation_errors() {
        assert!(start_of_year(2001).is_ok());
        let err = start_of_year(i32::MAX).expect_err("year should overflow");
        assert!(matches!(err, crate::error::AppError::Validation(_)));
    }
}
