use std::{convert::Infallible, fmt, str::FromStr};

use tracing::{debug, info, warn};

use crate::{
    db::{
        dao::{DaoContext, DaoLayerError, DaoResult, DaoScope, UnitOfWork},
        entities::{address, employee, project, town},
    },
    error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Town,
    Project,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Town => "town",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a cascading delete addresses its target. Names resolve to the row with
/// the lowest id when several share one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKey {
    Id(i32),
    Name(String),
}

impl From<i32> for TargetKey {
    fn from(id: i32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for TargetKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// Anything that parses as an integer is an id, everything else a name.
impl FromStr for TargetKey {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Ok(match raw.parse::<i32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(raw.to_string()),
        })
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id={id}"),
            Self::Name(name) => write!(f, "name={name}"),
        }
    }
}

/// Post-condition of a committed cascading delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeReport {
    pub kind: EntityKind,
    pub target_id: i32,
    pub target_name: String,
    /// Addresses of a town, or junction rows of a project.
    pub removed_dependents: u64,
    /// Employees whose address was cleared.
    pub detached_references: u64,
}

#[derive(Clone)]
pub struct MutationService {
    daos: DaoContext,
}

impl MutationService {
    pub fn new(daos: DaoContext) -> Self {
        Self { daos }
    }

    /// Removes a town or project together with everything that only exists
    /// to hang off it, in one transaction. Employees living at a removed
    /// address keep their row and lose the address.
    pub async fn delete_entity_cascading(
        &self,
        key: impl Into<TargetKey>,
        kind: EntityKind,
    ) -> Result<CascadeReport, AppError> {
        let key = key.into();
        let uow = self.daos.begin().await?;
        let outcome = match kind {
            EntityKind::Town => delete_town(&uow, &key).await,
            EntityKind::Project => delete_project(&uow, &key).await,
        };
        let report = finish(uow, outcome).await?;

        info!(
            kind = %report.kind,
            target_id = report.target_id,
            target = %report.target_name,
            removed = report.removed_dependents,
            detached = report.detached_references,
            "cascading delete committed"
        );
        Ok(report)
    }

    /// Multiplies the salary of every employee in the named departments.
    /// Unknown names match nothing. Returns the adjusted employees ordered by
    /// first then last name.
    pub async fn bulk_adjust_salary(
        &self,
        department_names: &[String],
        multiplier: f64,
    ) -> Result<Vec<employee::Model>, AppError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(AppError::validation(format!(
                "salary multiplier must be a finite number greater than 0 (got {multiplier})"
            )));
        }

        let uow = self.daos.begin().await?;
        let outcome = adjust_salaries(&uow, department_names, multiplier).await;
        let mut adjusted = finish(uow, outcome).await?;

        adjusted.sort_by(|a, b| {
            a.first_name
                .cmp(&b.first_name)
                .then_with(|| a.last_name.cmp(&b.last_name))
        });
        info!(
            departments = ?department_names,
            multiplier,
            adjusted = adjusted.len(),
            "salary adjustment committed"
        );
        Ok(adjusted)
    }

    /// Creates an address in `town_id` and moves the first employee (lowest
    /// id) with the given last name there.
    pub async fn assign_new_address(
        &self,
        last_name: &str,
        address_text: &str,
        town_id: i32,
    ) -> Result<(employee::Model, address::Model), AppError> {
        let uow = self.daos.begin().await?;
        let outcome = move_to_new_address(&uow, last_name, address_text, town_id).await;
        let (employee, address) = finish(uow, outcome).await?;

        info!(
            employee_id = employee.id,
            address_id = address.id,
            town_id,
            "employee moved to new address"
        );
        Ok((employee, address))
    }
}

async fn finish<T>(uow: UnitOfWork, outcome: DaoResult<T>) -> Result<T, AppError> {
    match outcome {
        Ok(value) => {
            uow.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = uow.rollback().await {
                warn!(error = %rollback_err, "rollback failed");
            }
            Err(err.into())
        }
    }
}

async fn resolve_town(uow: &UnitOfWork, key: &TargetKey) -> DaoResult<town::Model> {
    match key {
        TargetKey::Id(id) => uow.towns().find_by_id(*id).await,
        TargetKey::Name(name) => uow
            .towns()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DaoLayerError::not_found("towns", key.to_string())),
    }
}

async fn resolve_project(uow: &UnitOfWork, key: &TargetKey) -> DaoResult<project::Model> {
    match key {
        TargetKey::Id(id) => uow.projects().find_by_id(*id).await,
        TargetKey::Name(name) => uow
            .projects()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DaoLayerError::not_found("projects", key.to_string())),
    }
}

async fn delete_town(uow: &UnitOfWork, key: &TargetKey) -> DaoResult<CascadeReport> {
    let town = resolve_town(uow, key).await?;
    let addresses = uow.addresses().in_town(town.id).await?;
    let address_ids: Vec<i32> = addresses.iter().map(|address| address.id).collect();
    debug!(town_id = town.id, addresses = ?address_ids, "resolved town");

    let residents = uow.employees().living_at(&address_ids).await?;
    let mut detached = 0;
    for resident in residents {
        uow.employees().set_address(resident, None).await?;
        detached += 1;
    }

    let removed = uow.addresses().remove_range(addresses).await?;
    uow.towns().remove(town.clone()).await?;

    Ok(CascadeReport {
        kind: EntityKind::Town,
        target_id: town.id,
        target_name: town.name,
        removed_dependents: removed,
        detached_references: detached,
    })
}

async fn delete_project(uow: &UnitOfWork, key: &TargetKey) -> DaoResult<CascadeReport> {
    let project = resolve_project(uow, key).await?;
    let links = uow.employee_projects().for_project(project.id).await?;
    debug!(project_id = project.id, links = links.len(), "resolved project");

    let removed = uow.employee_projects().remove_range(links).await?;
    uow.projects().remove(project.clone()).await?;

    Ok(CascadeReport {
        kind: EntityKind::Project,
        target_id: project.id,
        target_name: project.name,
        removed_dependents: removed,
        detached_references: 0,
    })
}

async fn adjust_salaries(
    uow: &UnitOfWork,
    department_names: &[String],
    multiplier: f64,
) -> DaoResult<Vec<employee::Model>> {
    let departments = uow.departments().find_by_names(department_names).await?;
    let department_ids: Vec<i32> = departments.iter().map(|department| department.id).collect();
    let employees = uow.employees().in_departments(&department_ids).await?;

    let mut adjusted = Vec::with_capacity(employees.len());
    for employee in employees {
        let salary = employee.salary * multiplier;
        adjusted.push(uow.employees().set_salary(employee, salary).await?);
    }
    Ok(adjusted)
}

async fn move_to_new_address(
    uow: &UnitOfWork,
    last_name: &str,
    address_text: &str,
    town_id: i32,
) -> DaoResult<(employee::Model, address::Model)> {
    let employee = uow
        .employees()
        .first_by_last_name(last_name)
        .await?
        .ok_or_else(|| DaoLayerError::not_found("employees", format!("last_name={last_name}")))?;
    let town = uow.towns().find_by_id(town_id).await?;

    let address = uow.addresses().create_address(address_text, town.id).await?;
    let employee = uow.employees().set_address(employee, Some(address.id)).await?;
    Ok((employee, address))
}
