use sea_orm::entity::prelude::DateTime;
use sea_orm::{ColumnTrait, ConnectionTrait, QueryFilter, QueryOrder, Set};

use super::{DaoLayerError, DaoResult, Repository};
use crate::db::entities::prelude::{EmployeeProject, Project};
use crate::db::entities::{employee_project, project};

#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime,
    pub end_date: Option<DateTime>,
}

impl<C: ConnectionTrait> Repository<'_, Project, C> {
    pub async fn create_project(&self, new: NewProject) -> DaoResult<project::Model> {
        project::validate_period(new.start_date, new.end_date)
            .map_err(|reason| DaoLayerError::invalid("projects", reason))?;

        let model = project::ActiveModel {
            name: Set(new.name),
            description: Set(new.description),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
            ..Default::default()
        };
        self.add(model).await
    }

    pub async fn find_by_name(&self, name: &str) -> DaoResult<Option<project::Model>> {
        let name = name.to_string();
        self.first(move |query| {
            query
                .filter(project::Column::Name.eq(name))
                .order_by_asc(project::Column::Id)
        })
        .await
    }

    /// Projects with `from <= start_date < until`.
    pub async fn started_within(
        &self,
        from: DateTime,
        until: DateTime,
    ) -> DaoResult<Vec<project::Model>> {
        self.query(move |query| {
            query
                .filter(project::Column::StartDate.gte(from))
                .filter(project::Column::StartDate.lt(until))
                .order_by_asc(project::Column::Id)
        })
        .await
    }
}

impl<C: ConnectionTrait> Repository<'_, EmployeeProject, C> {
    pub async fn link(
        &self,
        employee_id: i32,
        project_id: i32,
    ) -> DaoResult<employee_project::Model> {
        let model = employee_project::ActiveModel {
            employee_id: Set(employee_id),
            project_id: Set(project_id),
        };
        self.add(model).await
    }

    pub async fn for_project(&self, project_id: i32) -> DaoResult<Vec<employee_project::Model>> {
        self.query(move |query| {
            query
                .filter(employee_project::Column::ProjectId.eq(project_id))
                .order_by_asc(employee_project::Column::EmployeeId)
        })
        .await
    }

    pub async fn for_projects(
        &self,
        project_ids: &[i32],
    ) -> DaoResult<Vec<employee_project::Model>> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let project_ids = project_ids.to_vec();
        self.query(move |query| {
            query
                .filter(employee_project::Column::ProjectId.is_in(project_ids))
                .order_by_asc(employee_project::Column::EmployeeId)
                .order_by_asc(employee_project::Column::ProjectId)
        })
        .await
    }

    pub async fn for_employees(
        &self,
        employee_ids: &[i32],
    ) -> DaoResult<Vec<employee_project::Model>> {
        if employee_ids.is_empty() {
            return Ok(Vec::new());
        }
        let employee_ids = employee_ids.to_vec();
        self.query(move |query| {
            query
                .filter(employee_project::Column::EmployeeId.is_in(employee_ids))
                .order_by_asc(employee_project::Column::EmployeeId)
                .order_by_asc(employee_project::Column::ProjectId)
        })
        .await
    }
}
