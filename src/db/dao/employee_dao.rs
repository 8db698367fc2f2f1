use sea_orm::entity::prelude::DateTime;
use sea_orm::{ColumnTrait, ConnectionTrait, QueryFilter, QueryOrder, Set};

use super::{DaoLayerError, DaoResult, Repository};
use crate::db::entities::prelude::{Department, Employee};
use crate::db::entities::{department, employee};

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub job_title: String,
    pub department_id: i32,
    pub manager_id: Option<i32>,
    pub hire_date: DateTime,
    pub salary: f64,
    pub address_id: Option<i32>,
}

impl<C: ConnectionTrait> Repository<'_, Employee, C> {
    pub async fn create_employee(&self, new: NewEmployee) -> DaoResult<employee::Model> {
        employee::validate_salary(new.salary)
            .map_err(|reason| DaoLayerError::invalid("employees", reason))?;

        let model = employee::ActiveModel {
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            middle_name: Set(new.middle_name),
            job_title: Set(new.job_title),
            department_id: Set(new.department_id),
            manager_id: Set(new.manager_id),
            hire_date: Set(new.hire_date),
            salary: Set(new.salary),
            address_id: Set(new.address_id),
            ..Default::default()
        };
        self.add(model).await
    }

    /// Every employee whose address points into `address_ids`, found by
    /// foreign key rather than through a loaded collection.
    pub async fn living_at(&self, address_ids: &[i32]) -> DaoResult<Vec<employee::Model>> {
        if address_ids.is_empty() {
            return Ok(Vec::new());
        }
        let address_ids = address_ids.to_vec();
        self.query(move |query| {
            query
                .filter(employee::Column::AddressId.is_in(address_ids))
                .order_by_asc(employee::Column::Id)
        })
        .await
    }

    pub async fn in_departments(&self, department_ids: &[i32]) -> DaoResult<Vec<employee::Model>> {
        if department_ids.is_empty() {
            return Ok(Vec::new());
        }
        let department_ids = department_ids.to_vec();
        self.query(move |query| {
            query
                .filter(employee::Column::DepartmentId.is_in(department_ids))
                .order_by_asc(employee::Column::Id)
        })
        .await
    }

    pub async fn first_by_last_name(&self, last_name: &str) -> DaoResult<Option<employee::Model>> {
        let last_name = last_name.to_string();
        self.first(move |query| {
            query
                .filter(employee::Column::LastName.eq(last_name))
                .order_by_asc(employee::Column::Id)
        })
        .await
    }

    pub async fn set_salary(
        &self,
        model: employee::Model,
        salary: f64,
    ) -> DaoResult<employee::Model> {
        employee::validate_salary(salary)
            .map_err(|reason| DaoLayerError::invalid("employees", reason))?;
        self.update(model, move |active| {
            active.salary = Set(salary);
        })
        .await
    }

    pub async fn set_address(
        &self,
        model: employee::Model,
        address_id: Option<i32>,
    ) -> DaoResult<employee::Model> {
        self.update(model, move |active| {
            active.address_id = Set(address_id);
        })
        .await
    }

    pub async fn set_manager(
        &self,
        model: employee::Model,
        manager_id: Option<i32>,
    ) -> DaoResult<employee::Model> {
        self.update(model, move |active| {
            active.manager_id = Set(manager_id);
        })
        .await
    }
}

impl<C: ConnectionTrait> Repository<'_, Department, C> {
    pub async fn find_by_name(&self, name: &str) -> DaoResult<Option<department::Model>> {
        let name = name.to_string();
        self.first(move |query| query.filter(department::Column::Name.eq(name)))
            .await
    }

    pub async fn find_by_names(&self, names: &[String]) -> DaoResult<Vec<department::Model>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let names = names.to_vec();
        self.query(move |query| {
            query
                .filter(department::Column::Name.is_in(names))
                .order_by_asc(department::Column::Id)
        })
        .await
    }

    pub async fn create_department(&self, name: &str) -> DaoResult<department::Model> {
        let model = department::ActiveModel {
            name: Set(name.to_string()),
            manager_id: Set(None),
            ..Default::default()
        };
        self.add(model).await
    }

    pub async fn set_manager(
        &self,
        model: department::Model,
        manager_id: i32,
    ) -> DaoResult<department::Model> {
        self.update(model, move |active| {
            active.manager_id = Set(Some(manager_id));
        })
        .await
    }
}
