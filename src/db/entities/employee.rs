use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub job_title: String,
    #[sea_orm(indexed)]
    pub department_id: i32,
    #[sea_orm(indexed)]
    pub manager_id: Option<i32>,
    pub hire_date: DateTime,
    pub salary: f64,
    #[sea_orm(indexed)]
    pub address_id: Option<i32>,
    #[sea_orm(belongs_to, from = "department_id", to = "id")]
    pub department: HasOne<super::department::Entity>,
    #[sea_orm(belongs_to, from = "address_id", to = "id")]
    pub address: HasOne<super::address::Entity>,
    #[sea_orm(has_many)]
    pub employee_projects: HasMany<super::employee_project::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

/// Salaries are stored as plain floats; anything negative or non-finite is
/// rejected before it reaches the store.
pub fn validate_salary(salary: f64) -> Result<(), String> {
    if !salary.is_finite() {
        return Err(format!("salary must be a finite number (got {salary})"));
    }
    if salary < 0.0 {
        return Err(format!("salary must be >= 0 (got {salary:.2})"));
    }
    Ok(())
}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
