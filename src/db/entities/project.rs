use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(indexed)]
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime,
    pub end_date: Option<DateTime>,
    #[sea_orm(has_many)]
    pub employee_projects: HasMany<super::employee_project::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_period(start_date: DateTime, end_date: Option<DateTime>) -> Result<(), String> {
    match end_date {
        Some(end) if end < start_date => Err(format!(
            "end date {end} is earlier than start date {start_date}"
        )),
        _ => Ok(()),
    }
}
