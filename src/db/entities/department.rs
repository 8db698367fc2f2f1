use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(unique)]
    pub name: String,
    // Points at an employee row; kept without a declared relation because
    // employees already reference departments.
    #[sea_orm(indexed)]
    pub manager_id: Option<i32>,
    #[sea_orm(has_many)]
    pub employees: HasMany<super::employee::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
