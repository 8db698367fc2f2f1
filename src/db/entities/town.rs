use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "towns")]
pub struct Model {
    #[sea_orm(indexed)]
    pub name: String,
    #[sea_orm(has_many)]
    pub addresses: HasMany<super::address::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
