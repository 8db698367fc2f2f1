use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    pub address_text: String,
    #[sea_orm(indexed)]
    pub town_id: i32,
    #[sea_orm(belongs_to, from = "town_id", to = "id")]
    pub town: HasOne<super::town::Entity>,
    #[sea_orm(has_many)]
    pub employees: HasMany<super::employee::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
