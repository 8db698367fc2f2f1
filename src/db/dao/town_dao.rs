use sea_orm::{ColumnTrait, ConnectionTrait, QueryFilter, QueryOrder, Set};

use super::{DaoResult, Repository};
use crate::db::entities::prelude::{Address, Town};
use crate::db::entities::{address, town};

impl<C: ConnectionTrait> Repository<'_, Town, C> {
    /// Lowest-id town carrying the given name.
    pub async fn find_by_name(&self, name: &str) -> DaoResult<Option<town::Model>> {
        let name = name.to_string();
        self.first(move |query| {
            query
                .filter(town::Column::Name.eq(name))
                .order_by_asc(town::Column::Id)
        })
        .await
    }

    pub async fn create_town(&self, name: &str) -> DaoResult<town::Model> {
        let model = town::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        self.add(model).await
    }
}

impl<C: ConnectionTrait> Repository<'_, Address, C> {
    pub async fn in_town(&self, town_id: i32) -> DaoResult<Vec<address::Model>> {
        self.query(move |query| {
            query
                .filter(address::Column::TownId.eq(town_id))
                .order_by_asc(address::Column::Id)
        })
        .await
    }

    pub async fn create_address(
        &self,
        address_text: &str,
        town_id: i32,
    ) -> DaoResult<address::Model> {
        let model = address::ActiveModel {
            address_text: Set(address_text.to_string()),
            town_id: Set(town_id),
            ..Default::default()
        };
        self.add(model).await
    }
}
