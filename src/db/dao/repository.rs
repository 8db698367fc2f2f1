use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, Order, PaginatorTrait, PrimaryKeyTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

use super::base_traits::{HasId, HasIdColumn};
use super::error::{DaoLayerError, DaoResult};

pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub has_next: bool,
}

/// Entity-scoped data access over any sea-orm connection, so the same
/// operations run against the pool or inside a [`super::UnitOfWork`].
pub struct Repository<'c, E, C> {
    conn: &'c C,
    entity: PhantomData<E>,
}

impl<'c, E, C> Repository<'c, E, C> {
    pub fn new(conn: &'c C) -> Self {
        Self {
            conn,
            entity: PhantomData,
        }
    }

    pub fn conn(&self) -> &'c C {
        self.conn
    }
}

pub(crate) fn entity_name<E: EntityTrait>() -> &'static str {
    E::default().as_str()
}

impl<'c, E, C> Repository<'c, E, C>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    C: ConnectionTrait,
{
    pub async fn query(
        &self,
        apply: impl FnOnce(Select<E>) -> Select<E>,
    ) -> DaoResult<Vec<E::Model>> {
        Ok(apply(E::find()).all(self.conn).await?)
    }

    pub async fn first(
        &self,
        apply: impl FnOnce(Select<E>) -> Select<E>,
    ) -> DaoResult<Option<E::Model>> {
        Ok(apply(E::find()).one(self.conn).await?)
    }

    pub async fn count(&self, apply: impl FnOnce(Select<E>) -> Select<E>) -> DaoResult<u64> {
        Ok(apply(E::find()).count(self.conn).await?)
    }

    pub async fn add(&self, data: impl IntoActiveModel<E::ActiveModel>) -> DaoResult<E::Model> {
        Ok(data.into_active_model().insert(self.conn).await?)
    }

    pub async fn update(
        &self,
        model: E::Model,
        apply: impl FnOnce(&mut E::ActiveModel),
    ) -> DaoResult<E::Model> {
        let mut active = model.into_active_model();
        apply(&mut active);
        Ok(active.update(self.conn).await?)
    }

    pub async fn remove(&self, model: E::Model) -> DaoResult<u64> {
        let result = model.into_active_model().delete(self.conn).await?;
        Ok(result.rows_affected)
    }

    /// Deletes the given rows one at a time in iteration order and returns
    /// the number of rows the store reported as removed.
    pub async fn remove_range(
        &self,
        models: impl IntoIterator<Item = E::Model>,
    ) -> DaoResult<u64> {
        let mut removed = 0;
        for model in models {
            removed += self.remove(model).await?;
        }
        Ok(removed)
    }
}

impl<'c, E, C> Repository<'c, E, C>
where
    E: EntityTrait + HasIdColumn,
    E::Model: HasId + IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    pub async fn find(&self) -> DaoResult<Vec<E::Model>> {
        self.query(|query| query.order_by_asc(E::id_column())).await
    }

    pub async fn find_by_id(&self, id: i32) -> DaoResult<E::Model> {
        E::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| DaoLayerError::not_found(entity_name::<E>(), format!("id={id}")))
    }

    pub async fn find_by_ids(&self, ids: &[i32]) -> DaoResult<Vec<E::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids = ids.to_vec();
        self.query(move |query| {
            query
                .filter(E::id_column().is_in(ids))
                .order_by_asc(E::id_column())
        })
        .await
    }

    pub async fn find_page(
        &self,
        page: u64,
        page_size: u64,
        order: Option<(E::Column, Order)>,
        apply: impl FnOnce(Select<E>) -> Select<E>,
    ) -> DaoResult<Page<E::Model>> {
        if page == 0 || page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(DaoLayerError::InvalidPagination { page, page_size });
        }

        let filtered = apply(E::find());
        let ordered = match order {
            Some((column, order)) => filtered.order_by(column, order),
            None => filtered,
        }
        .order_by_asc(E::id_column());
        let fetch_size = page_size.saturating_add(1);
        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let mut data = ordered
            .limit(fetch_size)
            .offset(offset)
            .all(self.conn)
            .await?;

        let has_next = data.len() > page_size as usize;
        if has_next {
            data.truncate(page_size as usize);
        }

        Ok(Page {
            data,
            page,
            page_size,
            has_next,
        })
    }
}
