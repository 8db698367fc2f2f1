use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait};

use super::{DaoResult, Repository, UnitOfWork};
use crate::db::entities::prelude::{
    Address, Department, Employee, EmployeeProject, Project, Town,
};

/// Anything that can hand out repositories: the pooled connection for reads,
/// or a unit of work for transactional mutations.
pub trait DaoScope {
    type Conn: ConnectionTrait;

    fn conn(&self) -> &Self::Conn;

    fn repo<E: EntityTrait>(&self) -> Repository<'_, E, Self::Conn> {
        Repository::new(self.conn())
    }

    fn towns(&self) -> Repository<'_, Town, Self::Conn> {
        self.repo()
    }

    fn addresses(&self) -> Repository<'_, Address, Self::Conn> {
        self.repo()
    }

    fn departments(&self) -> Repository<'_, Department, Self::Conn> {
        self.repo()
    }

    fn employees(&self) -> Repository<'_, Employee, Self::Conn> {
        self.repo()
    }

    fn projects(&self) -> Repository<'_, Project, Self::Conn> {
        self.repo()
    }

    fn employee_projects(&self) -> Repository<'_, EmployeeProject, Self::Conn> {
        self.repo()
    }
}

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn begin(&self) -> DaoResult<UnitOfWork> {
        UnitOfWork::begin(&self.db).await
    }
}

impl DaoScope for DaoContext {
    type Conn = DatabaseConnection;

    fn conn(&self) -> &DatabaseConnection {
        &self.db
    }
}
