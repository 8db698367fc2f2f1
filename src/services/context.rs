use sea_orm::DatabaseConnection;

use crate::{
    db::{
        dao::DaoContext,
        seed::{self, SeedSummary},
    },
    error::AppError,
    services::{mutation_service::MutationService, report_service::ReportService},
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn mutations(&self) -> MutationService {
        MutationService::new(self.daos.clone())
    }

    pub fn reports(&self) -> ReportService {
        ReportService::new(self.daos.clone())
    }

    pub async fn seed_demo(&self) -> Result<SeedSummary, AppError> {
        Ok(seed::seed_demo(&self.daos).await?)
    }
}
