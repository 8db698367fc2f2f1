use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::{DaoResult, DaoScope};

/// One transaction's worth of work. Repositories taken from it share the
/// transaction; `commit` makes the changes durable and dropping the unit
/// without committing rolls everything back.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    pub(super) async fn begin(db: &DatabaseConnection) -> DaoResult<Self> {
        let txn = db.begin().await?;
        Ok(Self { txn })
    }

    pub async fn commit(self) -> DaoResult<()> {
        self.txn.commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> DaoResult<()> {
        self.txn.rollback().await?;
        Ok(())
    }
}

impl DaoScope for UnitOfWork {
    type Conn = DatabaseTransaction;

    fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }
}
