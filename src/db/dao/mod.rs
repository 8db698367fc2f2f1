pub mod base_traits;
mod context;
pub mod employee_dao;
pub mod error;
pub mod project_dao;
pub mod repository;
pub mod town_dao;
mod unit_of_work;

pub use base_traits::{HasId, HasIdColumn};
pub use context::{DaoContext, DaoScope};
pub use employee_dao::NewEmployee;
pub use error::{DaoLayerError, DaoResult};
pub use project_dao::NewProject;
pub use repository::{MAX_PAGE_SIZE, Page, Repository};
pub use unit_of_work::UnitOfWork;
