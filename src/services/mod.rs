pub mod context;
pub mod mutation_service;
pub mod report_service;

pub use context::ServiceContext;
pub use mutation_service::{CascadeReport, EntityKind, MutationService, TargetKey};
pub use report_service::ReportService;
