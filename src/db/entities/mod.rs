#[allow(unused_imports)]
pub mod prelude {
    pub use super::address::Entity as Address;
    pub use super::department::Entity as Department;
    pub use super::employee::Entity as Employee;
    pub use super::employee_project::Entity as EmployeeProject;
    pub use super::project::Entity as Project;
    pub use super::town::Entity as Town;
}

pub mod address;
pub mod department;
pub mod employee;
pub mod employee_project;
pub mod project;
pub mod town;
