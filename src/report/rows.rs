use std::fmt::{self, Display};

use sea_orm::entity::prelude::DateTime;

use super::format_date;

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFullInfo {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub job_title: String,
    pub salary: f64,
}

impl Display for EmployeeFullInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {:.2}",
            self.first_name,
            self.last_name,
            self.middle_name.as_deref().unwrap_or_default(),
            self.job_title,
            self.salary
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeSalary {
    pub first_name: String,
    pub salary: f64,
}

impl Display for EmployeeSalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {:.2}", self.first_name, self.salary)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentEmployee {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub salary: f64,
}

impl Display for DepartmentEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} from {} - ${:.2}",
            self.first_name, self.last_name, self.department, self.salary
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeAddress {
    pub address_text: Option<String>,
}

impl Display for EmployeeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.address_text.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpan {
    pub name: String,
    pub start_date: DateTime,
    pub end_date: Option<DateTime>,
}

impl Display for ProjectSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = match &self.end_date {
            Some(end) => format_date(end),
            None => "not finished".to_string(),
        };
        write!(f, "--{} - {} - {}", self.name, format_date(&self.start_date), end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeInPeriod {
    pub first_name: String,
    pub last_name: String,
    pub manager_first_name: String,
    pub manager_last_name: String,
    pub projects: Vec<ProjectSpan>,
}

impl Display for EmployeeInPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - Manager: {} {}",
            self.first_name, self.last_name, self.manager_first_name, self.manager_last_name
        )?;
        for project in &self.projects {
            write!(f, "\n{project}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressOccupancy {
    pub address_text: String,
    pub town_name: String,
    pub employee_count: u64,
}

impl Display for AddressOccupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} - {} employees",
            self.address_text, self.town_name, self.employee_count
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProjects {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub projects: Vec<String>,
}

impl Display for EmployeeProjects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.first_name, self.last_name, self.job_title)?;
        for project in &self.projects {
            write!(f, "\n{project}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentMember {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRollup {
    pub name: String,
    pub manager_first_name: String,
    pub manager_last_name: String,
    pub members: Vec<DepartmentMember>,
}

impl Display for DepartmentRollup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \u{2013} {} {}",
            self.name, self.manager_first_name, self.manager_last_name
        )?;
        for member in &self.members {
            write!(
                f,
                "\n{} {} - {}",
                member.first_name, member.last_name, member.job_title
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime,
}

impl Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}",
            self.name,
            self.description.as_deref().unwrap_or_default(),
            format_date(&self.start_date)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedSalary {
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
}

impl Display for AdjustedSalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (${:.2})", self.first_name, self.last_name, self.salary)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeJobSalary {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub salary: f64,
}

impl Display for EmployeeJobSalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} - (${:.2})",
            self.first_name, self.last_name, self.job_title, self.salary
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(pub String);

impl Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
