//! Text rendering of report rows. Each row type's `Display` produces the
//! line(s) for one record without a trailing newline; [`render_lines`] joins
//! records into the final block.

mod rows;

use std::fmt::{self, Display, Write as _};

use sea_orm::entity::prelude::DateTime;

pub use rows::{
    AddressOccupancy, AdjustedSalary, DepartmentEmployee, DepartmentMember, DepartmentRollup,
    EmployeeAddress, EmployeeFullInfo, EmployeeInPeriod, EmployeeJobSalary, EmployeeProjects,
    EmployeeSalary, ProjectName, ProjectSpan, ProjectSummary,
};

use crate::services::{CascadeReport, EntityKind};

/// `M/d/yyyy h:mm:ss AM`
pub const DATE_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

pub fn format_date(value: &DateTime) -> String {
    value.format(DATE_FORMAT).to_string()
}

pub fn render_lines<T: Display>(rows: &[T]) -> String {
    let mut out = String::new();
    for row in rows {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{row}");
    }
    out
}

impl Display for CascadeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EntityKind::Town => write!(
                f,
                "{} addresses in {} were deleted",
                self.removed_dependents, self.target_name
            ),
            EntityKind::Project => write!(
                f,
                "{} employee assignments of {} were deleted",
                self.removed_dependents, self.target_name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn dates_use_month_day_year_with_twelve_hour_clock() {
        assert_eq!(format_date(&at(2001, 6, 1, 0, 0)), "6/1/2001 12:00:00 AM");
        assert_eq!(format_date(&at(2006, 9, 1, 15, 45)), "9/1/2006 3:45:00 PM");
        assert_eq!(format_date(&at(2004, 12, 15, 9, 5)), "12/15/2004 9:05:00 AM");
    }

    #[test]
    fn missing_middle_name_leaves_an_empty_slot() {
        let rows = vec![
            EmployeeFullInfo {
                first_name: "Guy".into(),
                last_name: "Gilbert".into(),
                middle_name: Some("R".into()),
                job_title: "Production Technician".into(),
                salary: 12500.0,
            },
            EmployeeFullInfo {
                first_name: "Roberto".into(),
                last_name: "Tamburello".into(),
                middle_name: None,
                job_title: "Engineering Manager".into(),
                salary: 43300.0,
            },
        ];

        assert_eq!(
            render_lines(&rows),
            "Guy Gilbert R Production Technician 12500.00\n\
             Roberto Tamburello  Engineering Manager 43300.00\n"
        );
    }

    #[test]
    fn employee_in_period_lists_projects_under_the_header() {
        let row = EmployeeInPeriod {
            first_name: "Guy".into(),
            last_name: "Gilbert".into(),
            manager_first_name: "Samantha".into(),
            manager_last_name: "Smith".into(),
            projects: vec![
                ProjectSpan {
                    name: "Cycling Cap".into(),
                    start_date: at(2001, 6, 1, 0, 0),
                    end_date: Some(at(2003, 6, 1, 0, 0)),
                },
                ProjectSpan {
                    name: "Hitch Rack".into(),
                    start_date: at(2006, 9, 1, 15, 45),
                    end_date: None,
                },
            ],
        };

        assert_eq!(
            render_lines(&[row]),
            "Guy Gilbert - Manager: Samantha Smith\n\
             --Cycling Cap - 6/1/2001 12:00:00 AM - 6/1/2003 12:00:00 AM\n\
             --Hitch Rack - 9/1/2006 3:45:00 PM - not finished\n"
        );
    }

    #[test]
    fn department_rollup_uses_an_en_dash_header() {
        let row = DepartmentRollup {
            name: "Production".into(),
            manager_first_name: "Samantha".into(),
            manager_last_name: "Smith".into(),
            members: vec![DepartmentMember {
                first_name: "Guy".into(),
                last_name: "Gilbert".into(),
                job_title: "Production Technician".into(),
            }],
        };

        assert_eq!(
            render_lines(&[row]),
            "Production \u{2013} Samantha Smith\nGuy Gilbert - Production Technician\n"
        );
    }

    #[test]
    fn money_lines_round_to_two_places() {
        let adjusted = AdjustedSalary {
            first_name: "David".into(),
            last_name: "Bradley".into(),
            salary: 37500.0 * 1.12,
        };
        let listed = EmployeeJobSalary {
            first_name: "Sandra".into(),
            last_name: "Reategui".into(),
            job_title: "Production Technician".into(),
            salary: 9500.0,
        };

        assert_eq!(adjusted.to_string(), "David Bradley ($42000.00)");
        assert_eq!(
            listed.to_string(),
            "Sandra Reategui - Production Technician - ($9500.00)"
        );
    }

    #[test]
    fn cascade_report_for_towns_counts_addresses() {
        let report = CascadeReport {
            kind: EntityKind::Town,
            target_id: 2,
            target_name: "Seattle".into(),
            removed_dependents: 3,
            detached_references: 2,
        };
        assert_eq!(report.to_string(), "3 addresses in Seattle were deleted");
    }

    #[test]
    fn empty_reports_render_as_empty_text() {
        assert_eq!(render_lines::<ProjectName>(&[]), "");
    }
}
