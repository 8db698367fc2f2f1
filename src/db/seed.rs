use chrono::NaiveDate;
use sea_orm::entity::prelude::DateTime;
use tracing::info;

use super::dao::{DaoContext, DaoLayerError, DaoResult, DaoScope, NewEmployee, NewProject};

const TOWNS: &[&str] = &["Redmond", "Seattle", "Bellevue", "Sofia", "Issaquah"];

// (text, town position in TOWNS)
const ADDRESSES: &[(&str, usize)] = &[
    ("108 Lakeside Court", 1),
    ("1343 Prospect St", 1),
    ("1648 Eastgate Lane", 1),
    ("2284 Azalea Avenue", 0),
    ("2947 Vine Lane", 2),
    ("3067 Maya", 3),
    ("163 Nishava Str, ent A, apt. 1", 3),
];

const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Tool Design",
    "Sales",
    "Marketing",
    "Research and Development",
    "Production",
    "Information Services",
];

struct EmployeeSeed {
    first_name: &'static str,
    last_name: &'static str,
    middle_name: Option<&'static str>,
    job_title: &'static str,
    department: usize,
    manager: Option<usize>,
    salary: f64,
    address: Option<usize>,
}

const fn emp(
    first_name: &'static str,
    last_name: &'static str,
    middle_name: Option<&'static str>,
    job_title: &'static str,
    department: usize,
    manager: Option<usize>,
    salary: f64,
    address: Option<usize>,
) -> EmployeeSeed {
    EmployeeSeed {
        first_name,
        last_name,
        middle_name,
        job_title,
        department,
        manager,
        salary,
        address,
    }
}

// Positions are zero-based indexes into DEPARTMENTS, EMPLOYEES and ADDRESSES.
const EMPLOYEES: &[EmployeeSeed] = &[
    emp("Guy", "Gilbert", Some("R"), "Production Technician", 5, Some(10), 12500.0, Some(0)),
    emp("Kevin", "Brown", Some("F"), "Marketing Assistant", 3, Some(5), 13500.0, Some(1)),
    emp("Roberto", "Tamburello", None, "Engineering Manager", 0, Some(13), 43300.0, Some(3)),
    emp("Rob", "Walters", None, "Senior Tool Designer", 1, Some(2), 29800.0, Some(4)),
    emp("Thierry", "D'Hers", Some("B"), "Tool Designer", 1, Some(3), 25000.0, None),
    emp("David", "Bradley", Some("M"), "Marketing Manager", 3, None, 37500.0, Some(3)),
    emp("Dylan", "Miller", Some("A"), "Research and Development Manager", 4, None, 50500.0, Some(5)),
    emp("Gigi", "Matthews", None, "Research and Development Engineer", 4, Some(6), 40900.0, Some(5)),
    emp("Michael", "Raheem", None, "Research and Development Manager", 4, Some(6), 42500.0, Some(4)),
    emp("Svetlin", "Nakov", Some("Ivanov"), "Independent Software Development Consultant", 0, None, 48000.0, None),
    emp("Samantha", "Smith", None, "Production Supervisor", 5, None, 25000.0, Some(6)),
    emp("Sandra", "Reategui", Some("Alayo"), "Production Technician", 5, Some(10), 9500.0, None),
    emp("Sariya", "Harnpadoungsataya", Some("E"), "Marketing Specialist", 3, Some(5), 14400.0, None),
    emp("Terri", "Duffy", Some("Lee"), "Vice President of Engineering", 0, None, 63500.0, Some(3)),
    emp("Jo", "Brown", Some("A"), "Production Supervisor", 5, Some(10), 25000.0, None),
    emp("JoLynn", "Dobney", Some("M"), "Production Supervisor", 5, Some(10), 25000.0, None),
    emp("Taylor", "Maxwell", Some("R"), "Production Supervisor", 5, Some(10), 25000.0, None),
];

// (department, employee)
const DEPARTMENT_MANAGERS: &[(usize, usize)] = &[(0, 13), (1, 3), (3, 5), (4, 6), (5, 10)];

// (name, description, start (y, m, d, h, min), end date (y, m, d))
type ProjectSeed = (
    &'static str,
    &'static str,
    (i32, u32, u32, u32, u32),
    Option<(i32, u32, u32)>,
);

const PROJECTS: &[ProjectSeed] = &[
    (
        "Classic Vest",
        "Research, design and development of Classic Vest. Light-weight, wind-resistant, packs to fit into a pocket.",
        (2003, 6, 1, 0, 0),
        None,
    ),
    (
        "Cycling Cap",
        "Research, design and development of Cycling Cap. Traditional style with a flip-up brim; one-size fits all.",
        (2001, 6, 1, 0, 0),
        Some((2003, 6, 1)),
    ),
    (
        "Full-Finger Gloves",
        "Research, design and development of Full-Finger Gloves. Synthetic palm, flexible knuckles, breathable mesh upper.",
        (2002, 6, 1, 0, 0),
        Some((2003, 6, 1)),
    ),
    (
        "Half-Finger Gloves",
        "Research, design and development of Half-Finger Gloves. Full padding, improved finger flex, durable palm, adjustable closure.",
        (2005, 6, 1, 0, 0),
        None,
    ),
    (
        "LL Mountain Frame",
        "Research, design and development of LL Mountain Frame. Our best value utilizing the same, ground-breaking frame technology.",
        (2004, 3, 15, 9, 30),
        None,
    ),
    (
        "Hitch Rack",
        "Research, design and development of Hitch Rack - 4-Bike. Carries 4 bikes securely; steel construction.",
        (2006, 9, 1, 15, 45),
        None,
    ),
];

// (employee, project)
const ASSIGNMENTS: &[(usize, usize)] = &[
    (0, 1),
    (0, 5),
    (2, 0),
    (2, 1),
    (3, 1),
    (3, 3),
    (6, 5),
    (7, 0),
    (7, 1),
    (8, 2),
    (9, 4),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub towns: usize,
    pub addresses: usize,
    pub departments: usize,
    pub employees: usize,
    pub projects: usize,
    pub assignments: usize,
}

fn timestamp(
    (year, month, day): (i32, u32, u32),
    (hour, minute): (u32, u32),
) -> DaoResult<DateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| {
            DaoLayerError::invalid(
                "projects",
                format!("invalid timestamp {year}-{month}-{day} {hour}:{minute}"),
            )
        })
}

/// Loads the demo dataset into an empty database in one transaction.
/// Ids are whatever the store assigns; relations are wired from the rows it
/// returns, so on a fresh database they come out as 1..=n in listing order.
pub async fn seed_demo(daos: &DaoContext) -> DaoResult<SeedSummary> {
    let existing = daos.towns().count(|query| query).await?;
    if existing > 0 {
        return Err(DaoLayerError::invalid(
            "towns",
            format!("database already holds {existing} towns; refusing to seed"),
        ));
    }

    let uow = daos.begin().await?;

    let mut towns = Vec::with_capacity(TOWNS.len());
    for name in TOWNS {
        towns.push(uow.towns().create_town(name).await?);
    }

    let mut addresses = Vec::with_capacity(ADDRESSES.len());
    for (text, town) in ADDRESSES {
        addresses.push(uow.addresses().create_address(text, towns[*town].id).await?);
    }

    let mut departments = Vec::with_capacity(DEPARTMENTS.len());
    for name in DEPARTMENTS {
        departments.push(uow.departments().create_department(name).await?);
    }

    let hire_date = timestamp((2000, 1, 3), (0, 0))?;
    let mut employees = Vec::with_capacity(EMPLOYEES.len());
    for seed in EMPLOYEES {
        let employee = uow
            .employees()
            .create_employee(NewEmployee {
                first_name: seed.first_name.to_string(),
                last_name: seed.last_name.to_string(),
                middle_name: seed.middle_name.map(str::to_string),
                job_title: seed.job_title.to_string(),
                department_id: departments[seed.department].id,
                manager_id: None,
                hire_date,
                salary: seed.salary,
                address_id: seed.address.map(|address| addresses[address].id),
            })
            .await?;
        employees.push(employee);
    }

    for (seed, employee) in EMPLOYEES.iter().zip(employees.clone()) {
        if let Some(manager) = seed.manager {
            uow.employees()
                .set_manager(employee, Some(employees[manager].id))
                .await?;
        }
    }

    for (department, manager) in DEPARTMENT_MANAGERS {
        uow.departments()
            .set_manager(departments[*department].clone(), employees[*manager].id)
            .await?;
    }

    let mut projects = Vec::with_capacity(PROJECTS.len());
    for (name, description, (year, month, day, hour, minute), end) in PROJECTS {
        let start_date = timestamp((*year, *month, *day), (*hour, *minute))?;
        let end_date = match end {
            Some(date) => Some(timestamp(*date, (0, 0))?),
            None => None,
        };
        let project = uow
            .projects()
            .create_project(NewProject {
                name: name.to_string(),
                description: Some(description.to_string()),
                start_date,
                end_date,
            })
            .await?;
        projects.push(project);
    }

    for (employee, project) in ASSIGNMENTS {
        uow.employee_projects()
            .link(employees[*employee].id, projects[*project].id)
            .await?;
    }

    uow.commit().await?;

    let summary = SeedSummary {
        towns: towns.len(),
        addresses: addresses.len(),
        departments: departments.len(),
        employees: employees.len(),
        projects: projects.len(),
        assignments: ASSIGNMENTS.len(),
    };
    info!(?summary, "seeded demo dataset");
    Ok(summary)
}
