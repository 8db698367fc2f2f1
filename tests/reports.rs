use softuni_hr::{
    cli::Command,
    commands::execute,
    db::dao::{DaoContext, DaoScope},
    error::AppError,
    services::{ServiceContext, TargetKey},
    test_helpers::{memory_db, seeded_db},
};

async fn run(command: Command) -> String {
    let (_db, services) = seeded_db().await.expect("seed database");
    execute(&services, &command).await.expect("command should succeed")
}

#[tokio::test]
async fn employees_full_lists_everyone_by_id() {
    let output = run(Command::EmployeesFull).await;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 17);
    assert_eq!(lines[0], "Guy Gilbert R Production Technician 12500.00");
    assert_eq!(lines[2], "Roberto Tamburello  Engineering Manager 43300.00");
    assert_eq!(lines[16], "Taylor Maxwell R Production Supervisor 25000.00");
}

#[tokio::test]
async fn salary_over_threshold() {
    let output = run(Command::SalaryOver { threshold: 50_000.0 }).await;
    assert_eq!(output, "Dylan - 50500.00\nTerri - 63500.00\n");
}

#[tokio::test]
async fn department_employees_cheapest_first() {
    let output = run(Command::DepartmentEmployees {
        department: "Research and Development".to_string(),
    })
    .await;
    assert_eq!(
        output,
        "Gigi Matthews from Research and Development - $40900.00\n\
         Michael Raheem from Research and Development - $42500.00\n\
         Dylan Miller from Research and Development - $50500.00\n"
    );

    let unknown = run(Command::DepartmentEmployees {
        department: "Nowhere".to_string(),
    })
    .await;
    assert_eq!(unknown, "");
}

#[tokio::test]
async fn new_address_then_addresses_by_employee() {
    let output = run(Command::NewAddress {
        last_name: "Nakov".to_string(),
        text: "Vitoshka 15".to_string(),
        town_id: 4,
        limit: 10,
    })
    .await;
    assert_eq!(
        output,
        "Vitoshka 15\n\
         163 Nishava Str, ent A, apt. 1\n\
         3067 Maya\n\
         3067 Maya\n\
         2947 Vine Lane\n\
         2947 Vine Lane\n\
         2284 Azalea Avenue\n\
         2284 Azalea Avenue\n\
         2284 Azalea Avenue\n\
         1343 Prospect St\n"
    );
}

#[tokio::test]
async fn employees_in_period_with_managers_and_projects() {
    let output = run(Command::EmployeesInPeriod {
        from: 2001,
        to: 2003,
        limit: 10,
    })
    .await;
    assert_eq!(
        output,
        "Guy Gilbert - Manager: Samantha Smith\n\
         --Cycling Cap - 6/1/2001 12:00:00 AM - 6/1/2003 12:00:00 AM\n\
         --Hitch Rack - 9/1/2006 3:45:00 PM - not finished\n\
         Roberto Tamburello - Manager: Terri Duffy\n\
         --Classic Vest - 6/1/2003 12:00:00 AM - not finished\n\
         --Cycling Cap - 6/1/2001 12:00:00 AM - 6/1/2003 12:00:00 AM\n\
         Rob Walters - Manager: Roberto Tamburello\n\
         --Cycling Cap - 6/1/2001 12:00:00 AM - 6/1/2003 12:00:00 AM\n\
         --Half-Finger Gloves - 6/1/2005 12:00:00 AM - not finished\n\
         Gigi Matthews - Manager: Dylan Miller\n\
         --Classic Vest - 6/1/2003 12:00:00 AM - not finished\n\
         --Cycling Cap - 6/1/2001 12:00:00 AM - 6/1/2003 12:00:00 AM\n\
         Michael Raheem - Manager: Dylan Miller\n\
         --Full-Finger Gloves - 6/1/2002 12:00:00 AM - 6/1/2003 12:00:00 AM\n"
    );
}

#[tokio::test]
async fn employees_in_period_honours_the_limit_and_rejects_reversed_ranges() {
    let limited = run(Command::EmployeesInPeriod {
        from: 2001,
        to: 2003,
        limit: 1,
    })
    .await;
    assert!(limited.starts_with("Guy Gilbert - Manager: Samantha Smith\n"));
    assert_eq!(limited.lines().count(), 3);

    let (_db, services) = seeded_db().await.expect("seed database");
    let err = execute(
        &services,
        &Command::EmployeesInPeriod {
            from: 2004,
            to: 2001,
            limit: 10,
        },
    )
    .await
    .expect_err("reversed range");
    assert!(matches!(err, AppError::Validation(_)), "{err}");
}

#[tokio::test]
async fn addresses_ranked_by_residents() {
    let output = run(Command::AddressesByTown { limit: 10 }).await;
    assert_eq!(
        output,
        "2284 Azalea Avenue, Redmond - 3 employees\n\
         2947 Vine Lane, Bellevue - 2 employees\n\
         3067 Maya, Sofia - 2 employees\n\
         108 Lakeside Court, Seattle - 1 employees\n\
         1343 Prospect St, Seattle - 1 employees\n\
         163 Nishava Str, ent A, apt. 1, Sofia - 1 employees\n\
         1648 Eastgate Lane, Seattle - 0 employees\n"
    );
}

#[tokio::test]
async fn employee_with_sorted_projects() {
    let output = run(Command::Employee { id: 3 }).await;
    assert_eq!(
        output,
        "Roberto Tamburello - Engineering Manager\nClassic Vest\nCycling Cap\n"
    );
}

#[tokio::test]
async fn missing_employee_is_not_found() {
    let (_db, services) = seeded_db().await.expect("seed database");
    let err = execute(&services, &Command::Employee { id: 147 })
        .await
        .expect_err("employee 147 is not seeded");
    assert!(matches!(err, AppError::NotFound(_)), "{err}");
}

#[tokio::test]
async fn departments_over_threshold_with_members() {
    let output = run(Command::DepartmentsOver { min_employees: 5 }).await;
    assert_eq!(
        output,
        "Production \u{2013} Samantha Smith\n\
         Guy Gilbert - Production Technician\n\
         Jo Brown - Production Supervisor\n\
         JoLynn Dobney - Production Supervisor\n\
         Samantha Smith - Production Supervisor\n\
         Sandra Reategui - Production Technician\n\
         Taylor Maxwell - Production Supervisor\n"
    );
}

#[tokio::test]
async fn departments_sorted_by_size_then_name() {
    let output = run(Command::DepartmentsOver { min_employees: 2 }).await;
    let headers: Vec<&str> = output.lines().filter(|line| line.contains('\u{2013}')).collect();
    assert_eq!(
        headers,
        [
            "Engineering \u{2013} Terri Duffy",
            "Marketing \u{2013} David Bradley",
            "Research and Development \u{2013} Dylan Miller",
            "Production \u{2013} Samantha Smith",
        ]
    );
}

#[tokio::test]
async fn latest_projects_sorted_by_name() {
    let output = run(Command::LatestProjects { limit: 10 }).await;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 18);
    let names: Vec<&str> = lines.iter().step_by(3).copied().collect();
    assert_eq!(
        names,
        [
            "Classic Vest",
            "Cycling Cap",
            "Full-Finger Gloves",
            "Half-Finger Gloves",
            "Hitch Rack",
            "LL Mountain Frame",
        ]
    );
    assert_eq!(lines[14], "9/1/2006 3:45:00 PM");
    assert_eq!(lines[17], "3/15/2004 9:30:00 AM");
}

#[tokio::test]
async fn latest_projects_keeps_only_the_most_recent() {
    let output = run(Command::LatestProjects { limit: 2 }).await;
    let names: Vec<&str> = output.lines().step_by(3).collect();
    assert_eq!(names, ["Half-Finger Gloves", "Hitch Rack"]);
}

#[tokio::test]
async fn increase_salaries_prints_adjusted_employees() {
    let output = run(Command::IncreaseSalaries {
        departments: vec![
            "Engineering".to_string(),
            "Tool Design".to_string(),
            "Marketing".to_string(),
            "Information Services".to_string(),
        ],
        factor: 1.12,
    })
    .await;
    assert_eq!(
        output,
        "David Bradley ($42000.00)\n\
         Kevin Brown ($15120.00)\n\
         Rob Walters ($33376.00)\n\
         Roberto Tamburello ($48496.00)\n\
         Sariya Harnpadoungsataya ($16128.00)\n\
         Svetlin Nakov ($53760.00)\n\
         Terri Duffy ($71120.00)\n\
         Thierry D'Hers ($28000.00)\n"
    );
}

#[tokio::test]
async fn name_prefix_is_case_insensitive() {
    let expected = "Samantha Smith - Production Supervisor - ($25000.00)\n\
                    Sandra Reategui - Production Technician - ($9500.00)\n\
                    Sariya Harnpadoungsataya - Marketing Specialist - ($14400.00)\n";
    assert_eq!(run(Command::NamePrefix { prefix: "Sa".to_string() }).await, expected);
    assert_eq!(run(Command::NamePrefix { prefix: "sA".to_string() }).await, expected);
    assert_eq!(run(Command::NamePrefix { prefix: "S%".to_string() }).await, "");
}

#[tokio::test]
async fn delete_project_then_list_remaining() {
    let output = run(Command::DeleteProject {
        target: TargetKey::Id(2),
        limit: 10,
    })
    .await;
    assert_eq!(
        output,
        "Classic Vest\nFull-Finger Gloves\nHalf-Finger Gloves\nLL Mountain Frame\nHitch Rack\n"
    );
}

#[tokio::test]
async fn delete_project_lists_remaining_projects_for_any_limit() {
    let (db, services) = seeded_db().await.expect("seed database");
    let daos = DaoContext::new(&db);

    let output = execute(
        &services,
        &Command::DeleteProject {
            target: TargetKey::Id(2),
            limit: 101,
        },
    )
    .await
    .expect("limits above a page size are accepted");
    assert_eq!(
        output,
        "Classic Vest\nFull-Finger Gloves\nHalf-Finger Gloves\nLL Mountain Frame\nHitch Rack\n"
    );

    let output = execute(
        &services,
        &Command::DeleteProject {
            target: TargetKey::Id(3),
            limit: 0,
        },
    )
    .await
    .expect("a zero limit lists nothing");
    assert_eq!(output, "");
    assert_eq!(daos.projects().count(|query| query).await.expect("count"), 4);
}

#[tokio::test]
async fn remove_town_reports_deleted_addresses() {
    let output = run(Command::RemoveTown {
        target: TargetKey::Name("Seattle".to_string()),
    })
    .await;
    assert_eq!(output, "3 addresses in Seattle were deleted\n");
}

#[tokio::test]
async fn reports_on_an_empty_database_are_empty() {
    let db = memory_db().await.expect("memory database");
    let services = ServiceContext::new(&db);

    for command in [
        Command::EmployeesFull,
        Command::AddressesByTown { limit: 10 },
        Command::DepartmentsOver { min_employees: 0 },
        Command::LatestProjects { limit: 10 },
    ] {
        let output = execute(&services, &command).await.expect("empty report");
        assert_eq!(output, "", "{command:?}");
    }
}

#[tokio::test]
async fn seed_command_summarises_the_dataset() {
    let db = memory_db().await.expect("memory database");
    let services = ServiceContext::new(&db);

    let output = execute(&services, &Command::Seed).await.expect("seed");
    assert_eq!(
        output,
        "seeded 5 towns, 7 addresses, 7 departments, 17 employees, 6 projects, 11 assignments\n"
    );
}
