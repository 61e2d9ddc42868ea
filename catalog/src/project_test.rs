use super::*;

fn project(id: u32) -> &'static ProjectRecord {
    find_project(id).expect("project exists")
}

#[test]
fn funding_percentage_is_derived_from_goal_and_raised() {
    assert!((project(1).funding_percentage() - 70.0).abs() < f64::EPSILON);
    assert_eq!(project(1).rounded_percentage(), 70);
    assert_eq!(project(3).rounded_percentage(), 100);
    assert_eq!(project(4).rounded_percentage(), 30);
}

#[test]
fn funding_percentage_with_zero_goal_is_zero() {
    let mut record = *project(1);
    record.funding_goal = 0;
    assert!(record.funding_percentage().abs() < f64::EPSILON);
    assert_eq!(record.remaining(), 0);
}

#[test]
fn progress_width_is_clamped() {
    let mut record = *project(1);
    record.funding_raised = 80_000;
    assert!((record.progress_width() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn remaining_is_goal_minus_raised() {
    assert_eq!(project(1).remaining(), 15_000);
    assert_eq!(project(5).remaining(), 0);
}

#[test]
fn start_year_comes_from_parsed_start_date() {
    assert_eq!(project(3).start_year(), Some(2023));
    let mut record = *project(1);
    record.start_date = "soon";
    assert_eq!(record.start_year(), None);
    record.start_date = "2024-02-30";
    assert_eq!(record.start_year(), None);
}

#[test]
fn completed_filter_yields_only_agriculture_program() {
    let filtered = filter_projects(
        all_projects(),
        ProjectStatusFilter::Only(ProjectStatus::Completed),
    );
    let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![5]);
}

#[test]
fn active_filter_excludes_planning_and_completed() {
    let filtered = filter_projects(
        all_projects(),
        ProjectStatusFilter::Only(ProjectStatus::Active),
    );
    assert_eq!(filtered.len(), 4);
    assert!(filtered.iter().all(|p| p.status == ProjectStatus::Active));
}

#[test]
fn status_filter_options_and_labels() {
    let labels: Vec<&str> = ProjectStatusFilter::options()
        .map(ProjectStatusFilter::label)
        .collect();
    assert_eq!(labels, vec!["All Projects", "Active", "Planning", "Completed"]);
}

#[test]
fn status_parses_case_insensitively() {
    assert_eq!("planning".parse::<ProjectStatus>(), Ok(ProjectStatus::Planning));
    assert_eq!(
        "paused".parse::<ProjectStatus>(),
        Err(CatalogError::UnknownStatus("paused".into()))
    );
}

#[test]
fn parse_project_id_rejects_non_positive_and_garbage() {
    assert_eq!(parse_project_id("4"), Ok(4));
    assert!(parse_project_id("0").is_err());
    assert!(parse_project_id("-1").is_err());
    assert_eq!(parse_project_id("abc"), Err(CatalogError::InvalidProjectId("abc".into())));
}

#[test]
fn unknown_project_is_none() {
    assert!(find_project(42).is_none());
}

#[test]
fn display_date_formats_iso_dates() {
    assert_eq!(display_date("2024-01-15"), "Jan 15, 2024");
    assert_eq!(display_date("2023-09-01"), "Sep 1, 2023");
    assert_eq!(display_date("2024-13-01"), "2024-13-01");
    assert_eq!(display_date("tbd"), "tbd");
}

#[test]
fn display_date_rejects_impossible_calendar_dates() {
    assert_eq!(display_date("2024-02-31"), "2024-02-31");
    assert_eq!(display_date("2023-02-29"), "2023-02-29");
    assert_eq!(display_date("2024-02-29"), "Feb 29, 2024");
    assert!(parse_iso_date("2024-04-31").is_none());
}

#[test]
fn every_record_has_real_dates_in_order() {
    for record in all_projects() {
        let (Some(start), Some(end)) = (record.start(), record.end()) else {
            panic!("project {} has an unparseable date", record.id);
        };
        assert!(start <= end, "project {} ends before it starts", record.id);
    }
}

#[test]
fn timeline_phase_classes_follow_status() {
    assert_eq!(PhaseStatus::Completed.dot_class(), "timeline__dot timeline__dot--done");
    assert_eq!(PhaseStatus::InProgress.label(), "In Progress");
}

#[test]
fn project_serializes_status_and_phase_labels() {
    let json = serde_json::to_value(project(1)).expect("serialize");
    assert_eq!(json["status"], "Active");
    assert_eq!(json["category"], "Water & Sanitation");
    assert_eq!(json["timeline"][2]["status"], "In Progress");
}
