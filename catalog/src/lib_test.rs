use super::*;

#[test]
fn catalog_error_messages_name_the_bad_input() {
    assert_eq!(
        CatalogError::UnknownCategory("Sports".into()).to_string(),
        "unknown NGO category: Sports"
    );
    assert_eq!(
        CatalogError::UnknownStatus("paused".into()).to_string(),
        "unknown project status: paused"
    );
    assert_eq!(
        CatalogError::InvalidProjectId("abc".into()).to_string(),
        "invalid project id: abc"
    );
}

#[test]
fn ngo_ids_are_unique() {
    let ids: std::collections::HashSet<u32> = ngo::all_ngos().iter().map(|ngo| ngo.id).collect();
    assert_eq!(ids.len(), ngo::all_ngos().len());
}

#[test]
fn project_ids_are_unique() {
    let ids: std::collections::HashSet<u32> =
        project::all_projects().iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), project::all_projects().len());
}

#[test]
fn every_project_has_objectives_and_timeline() {
    for project in project::all_projects() {
        assert!(!project.objectives.is_empty(), "project {} has no objectives", project.id);
        assert!(!project.timeline.is_empty(), "project {} has no timeline", project.id);
        assert!(
            project.funding_raised <= project.funding_goal,
            "project {} overfunded",
            project.id
        );
    }
}

#[test]
fn featured_projects_point_at_real_projects() {
    for featured in content::FEATURED_PROJECTS {
        let project = project::find_project(featured.project_id).expect("featured project exists");
        assert_eq!(project.title, featured.title);
    }
}

#[test]
fn every_preset_amount_has_an_impact_example() {
    for amount in donation::PRESET_AMOUNTS {
        assert!(content::impact_for(amount).is_some(), "no impact text for ${amount}");
    }
    assert_eq!(content::impact_for(7), None);
}
