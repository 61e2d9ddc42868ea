use super::*;

#[test]
fn resolve_project_finds_known_id() {
    let project = resolve_project(Some("1")).map(|project| project.title);
    assert_eq!(project, Some("Clean Water Initiative"));
}

#[test]
fn resolve_project_rejects_unknown_and_malformed_ids() {
    assert!(resolve_project(Some("99")).is_none());
    assert!(resolve_project(Some("0")).is_none());
    assert!(resolve_project(Some("abc")).is_none());
    assert!(resolve_project(Some("-1")).is_none());
    assert!(resolve_project(None).is_none());
}
