use super::*;

#[test]
fn healthcare_filter_yields_only_healthcare_records() {
    let filtered = filter_ngos(all_ngos(), CategoryFilter::Only(NgoCategory::Healthcare));
    assert_eq!(filtered.len(), 1);
    assert!(
        filtered
            .iter()
            .all(|ngo| ngo.category == NgoCategory::Healthcare)
    );
    assert_eq!(filtered[0].name, "Mumbai Health Care Initiative");
}

#[test]
fn all_filter_yields_every_record_in_order() {
    let filtered = filter_ngos(all_ngos(), CategoryFilter::All);
    let ids: Vec<u32> = filtered.iter().map(|ngo| ngo.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn filter_on_empty_list_is_empty() {
    assert!(filter_ngos(&[], CategoryFilter::Only(NgoCategory::Education)).is_empty());
}

#[test]
fn each_category_matches_exactly_one_mock_record() {
    for category in NgoCategory::ALL {
        let filtered = filter_ngos(all_ngos(), CategoryFilter::Only(category));
        assert_eq!(filtered.len(), 1, "{category}");
    }
}

#[test]
fn category_parses_labels_case_insensitively() {
    assert_eq!("Water & Sanitation".parse::<NgoCategory>(), Ok(NgoCategory::WaterSanitation));
    assert_eq!(" healthcare ".parse::<NgoCategory>(), Ok(NgoCategory::Healthcare));
    assert_eq!(
        "Sports".parse::<NgoCategory>(),
        Err(CatalogError::UnknownCategory("Sports".into()))
    );
}

#[test]
fn category_filter_from_label_handles_all_sentinel() {
    assert_eq!(CategoryFilter::from_label("All"), Ok(CategoryFilter::All));
    assert_eq!(CategoryFilter::from_label("all"), Ok(CategoryFilter::All));
    assert_eq!(
        CategoryFilter::from_label("Women Empowerment"),
        Ok(CategoryFilter::Only(NgoCategory::WomenEmpowerment))
    );
    assert!(CategoryFilter::from_label("").is_err());
}

#[test]
fn category_filter_options_start_with_all() {
    let labels: Vec<&str> = CategoryFilter::options()
        .map(CategoryFilter::label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "All",
            "Education",
            "Healthcare",
            "Water & Sanitation",
            "Women Empowerment",
        ]
    );
}

#[test]
fn default_ngo_is_first_record() {
    assert_eq!(default_ngo().id, all_ngos()[0].id);
}

#[test]
fn find_ngo_returns_none_for_unknown_id() {
    assert_eq!(find_ngo(2).map(|ngo| ngo.name), Some("Clean Water Mumbai"));
    assert!(find_ngo(99).is_none());
}

#[test]
fn donate_href_carries_ngo_query() {
    assert_eq!(find_ngo(3).expect("ngo").donate_href(), "/donate?ngo=3");
}

#[test]
fn record_serializes_category_label() {
    let json = serde_json::to_value(find_ngo(2).expect("ngo")).expect("serialize");
    assert_eq!(json["category"], "Water & Sanitation");
    assert_eq!(json["coordinates"]["lat"], 19.0596);
    assert_eq!(json["urgent_needs"][0], "Water Filters");
}
