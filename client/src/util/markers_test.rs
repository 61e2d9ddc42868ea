use super::*;
use catalog::ngo::{CategoryFilter, NgoCategory, all_ngos, filter_ngos};
use std::collections::BTreeMap;

use crate::state::directory::DirectoryState;

#[derive(Default)]
struct RecordingSurface {
    next: usize,
    live: BTreeMap<usize, (u32, MarkerStyle)>,
    removed: usize,
}

impl RecordingSurface {
    fn emphasized(&self) -> Vec<u32> {
        self.live
            .values()
            .filter(|(_, style)| style.is_emphasized())
            .map(|(id, _)| *id)
            .collect()
    }
}

impl MarkerSurface for RecordingSurface {
    type Handle = usize;

    fn add_marker(&mut self, ngo: &'static NgoRecord, style: MarkerStyle) -> usize {
        self.next += 1;
        self.live.insert(self.next, (ngo.id, style));
        self.next
    }

    fn remove_marker(&mut self, handle: usize) {
        self.live.remove(&handle);
        self.removed += 1;
    }

    fn restyle_marker(&mut self, handle: &usize, style: MarkerStyle) {
        if let Some(entry) = self.live.get_mut(handle) {
            entry.1 = style;
        }
    }
}

fn visible(filter: CategoryFilter) -> Vec<&'static NgoRecord> {
    filter_ngos(all_ngos(), filter)
}

#[test]
fn marker_style_for_selection_uses_distinct_color_and_size() {
    let selected = MarkerStyle::for_selection(true);
    let normal = MarkerStyle::for_selection(false);
    assert_eq!(
        selected,
        MarkerStyle {
            color: "#dc2626",
            size: 40,
        }
    );
    assert_eq!(
        normal,
        MarkerStyle {
            color: "#059669",
            size: 32,
        }
    );
    assert_eq!(selected.anchor(), 20);
    assert_eq!(normal.anchor(), 16);
}

#[test]
fn icon_html_embeds_color_and_size() {
    let html = MarkerStyle::for_selection(true).icon_html();
    assert!(html.contains("width:40px;height:40px"));
    assert!(html.contains("background-color:#dc2626"));
}

#[test]
fn escape_html_replaces_markup_characters() {
    assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    assert_eq!(escape_html("Women's"), "Women&#39;s");
}

#[test]
fn popup_html_contains_record_fields_and_donate_link() {
    let ngo = &all_ngos()[1];
    let html = popup_html(ngo);
    assert!(html.contains("Clean Water Mumbai"));
    assert!(html.contains("Water &amp; Sanitation"));
    assert!(html.contains("4.1 km"));
    assert!(html.contains("15,000+ families"));
    assert!(html.contains("href=\"/donate?ngo=2\""));
}

#[test]
fn replace_places_one_marker_per_record_with_one_emphasized() {
    let mut layer = MarkerLayer::new(RecordingSurface::default());
    layer.replace(&visible(CategoryFilter::All), 1);
    assert_eq!(layer.marker_ids(), vec![1, 2, 3, 4]);
    assert_eq!(layer.surface().emphasized(), vec![1]);
}

#[test]
fn replace_removes_previous_markers_on_filter_change() {
    let mut layer = MarkerLayer::new(RecordingSurface::default());
    layer.replace(&visible(CategoryFilter::All), 1);
    layer.replace(&visible(CategoryFilter::Only(NgoCategory::Healthcare)), 1);

    assert_eq!(layer.surface().removed, 4);
    assert_eq!(layer.marker_ids(), vec![3]);
    assert_eq!(layer.surface().live.len(), 1);
    assert!(layer.surface().emphasized().is_empty());
}

#[test]
fn restyle_moves_emphasis_to_new_selection() {
    let mut layer = MarkerLayer::new(RecordingSurface::default());
    layer.replace(&visible(CategoryFilter::All), 1);
    for id in [4, 2, 3] {
        layer.restyle(id);
        assert_eq!(layer.surface().emphasized(), vec![id]);
    }
    assert_eq!(layer.surface().removed, 0);
}

#[test]
fn empty_layer_reports_empty() {
    let mut layer = MarkerLayer::new(RecordingSurface::default());
    assert!(layer.is_empty());
    layer.replace(&[], 1);
    assert_eq!(layer.len(), 0);
}

#[test]
fn card_selection_moves_marker_emphasis_after_mount() {
    let mut directory = DirectoryState::new();
    let mut layer = MarkerLayer::new(RecordingSurface::default());
    layer.replace(&directory.visible(), directory.selected_id());

    for ngo in directory.visible() {
        assert!(directory.select(ngo.id));
        layer.restyle(directory.selected_id());
        assert_eq!(layer.surface().emphasized(), vec![ngo.id]);
    }
    assert_eq!(layer.len(), all_ngos().len());
}
