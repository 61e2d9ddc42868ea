//! Marker styling and lifecycle for the NGO map.
//!
//! DESIGN
//! ======
//! The map library is reached through [`MarkerSurface`], so the rules that
//! matter (one marker per visible record, a full rebuild on filter change,
//! exactly one emphasized marker) live in [`MarkerLayer`] and are tested
//! against a recording fake. The Leaflet surface is a thin adapter.

#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;

use catalog::ngo::NgoRecord;

pub const SELECTED_COLOR: &str = "#dc2626";
pub const DEFAULT_COLOR: &str = "#059669";
pub const SELECTED_SIZE: u32 = 40;
pub const DEFAULT_SIZE: u32 = 32;

/// Map centre (Mumbai) and initial zoom.
pub const MAP_CENTER: (f64, f64) = (19.076, 72.8777);
pub const MAP_ZOOM: u8 = 12;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const TILE_MAX_ZOOM: u8 = 19;

const PIN_PATH: &str =
    "M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: &'static str,
    /// Icon edge length in pixels.
    pub size: u32,
}

impl MarkerStyle {
    #[must_use]
    pub fn for_selection(selected: bool) -> Self {
        if selected {
            Self {
                color: SELECTED_COLOR,
                size: SELECTED_SIZE,
            }
        } else {
            Self {
                color: DEFAULT_COLOR,
                size: DEFAULT_SIZE,
            }
        }
    }

    #[must_use]
    pub fn is_emphasized(self) -> bool {
        self.size == SELECTED_SIZE
    }

    /// Icon anchor, centred on the circle.
    #[must_use]
    pub fn anchor(self) -> u32 {
        self.size / 2
    }

    /// Inner HTML for a `divIcon`.
    #[must_use]
    pub fn icon_html(self) -> String {
        format!(
            "<div class=\"map-pin\" style=\"width:{size}px;height:{size}px;background-color:{color};\">\
             <svg width=\"16\" height=\"16\" viewBox=\"0 0 24 24\" fill=\"white\"><path d=\"{PIN_PATH}\"/></svg>\
             </div>",
            size = self.size,
            color = self.color,
        )
    }
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Popup body bound to each marker.
#[must_use]
pub fn popup_html(ngo: &NgoRecord) -> String {
    format!(
        "<div class=\"map-popup\">\
         <h3 class=\"map-popup__title\">{name}</h3>\
         <p class=\"map-popup__text\">{description}</p>\
         <div class=\"map-popup__meta\"><span class=\"map-popup__tag\">{category}</span><span>{distance}</span></div>\
         <div class=\"map-popup__meta\">{beneficiaries}</div>\
         <a class=\"map-popup__cta\" href=\"{href}\">View Details &amp; Donate</a>\
         </div>",
        name = escape_html(ngo.name),
        description = escape_html(ngo.description),
        category = escape_html(ngo.category.label()),
        distance = escape_html(ngo.distance),
        beneficiaries = escape_html(ngo.beneficiaries),
        href = ngo.donate_href(),
    )
}

/// The drawing side of a map: whatever can place, drop, and recolor pins.
pub trait MarkerSurface {
    type Handle;

    fn add_marker(&mut self, ngo: &'static NgoRecord, style: MarkerStyle) -> Self::Handle;
    fn remove_marker(&mut self, handle: Self::Handle);
    fn restyle_marker(&mut self, handle: &Self::Handle, style: MarkerStyle);
}

/// Markers currently on a surface, keyed by NGO id in list order.
pub struct MarkerLayer<S: MarkerSurface> {
    surface: S,
    markers: Vec<(u32, S::Handle)>,
}

impl<S: MarkerSurface> MarkerLayer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            markers: Vec::new(),
        }
    }

    /// Remove every marker and create one per record.
    pub fn replace(&mut self, records: &[&'static NgoRecord], selected: u32) {
        for (_, handle) in self.markers.drain(..) {
            self.surface.remove_marker(handle);
        }
        for ngo in records {
            let style = MarkerStyle::for_selection(ngo.id == selected);
            let handle = self.surface.add_marker(ngo, style);
            self.markers.push((ngo.id, handle));
        }
    }

    /// Recolor in place so only `selected` is emphasized.
    pub fn restyle(&mut self, selected: u32) {
        for (id, handle) in &self.markers {
            self.surface.restyle_marker(handle, MarkerStyle::for_selection(*id == selected));
        }
    }

    #[must_use]
    pub fn marker_ids(&self) -> Vec<u32> {
        self.markers.iter().map(|(id, _)| *id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
