//! Leaflet bindings for the NGO map (hydrate build only).
//!
//! Leaflet is loaded as a global `L` by the document shell. Only the handful
//! of calls the map needs are bound here.

use leptos::callback::{Callable, Callback};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use catalog::ngo::NgoRecord;

use super::markers::{
    MAP_CENTER, MAP_ZOOM, MarkerStyle, MarkerSurface, TILE_ATTRIBUTION, TILE_MAX_ZOOM, TILE_URL,
    popup_html,
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Map)]
    pub type LeafletMap;

    #[wasm_bindgen(js_name = Marker)]
    pub type LeafletMarker;

    #[wasm_bindgen(js_name = TileLayer)]
    type LeafletTileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn create_map(element: &web_sys::HtmlElement, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn create_tile_layer(url: &str, options: &JsValue) -> LeafletTileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn create_marker(position: &JsValue, options: &JsValue) -> LeafletMarker;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn create_div_icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tile_layer_to(this: &LeafletTileLayer, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &LeafletMarker, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = setIcon)]
    fn set_icon(this: &LeafletMarker, icon: &JsValue);

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &LeafletMarker, html: &str);

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMarker, event: &str, handler: &Closure<dyn FnMut()>);

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMap, layer: &LeafletMarker);
}

/// Whether the Leaflet script has loaded.
pub fn is_available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false)
}

fn js_object(entries: &[(&str, JsValue)]) -> JsValue {
    let object = js_sys::Object::new();
    for (key, value) in entries {
        let _ = js_sys::Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object.into()
}

fn pair(a: f64, b: f64) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(a), &JsValue::from_f64(b)).into()
}

fn div_icon(style: MarkerStyle) -> JsValue {
    let size = f64::from(style.size);
    let anchor = f64::from(style.anchor());
    create_div_icon(&js_object(&[
        ("html", JsValue::from_str(&style.icon_html())),
        ("className", JsValue::from_str("custom-div-icon")),
        ("iconSize", pair(size, size)),
        ("iconAnchor", pair(anchor, anchor)),
    ]))
}

/// A placed marker plus the click closure that must outlive it.
pub struct LeafletPin {
    marker: LeafletMarker,
    _on_click: Closure<dyn FnMut()>,
}

/// [`MarkerSurface`] backed by a live Leaflet map.
pub struct LeafletSurface {
    map: LeafletMap,
    on_select: Callback<u32>,
}

impl LeafletSurface {
    /// Create the map inside `element` with OpenStreetMap tiles.
    pub fn mount(element: &web_sys::HtmlElement, on_select: Callback<u32>) -> Self {
        let map = create_map(
            element,
            &js_object(&[
                ("center", pair(MAP_CENTER.0, MAP_CENTER.1)),
                ("zoom", JsValue::from_f64(f64::from(MAP_ZOOM))),
                ("zoomControl", JsValue::TRUE),
            ]),
        );
        let tiles = create_tile_layer(
            TILE_URL,
            &js_object(&[
                ("attribution", JsValue::from_str(TILE_ATTRIBUTION)),
                ("maxZoom", JsValue::from_f64(f64::from(TILE_MAX_ZOOM))),
            ]),
        );
        tiles.add_tile_layer_to(&map);
        log::debug!("leaflet map mounted");
        Self { map, on_select }
    }
}

impl MarkerSurface for LeafletSurface {
    type Handle = LeafletPin;

    fn add_marker(&mut self, ngo: &'static NgoRecord, style: MarkerStyle) -> LeafletPin {
        let marker = create_marker(
            &pair(ngo.coordinates.lat, ngo.coordinates.lng),
            &js_object(&[("icon", div_icon(style))]),
        );
        marker.add_marker_to(&self.map);
        marker.bind_popup(&popup_html(ngo));

        let on_select = self.on_select;
        let id = ngo.id;
        let on_click = Closure::<dyn FnMut()>::new(move || on_select.run(id));
        marker.on("click", &on_click);

        LeafletPin {
            marker,
            _on_click: on_click,
        }
    }

    fn remove_marker(&mut self, handle: LeafletPin) {
        self.map.remove_layer(&handle.marker);
    }

    fn restyle_marker(&mut self, handle: &LeafletPin, style: MarkerStyle) {
        handle.marker.set_icon(&div_icon(style));
    }
}
