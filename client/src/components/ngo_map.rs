//! Interactive Leaflet map of the filtered NGO list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The map is a view of `DirectoryState`: markers are rebuilt whenever the
//! category filter changes and restyled whenever the selection changes.
//! Clicking a marker or an entry in the NGO card list beside the map writes
//! the selection back into the same signal.
//!
//! ARCHITECTURE
//! ============
//! Leaflet objects are not reactive, so the marker layer lives in an
//! `Rc<RefCell<Option<…>>>` shared by two effects. The overlay and card list
//! are plain markup rendered on the server; the map itself appears on
//! hydration.

use leptos::prelude::*;

use crate::state::directory::DirectoryState;
use crate::util::markers::MAP_CENTER;

#[component]
pub fn NgoMap(directory: RwSignal<DirectoryState>) -> impl IntoView {
    let map_ref = NodeRef::<leptos::html::Div>::new();
    let filter = Memo::new(move |_| directory.with(|state| state.filter));
    let selected_id = Memo::new(move |_| directory.with(DirectoryState::selected_id));
    let visible = Memo::new(move |_| directory.with(DirectoryState::visible));
    let map_ready = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::util::leaflet::{LeafletSurface, is_available};
        use crate::util::markers::MarkerLayer;

        let layer: Rc<RefCell<Option<MarkerLayer<LeafletSurface>>>> = Rc::new(RefCell::new(None));
        let on_select = Callback::new(move |id: u32| {
            log::debug!("map marker clicked: ngo {id}");
            directory.update(|state| {
                state.select(id);
            });
        });

        {
            let layer = Rc::clone(&layer);
            Effect::new(move || {
                let Some(host) = map_ref.get() else {
                    return;
                };
                let _ = filter.get();
                let mut slot = layer.borrow_mut();
                if slot.is_none() {
                    if !is_available() {
                        log::warn!("leaflet is not loaded; map disabled");
                        return;
                    }
                    *slot = Some(MarkerLayer::new(LeafletSurface::mount(&host, on_select)));
                    map_ready.set(true);
                }
                if let Some(markers) = slot.as_mut() {
                    markers.replace(&visible.get_untracked(), selected_id.get_untracked());
                    log::debug!("map markers rebuilt: {}", markers.len());
                }
            });
        }

        Effect::new(move || {
            let selected = selected_id.get();
            if let Some(markers) = layer.borrow_mut().as_mut() {
                markers.restyle(selected);
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = filter;

    let selected = move || directory.with(DirectoryState::selected);

    view! {
        <div class="map">
            <div class="map__canvas" node_ref=map_ref></div>

            <Show when=move || !map_ready.get()>
                <div class="map__placeholder">
                    <h3 class="text-primary">"Mumbai, Maharashtra"</h3>
                    <p class="text-muted">{format!("{:.4}° N, {:.4}° E", MAP_CENTER.0, MAP_CENTER.1)}</p>
                </div>
            </Show>

            <div class="map__legend">
                <div class="map__legend-title">
                    <span class="dot dot--primary"></span>
                    "NGO Locations"
                </div>
                <p class="text-muted text-small">{move || format!("{} NGOs in Mumbai", visible.get().len())}</p>
            </div>

            <div class="map__quick-info card">
                <div>
                    <h4 class="text-primary text-strong">{move || selected().name}</h4>
                    <p class="text-muted text-small">
                        {move || {
                            let ngo = selected();
                            format!("{} • {}", ngo.location, ngo.distance)
                        }}
                    </p>
                    <div class="map__quick-meta">
                        <span class="badge badge--secondary">{move || selected().category.label()}</span>
                        <span class="text-muted text-small">{move || selected().beneficiaries}</span>
                    </div>
                </div>
                <a href=move || selected().donate_href() class="btn btn--primary btn--sm">
                    "♥ Donate"
                </a>
            </div>
        </div>

        <div class="ngo-list">
            <For
                each=move || visible.get()
                key=|ngo| ngo.id
                children=move |ngo| {
                    let id = ngo.id;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if selected_id.get() == id {
                                    "ngo-list__item ngo-list__item--selected"
                                } else {
                                    "ngo-list__item"
                                }
                            }
                            aria-pressed=move || (selected_id.get() == id).to_string()
                            on:click=move |_| {
                                directory.update(|state| {
                                    state.select(id);
                                });
                            }
                        >
                            <span class="text-strong">{ngo.name}</span>
                            <span class="badge badge--secondary">{ngo.category.label()}</span>
                            <span class="text-muted text-small">
                                {format!("{} • {}", ngo.location, ngo.distance)}
                            </span>
                        </button>
                    }
                }
            />
        </div>
    }
}
