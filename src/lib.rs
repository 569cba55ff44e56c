//! Interactive orthographic world globe drawn on a 2D canvas.
//!
//! The geometry core (`core`, `globe`, `scene`, `input`) is plain Rust and
//! runs anywhere; the browser shell below it is only built for `wasm32`.

pub mod constants;
pub mod core;
pub mod globe;
pub mod input;
pub mod scene;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

pub use globe::{FeatureSelection, Globe, GlobeConfig};

#[cfg(target_arch = "wasm32")]
pub use web_entry::{mount_globe, start, GlobeHandle};

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::{GEOMETRY_URL, TOPOLOGY_OBJECT};
    use crate::core::GeoCollection;
    use crate::frame::FrameContext;
    use crate::{dom, events, fetch, overlay, Globe, GlobeConfig};
    use instant::Instant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("globe-web starting");
        Ok(())
    }

    /// Handle returned to the embedding page.
    #[wasm_bindgen]
    pub struct GlobeHandle {
        frame: Rc<RefCell<FrameContext>>,
    }

    #[wasm_bindgen]
    impl GlobeHandle {
        /// Push the page's current selection; `null` clears it.
        #[wasm_bindgen(js_name = setSelectedId)]
        pub fn set_selected_id(&self, id: Option<String>) {
            let mut frame = self.frame.borrow_mut();
            if frame.globe.set_selected_id(id) {
                frame.paint();
            }
        }

        /// Stop reacting to events and ignore a geometry fetch still in flight.
        pub fn unmount(&self) {
            self.frame.borrow_mut().mounted = false;
            if let Some(document) = dom::window_document() {
                overlay::hide(&document);
            }
            log::info!("[globe] unmounted");
        }
    }

    /// Mount the globe on `<canvas id=canvas_id>`. `on_country_select` is
    /// called as `(name, id)` whenever a country is clicked.
    #[wasm_bindgen(js_name = mountGlobe)]
    pub fn mount_globe(
        canvas_id: &str,
        on_country_select: js_sys::Function,
    ) -> Result<GlobeHandle, JsValue> {
        mount(canvas_id, on_country_select).map_err(|e| JsValue::from_str(&format!("{e:?}")))
    }

    fn mount(canvas_id: &str, on_select: js_sys::Function) -> anyhow::Result<GlobeHandle> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas = dom::canvas_by_id(&document, canvas_id)?;
        let ctx = dom::context_2d(&canvas)?;
        dom::prepare_canvas_style(&canvas);
        overlay::ensure_caption(&document, &canvas);

        let url = dom::data_attr(&canvas, "data-geometry-url")
            .unwrap_or_else(|| GEOMETRY_URL.to_string());
        let object = dom::data_attr(&canvas, "data-topology-object")
            .unwrap_or_else(|| TOPOLOGY_OBJECT.to_string());

        let globe = Globe::new(GlobeConfig::default());
        let icon = dom::load_image(&globe.config().marker.icon_href);
        let frame = Rc::new(RefCell::new(FrameContext {
            globe,
            canvas: canvas.clone(),
            ctx,
            icon,
            on_select,
            mounted: true,
        }));
        frame.borrow_mut().resize();

        events::wire_resize(frame.clone());
        events::wire_pointer_handlers(frame.clone());
        events::wire_icon_load(frame.clone());

        let frame_load = frame.clone();
        spawn_local(async move {
            let t0 = Instant::now();
            let result = fetch::fetch_text(&url)
                .await
                .and_then(|text| GeoCollection::from_json_str(&text, &object).map_err(Into::into));
            match result {
                Ok(collection) => {
                    log::info!(
                        "[geo] loaded {} features from {} in {} ms",
                        collection.len(),
                        url,
                        t0.elapsed().as_millis()
                    );
                    let mut frame = frame_load.borrow_mut();
                    if !frame.is_attached() {
                        log::info!("[geo] surface detached before load; skipping draw");
                        return;
                    }
                    if frame.globe.set_features(collection) {
                        frame.paint();
                    }
                }
                Err(e) => log::warn!("[geo] geometry unavailable, globe stays blank: {:?}", e),
            }
        });

        log::info!("[globe] mounted on #{}", canvas_id);
        Ok(GlobeHandle { frame })
    }
}
