//! Animated pseudo-3D parametric curve rendered into an SVG polyline, with a
//! draggable vertical navigator and a play button.
//!
//! The model lives in `svg3d-core`; this crate wires it to the DOM.

pub use svg3d_core as model;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod widget;

#[cfg(target_arch = "wasm32")]
pub use bindings::*;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use std::rc::Rc;

    use js_sys::Function;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::Element;

    use svg3d_core::WidgetOptions;

    use crate::widget::GraphWidget;

    const INDEX_ATTRIBUTE: &str = "data-svg3d-index";

    #[wasm_bindgen]
    pub struct WidgetHandle {
        widget: Rc<GraphWidget>,
    }

    #[wasm_bindgen]
    impl WidgetHandle {
        pub fn ratio(&self) -> f64 {
            self.widget.ratio()
        }

        pub fn locked(&self) -> bool {
            self.widget.locked()
        }

        pub fn width(&self) -> f64 {
            self.widget.width()
        }

        pub fn height(&self) -> f64 {
            self.widget.height()
        }

        /// Re-renders with an optional incremental delta, then calls
        /// `callback` synchronously.
        pub fn render(&self, delta: Option<f64>, callback: Option<Function>) {
            self.widget.render(delta.unwrap_or(0.0));
            if let Some(callback) = callback {
                if let Err(err) = callback.call0(&JsValue::NULL) {
                    gloo::console::warn!("svg3d: render callback failed", err);
                }
            }
        }

        /// Same as clicking the play button. Returns false while a run is in
        /// flight.
        pub fn animate(&self) -> bool {
            self.widget.start_animation()
        }
    }

    #[wasm_bindgen]
    pub fn mount(host: JsValue, angular_frequency: Option<u32>) -> Option<WidgetHandle> {
        let options = WidgetOptions::with_angular_frequency(angular_frequency);
        GraphWidget::mount(&host, &options).map(|widget| WidgetHandle { widget })
    }

    #[wasm_bindgen(js_name = mountWithOptions)]
    pub fn mount_with_options(host: JsValue, options_json: &str) -> Option<WidgetHandle> {
        let options = match WidgetOptions::from_json(options_json) {
            Ok(options) => options,
            Err(err) => {
                gloo::console::warn!("svg3d: bad options", err.to_string());
                return None;
            }
        };
        GraphWidget::mount(&host, &options).map(|widget| WidgetHandle { widget })
    }

    /// Mounts a widget into every element matching `selector`, reading the
    /// angular frequency from `data-svg3d-index`. Returns how many mounted.
    #[wasm_bindgen(js_name = mountAll)]
    pub fn mount_all(selector: &str) -> u32 {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return 0;
        };
        let Ok(nodes) = document.query_selector_all(selector) else {
            gloo::console::warn!("svg3d: invalid selector", selector);
            return 0;
        };
        let mut mounted = 0;
        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let angular_frequency = element
                .get_attribute(INDEX_ATTRIBUTE)
                .and_then(|raw| raw.trim().parse::<u32>().ok());
            let options = WidgetOptions::with_angular_frequency(angular_frequency);
            if GraphWidget::mount(element.as_ref(), &options).is_some() {
                mounted += 1;
            }
        }
        mounted
    }
}
