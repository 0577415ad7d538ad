use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

use svg3d_core::{AnimationFrame, FrameScheduler, GraphModel, WidgetOptions};

use crate::dom::{create_div, create_svg_element, px, set_attributes, set_styles, SVG_NS};

const WRAPPER_CLASS: &str = "widget-wrapper";
const LOCKED_CLASS: &str = "locked";
const NAVIGATOR_CLASS: &str = "navigator-wrapper";
const CARET_CLASSES: [&str; 2] = ["navigator-caret", "draggable"];
const ANIM_BUTTON_CLASS: &str = "anim-btn";

thread_local! {
    static MOUNTED: RefCell<Vec<Rc<GraphWidget>>> = RefCell::new(Vec::new());
}

fn active_listener_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

pub(crate) struct GraphWidget {
    wrapper: HtmlElement,
    svg: Element,
    graph: Element,
    model: RefCell<GraphModel>,
    move_listener: RefCell<Option<EventListener>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl GraphWidget {
    /// Builds the widget inside `host`. Any failure logs a warning, leaves the
    /// host as it was and returns `None`.
    pub(crate) fn mount(host: &JsValue, options: &WidgetOptions) -> Option<Rc<Self>> {
        let Some(host) = host.dyn_ref::<Element>() else {
            gloo::console::warn!("svg3d: host is not an element");
            return None;
        };
        let document = host
            .owner_document()
            .or_else(|| web_sys::window().and_then(|window| window.document()))?;
        let wrapper = create_div(&document, &[WRAPPER_CLASS], &[])?;
        host.append_child(&wrapper).ok()?;

        let width = wrapper.offset_width();
        let model = match GraphModel::new(width as i64, options) {
            Ok(model) => model,
            Err(err) => {
                gloo::console::warn!("svg3d: mount aborted", err.to_string());
                let _ = host.remove_child(&wrapper);
                return None;
            }
        };
        let canvas = build_canvas(&document, &model, options);
        let Some((svg, graph)) = canvas else {
            gloo::console::warn!("svg3d: could not create svg canvas");
            let _ = host.remove_child(&wrapper);
            return None;
        };

        let widget = Rc::new(Self {
            wrapper,
            svg,
            graph,
            model: RefCell::new(model),
            move_listener: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        widget.draw_layout();
        widget.render(0.0);
        if widget.draw_navigator(&document).is_none() {
            gloo::console::warn!("svg3d: navigator controls unavailable");
        }
        gloo::console::log!(
            "svg3d: mounted",
            widget.width(),
            widget.model.borrow().geometry().max_points as u32
        );
        MOUNTED.with(|mounted| mounted.borrow_mut().push(Rc::clone(&widget)));
        Some(widget)
    }

    pub(crate) fn width(&self) -> f64 {
        self.model.borrow().geometry().width
    }

    pub(crate) fn height(&self) -> f64 {
        self.model.borrow().geometry().height
    }

    pub(crate) fn ratio(&self) -> f64 {
        self.model.borrow().ratio_y()
    }

    pub(crate) fn locked(&self) -> bool {
        self.model.borrow().is_locked()
    }

    fn draw_layout(&self) {
        let _ = self.svg.append_child(&self.graph);
        let _ = self.wrapper.append_child(&self.svg);
    }

    /// Full replace of the polyline points.
    pub(crate) fn render(&self, delta: f64) {
        let points = self.model.borrow_mut().render(delta);
        let _ = self.graph.set_attribute("points", &points);
    }

    fn apply_frame(&self, frame: &AnimationFrame) {
        let outcome = self.model.borrow_mut().apply_frame(frame);
        let _ = self.graph.set_attribute("points", &outcome.points);
        if outcome.lock_changed {
            self.set_locked_class(outcome.locked);
        }
    }

    fn set_locked_class(&self, locked: bool) {
        let classes = self.wrapper.class_list();
        let _ = if locked {
            classes.add_1(LOCKED_CLASS)
        } else {
            classes.remove_1(LOCKED_CLASS)
        };
    }

    fn draw_navigator(self: &Rc<Self>, document: &Document) -> Option<()> {
        let layout = *self.model.borrow().navigator();
        let track = create_div(
            document,
            &[NAVIGATOR_CLASS],
            &[
                ("height", px(layout.track_height)),
                ("top", px(layout.track_top)),
                ("right", px(layout.right)),
            ],
        )?;
        let caret = create_div(
            document,
            &CARET_CLASSES,
            &[
                ("height", px(layout.caret_height)),
                ("margin-top", px(layout.initial_top())),
            ],
        )?;
        let anim_button = create_div(document, &[ANIM_BUTTON_CLASS], &[])?;

        let mut listeners = Vec::new();
        let widget = Rc::clone(self);
        let caret_for_down = caret.clone();
        listeners.push(EventListener::new(&caret, "mousedown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            widget.begin_drag(&caret_for_down, event);
        }));

        let widget = Rc::clone(self);
        let caret_for_up = caret.clone();
        listeners.push(EventListener::new_with_options(
            &caret,
            "mouseup",
            active_listener_options(),
            move |event: &Event| {
                event.prevent_default();
                widget.end_drag(&caret_for_up);
            },
        ));

        let widget = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &anim_button,
            "click",
            active_listener_options(),
            move |event: &Event| {
                event.prevent_default();
                widget.start_animation();
            },
        ));
        self.listeners.borrow_mut().extend(listeners);

        let _ = track.append_child(&caret);
        let _ = self.wrapper.append_child(&track);
        let _ = self.wrapper.append_child(&anim_button);
        Some(())
    }

    fn begin_drag(self: &Rc<Self>, caret: &HtmlElement, event: &MouseEvent) {
        self.model
            .borrow_mut()
            .drag_begin(event.page_y() as f64, caret.offset_top() as f64);
        set_styles(caret, &[("cursor", "grabbing".to_string())]);

        let widget = Rc::clone(self);
        let caret_for_move = caret.clone();
        let listener = EventListener::new_with_options(
            caret,
            "mousemove",
            active_listener_options(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                event.prevent_default();
                widget.drag_to(&caret_for_move, event.page_y() as f64);
            },
        );
        *self.move_listener.borrow_mut() = Some(listener);
    }

    fn drag_to(&self, caret: &HtmlElement, pointer_y: f64) {
        let update = self.model.borrow_mut().drag_move(pointer_y);
        let Some(update) = update else {
            return;
        };
        set_styles(caret, &[("margin-top", px(update.top))]);
        self.render(0.0);
    }

    fn end_drag(&self, caret: &HtmlElement) {
        set_styles(caret, &[("cursor", "grab".to_string())]);
        self.move_listener.borrow_mut().take();
        self.model.borrow_mut().drag_end();
    }

    pub(crate) fn start_animation(self: &Rc<Self>) -> bool {
        let mut scheduler = TimeoutScheduler {
            widget: Rc::clone(self),
        };
        let started = self.model.borrow_mut().start_animation(&mut scheduler);
        if started {
            self.set_locked_class(true);
        }
        started
    }
}

/// Fire-and-forget timers; there is no handle to cancel a running sequence.
struct TimeoutScheduler {
    widget: Rc<GraphWidget>,
}

impl FrameScheduler for TimeoutScheduler {
    fn schedule(&mut self, frame: AnimationFrame) {
        let widget = Rc::clone(&self.widget);
        Timeout::new(frame.delay_ms, move || {
            widget.apply_frame(&frame);
        })
        .forget();
    }
}

fn build_canvas(
    document: &Document,
    model: &GraphModel,
    options: &WidgetOptions,
) -> Option<(Element, Element)> {
    let geometry = model.geometry();
    let svg = create_svg_element(document, "svg")?;
    let width = geometry.width.to_string();
    let height = geometry.height.to_string();
    let view_box = geometry.view_box();
    let background = format!("background: {};", options.background);
    set_attributes(
        &svg,
        &[
            ("xmlns", SVG_NS),
            ("width", &width),
            ("height", &height),
            ("viewBox", &view_box),
            ("style", &background),
        ],
    );

    let graph = create_svg_element(document, "polyline")?;
    let stroke_width = options.stroke_width.to_string();
    set_attributes(
        &graph,
        &[
            ("points", ""),
            ("stroke", &options.stroke),
            ("fill", "none"),
            ("stroke-width", &stroke_width),
        ],
    );
    Some((svg, graph))
}
