use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub(crate) fn px(value: f64) -> String {
    format!("{value}px")
}

pub(crate) fn set_attributes(element: &Element, attributes: &[(&str, &str)]) {
    for (name, value) in attributes {
        let _ = element.set_attribute(name, value);
    }
}

pub(crate) fn create_svg_element(document: &Document, tag: &str) -> Option<Element> {
    document.create_element_ns(Some(SVG_NS), tag).ok()
}

pub(crate) fn create_div(
    document: &Document,
    classes: &[&str],
    styles: &[(&str, String)],
) -> Option<HtmlElement> {
    let div = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    div.set_class_name(&classes.join(" "));
    set_styles(&div, styles);
    Some(div)
}

pub(crate) fn set_styles(element: &HtmlElement, styles: &[(&str, String)]) {
    let style = element.style();
    for (name, value) in styles {
        let _ = style.set_property(name, value);
    }
}
