// ============================================================================
// HEADER - Barra superior con título y botón de volver opcional
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::dom::events::on_click;

pub fn render_header(
    title: &str,
    on_back: Option<Rc<dyn Fn()>>,
    right_action: Option<Element>,
) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?
        .class("app-header")
        .build();

    let left = ElementBuilder::new("div")?
        .class("app-header-left")
        .build();

    if let Some(on_back) = on_back {
        let back_btn = ElementBuilder::new("button")?
            .class("btn-back")
            .attr("aria-label", "Back")?
            .text("‹")
            .build();
        on_click(&back_btn, move |_| on_back())?;
        append_child(&left, &back_btn)?;
    }

    let h1 = ElementBuilder::new("h1")?
        .class("app-header-title")
        .text(title)
        .build();
    append_child(&left, &h1)?;
    append_child(&header, &left)?;

    let right = ElementBuilder::new("div")?
        .class("app-header-right")
        .build();
    if let Some(action) = right_action {
        append_child(&right, &action)?;
    }
    append_child(&header, &right)?;

    Ok(header)
}
