// ============================================================================
// BOTTOM NAV - Pestañas Buy / Tickets / Profile
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::dom::events::on_click;
use crate::state::Tab;

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Buy => "€",
        Tab::Tickets => "🎫",
        Tab::Profile => "👤",
    }
}

pub fn render_bottom_nav(current: Tab, on_tab: Rc<dyn Fn(Tab)>) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?
        .class("bottom-nav")
        .build();

    for tab in Tab::ALL {
        let is_active = tab == current;
        let button = ElementBuilder::new("button")?
            .class("bottom-nav-tab")
            .class_if("active", is_active)?
            .id(&format!("tab-{}", tab.key()))?
            .child(
                ElementBuilder::new("span")?
                    .class("bottom-nav-icon")
                    .text(tab_icon(tab))
                    .build(),
            )?
            .child(
                ElementBuilder::new("span")?
                    .class("bottom-nav-label")
                    .text(tab.label())
                    .build(),
            )?
            .build();

        let on_tab = on_tab.clone();
        on_click(&button, move |_| on_tab(tab))?;
        append_child(&nav, &button)?;
    }

    Ok(nav)
}
