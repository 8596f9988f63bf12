// ============================================================================
// OPERATOR LIST VIEW - Selección de operador
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::dom::events::on_click;
use crate::models::Operator;

/// Renderizar lista de operadores
pub fn render_operator_list(
    operators: &[Operator],
    on_select: Rc<dyn Fn(String)>,
) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("operator-screen")
        .build();

    let list = ElementBuilder::new("div")?
        .class("operator-list card")
        .build();

    for operator in operators {
        let row = render_operator_row(operator)?;
        let name = operator.name.clone();
        let on_select = on_select.clone();
        on_click(&row, move |_| on_select(name.clone()))?;
        append_child(&list, &row)?;
    }
    append_child(&container, &list)?;

    let footer = ElementBuilder::new("p")?
        .class("operator-footer")
        .text("Scroll down for more operators")
        .build();
    append_child(&container, &footer)?;

    Ok(container)
}

fn render_operator_row(operator: &Operator) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("button")?
        .class("operator-row")
        .class_if("highlighted", operator.supported)?
        .build();

    // Logo simulado
    let logo = ElementBuilder::new("div")?
        .class(&format!("operator-logo {}", operator.color_class))
        .build();
    if operator.supported {
        // Logo en dos líneas para el operador de la demo
        for word in operator.name.split_whitespace() {
            append_child(
                &logo,
                &ElementBuilder::new("span")?.class("logo-line").text(word).build(),
            )?;
        }
    } else {
        crate::dom::set_text_content(&logo, &operator.logo_text);
    }

    let left = ElementBuilder::new("div")?
        .class("operator-row-left")
        .child(logo)?
        .child(
            ElementBuilder::new("span")?
                .class("operator-name")
                .text(&operator.name)
                .build(),
        )?
        .build();
    append_child(&row, &left)?;

    if let Some(badge) = &operator.route_badge {
        let badge = ElementBuilder::new("span")?
            .class("operator-badge")
            .text(badge)
            .build();
        append_child(&row, &badge)?;
    }

    Ok(row)
}
