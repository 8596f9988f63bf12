// ============================================================================
// TAMPER PANEL - Herramientas de desarrollo para el reloj mostrado (demo)
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, TAMPER_PANEL_ID};
use crate::dom::events::{on_click, on_click_stop, on_input_value};
use crate::state::app_state::AppState;
use crate::state::TamperForm;

#[derive(Clone, Copy)]
enum Field {
    Date,
    Time,
    Expiry,
}

impl Field {
    fn slot<'a>(&self, form: &'a mut TamperForm) -> &'a mut String {
        match self {
            Field::Date => &mut form.date,
            Field::Time => &mut form.time,
            Field::Expiry => &mut form.expiry,
        }
    }
}

/// Renderizar el modal (oculto salvo que tenga la clase "active")
pub fn render_tamper_panel(
    state: &AppState,
    on_apply: Rc<dyn Fn()>,
    on_cancel: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    let show = *state.show_tamper.borrow();

    let overlay = ElementBuilder::new("div")?
        .id(TAMPER_PANEL_ID)?
        .class("tamper-overlay")
        .class_if("active", show)?
        .build();

    let dialog = ElementBuilder::new("div")?
        .class("tamper-dialog")
        .child(
            ElementBuilder::new("h3")?
                .class("tamper-title")
                .text("Developer / Tamper Tools")
                .build(),
        )?
        .build();
    // Prevenir cierre al click dentro
    on_click_stop(&dialog, || {})?;

    let form = state.tamper_form.borrow().clone();
    append_child(&dialog, &render_field(state, "Override Current Date", "date", &form.date, Field::Date)?)?;
    append_child(&dialog, &render_field(state, "Override Current Time", "time", &form.time, Field::Time)?)?;
    append_child(&dialog, &render_field(state, "Override Expiry Time", "time", &form.expiry, Field::Expiry)?)?;

    if let Some(error) = state.tamper_error.borrow().as_deref() {
        append_child(
            &dialog,
            &ElementBuilder::new("p")?.class("tamper-error").text(error).build(),
        )?;
    }

    let cancel = ElementBuilder::new("button")?
        .class("btn-secondary")
        .text("Cancel")
        .build();
    {
        let on_cancel = on_cancel.clone();
        on_click(&cancel, move |_| on_cancel())?;
    }
    let apply = ElementBuilder::new("button")?
        .class("btn-danger")
        .text("Apply Hack")
        .build();
    on_click(&apply, move |_| on_apply())?;

    let actions = ElementBuilder::new("div")?
        .class("tamper-actions")
        .child(cancel)?
        .child(apply)?
        .build();
    append_child(&dialog, &actions)?;

    // Click en el fondo = cancelar
    on_click(&overlay, move |_| on_cancel())?;
    append_child(&overlay, &dialog)?;
    Ok(overlay)
}

fn render_field(
    state: &AppState,
    label: &str,
    input_type: &str,
    value: &str,
    field: Field,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("tamper-input")
        .attr("type", input_type)?
        .attr("value", value)?
        .build();

    // Los inputs solo escriben en el formulario; no re-renderizan
    let form = state.tamper_form.clone();
    on_input_value(&input, move |value| {
        *field.slot(&mut form.borrow_mut()) = value;
    })?;

    Ok(ElementBuilder::new("label")?
        .class("tamper-field")
        .child(ElementBuilder::new("span")?.text(label).build())?
        .child(input)?
        .build())
}
