// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo actualiza elementos específicos que cambiaron, sin re-renderizar todo.
// Si el elemento no existe se devuelve error y el llamador hace re-render.
// ============================================================================

use chrono::{Local, Utc};
use wasm_bindgen::prelude::*;
use crate::dom::{get_attribute, get_element_by_id, set_text_content, toggle_class};
use crate::state::app_state::AppState;
use crate::utils::{format_clock, format_date, format_time};

pub const LIVE_CLOCK_ID: &str = "live-clock";
pub const LIVE_CLOCK_DATE_ID: &str = "live-clock-date";
pub const TAMPER_PANEL_ID: &str = "tamper-panel";
pub const HOLD_AREA_ID: &str = "hold-area";

/// Formato del reloj en vivo (atributo data-format)
pub const CLOCK_FORMAT_SECONDS: &str = "hms";
pub const CLOCK_FORMAT_MINUTES: &str = "hm";

/// Refrescar el texto del reloj en vivo (tick del Interval)
pub fn update_live_clock(state: &AppState) -> Result<(), JsValue> {
    let Some(clock) = get_element_by_id(LIVE_CLOCK_ID) else {
        // La fase actual no muestra reloj
        return Ok(());
    };

    let now = state.display_clock.borrow().now(Utc::now()).with_timezone(&Local);
    let text = match get_attribute(&clock, "data-format").as_deref() {
        Some(CLOCK_FORMAT_MINUTES) => format_time(&now),
        _ => format_clock(&now),
    };
    set_text_content(&clock, &text);

    if let Some(date) = get_element_by_id(LIVE_CLOCK_DATE_ID) {
        set_text_content(&date, &format_date(&now));
    }
    Ok(())
}

/// Mostrar/ocultar el panel de manipulación sin re-render
pub fn update_tamper_visibility(state: &AppState) -> Result<(), JsValue> {
    let show = *state.show_tamper.borrow();
    match get_element_by_id(TAMPER_PANEL_ID) {
        Some(panel) => toggle_class(&panel, "active", show),
        None if show => Err(JsValue::from_str("Tamper panel not found, needs full render")),
        None => Ok(()),
    }
}

/// Reflejar el estado presionado del botón de validación
pub fn update_hold_button(state: &AppState) -> Result<(), JsValue> {
    let pressed = state.activation_ui.borrow().button().is_pressed();
    let area = get_element_by_id(HOLD_AREA_ID)
        .ok_or_else(|| JsValue::from_str("Hold area not found, needs full render"))?;
    toggle_class(&area, "pressed", pressed)
}
