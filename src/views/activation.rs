// ============================================================================
// ACTIVATION VIEW - Overview + confirmación con botón de mantener pulsado
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{ElementBuilder, append_child, HOLD_AREA_ID};
use crate::dom::events::on_click;
use crate::models::TicketConfig;
use crate::state::app_state::AppState;
use crate::state::ActivationPhase;
use crate::views::render_ticket_card;
use crate::views::shared::render_live_clock;

/// Número de flechas del anillo exterior
const RING_ARROWS: usize = 8;

/// Renderizar pantalla de activación según la fase actual
pub fn render_activation(
    state: &AppState,
    ticket: &TicketConfig,
    on_activate_now: Rc<dyn Fn()>,
    on_press: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    let phase = state.activation_ui.borrow().phase();
    match phase {
        ActivationPhase::Overview => render_overview(ticket, on_activate_now),
        ActivationPhase::Confirm => {
            let pressed = state.activation_ui.borrow().button().is_pressed();
            render_confirm(state, ticket, pressed, on_press)
        }
    }
}

fn render_overview(ticket: &TicketConfig, on_activate_now: Rc<dyn Fn()>) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("activation-overview")
        .build();

    let info = ElementBuilder::new("div")?
        .class("info-banner")
        .text(&format!(
            "Expires 28 days after purchase. Valid for 1 journey between origin and destination for one adult. Valid for {} minutes after activation.",
            CONFIG.ticket_validity_minutes
        ))
        .build();
    append_child(&container, &info)?;
    append_child(&container, &render_ticket_card(ticket)?)?;

    let activate_btn = ElementBuilder::new("button")?
        .id("btn-activate-now")?
        .class("btn-primary btn-block")
        .text("Activate Now")
        .build();
    on_click(&activate_btn, move |_| on_activate_now())?;
    append_child(&container, &activate_btn)?;

    let activated = ElementBuilder::new("div")?
        .class("activated-tickets")
        .child(ElementBuilder::new("h4")?.text("Activated Tickets").build())?
        .child(
            ElementBuilder::new("p")?
                .class("empty-note")
                .text("No other active tickets")
                .build(),
        )?
        .build();
    append_child(&container, &activated)?;

    Ok(container)
}

fn render_confirm(
    state: &AppState,
    ticket: &TicketConfig,
    pressed: bool,
    on_press: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("activation-confirm")
        .build();

    // Mitad superior: vista previa estática del billete
    let preview = ElementBuilder::new("div")?
        .class("confirm-preview")
        .child(render_ticket_card(ticket)?)?
        .build();
    append_child(&container, &preview)?;

    // Mitad inferior: zona de interacción
    let area = ElementBuilder::new("div")?
        .id(HOLD_AREA_ID)?
        .class("hold-area")
        .class_if("pressed", pressed)?
        .build();

    append_child(&area, &render_live_clock(state, true, "hold-clock")?)?;

    let control = ElementBuilder::new("div")?
        .class("hold-control")
        .build();

    let ring = ElementBuilder::new("div")?
        .class("hold-ring")
        .build();
    for i in 0..RING_ARROWS {
        let arrow = ElementBuilder::new("div")?
            .class("hold-ring-arrow")
            .attr(
                "style",
                &format!("transform: rotate({}deg) translateX(90px)", i * 360 / RING_ARROWS),
            )?
            .text("›")
            .build();
        append_child(&ring, &arrow)?;
    }
    append_child(&control, &ring)?;

    let button = ElementBuilder::new("button")?
        .id("btn-hold")?
        .class("hold-button")
        .attr("aria-label", "Tap to Validate")?
        .text("›")
        .build();
    on_click(&button, move |_| on_press())?;
    append_child(&control, &button)?;
    append_child(&control, &ElementBuilder::new("div")?.class("hold-ripple").build())?;
    append_child(&area, &control)?;

    let hint = ElementBuilder::new("p")?
        .class("hold-hint")
        .text("Tap to Validate")
        .build();
    append_child(&area, &hint)?;

    append_child(&container, &area)?;
    Ok(container)
}
