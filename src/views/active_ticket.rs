// ============================================================================
// ACTIVE TICKET VIEW - Billete activado en pantalla completa
// ============================================================================

use std::rc::Rc;
use chrono::{Local, Utc};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, LIVE_CLOCK_DATE_ID};
use crate::dom::events::on_click;
use crate::models::ActiveTicketState;
use crate::state::app_state::AppState;
use crate::utils::{format_date, format_time};
use crate::views::shared::render_live_clock;
use crate::views::tamper_panel::render_tamper_panel;

/// Callbacks de la pantalla del billete activo
pub struct ActiveTicketHandlers {
    pub on_back: Rc<dyn Fn()>,
    pub on_toggle_tamper: Rc<dyn Fn()>,
    pub on_apply_tamper: Rc<dyn Fn()>,
    pub on_cancel_tamper: Rc<dyn Fn()>,
}

pub fn render_active_ticket(
    state: &AppState,
    ticket: &ActiveTicketState,
    handlers: ActiveTicketHandlers,
) -> Result<Element, JsValue> {
    let expires_at = state.display_clock.borrow().expires_at(ticket).with_timezone(&Local);
    let today = state.display_clock.borrow().now(Utc::now()).with_timezone(&Local);

    let screen = ElementBuilder::new("div")?
        .class("active-ticket-screen")
        .build();

    // Cabecera propia (sin barra inferior)
    let back_btn = ElementBuilder::new("button")?
        .class("btn-back-text")
        .text("< Back")
        .build();
    {
        let on_back = handlers.on_back.clone();
        on_click(&back_btn, move |_| on_back())?;
    }
    let header = ElementBuilder::new("div")?
        .class("active-ticket-header")
        .child(back_btn)?
        .child(ElementBuilder::new("h1")?.text("Active Ticket").build())?
        .build();
    append_child(&screen, &header)?;

    let body = ElementBuilder::new("div")?
        .class("active-ticket-body")
        .build();

    // Tarjeta viva
    let card = ElementBuilder::new("div")?
        .class("live-ticket")
        .build();

    let strip = ElementBuilder::new("div")?
        .class("live-ticket-strip")
        .child(ElementBuilder::new("div")?.class("shimmer").build())?
        .child(ElementBuilder::new("span")?.class("live-ticket-operator").text(&ticket.ticket.operator).build())?
        .child(ElementBuilder::new("span")?.class("live-ticket-route").text(&ticket.ticket.route).build())?
        .build();
    append_child(&card, &strip)?;

    let content = ElementBuilder::new("div")?
        .class("live-ticket-content")
        .child(ElementBuilder::new("h2")?.text(ticket.ticket.ticket_type.label()).build())?
        .child(ElementBuilder::new("p")?.class("ticket-journey").text(&ticket.ticket.journey()).build())?
        .child(
            ElementBuilder::new("div")?
                .class("qr-frame")
                .child(ElementBuilder::new("div")?.class("qr-code").attr("aria-label", "QR code")?.build())?
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("validity")
                .child(ElementBuilder::new("p")?.class("caption").text("Valid until").build())?
                .child(ElementBuilder::new("div")?.class("validity-time pulse").text(&format_time(&expires_at)).build())?
                .child(ElementBuilder::new("p")?.class("validity-date").text(&format_date(&expires_at)).build())?
                .build(),
        )?
        .build();
    append_child(&card, &content)?;

    // Texto desplazándose al pie
    let segment = format!(
        "TICKET VALID • {} • TFI GO • {} • KEEP MOVING • ",
        ticket.ticket.id,
        format_date(&today)
    );
    let marquee = ElementBuilder::new("div")?
        .class("marquee")
        .child(
            ElementBuilder::new("div")?
                .class("marquee-text")
                .text(&segment.repeat(2))
                .build(),
        )?
        .build();
    append_child(&card, &marquee)?;
    append_child(&body, &card)?;

    let now_block = ElementBuilder::new("div")?
        .class("current-time")
        .child(ElementBuilder::new("p")?.class("caption").text("Current Time").build())?
        .child(render_live_clock(state, false, "current-time-value")?)?
        .child(
            ElementBuilder::new("p")?
                .id(LIVE_CLOCK_DATE_ID)?
                .class("caption")
                .text(&format_date(&today))
                .build(),
        )?
        .build();
    append_child(&body, &now_block)?;
    append_child(&screen, &body)?;

    // Botón flotante de herramientas
    let tamper_toggle = ElementBuilder::new("button")?
        .id("btn-tamper")?
        .class("tamper-toggle")
        .attr("title", "Tamper Tools")?
        .text("⚙")
        .build();
    {
        let on_toggle = handlers.on_toggle_tamper.clone();
        on_click(&tamper_toggle, move |_| on_toggle())?;
    }
    append_child(&screen, &tamper_toggle)?;

    append_child(
        &screen,
        &render_tamper_panel(state, handlers.on_apply_tamper, handlers.on_cancel_tamper)?,
    )?;

    Ok(screen)
}
