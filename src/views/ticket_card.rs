// Tarjeta del billete sin activar (overview y vista previa de confirmación)

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::models::TicketConfig;
use crate::utils::format_price;

pub fn render_ticket_card(ticket: &TicketConfig) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("ticket-card")
        .build();

    let top = ElementBuilder::new("div")?
        .class("ticket-card-top")
        .child(ElementBuilder::new("div")?.class("ticket-icon").text("🎫").build())?
        .child(
            ElementBuilder::new("div")?
                .child(ElementBuilder::new("h3")?.text(ticket.ticket_type.label()).build())?
                .child(
                    ElementBuilder::new("p")?
                        .class("ticket-journey")
                        .text(&ticket.journey())
                        .build(),
                )?
                .build(),
        )?
        .build();
    append_child(&card, &top)?;

    // Franja del operador
    let strip = ElementBuilder::new("div")?
        .class("operator-strip")
        .child(ElementBuilder::new("span")?.class("operator-strip-name").text(&ticket.operator).build())?
        .child(ElementBuilder::new("span")?.class("route-badge").text(&ticket.route).build())?
        .build();
    append_child(&card, &strip)?;

    let bottom = ElementBuilder::new("div")?
        .class("ticket-card-bottom")
        .child(
            ElementBuilder::new("div")?
                .child(
                    ElementBuilder::new("p")?
                        .class("caption")
                        .text(&format!("Route {}", ticket.route))
                        .build(),
                )?
                .child(ElementBuilder::new("p")?.class("caption").text(&format!("From {}", ticket.origin)).build())?
                .child(ElementBuilder::new("p")?.class("caption").text(&format!("To {}", ticket.destination)).build())?
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("ticket-card-price")
                .child(ElementBuilder::new("p")?.class("caption").text(ticket.ticket_type.label()).build())?
                .child(ElementBuilder::new("p")?.class("price").text(&format_price(ticket.price)).build())?
                .build(),
        )?
        .build();
    append_child(&card, &bottom)?;

    let conditions = ElementBuilder::new("div")?
        .class("ticket-card-conditions")
        .child(ElementBuilder::new("span")?.class("link").text("Conditions of Carriage").build())?
        .child(
            ElementBuilder::new("p")?
                .text("The ticket is only valid after activation.")
                .build(),
        )?
        .build();
    append_child(&card, &conditions)?;

    Ok(card)
}
