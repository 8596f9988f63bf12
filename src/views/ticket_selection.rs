// ============================================================================
// TICKET SELECTION VIEW - Tarifas del operador elegido
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::dom::events::on_click;
use crate::models::TicketOffer;
use crate::utils::format_price;

/// Renderizar selección de billete
pub fn render_ticket_selection(
    offers: &[&TicketOffer],
    on_select: Rc<dyn Fn(String)>,
) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("ticket-selection")
        .child(
            ElementBuilder::new("h2")?
                .class("section-title")
                .text("Select Ticket")
                .build(),
        )?
        .build();

    let card = ElementBuilder::new("div")?
        .class("card popular-routes")
        .child(ElementBuilder::new("h3")?.text("Popular Routes").build())?
        .build();

    for offer in offers {
        let button = render_offer(offer)?;
        if offer.available {
            let id = offer.id.clone();
            let on_select = on_select.clone();
            on_click(&button, move |_| on_select(id.clone()))?;
        }
        append_child(&card, &button)?;
    }

    append_child(&container, &card)?;
    Ok(container)
}

fn render_offer(offer: &TicketOffer) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("offer")
        .class_if("offer-disabled", !offer.available)?
        .disabled(!offer.available)?
        .build();

    let title = ElementBuilder::new("div")?
        .class("offer-title")
        .child(
            ElementBuilder::new("span")?
                .class("route-badge")
                .class_if("route-badge-muted", !offer.available)?
                .text(&offer.route)
                .build(),
        )?
        .child(ElementBuilder::new("span")?.class("offer-label").text(&offer.label).build())?
        .build();

    let details = ElementBuilder::new("div")?
        .class("offer-details")
        .child(title)?
        .child(
            ElementBuilder::new("p")?
                .class("offer-journey")
                .text(&format!("{} ↔ {}", offer.origin, offer.destination))
                .build(),
        )?
        .build();
    if let Some(note) = &offer.note {
        append_child(
            &details,
            &ElementBuilder::new("p")?.class("offer-note").text(note).build(),
        )?;
    }
    append_child(&button, &details)?;

    let price = ElementBuilder::new("div")?
        .class("offer-price")
        .child(
            ElementBuilder::new("span")?
                .class("price")
                .text(&format_price(offer.price))
                .build(),
        )?
        .build();
    if offer.available {
        append_child(
            &price,
            &ElementBuilder::new("span")?.class("offer-cta").text("Select").build(),
        )?;
    }
    append_child(&button, &price)?;

    Ok(button)
}
