// Reloj en vivo: el texto inicial se pinta aquí y el Interval de la pantalla
// lo refresca con dom::update_live_clock

use chrono::{Local, Utc};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, CLOCK_FORMAT_MINUTES, CLOCK_FORMAT_SECONDS, LIVE_CLOCK_ID};
use crate::state::app_state::AppState;
use crate::utils::{format_clock, format_time};

pub fn render_live_clock(state: &AppState, with_seconds: bool, class: &str) -> Result<Element, JsValue> {
    let now = state.display_clock.borrow().now(Utc::now()).with_timezone(&Local);
    let (format, text) = if with_seconds {
        (CLOCK_FORMAT_SECONDS, format_clock(&now))
    } else {
        (CLOCK_FORMAT_MINUTES, format_time(&now))
    };

    Ok(ElementBuilder::new("div")?
        .id(LIVE_CLOCK_ID)?
        .class(class)
        .attr("data-format", format)?
        .text(&text)
        .build())
}
