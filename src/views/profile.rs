// Perfil: solo filas de menú, sin navegación real

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};

const ACCOUNT_ROWS: &[&str] = &["Account Details", "Purchase History"];
const HELP_ROWS: &[&str] = &["Help and Contact", "Transportforireland.ie"];
const LEGAL_ROWS: &[&str] = &["About", "Terms and Conditions", "Privacy"];

pub fn render_profile(account_email: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("profile")
        .build();

    let banner = ElementBuilder::new("div")?
        .class("profile-banner")
        .child(ElementBuilder::new("span")?.class("avatar").text("👤").build())?
        .child(ElementBuilder::new("span")?.text(account_email).build())?
        .build();
    append_child(&container, &banner)?;

    let menu = ElementBuilder::new("div")?
        .class("profile-menu")
        .build();
    append_rows(&menu, ACCOUNT_ROWS)?;
    append_child(
        &menu,
        &ElementBuilder::new("div")?.class("profile-ad").text("Travel Safe").build(),
    )?;
    append_rows(&menu, HELP_ROWS)?;
    append_child(
        &menu,
        &ElementBuilder::new("div")?.class("profile-section").text("Legal").build(),
    )?;
    append_rows(&menu, LEGAL_ROWS)?;
    append_child(&container, &menu)?;

    Ok(container)
}

fn append_rows(menu: &Element, rows: &[&str]) -> Result<(), JsValue> {
    for row in rows {
        let item = ElementBuilder::new("div")?
            .class("profile-row")
            .child(ElementBuilder::new("span")?.text(row).build())?
            .child(ElementBuilder::new("span")?.class("chevron").text("›").build())?
            .build();
        append_child(menu, &item)?;
    }
    Ok(())
}

/// Acción "Log Out" de la cabecera (sin efecto en la demo)
pub fn render_logout_action() -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("btn-header-action")
        .text("Log Out")
        .build();
    crate::dom::events::on_click(&button, |_| {
        log::info!("👋 [PROFILE] Log Out (sin efecto en la demo)");
    })?;
    Ok(button)
}
