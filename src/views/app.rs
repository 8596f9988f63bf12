// ============================================================================
// APP VIEW - Composición de pantallas según el estado de navegación
// ============================================================================
// Las vistas no tienen lógica: los callbacks delegan en TicketViewModel.
// ============================================================================

use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{alert, append_child, ElementBuilder};
use crate::dom::events::on_click;
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::state::{PressOutcome, Screen, Tab};
use crate::viewmodels::TicketViewModel;
use crate::views::active_ticket::{render_active_ticket, ActiveTicketHandlers};
use crate::views::profile::render_logout_action;
use crate::views::shared::{render_bottom_nav, render_header};
use crate::views::{
    render_activation, render_operator_list, render_profile, render_ticket_selection,
};

/// Renderizar aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    // Copia de la navegación: los callbacks pueden mutarla mientras existe el DOM
    let navigation = state.navigation.borrow().clone();
    let screen = navigation.screen();

    let shell = ElementBuilder::new("div")?
        .class("app-shell")
        .attr("data-screen", &format!("{:?}", screen.kind()))?
        .build();

    let on_back: Rc<dyn Fn()> = {
        let state = state.clone();
        Rc::new(move || TicketViewModel::new(state.clone()).back())
    };

    match screen {
        Screen::Operators => {
            append_child(&shell, &render_header(screen.title(), None, None)?)?;
            let on_select: Rc<dyn Fn(String)> = {
                let state = state.clone();
                Rc::new(move |name: String| {
                    if let Err(e) = TicketViewModel::new(state.clone()).select_operator(&name) {
                        alert(&e.to_string());
                    }
                })
            };
            append_child(&shell, &render_operator_list(state.catalog.operators(), on_select)?)?;
        }
        Screen::TicketSelection => {
            append_child(&shell, &render_header(screen.title(), Some(on_back), None)?)?;
            let on_select: Rc<dyn Fn(String)> = {
                let state = state.clone();
                Rc::new(move |offer_id: String| {
                    if let Err(e) = TicketViewModel::new(state.clone()).select_offer(&offer_id) {
                        log::warn!("⚠️ [VIEW] Selección rechazada: {}", e);
                        alert(&e.to_string());
                    }
                })
            };
            let operator = state
                .catalog
                .demo_operator()
                .map(|op| op.name.as_str())
                .unwrap_or_default();
            let offers: Vec<_> = state.catalog.offers_for(operator).collect();
            append_child(&shell, &render_ticket_selection(&offers, on_select)?)?;
        }
        Screen::NoTicket => {
            append_child(&shell, &render_header(screen.title(), None, None)?)?;
            append_child(&shell, &render_no_ticket(state)?)?;
        }
        Screen::Activation(ticket) => {
            append_child(&shell, &render_header(screen.title(), Some(on_back), None)?)?;
            let on_activate_now: Rc<dyn Fn()> = {
                let state = state.clone();
                Rc::new(move || TicketViewModel::new(state.clone()).start_activation())
            };
            append_child(
                &shell,
                &render_activation(state, ticket, on_activate_now, press_handler(state))?,
            )?;
        }
        Screen::ActiveTicket(ticket) => {
            let handlers = ActiveTicketHandlers {
                on_back,
                on_toggle_tamper: {
                    let state = state.clone();
                    Rc::new(move || {
                        TicketViewModel::new(state.clone()).toggle_tamper();
                        crate::rerender_app_with_type(UpdateType::Incremental(
                            IncrementalUpdate::TamperPanel,
                        ));
                    })
                },
                on_apply_tamper: {
                    let state = state.clone();
                    Rc::new(move || {
                        // El error queda en el estado y se muestra en el panel
                        let _ = TicketViewModel::new(state.clone()).apply_tamper();
                    })
                },
                on_cancel_tamper: {
                    let state = state.clone();
                    Rc::new(move || {
                        TicketViewModel::new(state.clone()).close_tamper();
                        crate::rerender_app_with_type(UpdateType::Incremental(
                            IncrementalUpdate::TamperPanel,
                        ));
                    })
                },
            };
            append_child(&shell, &render_active_ticket(state, ticket, handlers)?)?;
        }
        Screen::Profile => {
            append_child(
                &shell,
                &render_header(screen.title(), None, Some(render_logout_action()?))?,
            )?;
            append_child(&shell, &render_profile(&CONFIG.account_email)?)?;
        }
    }

    if screen.shows_bottom_nav() {
        let on_tab: Rc<dyn Fn(Tab)> = {
            let state = state.clone();
            Rc::new(move |tab: Tab| TicketViewModel::new(state.clone()).switch_tab(tab))
        };
        append_child(&shell, &render_bottom_nav(screen.tab(), on_tab)?)?;
    }

    Ok(shell)
}

/// Pulsación del botón de validación: la primera programa el fin de la espera
/// en el scope de la pantalla (se cancela si la pantalla se desmonta)
fn press_handler(state: &AppState) -> Rc<dyn Fn()> {
    let state = state.clone();
    Rc::new(move || {
        let vm = TicketViewModel::new(state.clone());
        if vm.press_hold() != PressOutcome::Started {
            return;
        }
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::HoldButton));

        let state_timer = state.clone();
        let hold = Timeout::new(CONFIG.press_cooldown_ms, move || {
            if let Err(e) = TicketViewModel::new(state_timer.clone()).complete_hold() {
                log::error!("❌ [ACTIVATION] Error activando billete: {}", e);
            }
        });
        state.scope.borrow_mut().set_hold(hold);
    })
}

fn render_no_ticket(state: &AppState) -> Result<Element, JsValue> {
    let buy_link = ElementBuilder::new("button")?
        .class("link-button")
        .text("Buy a ticket")
        .build();
    {
        let state = state.clone();
        on_click(&buy_link, move |_| {
            TicketViewModel::new(state.clone()).switch_tab(Tab::Buy);
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("empty-state")
        .child(
            ElementBuilder::new("p")?
                .text("No tickets ready for activation.")
                .build(),
        )?
        .child(buy_link)?
        .build())
}
