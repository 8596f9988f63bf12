// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los listeners se registran sobre elementos del DOM y se hace forget() del
// closure: al re-renderizar (set_inner_html("")) el elemento se destruye y el
// navegador limpia sus listeners.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, InputEvent, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback(
        "click",
        closure.as_ref().unchecked_ref(),
    )?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Click handler que no propaga el evento a los contenedores
pub fn on_click_stop<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    on_click(element, move |e: MouseEvent| {
        e.stop_propagation();
        handler();
    })
}

/// Input handler que recibe el valor actual del <input>
pub fn on_input_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: InputEvent| {
        let value = e
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value());
        if let Some(value) = value {
            handler(value);
        }
    }) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback(
        "input",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}
