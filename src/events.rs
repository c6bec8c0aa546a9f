use crate::constants::{GATEKEEPER_ID, NEXT_TRACK_ID};
use crate::dom;
use crate::frame::SharedSession;
use crate::overlay;
use lounge_core::{GestureOutcome, SessionClock};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer-down on the gatekeeper starts the experience. Audio must be
/// opened inside this callback or the browser keeps the context suspended.
pub fn wire_entry_gesture(document: &web::Document, session: SharedSession, clock: SessionClock) {
    let Some(el) = document.get_element_by_id(GATEKEEPER_ID) else {
        log::warn!("[dom] #{} not found; entry gesture unavailable", GATEKEEPER_ID);
        return;
    };
    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let outcome = session.borrow_mut().handle_gesture(clock.elapsed());
        match outcome {
            GestureOutcome::Started => {
                log::info!("[entry] gesture accepted");
                overlay::show_ui(&doc);
            }
            GestureOutcome::NotArmed => log::info!("[entry] still loading; gesture ignored"),
            GestureOutcome::AlreadyStarted => {}
        }
    }) as Box<dyn FnMut(web::PointerEvent)>);
    _ = el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_next_track(document: &web::Document, session: SharedSession) {
    dom::add_click_listener(document, NEXT_TRACK_ID, move || {
        if let Some(id) = session.borrow_mut().next_track() {
            log::info!("[playback] now on track {}", id);
        }
    });
}
