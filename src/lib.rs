#![cfg(target_arch = "wasm32")]
use lounge_core::constants::INTRO_WIDTH;
use lounge_core::{build_intro, EntryState, LoungeConfig, LyricSheet, Session, SessionClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod mask;
mod overlay;
mod render;
mod text_points;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lounge-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = LoungeConfig::default();
    let sampler = text_points::CanvasTextSampler::new(document.clone());
    let intro = build_intro(config.intro_text.as_deref(), &sampler, INTRO_WIDTH);

    let backend = audio::WebAudioBackend::new(document.clone());
    let session = Session::new(&config, backend, &intro)
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?
        .with_lyrics(LyricSheet::lounge_default());
    let session = Rc::new(RefCell::new(session));
    let clock = SessionClock::start();

    events::wire_entry_gesture(&document, session.clone(), clock);
    events::wire_next_track(&document, session.clone());

    let gpu = frame::init_gpu(&canvas, config.element_count).await;
    if session.borrow_mut().assets_ready() {
        log::info!("[entry] ready; waiting for a gesture");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        clock,
        gpu,
        canvas,
        document,
        hud: overlay::HudView::default(),
        last_entry: EntryState::Armed,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
