use crate::audio::WebAudioBackend;
use crate::overlay::{self, HudView};
use crate::render::{self, NullRenderer};
use lounge_core::{EntryState, Session, SessionClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedSession = Rc<RefCell<Session<WebAudioBackend>>>;

pub struct FrameContext<'a> {
    pub session: SharedSession,
    pub clock: SessionClock,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub hud: HudView,
    pub last_entry: EntryState,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = self.clock.elapsed();
        let mut session = self.session.borrow_mut();

        let summary = match &mut self.gpu {
            Some(g) => {
                g.resize_if_needed(self.canvas.width(), self.canvas.height());
                session.frame(now, g)
            }
            None => session.frame(now, &mut NullRenderer),
        };

        let previous = self.last_entry;
        if summary.entry != previous {
            log::info!("[entry] {:?} -> {:?}", previous, summary.entry);
            self.last_entry = summary.entry;
        }
        if summary.entry.needs_overlay_sync(previous) {
            let pose = session.entry().pose(now);
            overlay::set_gatekeeper_opacity(&self.document, pose.intro_opacity);
        }
        if summary.entry >= EntryState::Transitioning {
            self.hud.update(&self.document, &session.hud(), now);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
