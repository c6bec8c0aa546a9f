use crate::constants::{
    GATEKEEPER_ID, LYRIC_CLASS_FUNK, LYRIC_CLASS_GLOW, LYRIC_TEXT_ID, PROGRESS_FILL_ID,
    UI_CONTAINER_ID,
};
use lounge_core::{Hud, LineFade, TrackId};
use std::time::Duration;
use web_sys as web;

/// Fade the gatekeeper with the entry pose; remove it once fully faded.
pub fn set_gatekeeper_opacity(document: &web::Document, opacity: f32) {
    if let Some(el) = document.get_element_by_id(GATEKEEPER_ID) {
        if opacity <= 0.0 {
            _ = el.class_list().add_1("hidden");
            _ = el.set_attribute("style", "display:none");
        } else {
            _ = el.set_attribute("style", &format!("opacity:{:.3}", opacity.min(1.0)));
        }
    }
}

#[inline]
pub fn show_ui(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(UI_CONTAINER_ID) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", "display:flex");
    }
}

/// Mirrors the session's HUD into the DOM. Keeps the last caption so the text
/// node is only rewritten when the line changes, and fades each new line in.
#[derive(Default)]
pub struct HudView {
    last_lyric: Option<String>,
    fade: LineFade,
    fading: bool,
}

impl HudView {
    pub fn update(&mut self, document: &web::Document, hud: &Hud<'_>, now: Duration) {
        if let Some(p) = hud.progress {
            if let Some(el) = document.get_element_by_id(PROGRESS_FILL_ID) {
                _ = el.set_attribute("style", &format!("width:{:.2}%", p * 100.0));
            }
        }
        let Some(el) = document.get_element_by_id(LYRIC_TEXT_ID) else {
            return;
        };
        if let Some(line) = hud.lyric {
            if self.last_lyric.as_deref() != Some(line) {
                el.set_text_content(Some(line));
                el.set_class_name(lyric_class(hud.track));
                self.last_lyric = Some(line.to_string());
                self.fade.restart(now);
                self.fading = true;
            }
        }
        if self.fading {
            _ = el.set_attribute(
                "style",
                &format!(
                    "opacity:{:.3};transform:translateY({:.2}px)",
                    self.fade.opacity(now),
                    self.fade.offset_px(now)
                ),
            );
            // One last write at the settled values, then leave the node alone.
            self.fading = !self.fade.is_settled(now);
        }
    }
}

#[inline]
fn lyric_class(track: TrackId) -> &'static str {
    if track == TrackId(1) {
        LYRIC_CLASS_GLOW
    } else {
        LYRIC_CLASS_FUNK
    }
}
