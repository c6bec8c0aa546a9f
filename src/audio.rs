use crate::dom;
use fnv::FnvHashMap;
use std::cell::Cell;
use std::rc::Rc;
use lounge_core::{AudioBackend, PlaybackError, PlaybackPosition, SpectrumSource, Track, TrackId};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Byte-magnitude view of the session's `AnalyserNode`.
pub struct AnalyserSource {
    node: web::AnalyserNode,
}

impl SpectrumSource for AnalyserSource {
    fn bin_count(&self) -> usize {
        self.node.frequency_bin_count() as usize
    }

    fn read_bytes(&mut self, out: &mut [u8]) {
        self.node.get_byte_frequency_data(out);
    }
}

struct AudioGraph {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
}

/// `<audio>` elements routed through one shared `AudioContext`:
/// element source -> analyser -> destination.
pub struct WebAudioBackend {
    document: web::Document,
    graph: Option<AudioGraph>,
    // A media element can only ever get one source node, so keep them.
    sources: FnvHashMap<TrackId, web::MediaElementAudioSourceNode>,
    // Set when the host rejects a play promise after `play` returned.
    rejected: FnvHashMap<TrackId, Rc<Cell<bool>>>,
}

impl WebAudioBackend {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            graph: None,
            sources: FnvHashMap::default(),
            rejected: FnvHashMap::default(),
        }
    }

    fn element(&self, track: &Track) -> Result<web::HtmlAudioElement, PlaybackError> {
        dom::audio_element(&self.document, track.audio_handle.as_str())
            .ok_or(PlaybackError::UnknownTrack(track.id))
    }

    // Splice the track's element into the graph on first use.
    fn route(&mut self, track: &Track) -> Result<(), PlaybackError> {
        if self.sources.contains_key(&track.id) {
            return Ok(());
        }
        let Some(graph) = &self.graph else {
            return Ok(());
        };
        let el = dom::audio_element(&self.document, track.audio_handle.as_str())
            .ok_or(PlaybackError::UnknownTrack(track.id))?;
        let src = graph
            .ctx
            .create_media_element_source(&el)
            .map_err(|e| PlaybackError::Session(format!("{:?}", e)))?;
        _ = src.connect_with_audio_node(&graph.analyser);
        self.sources.insert(track.id, src);
        log::info!("[audio] routed {} through analyser", track.audio_handle.as_str());
        Ok(())
    }
}

impl AudioBackend for WebAudioBackend {
    type Analysis = AnalyserSource;

    fn has_resource(&self, track: &Track) -> bool {
        self.element(track).is_ok()
    }

    fn open_session(&mut self, first: &Track, fft_size: u32) -> Result<AnalyserSource, PlaybackError> {
        if let Some(graph) = &self.graph {
            log::error!("[audio] session already exists; reusing analyser");
            return Ok(AnalyserSource {
                node: graph.analyser.clone(),
            });
        }
        let ctx = web::AudioContext::new().map_err(|e| PlaybackError::Session(format!("{:?}", e)))?;
        _ = ctx.resume();
        let analyser = ctx
            .create_analyser()
            .map_err(|e| PlaybackError::Session(format!("{:?}", e)))?;
        analyser.set_fft_size(fft_size);
        _ = analyser.connect_with_audio_node(&ctx.destination());
        self.graph = Some(AudioGraph {
            ctx,
            analyser: analyser.clone(),
        });
        if let Err(e) = self.route(first) {
            log::warn!("[audio] track {} not analysed: {}", first.id, e);
        }
        Ok(AnalyserSource { node: analyser })
    }

    fn play(&mut self, track: &Track) -> Result<(), PlaybackError> {
        if let Err(e) = self.route(track) {
            log::warn!("[audio] track {} not analysed: {}", track.id, e);
        }
        let el = self.element(track)?;
        let promise: js_sys::Promise = el
            .play()
            .map_err(|e| PlaybackError::Blocked(format!("{:?}", e)))?;
        let id = track.id;
        let rejected = self.rejected.entry(id).or_default().clone();
        rejected.set(false);
        // Autoplay rejections arrive asynchronously. Record them so the next
        // gesture can retry; never retry from here.
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                rejected.set(true);
                log::warn!("[audio] track {} blocked by host: {:?}", id, e);
            }
        });
        Ok(())
    }

    fn stop(&mut self, track: &Track) {
        if let Ok(el) = self.element(track) {
            _ = el.pause();
            el.set_current_time(0.0);
        }
    }

    fn is_playing(&self, track: &Track) -> bool {
        !self.rejected.get(&track.id).is_some_and(|r| r.get())
    }

    fn position(&self, track: &Track) -> Option<PlaybackPosition> {
        let el = self.element(track).ok()?;
        Some(PlaybackPosition {
            current_secs: el.current_time(),
            duration_secs: el.duration(),
        })
    }
}
