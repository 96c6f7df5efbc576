//! Plays cue sounds through `HtmlAudioElement`.

use js_sys::Promise;
use stopwatch_widget::{Cue, CueError, CueSink};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

#[derive(Default)]
pub struct AudioCues;

impl AudioCues {
    pub fn new() -> Self {
        Self
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl CueSink for AudioCues {
    fn cue(&mut self, cue: Cue) -> Result<(), CueError> {
        let audio = HtmlAudioElement::new_with_src(cue.sound_url())
            .map_err(|e| CueError::Unavailable(describe(&e)))?;
        audio.set_current_time(0.0);
        let playing: Promise = audio
            .play()
            .map_err(|e| CueError::Playback(describe(&e)))?;

        // Autoplay rejections arrive asynchronously; they are only logged.
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(playing).await {
                log::warn!("{} cue did not play: {}", cue, describe(&e));
            }
        });
        Ok(())
    }
}
