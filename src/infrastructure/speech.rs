use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::narration::Narrator;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice};

/// Narrator backed by the browser speech APIs.
pub struct WebSpeechNarrator;

impl WebSpeechNarrator {
    pub fn new() -> Self {
        Self
    }

    fn synthesis() -> Option<SpeechSynthesis> {
        web_sys::window()?.speech_synthesis().ok()
    }

    /// Voice preference order: Google UK English Female, Google US English,
    /// any English voice, then whatever comes first.
    fn pick_voice(synthesis: &SpeechSynthesis) -> Option<SpeechSynthesisVoice> {
        let voices: Vec<SpeechSynthesisVoice> = synthesis
            .get_voices()
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect();

        voices
            .iter()
            .find(|v| v.name().contains("Google UK English Female"))
            .or_else(|| voices.iter().find(|v| v.name().contains("Google US English")))
            .or_else(|| voices.iter().find(|v| v.lang().starts_with("en")))
            .or_else(|| voices.first())
            .cloned()
    }
}

impl Default for WebSpeechNarrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Narrator for WebSpeechNarrator {
    fn speak(&self, text: &str) {
        let Some(synthesis) = Self::synthesis() else {
            get_logger().warn(
                LogComponent::Infrastructure("Speech"),
                "Speech synthesis not supported in this browser",
            );
            return;
        };

        // Drop any utterance still playing before queueing the new one.
        synthesis.cancel();

        let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(text) else {
            return;
        };
        utterance.set_lang("en-US");
        utterance.set_rate(1.0);
        utterance.set_pitch(1.0);
        if let Some(voice) = Self::pick_voice(&synthesis) {
            utterance.set_voice(Some(&voice));
        }

        synthesis.speak(&utterance);
    }

    fn cancel(&self) {
        if let Some(synthesis) = Self::synthesis() {
            synthesis.cancel();
        }
    }

    fn listen(&self, on_transcript: Box<dyn Fn(String)>) {
        // Speech recognition is only exposed behind a vendor prefix in the
        // browsers this dashboard targets; reach it through js_sys.
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(ctor) = js_sys::Reflect::get(&window, &"webkitSpeechRecognition".into()) else {
            return;
        };
        let Ok(ctor) = ctor.dyn_into::<js_sys::Function>() else {
            get_logger().warn(
                LogComponent::Infrastructure("Speech"),
                "Speech recognition not supported in this browser",
            );
            return;
        };
        let Ok(recognition) = js_sys::Reflect::construct(&ctor, &js_sys::Array::new()) else {
            return;
        };

        let _ = js_sys::Reflect::set(&recognition, &"continuous".into(), &false.into());
        let _ = js_sys::Reflect::set(&recognition, &"interimResults".into(), &false.into());
        let _ = js_sys::Reflect::set(&recognition, &"lang".into(), &"en-US".into());

        let handler = Closure::<dyn Fn(js_sys::Object)>::new(move |event: js_sys::Object| {
            // event.results[0][0].transcript
            let transcript = js_sys::Reflect::get(&event, &"results".into())
                .and_then(|results| js_sys::Reflect::get_u32(&results, 0))
                .and_then(|result| js_sys::Reflect::get_u32(&result, 0))
                .and_then(|alternative| {
                    js_sys::Reflect::get(&alternative, &"transcript".into())
                })
                .ok()
                .and_then(|value| value.as_string());
            if let Some(text) = transcript {
                on_transcript(text);
            }
        });
        let _ = js_sys::Reflect::set(
            &recognition,
            &"onresult".into(),
            handler.as_ref().unchecked_ref(),
        );
        // The recognition object owns the callback for the rest of the page
        // lifetime.
        handler.forget();

        if let Ok(start) = js_sys::Reflect::get(&recognition, &"start".into()) {
            if let Ok(start) = start.dyn_into::<js_sys::Function>() {
                let _ = start.call0(&recognition);
            }
        }
    }
}
