//! Speech capability seam so no component outside `infrastructure` touches
//! the browser speech globals directly.

/// Injected speech capability: read a message aloud, or capture one spoken
/// message as text. Implementations that cannot speak simply do nothing.
pub trait Narrator {
    fn speak(&self, text: &str);

    /// Stop any utterance currently playing.
    fn cancel(&self);

    /// Capture one utterance and hand the transcript to `on_transcript`.
    fn listen(&self, on_transcript: Box<dyn Fn(String)>);
}

/// No-op narrator for tests and environments without speech support.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn speak(&self, _text: &str) {}

    fn cancel(&self) {}

    fn listen(&self, _on_transcript: Box<dyn Fn(String)>) {}
}
