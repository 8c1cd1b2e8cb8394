use crypto_guardian_wasm::domain::narration::{Narrator, SilentNarrator};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct RecordingNarrator {
    spoken: RefCell<Vec<String>>,
}

impl Narrator for RecordingNarrator {
    fn speak(&self, text: &str) {
        self.spoken.borrow_mut().push(text.to_string());
    }

    fn cancel(&self) {}

    fn listen(&self, on_transcript: Box<dyn Fn(String)>) {
        on_transcript("what is dogecoin".to_string());
    }
}

#[test]
fn narrators_are_shared_as_trait_objects() {
    // The chat widget holds one narrator and clones the handle per bubble.
    let recording = Rc::new(RecordingNarrator::default());
    let narrator: Rc<dyn Narrator> = recording.clone();

    let bubble_handle = Rc::clone(&narrator);
    bubble_handle.speak("read this aloud");

    assert_eq!(*recording.spoken.borrow(), vec!["read this aloud".to_string()]);
}

#[test]
fn transcripts_reach_the_registered_callback() {
    let narrator: Rc<dyn Narrator> = Rc::new(RecordingNarrator::default());
    let heard = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&heard);

    narrator.listen(Box::new(move |transcript| *sink.borrow_mut() = transcript));

    assert_eq!(*heard.borrow(), "what is dogecoin");
}

#[test]
fn silent_narrator_stays_silent() {
    let narrator: Rc<dyn Narrator> = Rc::new(SilentNarrator);
    narrator.speak("ignored");
    narrator.cancel();
    narrator.listen(Box::new(|_| panic!("a silent narrator must not produce transcripts")));
}
