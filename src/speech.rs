//! Speech capture widget state

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Recording,
    Transcribing,
}

#[derive(Debug)]
pub struct SpeechCapture {
    pub phase: Phase,
    pub text: String,
    pub error: Option<String>,
    window: Duration,
}

impl SpeechCapture {
    pub fn new(window: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            text: String::new(),
            error: None,
            window,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Start a recording. Returns the capture window, or `None` while a
    /// previous capture is still in flight.
    pub fn start(&mut self) -> Option<Duration> {
        if self.is_busy() {
            return None;
        }
        self.phase = Phase::Recording;
        self.error = None;
        Some(self.window)
    }

    /// Recording done. Returns the WAV bytes to upload, if any.
    pub fn recorded(&mut self, result: Result<Vec<u8>, String>) -> Option<Vec<u8>> {
        match result {
            Ok(wav) => {
                self.phase = Phase::Transcribing;
                Some(wav)
            }
            Err(e) => {
                self.fail(e);
                None
            }
        }
    }

    pub fn transcribed(&mut self, result: Result<String, String>) {
        match result {
            Ok(text) => {
                self.phase = Phase::Idle;
                self.text = text;
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, e: String) {
        tracing::error!("Speech capture error: {}", e);
        self.phase = Phase::Idle;
        self.error = Some(format!("Transcription failed: {}", e));
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "Speak",
            Phase::Recording => "Recording...",
            Phase::Transcribing => "Transcribing...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut speech = SpeechCapture::new(Duration::from_secs(5));
        assert_eq!(speech.button_label(), "Speak");

        assert_eq!(speech.start(), Some(Duration::from_secs(5)));
        assert_eq!(speech.button_label(), "Recording...");
        assert_eq!(speech.start(), None);

        assert_eq!(speech.recorded(Ok(vec![1, 2, 3])), Some(vec![1, 2, 3]));
        assert_eq!(speech.phase, Phase::Transcribing);

        speech.transcribed(Ok("hello world".into()));
        assert_eq!(speech.phase, Phase::Idle);
        assert_eq!(speech.text, "hello world");
    }

    #[test]
    fn test_recording_error_returns_to_idle() {
        let mut speech = SpeechCapture::new(Duration::from_secs(5));
        speech.start();

        assert_eq!(speech.recorded(Err("no audio was captured".into())), None);
        assert!(!speech.is_busy());
        assert_eq!(
            speech.error.as_deref(),
            Some("Transcription failed: no audio was captured")
        );

        // A new attempt clears the old error
        speech.start();
        assert!(speech.error.is_none());
    }

    #[test]
    fn test_transcription_error_keeps_previous_text() {
        let mut speech = SpeechCapture::new(Duration::from_secs(1));
        speech.text = "earlier".into();
        speech.start();
        speech.recorded(Ok(vec![0]));

        speech.transcribed(Err("503".into()));
        assert_eq!(speech.text, "earlier");
        assert!(speech.error.is_some());
    }
}
