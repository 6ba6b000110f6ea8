//! Text-to-speech playback
//!
//! Speech synthesis is a platform capability (browser, OS service). This
//! module only decides *what* to say and *when* a control action applies;
//! the engine behind [`TextToSpeechEngine`] does the talking.

use serde::{Deserialize, Serialize};

use crate::error::SpeechError;
use crate::summarize::{DEFAULT_MAX_SENTENCES, summarize};

/// Voice requested for spoken summaries when the caller names none
pub const DEFAULT_SUMMARY_VOICE: &str = "Google हिन्दी";

const DEFAULT_RATE: f32 = 1.0;
const DEFAULT_PITCH: f32 = 1.0;

/// Playback hints supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

/// A fully resolved request to speak some text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

impl Utterance {
    pub fn new(text: impl Into<String>, opts: &SpeechOptions) -> Self {
        Self {
            text: text.into(),
            rate: opts.rate.unwrap_or(DEFAULT_RATE),
            pitch: opts.pitch.unwrap_or(DEFAULT_PITCH),
            voice: opts.voice.clone(),
        }
    }
}

/// Build the utterance for a spoken summary of `text`.
///
/// Falls back to [`DEFAULT_SUMMARY_VOICE`] when `opts` names no voice.
pub fn summary_utterance(text: &str, max_sentences: usize, opts: &SpeechOptions) -> Utterance {
    let mut utterance = Utterance::new(summarize(text, max_sentences), opts);
    if utterance.voice.is_none() {
        utterance.voice = Some(DEFAULT_SUMMARY_VOICE.to_string());
    }
    utterance
}

/// Platform speech synthesizer
pub trait TextToSpeechEngine {
    /// Names of the voices installed on this engine
    fn voices(&self) -> Vec<String>;

    fn is_speaking(&self) -> bool;

    fn is_paused(&self) -> bool;

    /// Queue an utterance for playback
    fn speak(&mut self, utterance: Utterance) -> Result<(), SpeechError>;

    /// Drop the current and all queued utterances
    fn cancel(&mut self);

    fn pause(&mut self);

    fn resume(&mut self);
}

/// Start/pause/resume/stop control over an engine
pub struct SpeechController<E> {
    engine: E,
}

impl<E: TextToSpeechEngine> SpeechController<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_inner(self) -> E {
        self.engine
    }

    /// Speak `text`, interrupting anything already playing.
    ///
    /// A requested voice the engine does not offer is ignored and the
    /// engine default is used.
    pub fn speak(&mut self, text: &str, opts: &SpeechOptions) -> Result<(), SpeechError> {
        self.engine.cancel();
        let utterance = Utterance::new(text, opts);
        self.play(utterance)
    }

    /// Summarize `text`, speak the summary and return it
    pub fn summarize_and_speak(
        &mut self,
        text: &str,
        opts: &SpeechOptions,
    ) -> Result<String, SpeechError> {
        self.engine.cancel();
        let utterance = summary_utterance(text, DEFAULT_MAX_SENTENCES, opts);
        let summary = utterance.text.clone();
        self.play(utterance)?;
        Ok(summary)
    }

    pub fn stop(&mut self) {
        if self.engine.is_speaking() {
            self.engine.cancel();
        }
    }

    pub fn pause(&mut self) {
        if self.engine.is_speaking() && !self.engine.is_paused() {
            self.engine.pause();
        }
    }

    pub fn resume(&mut self) {
        if self.engine.is_paused() {
            self.engine.resume();
        }
    }

    fn play(&mut self, mut utterance: Utterance) -> Result<(), SpeechError> {
        if let Some(voice) = &utterance.voice {
            if !self.engine.voices().iter().any(|v| v == voice) {
                utterance.voice = None;
            }
        }
        self.engine.speak(utterance)
    }
}
