//! Recording doubles for the strip, recognizer, delay and diagnostics
//! capabilities.

#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use myrtio_voice_light::{
    AudioPlayer, DiagnosticsSink, Recognizer, RecognizerResult, Rgb, StripConfig, StripDriver,
    Threshold, Vocabulary, NO_EVENT,
};

// ── Strip ─────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecordingStrip {
    pub config: Option<StripConfig>,
    pub brightness: Option<u8>,
    /// Every committed frame, oldest first
    pub commits: Vec<Vec<Rgb>>,
}

impl RecordingStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the LEDs currently show
    pub fn shown(&self) -> Option<&[Rgb]> {
        self.commits.last().map(Vec::as_slice)
    }
}

impl StripDriver for RecordingStrip {
    fn configure(&mut self, config: &StripConfig) {
        self.config = Some(*config);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = Some(brightness);
    }

    fn commit(&mut self, pixels: &[Rgb]) {
        self.commits.push(pixels.to_vec());
    }
}

// ── Recognizer ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerCall {
    Initialize,
    Train {
        call_sign: String,
        sentences: Vec<String>,
    },
    SetThreshold(u8),
    Play(String),
}

/// Returns scripted results, then [`NO_EVENT`] forever
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    pub script: VecDeque<RecognizerResult>,
    pub calls: Vec<RecognizerCall>,
    pub polls: usize,
}

impl ScriptedRecognizer {
    pub fn new(script: &[RecognizerResult]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn played(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RecognizerCall::Play(asset) => Some(asset.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl AudioPlayer for ScriptedRecognizer {
    fn play(&mut self, asset: &str) {
        self.calls.push(RecognizerCall::Play(asset.to_string()));
    }
}

impl Recognizer for ScriptedRecognizer {
    fn initialize(&mut self) {
        self.calls.push(RecognizerCall::Initialize);
    }

    fn poll(&mut self) -> RecognizerResult {
        self.polls += 1;
        self.script.pop_front().unwrap_or(NO_EVENT)
    }

    fn set_threshold(&mut self, threshold: Threshold) {
        self.calls.push(RecognizerCall::SetThreshold(threshold.value()));
    }

    fn train(&mut self, vocabulary: &Vocabulary) {
        self.calls.push(RecognizerCall::Train {
            call_sign: vocabulary.call_sign().to_string(),
            sentences: vocabulary
                .sentences()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        });
    }
}

// ── Delay ─────────────────────────────────────────────────────

/// Records pauses instead of sleeping
#[derive(Debug, Default)]
pub struct FakeDelay {
    pub pauses_ms: Vec<u32>,
    pub total_ns: u64,
}

impl FakeDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.pauses_ms.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

// ── Diagnostics ───────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct VecSink {
    pub records: Vec<String>,
}

impl DiagnosticsSink for VecSink {
    fn emit(&mut self, text: &str) {
        self.records.push(text.to_string());
    }
}

/// Hue source returning the given hues in a loop
pub fn fixed_hues(hues: &'static [u16]) -> impl FnMut() -> u16 {
    let mut next = 0;
    move || {
        let hue = hues[next % hues.len()];
        next += 1;
        hue
    }
}
