/*!
 * Subtitle renderers for validated STJ documents.
 *
 * Renderers are pure formatting: they assume the document already passed
 * validation and only read segment timing, text and speaker.
 *
 * - `srt`: SubRip
 * - `vtt`: WebVTT
 * - `ass`: Advanced SubStation Alpha
 */

pub mod ass;
pub mod srt;
pub mod vtt;

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::app_config::OutputConfig;
use crate::document::{StjDocument, Timestamp};
use crate::errors::RenderError;

pub use ass::AssRenderer;
pub use srt::SrtRenderer;
pub use vtt::VttRenderer;

/// Turns a validated document into subtitle text
pub trait Renderer {
    /// Render the whole document
    fn render(&self, document: &StjDocument) -> Result<String, RenderError>;

    /// File extension of the produced format, without the dot
    fn extension(&self) -> &'static str;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Srt,
    Vtt,
    Ass,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Ass => "ass",
        }
    }

    /// Build the renderer for this format
    pub fn renderer(&self, config: &OutputConfig) -> Box<dyn Renderer> {
        match self {
            Self::Srt => Box::new(SrtRenderer::new(config.include_speaker)),
            Self::Vtt => Box::new(VttRenderer::new(config.include_speaker)),
            Self::Ass => Box::new(AssRenderer::new(config.ass_play_res_x, config.ass_play_res_y)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "vtt" | "webvtt" => Ok(Self::Vtt),
            "ass" | "ssa" => Ok(Self::Ass),
            _ => Err(anyhow!("Unsupported output format: {}", s)),
        }
    }
}

/// One timed segment, ready for formatting
#[derive(Debug, Clone)]
pub struct Cue<'a> {
    /// 1-based position
    pub seq_num: usize,
    pub start: Timestamp,
    pub end: Timestamp,
    pub speaker_id: Option<&'a str>,
    pub style_id: Option<&'a str>,
    pub text: &'a str,
}

impl Cue<'_> {
    /// Text with an optional "speaker: " prefix
    pub fn text_with_speaker(&self, include_speaker: bool) -> String {
        match self.speaker_id {
            Some(speaker) if include_speaker && !speaker.is_empty() => format!("{}: {}", speaker, self.text),
            _ => self.text.to_string(),
        }
    }
}

/// Collect the document's segments as cues; every segment must be timed
pub fn timed_cues(document: &StjDocument) -> Result<Vec<Cue<'_>>, RenderError> {
    document
        .transcript
        .segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let start = segment.start.as_ref().and_then(Timestamp::from_value);
            let end = segment.end.as_ref().and_then(Timestamp::from_value);
            match (start, end) {
                (Some(start), Some(end)) => Ok(Cue {
                    seq_num: index + 1,
                    start,
                    end,
                    speaker_id: segment.speaker_id.as_deref(),
                    style_id: segment.style_id.as_deref(),
                    text: &segment.text,
                }),
                _ => Err(RenderError::MissingTiming { segment: index }),
            }
        })
        .collect()
}

/// Split milliseconds into (hours, minutes, seconds, millis)
pub(crate) fn split_millis(ms: u64) -> (u64, u64, u64, u64) {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;
    (hours, minutes, seconds, millis)
}
