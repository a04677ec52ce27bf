use std::fmt::Write;

use crate::document::{StjDocument, Timestamp};
use crate::errors::RenderError;

use super::{split_millis, timed_cues, Renderer};

/// WebVTT renderer
pub struct VttRenderer {
    include_speaker: bool,
}

impl VttRenderer {
    pub fn new(include_speaker: bool) -> Self {
        Self { include_speaker }
    }

    /// Format as `HH:MM:SS.mmm`
    pub fn format_timestamp(time: &Timestamp) -> String {
        let (hours, minutes, seconds, millis) = split_millis(time.as_millis());
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
    }
}

impl Renderer for VttRenderer {
    fn render(&self, document: &StjDocument) -> Result<String, RenderError> {
        let mut out = String::from("WEBVTT\n\n");
        for cue in timed_cues(document)? {
            let _ = writeln!(
                out,
                "{} --> {}",
                Self::format_timestamp(&cue.start),
                Self::format_timestamp(&cue.end)
            );
            let _ = writeln!(out, "{}", cue.text_with_speaker(self.include_speaker));
            out.push('\n');
        }
        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "vtt"
    }
}
