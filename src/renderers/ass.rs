use std::fmt::Write;

use crate::document::{StjDocument, Timestamp};
use crate::errors::RenderError;

use super::{split_millis, timed_cues, Renderer};

const STYLE_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, \
Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, \
Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";

const DEFAULT_STYLE: &str = "Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H64000000,\
0,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1";

const EVENT_FORMAT: &str = "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// Advanced SubStation Alpha renderer
///
/// All STJ styles map onto the single `Default` ASS style; the event name is
/// the speaker's display name.
pub struct AssRenderer {
    play_res_x: u32,
    play_res_y: u32,
}

impl AssRenderer {
    pub fn new(play_res_x: u32, play_res_y: u32) -> Self {
        Self { play_res_x, play_res_y }
    }

    /// Format as `H:MM:SS.cc`
    pub fn format_timestamp(time: &Timestamp) -> String {
        let (hours, minutes, seconds, millis) = split_millis(time.as_millis());
        format!("{}:{:02}:{:02}.{:02}", hours, minutes, seconds, millis / 10)
    }

    fn write_header(&self, out: &mut String) {
        let _ = writeln!(out, "[Script Info]");
        let _ = writeln!(out, "Title: STJ to ASS Conversion");
        let _ = writeln!(out, "ScriptType: v4.00+");
        let _ = writeln!(out, "Collisions: Normal");
        let _ = writeln!(out, "PlayResX: {}", self.play_res_x);
        let _ = writeln!(out, "PlayResY: {}", self.play_res_y);
        let _ = writeln!(out, "Timer: 100.0000");
        out.push('\n');

        let _ = writeln!(out, "[V4+ Styles]");
        let _ = writeln!(out, "{}", STYLE_FORMAT);
        let _ = writeln!(out, "{}", DEFAULT_STYLE);
        out.push('\n');

        let _ = writeln!(out, "[Events]");
        let _ = writeln!(out, "{}", EVENT_FORMAT);
    }
}

impl Renderer for AssRenderer {
    fn render(&self, document: &StjDocument) -> Result<String, RenderError> {
        let cues = timed_cues(document)?;

        let mut out = String::new();
        self.write_header(&mut out);

        for cue in cues {
            let name = cue
                .speaker_id
                .map(|id| document.speaker_name(id))
                .unwrap_or_default();
            let text = cue.text.replace('\n', "\\N");
            let _ = writeln!(
                out,
                "Dialogue: 0,{},{},Default,{},0000,0000,0000,,{}",
                Self::format_timestamp(&cue.start),
                Self::format_timestamp(&cue.end),
                name,
                text
            );
        }

        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "ass"
    }
}
