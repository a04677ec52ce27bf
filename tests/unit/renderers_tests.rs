/*!
 * Tests for the subtitle renderers
 */

use anyhow::Result;
use serde_json::json;
use stjtool::app_config::OutputConfig;
use stjtool::document::StjDocument;
use stjtool::errors::RenderError;
use stjtool::renderers::{AssRenderer, OutputFormat, Renderer, SrtRenderer, VttRenderer};
use stjtool::validation::ValidationService;
use crate::common;

fn validated_document() -> Result<StjDocument> {
    Ok(ValidationService::new().validate_document(&common::valid_document())?)
}

#[test]
fn test_srtRenderer_withSpeakers_shouldPrefixSpeakerIds() -> Result<()> {
    let document = validated_document()?;

    let srt = SrtRenderer::new(true).render(&document)?;

    let expected = "1\n00:00:00,000 --> 00:00:02,500\nSpeaker1: Hello everyone\n\n\
                    2\n00:00:03,000 --> 00:00:05,250\nSpeaker2: Bonjour à tous\n\n\
                    3\n00:00:06,000 --> 00:00:06,000\n[applause]\n\n";
    assert_eq!(srt, expected);
    Ok(())
}

#[test]
fn test_srtRenderer_withoutSpeakers_shouldEmitPlainText() -> Result<()> {
    let document = validated_document()?;

    let srt = SrtRenderer::new(false).render(&document)?;

    assert!(srt.contains("\nHello everyone\n"));
    assert!(!srt.contains("Speaker1"));
    Ok(())
}

#[test]
fn test_vttRenderer_shouldEmitHeaderAndDotMillis() -> Result<()> {
    let document = validated_document()?;

    let vtt = VttRenderer::new(true).render(&document)?;

    assert!(vtt.starts_with("WEBVTT\n\n00:00:00.000 --> 00:00:02.500\nSpeaker1: Hello everyone\n\n"));
    assert!(vtt.contains("00:00:03.000 --> 00:00:05.250\n"));
    Ok(())
}

#[test]
fn test_assRenderer_shouldUseSpeakerNamesAndDefaultStyle() -> Result<()> {
    let document = validated_document()?;

    let ass = AssRenderer::new(1280, 720).render(&document)?;

    assert!(ass.starts_with("[Script Info]\n"));
    assert!(ass.contains("PlayResX: 1280\nPlayResY: 720\n"));
    assert!(ass.contains("[V4+ Styles]\n"));
    assert!(ass.contains("Dialogue: 0,0:00:00.00,0:00:02.50,Default,Dr. Smith,0000,0000,0000,,Hello everyone\n"));
    assert!(ass.contains("Dialogue: 0,0:00:03.00,0:00:05.25,Default,Alex,0000,0000,0000,,Bonjour à tous\n"));
    assert!(ass.contains("Dialogue: 0,0:00:06.00,0:00:06.00,Default,,0000,0000,0000,,[applause]\n"));
    Ok(())
}

#[test]
fn test_assRenderer_withMultilineText_shouldEscapeNewlines() -> Result<()> {
    let document = ValidationService::new().validate_document(&json!({
        "version": "0.6.0",
        "transcript": {"segments": [{"start": 0, "end": 1, "text": "line one\nline two"}]}
    }))?;

    let ass = AssRenderer::new(1920, 1080).render(&document)?;

    assert!(ass.contains(",,line one\\Nline two\n"));
    Ok(())
}

#[test]
fn test_render_withUntimedSegments_shouldFail() -> Result<()> {
    let document = ValidationService::new().validate_document(&json!({
        "version": "0.6.0",
        "transcript": {"segments": [{"text": "no timing here"}]}
    }))?;

    let result = SrtRenderer::new(true).render(&document);

    assert!(matches!(result, Err(RenderError::MissingTiming { segment: 0 })));
    Ok(())
}

#[test]
fn test_outputFormat_renderer_shouldMatchExtension() {
    let config = OutputConfig::default();

    for format in [OutputFormat::Srt, OutputFormat::Vtt, OutputFormat::Ass] {
        assert_eq!(format.renderer(&config).extension(), format.extension());
    }
}
