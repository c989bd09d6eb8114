//! Reading curriculum JSON.

use log::{debug, info};
use serde_json::error::Category;

use gitlook_core::lesson::Curriculum;

use crate::{
    Span,
    error::{Diagnostic, ErrorCode, Result},
};

/// Reads a curriculum from JSON source.
///
/// Fails with a single [`ErrorCode::E100`] (malformed JSON) or
/// [`ErrorCode::E101`] (schema mismatch) diagnostic pointing at the position
/// `serde_json` stopped at. Unknown scene types are not an error here: they
/// load as [`SceneDescription::Unsupported`](gitlook_core::scene::SceneDescription::Unsupported).
///
/// # Examples
///
/// ```
/// let curriculum = gitlook_content::load(r#"{ "modules": [{ "id": "git-basics" }] }"#).unwrap();
/// assert_eq!(curriculum.len(), 1);
///
/// let err = gitlook_content::load(r#"{ "modules": [ }"#).unwrap_err();
/// assert_eq!(err.diagnostics()[0].code().unwrap().as_str(), "E100");
/// ```
pub fn load(source: &str) -> Result<Curriculum> {
    let curriculum: Curriculum = serde_json::from_str(source).map_err(|err| {
        debug!(line = err.line(), column = err.column(); "Curriculum JSON rejected");
        json_diagnostic(source, &err)
    })?;

    info!(modules = curriculum.len(); "Curriculum loaded");
    Ok(curriculum)
}

fn json_diagnostic(source: &str, err: &serde_json::Error) -> Diagnostic {
    let span = Span::from_line_column(source, err.line(), err.column());
    let (code, label, help) = match err.classify() {
        Category::Data => (
            ErrorCode::E101,
            "unexpected value here",
            "check the field names and types against the lesson content format",
        ),
        Category::Eof => (
            ErrorCode::E100,
            "input ends here",
            "the document is truncated; close every open object and array",
        ),
        _ => (
            ErrorCode::E100,
            "invalid JSON here",
            "the curriculum must be a single JSON object with a `modules` array",
        ),
    };

    Diagnostic::error(err.to_string())
        .with_code(code)
        .with_label(span, label)
        .with_help(help)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reports_schema_mismatch() {
        // A step without a position
        let source = r#"{ "modules": [{ "id": "m", "animations": [{
            "id": "a",
            "animationData": { "type": "workflow", "steps": [{ "id": "s1", "text": "Edit" }] }
        }] }] }"#;

        let err = load(source).unwrap_err();
        let diag = &err.diagnostics()[0];
        assert!(diag.severity().is_error());
        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.labels().len(), 1);
    }

    #[test]
    fn test_load_reports_truncated_input() {
        let err = load(r#"{ "modules": ["#).unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_load_accepts_unknown_scene_type() {
        let source = r#"{ "modules": [{ "id": "m", "animations": [{
            "id": "a", "animationData": { "type": "timeline" }
        }] }] }"#;

        let curriculum = load(source).unwrap();
        let animation = &curriculum.modules[0].animations[0];
        assert_eq!(
            animation.animation_data,
            gitlook_core::scene::SceneDescription::Unsupported
        );
    }
}
