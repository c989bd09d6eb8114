//! Curriculum loading and validation for GitLook lessons.
//!
//! [`load`] turns lesson content JSON into a [`Curriculum`]; [`validate`]
//! and [`validate_with_source`] report content that loads but will not
//! render the way it was written (dangling references, duplicate ids, quiz
//! answers without an option). [`check`] runs both and applies the strict
//! policy.

pub mod error;

mod load;
mod span;
mod validate;

pub use load::load;
pub use span::Span;
pub use validate::{validate, validate_with_source};

use log::info;

use gitlook_core::lesson::Curriculum;

use crate::error::{ContentError, Diagnostic};

/// Loads and validates curriculum source.
///
/// Returns the curriculum with its validation warnings. With `strict` set,
/// any warning fails the whole load instead.
///
/// # Errors
///
/// Returns a [`ContentError`] if the JSON cannot be loaded, or, in strict
/// mode, if validation reported anything.
pub fn check(source: &str, strict: bool) -> Result<(Curriculum, Vec<Diagnostic>), ContentError> {
    let curriculum = load(source)?;
    let warnings = validate_with_source(&curriculum, source);

    if strict && !warnings.is_empty() {
        return Err(ContentError::new(warnings));
    }

    info!(warnings = warnings.len(), strict; "Curriculum validated");
    Ok((curriculum, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DANGLING: &str = r#"{ "modules": [{ "id": "m", "animations": [{
        "id": "w",
        "animationData": {
            "type": "workflow",
            "steps": [{ "id": "s1", "text": "", "position": { "x": 0, "y": 0 } }],
            "connections": [{ "from": "s1", "to": "s2" }]
        }
    }] }] }"#;

    #[test]
    fn test_check_lenient_returns_warnings() {
        let (curriculum, warnings) = check(DANGLING, false).unwrap();
        assert_eq!(curriculum.len(), 1);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_check_strict_fails_on_warning() {
        let err = check(DANGLING, true).unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
        assert!(err.diagnostics()[0].severity().is_warning());
    }
}
