//! Error codes for the GitLook content diagnostics.
//!
//! Codes are grouped by the stage that reports them:
//! - `E1xx` - Loading errors (the JSON could not be read into a curriculum)
//! - `E2xx` - Validation warnings (the curriculum loaded but references break)

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Loading Errors (E1xx)
    // =========================================================================
    /// Malformed JSON.
    ///
    /// The source is not syntactically valid JSON.
    E100,

    /// Schema mismatch.
    ///
    /// The JSON is valid but does not have the shape of a curriculum, e.g. a
    /// step without a position or a scene description without a `type` tag.
    E101,

    // =========================================================================
    // Validation Warnings (E2xx)
    // =========================================================================
    /// Unresolved relation endpoint.
    ///
    /// A connection, flow or transition names an element that the scene
    /// does not declare. The relation is not drawn.
    E200,

    /// Duplicate element id.
    ///
    /// Two elements of one scene share an id. Both are drawn, but highlights
    /// only reach the first.
    E201,

    /// Unsupported scene kind.
    ///
    /// The scene's `type` is not one of the known kinds; a placeholder is
    /// shown instead of a diagram.
    E202,

    /// Unresolved branch start.
    ///
    /// A branch's `startFrom` is not a main-line commit. The branch line is
    /// not drawn.
    E203,

    /// Unresolved merge target.
    ///
    /// A branch's `mergeInto` is not a main-line commit. The branch line
    /// stops at its last commit.
    E204,

    /// Duplicate animation id.
    ///
    /// Two animations of one module share an id and therefore a mount point.
    E205,

    /// Quiz answer not among options.
    ///
    /// A question's `correctAnswer` names no option, so it cannot be answered
    /// correctly.
    E206,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E200").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
            ErrorCode::E206 => "E206",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "malformed JSON",
            ErrorCode::E101 => "schema mismatch",
            ErrorCode::E200 => "unresolved relation endpoint",
            ErrorCode::E201 => "duplicate element id",
            ErrorCode::E202 => "unsupported scene kind",
            ErrorCode::E203 => "unresolved branch start",
            ErrorCode::E204 => "unresolved merge target",
            ErrorCode::E205 => "duplicate animation id",
            ErrorCode::E206 => "quiz answer not among options",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E206.to_string(), "E206");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E101.description(), "schema mismatch");
        assert_eq!(
            ErrorCode::E200.description(),
            "unresolved relation endpoint"
        );
    }
}
