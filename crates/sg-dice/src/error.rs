//! Error types for dice notation parsing.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Result type for notation parsing.
pub type DiceResult<T> = Result<T, NotationError>;

/// Reasons a dice notation string is rejected.
///
/// Every variant that points at a location carries the byte span of the
/// offending input so frontends can underline it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum NotationError {
    /// The notation is empty or only whitespace.
    #[error("empty dice notation")]
    #[diagnostic(code(sg_dice::empty), help("write a formula such as `2d6+3`"))]
    Empty,

    /// A character outside the dice grammar.
    #[error("unexpected character '{found}'")]
    #[diagnostic(code(sg_dice::unexpected_char))]
    UnexpectedChar {
        /// The rejected input.
        found: String,
        /// Where it appears.
        #[label("not part of dice notation")]
        span: SourceSpan,
    },

    /// A dice term without a leading count, such as `d6`.
    #[error("dice term is missing its count")]
    #[diagnostic(code(sg_dice::missing_count), help("write `1d6` instead of `d6`"))]
    MissingCount {
        /// Location of the bare `d`.
        #[label("expected a number before this")]
        span: SourceSpan,
    },

    /// A dice term without a face count, such as `3d`.
    #[error("dice term is missing its face count")]
    #[diagnostic(code(sg_dice::missing_faces))]
    MissingFaces {
        /// Location of the dangling `d`.
        #[label("expected a number after this")]
        span: SourceSpan,
    },

    /// A dice term rolling zero dice.
    #[error("dice count must be at least 1")]
    #[diagnostic(code(sg_dice::zero_count))]
    ZeroCount {
        /// Location of the term.
        #[label("rolls no dice")]
        span: SourceSpan,
    },

    /// A die with fewer than two faces.
    #[error("a die needs at least 2 faces, found {faces}")]
    #[diagnostic(code(sg_dice::invalid_faces))]
    InvalidFaces {
        /// The rejected face count.
        faces: u32,
        /// Location of the term.
        #[label("not a die")]
        span: SourceSpan,
    },

    /// A number too large for the engine's limits.
    #[error("'{text}' is out of range")]
    #[diagnostic(
        code(sg_dice::out_of_range),
        help("terms are limited to 10000 dice of at most 1000000 faces")
    )]
    OutOfRange {
        /// The rejected number as written.
        text: String,
        /// Where it appears.
        #[label("too large")]
        span: SourceSpan,
    },

    /// An operator with no term before it (leading or doubled `+`/`-`).
    #[error("operator '{op}' has no term before it")]
    #[diagnostic(code(sg_dice::misplaced_operator))]
    MisplacedOperator {
        /// The operator character.
        op: char,
        /// Where it appears.
        #[label("expected a term here")]
        span: SourceSpan,
    },

    /// An operator with no term after it.
    #[error("operator '{op}' has no term after it")]
    #[diagnostic(code(sg_dice::trailing_operator))]
    TrailingOperator {
        /// The operator character.
        op: char,
        /// Where it appears.
        #[label("nothing follows")]
        span: SourceSpan,
    },

    /// Two terms written without a `+` or `-` between them.
    #[error("expected '+' or '-' before '{found}'")]
    #[diagnostic(code(sg_dice::expected_operator))]
    ExpectedOperator {
        /// The token found instead of an operator.
        found: String,
        /// Where it appears.
        #[label("missing operator")]
        span: SourceSpan,
    },

    /// Flat modifiers whose sum leaves the supported range.
    #[error("flat modifiers add up to more than ±{}", crate::notation::MAX_MODIFIER)]
    #[diagnostic(code(sg_dice::modifier_out_of_range))]
    ModifierOutOfRange,

    /// Only flat numbers, no dice.
    #[error("notation contains no dice")]
    #[diagnostic(code(sg_dice::no_dice), help("add a dice term such as `1d6`"))]
    NoDice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = NotationError::InvalidFaces {
            faces: 1,
            span: (2, 1).into(),
        };
        assert_eq!(err.to_string(), "a die needs at least 2 faces, found 1");

        let err = NotationError::MisplacedOperator {
            op: '+',
            span: (0, 1).into(),
        };
        assert_eq!(err.to_string(), "operator '+' has no term before it");
    }

    #[test]
    fn diagnostics_carry_codes() {
        let code = NotationError::Empty.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("sg_dice::empty"));
    }
}
