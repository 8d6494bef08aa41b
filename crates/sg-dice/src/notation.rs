//! Parsed dice expressions and their exact statistics.
//!
//! The grammar is a sequence of terms joined by `+` or `-`, where each term is
//! either a dice term `NdM` or a flat integer: `3d6+2`, `2d6+1d4+3`,
//! `1d8-1d4`. At least one dice term is required. Counts start at 1 and dice
//! have at least two faces; anything else is rejected rather than coerced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::{DiceResult, NotationError};
use crate::lexer::{self, Lexeme, Token};

/// Largest number of dice accepted in a single term.
pub const MAX_DICE_PER_TERM: u32 = 10_000;

/// Largest magnitude the flat modifiers of one expression may sum to.
pub const MAX_MODIFIER: i64 = 1_000_000_000_000;

/// Whether a term is added to or subtracted from the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sign {
    /// Added to the total.
    #[default]
    Plus,
    /// Subtracted from the total.
    Minus,
}

impl Sign {
    /// Apply this sign to a value.
    pub fn apply(self, value: i64) -> i64 {
        match self {
            Self::Plus => value,
            Self::Minus => -value,
        }
    }

    fn from_token(token: Token) -> Self {
        match token {
            Token::Minus => Self::Minus,
            _ => Self::Plus,
        }
    }
}

/// A group of identical dice, such as the `3d6` in `3d6+2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceTerm {
    sign: Sign,
    count: u32,
    die: Die,
}

impl DiceTerm {
    /// Create a dice term.
    ///
    /// Returns `None` when the count is zero or above [`MAX_DICE_PER_TERM`],
    /// or when the die has fewer than two faces.
    pub fn new(sign: Sign, count: u32, die: Die) -> Option<Self> {
        let count_ok = (1..=MAX_DICE_PER_TERM).contains(&count);
        let die_ok = Die::from_sides(die.sides()).is_some();
        (count_ok && die_ok).then_some(Self { sign, count, die })
    }

    /// Whether this term adds to or subtracts from the total.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Number of dice rolled.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The die type rolled.
    pub fn die(&self) -> Die {
        self.die
    }

    /// Smallest signed contribution of this term.
    pub fn min(&self) -> i64 {
        let count = i64::from(self.count);
        match self.sign {
            Sign::Plus => count,
            Sign::Minus => -(count * i64::from(self.die.sides())),
        }
    }

    /// Largest signed contribution of this term.
    pub fn max(&self) -> i64 {
        let count = i64::from(self.count);
        match self.sign {
            Sign::Plus => count * i64::from(self.die.sides()),
            Sign::Minus => -count,
        }
    }

    /// Twice the expected signed contribution of this term.
    pub fn mean_halves(&self) -> i64 {
        self.sign
            .apply(i64::from(self.count) * self.die.mean_halves())
    }
}

impl fmt::Display for DiceTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}

/// One term of a dice expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    /// A group of dice.
    Dice(DiceTerm),
    /// A flat, already signed modifier.
    Flat(i64),
}

/// A parsed dice formula.
///
/// Construct with [`DiceExpression::parse`] (or `str::parse`). The statistics
/// methods are total: a value of this type always satisfies the grammar's
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiceExpression {
    terms: Vec<Term>,
}

impl DiceExpression {
    /// Parse a notation string such as `"2d6+1d4+3"`.
    pub fn parse(notation: &str) -> DiceResult<Self> {
        let lexemes = lexer::lex(notation)?;
        if lexemes.is_empty() {
            return Err(NotationError::Empty);
        }

        let mut terms = Vec::new();
        let mut sign = Sign::Plus;
        let mut pending_op: Option<&Lexeme<'_>> = None;
        let mut expect_term = true;
        let mut iter = lexemes.iter().peekable();

        while let Some(lexeme) = iter.next() {
            match (expect_term, lexeme.token) {
                (true, Token::Number) => {
                    let value = parse_number(lexeme)?;
                    match iter.next_if(|l| l.token == Token::D) {
                        Some(d) => {
                            let faces_lexeme = iter
                                .next_if(|l| l.token == Token::Number)
                                .ok_or_else(|| NotationError::MissingFaces {
                                    span: d.span.clone().into(),
                                })?;
                            let faces = parse_number(faces_lexeme)?;
                            let span = lexeme.span.start..faces_lexeme.span.end;
                            terms.push(Term::Dice(dice_term(sign, value, faces, span)?));
                        }
                        None => terms.push(Term::Flat(sign.apply(i64::from(value)))),
                    }
                    expect_term = false;
                    pending_op = None;
                }
                (true, Token::D) => {
                    return Err(NotationError::MissingCount {
                        span: lexeme.span.clone().into(),
                    });
                }
                (true, Token::Plus | Token::Minus) => {
                    return Err(NotationError::MisplacedOperator {
                        op: lexeme.op(),
                        span: lexeme.span.clone().into(),
                    });
                }
                (false, Token::Plus | Token::Minus) => {
                    sign = Sign::from_token(lexeme.token);
                    pending_op = Some(lexeme);
                    expect_term = true;
                }
                (false, Token::Number | Token::D) => {
                    return Err(NotationError::ExpectedOperator {
                        found: lexeme.text.to_string(),
                        span: lexeme.span.clone().into(),
                    });
                }
            }
        }

        if let Some(op) = pending_op {
            return Err(NotationError::TrailingOperator {
                op: op.op(),
                span: op.span.clone().into(),
            });
        }

        Self::from_terms(terms)
    }

    /// Build an expression from already validated terms.
    ///
    /// Fails with [`NotationError::NoDice`] unless at least one dice term is
    /// present, and with [`NotationError::ModifierOutOfRange`] when the flat
    /// terms sum beyond [`MAX_MODIFIER`].
    pub fn from_terms(terms: Vec<Term>) -> DiceResult<Self> {
        if !terms.iter().any(|t| matches!(t, Term::Dice(_))) {
            return Err(NotationError::NoDice);
        }
        let modifier = terms
            .iter()
            .try_fold(0i64, |acc, t| match t {
                Term::Flat(v) => acc.checked_add(*v),
                Term::Dice(_) => Some(acc),
            })
            .filter(|m| m.unsigned_abs() <= MAX_MODIFIER.unsigned_abs());
        if modifier.is_none() {
            return Err(NotationError::ModifierOutOfRange);
        }
        Ok(Self { terms })
    }

    /// The terms in written order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The dice terms in written order.
    pub fn dice_terms(&self) -> impl Iterator<Item = &DiceTerm> {
        self.terms.iter().filter_map(|t| match t {
            Term::Dice(d) => Some(d),
            Term::Flat(_) => None,
        })
    }

    /// Sum of all flat modifiers.
    pub fn modifier(&self) -> i64 {
        self.terms
            .iter()
            .map(|t| match t {
                Term::Flat(v) => *v,
                Term::Dice(_) => 0,
            })
            .sum()
    }

    /// Total number of dice rolled across all terms.
    pub fn dice_count(&self) -> u64 {
        self.dice_terms().map(|d| u64::from(d.count())).sum()
    }

    /// Smallest possible total.
    pub fn min(&self) -> i64 {
        self.dice_terms().map(DiceTerm::min).sum::<i64>() + self.modifier()
    }

    /// Largest possible total.
    pub fn max(&self) -> i64 {
        self.dice_terms().map(DiceTerm::max).sum::<i64>() + self.modifier()
    }

    /// Twice the expected total, as an exact integer.
    pub fn average_halves(&self) -> i64 {
        self.dice_terms().map(DiceTerm::mean_halves).sum::<i64>() + 2 * self.modifier()
    }

    /// Expected total. Exact: `2d6+1` is `8.0`, `1d6` is `3.5`.
    pub fn average(&self) -> f64 {
        self.average_halves() as f64 / 2.0
    }
}

fn parse_number(lexeme: &Lexeme<'_>) -> DiceResult<u32> {
    lexeme
        .text
        .parse::<u32>()
        .map_err(|_| NotationError::OutOfRange {
            text: lexeme.text.to_string(),
            span: lexeme.span.clone().into(),
        })
}

fn dice_term(
    sign: Sign,
    count: u32,
    faces: u32,
    span: std::ops::Range<usize>,
) -> DiceResult<DiceTerm> {
    if count == 0 {
        return Err(NotationError::ZeroCount { span: span.into() });
    }
    if faces < 2 {
        return Err(NotationError::InvalidFaces {
            faces,
            span: span.into(),
        });
    }
    let out_of_range = |text: String| NotationError::OutOfRange {
        text,
        span: span.clone().into(),
    };
    let die = Die::from_sides(faces).ok_or_else(|| out_of_range(faces.to_string()))?;
    DiceTerm::new(sign, count, die).ok_or_else(|| out_of_range(count.to_string()))
}

impl FromStr for DiceExpression {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DiceExpression {
    type Error = NotationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DiceExpression> for String {
    fn from(expr: DiceExpression) -> Self {
        expr.to_string()
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            let (negative, body) = match term {
                Term::Dice(d) => (d.sign() == Sign::Minus, d.to_string()),
                Term::Flat(v) => (*v < 0, v.unsigned_abs().to_string()),
            };
            match (i, negative) {
                (0, false) => {}
                (_, true) => write!(f, "-")?,
                (_, false) => write!(f, "+")?,
            }
            write!(f, "{body}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> DiceExpression {
        DiceExpression::parse(s).unwrap()
    }

    #[test]
    fn parses_single_term_with_modifier() {
        let expr = parse("3d6+2");
        assert_eq!(expr.terms().len(), 2);
        let term = expr.dice_terms().next().unwrap();
        assert_eq!(term.count(), 3);
        assert_eq!(term.die(), Die::D6);
        assert_eq!(expr.modifier(), 2);
    }

    #[test]
    fn parses_combined_terms() {
        let expr = parse("2d6+1d4+3");
        assert_eq!(expr.dice_terms().count(), 2);
        assert_eq!(expr.dice_count(), 3);
        assert_eq!(expr.modifier(), 3);
    }

    #[test]
    fn subtracted_modifiers_and_dice() {
        let expr = parse("1d20-3");
        assert_eq!(expr.modifier(), -3);

        let expr = parse("1d8-1d4");
        let signs: Vec<Sign> = expr.dice_terms().map(DiceTerm::sign).collect();
        assert_eq!(signs, vec![Sign::Plus, Sign::Minus]);
    }

    #[test]
    fn statistics_for_simple_notation() {
        let expr = parse("3d6+2");
        assert_eq!(expr.min(), 5);
        assert_eq!(expr.max(), 20);
        assert_eq!(expr.average_halves(), 25);
        assert!((expr.average() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn average_of_two_d6_plus_one_is_eight() {
        assert!((parse("2d6+1").average() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn subtracted_dice_flip_their_bounds() {
        let expr = parse("1d8-1d4");
        assert_eq!(expr.min(), 1 - 4);
        assert_eq!(expr.max(), 8 - 1);
        assert!((expr.average() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flats_may_come_first() {
        let expr = parse("5+1d4");
        assert_eq!(expr.min(), 6);
        assert_eq!(expr.to_string(), "5+1d4");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(DiceExpression::parse(""), Err(NotationError::Empty));
        assert_eq!(DiceExpression::parse("  "), Err(NotationError::Empty));
    }

    #[test]
    fn rejects_zero_count() {
        assert!(matches!(
            DiceExpression::parse("0d6"),
            Err(NotationError::ZeroCount { .. })
        ));
    }

    #[test]
    fn rejects_missing_count() {
        assert!(matches!(
            DiceExpression::parse("d6"),
            Err(NotationError::MissingCount { .. })
        ));
        assert!(matches!(
            DiceExpression::parse("2d6+d4"),
            Err(NotationError::MissingCount { .. })
        ));
    }

    #[test]
    fn rejects_bad_faces() {
        assert!(matches!(
            DiceExpression::parse("3d1"),
            Err(NotationError::InvalidFaces { faces: 1, .. })
        ));
        assert!(matches!(
            DiceExpression::parse("3d0"),
            Err(NotationError::InvalidFaces { faces: 0, .. })
        ));
        assert!(matches!(
            DiceExpression::parse("3d"),
            Err(NotationError::MissingFaces { .. })
        ));
        assert!(matches!(
            DiceExpression::parse("3d6.5"),
            Err(NotationError::UnexpectedChar { .. })
        ));
    }

    #[test]
    fn rejects_unbalanced_operators() {
        assert!(matches!(
            DiceExpression::parse("+3d6"),
            Err(NotationError::MisplacedOperator { op: '+', .. })
        ));
        assert!(matches!(
            DiceExpression::parse("3d6+-2"),
            Err(NotationError::MisplacedOperator { op: '-', .. })
        ));
        assert!(matches!(
            DiceExpression::parse("3d6+"),
            Err(NotationError::TrailingOperator { op: '+', .. })
        ));
    }

    #[test]
    fn rejects_adjacent_terms() {
        assert!(matches!(
            DiceExpression::parse("3d6 2"),
            Err(NotationError::ExpectedOperator { .. })
        ));
        assert!(matches!(
            DiceExpression::parse("3d6d4"),
            Err(NotationError::ExpectedOperator { .. })
        ));
    }

    #[test]
    fn rejects_flat_only() {
        assert_eq!(DiceExpression::parse("5"), Err(NotationError::NoDice));
        assert_eq!(DiceExpression::parse("5+3"), Err(NotationError::NoDice));
    }

    #[test]
    fn rejects_numbers_beyond_limits() {
        assert!(matches!(
            DiceExpression::parse("99999999999d6"),
            Err(NotationError::OutOfRange { .. })
        ));
        assert!(matches!(
            DiceExpression::parse("10001d6"),
            Err(NotationError::OutOfRange { .. })
        ));
        assert!(matches!(
            DiceExpression::parse("1d1000001"),
            Err(NotationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn error_spans_point_at_the_term() {
        let Err(NotationError::ZeroCount { span }) = DiceExpression::parse("2d6+0d4") else {
            panic!("expected zero count");
        };
        assert_eq!(span.offset(), 4);
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(parse(" 2D6 + 1d4 - 3 ").to_string(), "2d6+1d4-3");
        assert_eq!(parse("1d8-1d4").to_string(), "1d8-1d4");
    }

    #[test]
    fn from_str_and_serde_round_trip_through_notation() {
        let expr: DiceExpression = "4d8+2".parse().unwrap();
        let json = serde_json::to_string(&expr).unwrap();
        assert_eq!(json, "\"4d8+2\"");
        let back: DiceExpression = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);
        assert!(serde_json::from_str::<DiceExpression>("\"0d6\"").is_err());
    }

    #[test]
    fn dice_term_constructor_enforces_invariants() {
        assert!(DiceTerm::new(Sign::Plus, 0, Die::D6).is_none());
        assert!(DiceTerm::new(Sign::Plus, 1, Die::Custom(1)).is_none());
        assert!(DiceTerm::new(Sign::Plus, 2, Die::D6).is_some());
    }

    #[test]
    fn flat_modifiers_stay_within_bounds() {
        let d6 = Term::Dice(DiceTerm::new(Sign::Plus, 1, Die::D6).unwrap());
        let err = DiceExpression::from_terms(vec![d6, Term::Flat(i64::MAX)]);
        assert_eq!(err, Err(NotationError::ModifierOutOfRange));

        let err = DiceExpression::from_terms(vec![d6, Term::Flat(i64::MIN)]);
        assert_eq!(err, Err(NotationError::ModifierOutOfRange));

        let expr = DiceExpression::from_terms(vec![d6, Term::Flat(-MAX_MODIFIER)]).unwrap();
        assert_eq!(expr.average_halves(), 7 - 2 * MAX_MODIFIER);
    }

    #[test]
    fn many_flat_terms_cannot_overflow() {
        let notation = format!("1d6{}", "+4000000000".repeat(300));
        assert_eq!(
            DiceExpression::parse(&notation),
            Err(NotationError::ModifierOutOfRange)
        );
    }
}
