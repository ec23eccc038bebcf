//! DiceFormula - Parsed dice notation `[count]d<sides>[(+|-)modifier]`

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of dice in a single roll
pub const MAX_DICE: u32 = 100;
/// Maximum number of sides on a die
pub const MAX_SIDES: u32 = 1000;
/// Maximum absolute modifier
pub const MAX_MODIFIER: i64 = 1_000_000;

/// A validated dice formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiceFormula {
    /// Number of dice to roll (always > 0)
    pub count: u32,
    /// Sides per die (always > 0)
    pub sides: u32,
    /// Signed value added to the dice sum
    pub modifier: i64,
}

impl DiceFormula {
    /// Create a formula, applying the same validation as parsing
    pub fn new(count: i64, sides: i64, modifier: i64) -> Result<Self, FormulaError> {
        if count <= 0 || sides <= 0 {
            return Err(FormulaError::NotPositive);
        }
        if count > i64::from(MAX_DICE) {
            return Err(FormulaError::TooManyDice { count });
        }
        if sides > i64::from(MAX_SIDES) {
            return Err(FormulaError::TooManySides { sides });
        }
        if modifier.abs() > MAX_MODIFIER {
            return Err(FormulaError::ModifierOutOfRange { modifier });
        }

        Ok(Self {
            count: count as u32,
            sides: sides as u32,
            modifier,
        })
    }
}

/// Which segment of a formula failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaPart {
    Count,
    Sides,
    Modifier,
}

impl std::fmt::Display for FormulaPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormulaPart::Count => write!(f, "dice count"),
            FormulaPart::Sides => write!(f, "die size"),
            FormulaPart::Modifier => write!(f, "modifier"),
        }
    }
}

/// Reasons a dice formula is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("formula is empty")]
    Empty,

    #[error("formula has no 'd' separator")]
    MissingDie,

    #[error("formula has more than one 'd' separator")]
    MultipleDice,

    #[error("{part} is not a number: {value:?}")]
    NotANumber { part: FormulaPart, value: String },

    #[error("dice count and die size must be greater than zero")]
    NotPositive,

    #[error("too many dice: {count}")]
    TooManyDice { count: i64 },

    #[error("too many sides: {sides}")]
    TooManySides { sides: i64 },

    #[error("modifier out of range: {modifier}")]
    ModifierOutOfRange { modifier: i64 },
}

impl FormulaError {
    /// Corrective message shown to the person who asked for the roll
    pub fn user_message(&self) -> String {
        match self {
            FormulaError::Empty | FormulaError::MissingDie | FormulaError::MultipleDice => {
                "Invalid format. Use XdY (e.g. 1d20, 2d6+3).".to_string()
            }
            FormulaError::NotANumber { part, value } => format!(
                "Invalid roll format: the {} `{}` is not a number. Use XdY (+/- Z). E.g.: `/roll 1d20+5`",
                part, value
            ),
            FormulaError::NotPositive => {
                "The number of dice and the die size must be greater than zero.".to_string()
            }
            FormulaError::TooManyDice { .. } => {
                format!("You can roll at most {} dice at once.", MAX_DICE)
            }
            FormulaError::TooManySides { .. } => {
                format!("Dice can have at most {} sides.", MAX_SIDES)
            }
            FormulaError::ModifierOutOfRange { .. } => format!(
                "The modifier must be between -{} and +{}.",
                MAX_MODIFIER, MAX_MODIFIER
            ),
        }
    }
}

impl std::fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{}", m),
            m => write!(f, "-{}", m.unsigned_abs()),
        }
    }
}

impl std::str::FromStr for DiceFormula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        if normalized.is_empty() {
            return Err(FormulaError::Empty);
        }

        let die_at = normalized.find('d').ok_or(FormulaError::MissingDie)?;

        // The modifier sign is only searched after the die separator so that
        // a signed count ("-2d6") is reported as non-positive.
        let (dice, modifier) = match normalized[die_at..].find(|c: char| c == '+' || c == '-') {
            Some(offset) => {
                let sign_at = die_at + offset;
                let digits = &normalized[sign_at + 1..];
                let magnitude = parse_unsigned(digits).ok_or_else(|| {
                    FormulaError::NotANumber {
                        part: FormulaPart::Modifier,
                        value: digits.to_string(),
                    }
                })?;
                let modifier = if normalized[sign_at..].starts_with('-') {
                    -magnitude
                } else {
                    magnitude
                };
                (&normalized[..sign_at], modifier)
            }
            None => (normalized.as_str(), 0),
        };

        let mut parts = dice.split('d');
        let (count_str, sides_str) = match (parts.next(), parts.next(), parts.next()) {
            (Some(count), Some(sides), None) => (count, sides),
            _ => return Err(FormulaError::MultipleDice),
        };

        let count = if count_str.is_empty() {
            1
        } else {
            parse_signed(count_str).ok_or_else(|| FormulaError::NotANumber {
                part: FormulaPart::Count,
                value: count_str.to_string(),
            })?
        };

        let sides = parse_signed(sides_str).ok_or_else(|| FormulaError::NotANumber {
            part: FormulaPart::Sides,
            value: sides_str.to_string(),
        })?;

        DiceFormula::new(count, sides, modifier)
    }
}

fn parse_unsigned(value: &str) -> Option<i64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn parse_signed(value: &str) -> Option<i64> {
    match value.strip_prefix('-') {
        Some(digits) => parse_unsigned(digits).map(|n| -n),
        None => parse_unsigned(value.strip_prefix('+').unwrap_or(value)),
    }
}
