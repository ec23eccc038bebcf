//! Roll Application Service (Use Case)

use rand::Rng;
use tracing::{debug, info};

use tavern::{format_roll_report, roll, DiceFormula, DomainError};

/// Turns a `/roll` request into the text to post back
#[derive(Debug, Clone, Copy, Default)]
pub struct RollService;

impl RollService {
    pub fn new() -> Self {
        Self
    }

    /// Roll `formula` for `display_name` with the thread RNG
    pub fn roll_reply(&self, display_name: &str, formula: &str) -> Result<String, DomainError> {
        self.roll_reply_with(display_name, formula, &mut rand::thread_rng())
    }

    /// Roll with a caller-supplied RNG
    pub fn roll_reply_with<R: Rng + ?Sized>(
        &self,
        display_name: &str,
        formula: &str,
        rng: &mut R,
    ) -> Result<String, DomainError> {
        let typed: String = formula
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        let parsed = typed.parse::<DiceFormula>().inspect_err(|e| {
            debug!(formula = %formula, error = %e, "Rejected dice formula");
        })?;

        let outcome = roll(&parsed, rng);
        info!(
            user = %display_name,
            formula = %parsed,
            total = outcome.total,
            "🎲 Dice rolled"
        );

        Ok(format_roll_report(display_name, &typed, &outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tavern::FormulaError;

    #[test]
    fn test_valid_roll_reports_in_range() {
        let service = RollService::new();
        let mut rng = StdRng::seed_from_u64(7);

        let reply = service.roll_reply_with("Aria", "2d6 + 3", &mut rng).unwrap();

        assert!(reply.starts_with("**Aria** rolled `2d6+3`:\n"));
        let total: i64 = reply
            .rsplit("**Final result: ")
            .next()
            .and_then(|rest| rest.strip_suffix("**"))
            .unwrap()
            .parse()
            .unwrap();
        assert!((5..=15).contains(&total));
    }

    #[test]
    fn test_formula_is_lowercased() {
        let reply = RollService::new().roll_reply("Aria", "1D4").unwrap();
        assert!(reply.starts_with("**Aria** rolled `1d4`:\n"));
    }

    #[test]
    fn test_invalid_formula_is_a_domain_error() {
        let service = RollService::new();

        assert!(matches!(
            service.roll_reply("Aria", "twenty"),
            Err(DomainError::InvalidFormula(FormulaError::MissingDie))
        ));
        assert!(matches!(
            service.roll_reply("Aria", "0d6"),
            Err(DomainError::InvalidFormula(FormulaError::NotPositive))
        ));
        assert!(matches!(
            service.roll_reply("Aria", "1000d6"),
            Err(DomainError::InvalidFormula(FormulaError::TooManyDice { count: 1000 }))
        ));
    }
}
