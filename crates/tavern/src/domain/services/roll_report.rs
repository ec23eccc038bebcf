//! Roll Report - Human readable breakdown of a roll

use crate::domain::entities::RollOutcome;

/// Format a roll for the chat reply
///
/// Lists the formula, each die in draw order, the dice total with the
/// signed modifier (omitted when zero), and the final result on its own line.
pub fn format_roll_report(display_name: &str, formula: &str, outcome: &RollOutcome) -> String {
    let rolls = outcome
        .rolls
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut report = format!(
        "**{}** rolled `{}`:\nRolls: {}\nDice total: {}",
        display_name, formula, rolls, outcome.sum
    );

    if outcome.modifier != 0 {
        let sign = if outcome.modifier > 0 { '+' } else { '-' };
        report.push_str(&format!(" {} {}", sign, outcome.modifier.unsigned_abs()));
    }

    report.push_str(&format!("\n**Final result: {}**", outcome.total));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_with_positive_modifier() {
        let outcome = RollOutcome::new(vec![14], 5);
        let report = format_roll_report("Aria", "1d20+5", &outcome);
        assert_eq!(
            report,
            "**Aria** rolled `1d20+5`:\nRolls: 14\nDice total: 14 + 5\n**Final result: 19**"
        );
    }

    #[test]
    fn test_report_with_negative_modifier() {
        let outcome = RollOutcome::new(vec![4, 2], -3);
        let report = format_roll_report("Bram", "2d6-3", &outcome);
        assert!(report.contains("Rolls: 4, 2\n"));
        assert!(report.contains("Dice total: 6 - 3\n"));
        assert!(report.ends_with("**Final result: 3**"));
    }

    #[test]
    fn test_report_omits_zero_modifier() {
        let outcome = RollOutcome::new(vec![3, 5, 1], 0);
        let report = format_roll_report("Cid", "3d6", &outcome);
        assert!(report.contains("Dice total: 9\n"));
        assert!(!report.contains(" + 0"));
        assert!(!report.contains(" - 0"));
    }
}
