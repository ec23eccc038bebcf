//! Dice Roller
//!
//! Draws independent uniform results for a validated formula.

use rand::Rng;

use crate::domain::entities::RollOutcome;
use crate::domain::value_objects::DiceFormula;

/// Roll a formula using the given random source
///
/// Each die is drawn uniformly from `1..=sides`.
pub fn roll<R: Rng + ?Sized>(formula: &DiceFormula, rng: &mut R) -> RollOutcome {
    roll_with(formula, |sides| rng.gen_range(1..=sides))
}

/// Roll a formula using a custom draw function
///
/// `draw` receives the number of sides and is called once per die, in order.
pub fn roll_with<F>(formula: &DiceFormula, mut draw: F) -> RollOutcome
where
    F: FnMut(u32) -> u32,
{
    let rolls = (0..formula.count).map(|_| draw(formula.sides)).collect();
    RollOutcome::new(rolls, formula.modifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn formula(s: &str) -> DiceFormula {
        s.parse().unwrap()
    }

    #[test]
    fn test_fixed_draw_with_modifier() {
        let outcome = roll_with(&formula("1d20+5"), |_| 14);
        assert_eq!(outcome.rolls, vec![14]);
        assert_eq!(outcome.sum, 14);
        assert_eq!(outcome.modifier, 5);
        assert_eq!(outcome.total, 19);
    }

    #[test]
    fn test_fixed_draws_with_negative_modifier() {
        let mut draws = [4, 2].into_iter();
        let outcome = roll_with(&formula("2d6-3"), |_| draws.next().unwrap());
        assert_eq!(outcome.rolls, vec![4, 2]);
        assert_eq!(outcome.sum, 6);
        assert_eq!(outcome.modifier, -3);
        assert_eq!(outcome.total, 3);
    }

    #[test]
    fn test_draw_receives_sides() {
        let mut seen = Vec::new();
        roll_with(&formula("3d8"), |sides| {
            seen.push(sides);
            1
        });
        assert_eq!(seen, vec![8, 8, 8]);
    }

    #[test]
    fn test_random_rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for text in ["1d1", "d20", "100d6+4", "50d1000-20", "7d3"] {
            let f = formula(text);
            let outcome = roll(&f, &mut rng);
            assert_eq!(outcome.rolls.len(), f.count as usize);
            assert!(outcome.rolls.iter().all(|&r| (1..=f.sides).contains(&r)));
            let sum: u64 = outcome.rolls.iter().map(|&r| u64::from(r)).sum();
            assert_eq!(outcome.sum, sum);
            assert_eq!(outcome.total, sum as i64 + f.modifier);
        }
    }

    #[test]
    fn test_single_sided_die_is_deterministic() {
        let outcome = roll(&formula("5d1+1"), &mut rand::thread_rng());
        assert_eq!(outcome.rolls, vec![1; 5]);
        assert_eq!(outcome.total, 6);
    }
}
