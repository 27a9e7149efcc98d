//! First-class invariants for the 2048 engine.
//!
//! Invariants are logical properties that must hold after every move.
//! They are testable independently and are checked by the engine in
//! debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod power_of_two;
pub mod score_parity;
pub mod status_consistent;

pub use power_of_two::PowerOfTwoTiles;
pub use score_parity::ScoreMultipleOfFour;
pub use status_consistent::CachedStatusConsistent;

/// All engine invariants as a composable set.
pub type EngineInvariants = (PowerOfTwoTiles, ScoreMultipleOfFour, CachedStatusConsistent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardEngine, Direction};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = BoardEngine::seeded(4, 11).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = BoardEngine::seeded(4, 12).unwrap();
        for direction in Direction::ALL.iter().cycle().take(40) {
            engine.make_move(*direction);
            assert!(EngineInvariants::check_all(&engine).is_ok());
        }
    }

    struct NonZero;
    struct Even;
    struct BelowTen;

    impl Invariant<u32> for NonZero {
        fn holds(state: &u32) -> bool {
            *state != 0
        }

        fn description() -> &'static str {
            "non-zero"
        }
    }

    impl Invariant<u32> for Even {
        fn holds(state: &u32) -> bool {
            state % 2 == 0
        }

        fn description() -> &'static str {
            "even"
        }
    }

    impl Invariant<u32> for BelowTen {
        fn holds(state: &u32) -> bool {
            *state < 10
        }

        fn description() -> &'static str {
            "below ten"
        }
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        type Checks = (NonZero, Even, BelowTen);
        assert!(Checks::check_all(&4).is_ok());

        let violations = Checks::check_all(&11).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(descriptions, vec!["even", "below ten"]);

        let violations = Checks::check_all(&0).unwrap_err();
        assert_eq!(violations, vec![InvariantViolation::new("non-zero")]);
    }
}
