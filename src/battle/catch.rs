use crate::battle::state::{BattleEvent, BattleState, EventBus, TurnRng};
use crate::creature::Creature;
use crate::errors::{BattleError, BattleResult};

/// Default capture threshold: the opponent must be defeated outright.
/// Callers may pass a laxer threshold (e.g. 10) to allow capturing a
/// weakened but still standing creature.
pub const DEFAULT_CAPTURE_THRESHOLD: u16 = 0;

/// The result of one capture attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The wild creature was caught; the record carries full health and
    /// the species' baseline attack stat.
    Caught(Creature),
    /// The wild creature slipped free. Nothing changed.
    Escaped,
}

/// Validate that a capture may be attempted against the current opponent.
pub fn can_attempt_capture(state: &BattleState, threshold: u16) -> BattleResult<()> {
    if state.opponent.current_hp() > threshold {
        return Err(BattleError::InvalidState(format!(
            "{} is too healthy to capture ({} HP, threshold {})",
            state.opponent.name,
            state.opponent.current_hp(),
            threshold
        )));
    }
    Ok(())
}

/// Attempt to capture the wild creature with a fair coin flip.
///
/// Battle state is never mutated; every call is an independent draw, so
/// retrying after a success or a failure is always a fresh 50/50.
pub fn attempt_capture(
    state: &BattleState,
    threshold: u16,
    rng: &mut TurnRng,
    bus: &mut EventBus,
) -> BattleResult<CaptureOutcome> {
    can_attempt_capture(state, threshold)?;

    bus.push(BattleEvent::CaptureAttempted {
        target: state.opponent.name.clone(),
    });

    // Outcomes are 1..=100, so <= 50 is exactly half of them.
    let roll = rng.next_outcome("capture roll");
    if roll <= 50 {
        let caught = Creature::new(state.opponent.name.clone(), state.opponent.attack);
        bus.push(BattleEvent::CreatureCaught {
            creature: caught.name.clone(),
        });
        Ok(CaptureOutcome::Caught(caught))
    } else {
        bus.push(BattleEvent::CreatureEscaped {
            creature: state.opponent.name.clone(),
        });
        Ok(CaptureOutcome::Escaped)
    }
}
