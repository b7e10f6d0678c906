use crate::battle::state::{BattleState, EventBus, TurnRng};
use crate::creature::Creature;
use crate::errors::BattleResult;

/// Creates a standard battle between a Pikachu and a wild Geodude.
pub fn create_test_battle() -> BattleState {
    BattleState::new(Creature::new("Pikachu", 55), Creature::new("Geodude", 80))
}

/// Creates a battle with both combatants set to the given health values.
pub fn create_test_battle_with_hp(player_hp: u16, opponent_hp: u16) -> BattleState {
    let mut state = create_test_battle();
    state.player.set_hp(player_hp);
    state.opponent.set_hp(opponent_hp);
    state
}

/// A `TurnRng` with a long tape of identical values, for tests where the
/// specific outcome does not matter. Every wild move drawn from it is
/// Strike (2 % 3) and every capture coin flip succeeds (2 <= 50).
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![2; 100])
}

/// A fresh event bus for a test.
pub fn bus() -> EventBus {
    EventBus::new()
}

/// Asserts that a Result is Ok and returns the value, with a readable
/// message when the engine unexpectedly fails.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
