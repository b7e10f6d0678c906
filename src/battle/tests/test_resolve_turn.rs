use crate::battle::engine::{resolve_turn, MOVE_DAMAGE};
use crate::battle::state::{BattleEvent, BattlePhase, TurnRng};
use crate::battle::tests::common::{assert_ok, bus, create_test_battle, create_test_battle_with_hp};
use crate::errors::BattleError;
use crate::moves::BattleMove;
use pretty_assertions::assert_eq;

// Tape values map to wild moves via roll % 3:
// 0 -> Impact, 1 -> Fight, 2 -> Strike.

#[test]
fn winning_exchange_damages_only_the_opponent() {
    let mut state = create_test_battle();
    let mut rng = TurnRng::new_for_test(vec![2]); // wild draws Strike
    let mut events = bus();

    let result = assert_ok(resolve_turn(
        &mut state,
        BattleMove::Impact,
        &mut rng,
        &mut events,
    ));

    assert_eq!(result.player_move, BattleMove::Impact);
    assert_eq!(result.opponent_move, BattleMove::Strike);
    assert_eq!(result.damage_to_opponent, MOVE_DAMAGE);
    assert_eq!(result.damage_to_player, 0);
    assert_eq!(result.phase, BattlePhase::Ongoing);

    assert_eq!(state.opponent.current_hp(), 70);
    assert_eq!(state.player.current_hp(), 100);
    assert_eq!(state.turn_number, 2);
}

#[test]
fn losing_exchange_damages_only_the_player() {
    let mut state = create_test_battle();
    let mut rng = TurnRng::new_for_test(vec![1]); // wild draws Fight, which beats Impact
    let mut events = bus();

    let result = assert_ok(resolve_turn(
        &mut state,
        BattleMove::Impact,
        &mut rng,
        &mut events,
    ));

    assert_eq!(result.damage_to_opponent, 0);
    assert_eq!(result.damage_to_player, MOVE_DAMAGE);
    assert_eq!(state.player.current_hp(), 70);
    assert_eq!(state.opponent.current_hp(), 100);
}

#[test]
fn mirror_match_deals_no_damage_to_either_side() {
    let mut state = create_test_battle();
    let mut rng = TurnRng::new_for_test(vec![0]); // wild draws Impact
    let mut events = bus();

    let result = assert_ok(resolve_turn(
        &mut state,
        BattleMove::Impact,
        &mut rng,
        &mut events,
    ));

    assert_eq!(result.damage_to_opponent, 0);
    assert_eq!(result.damage_to_player, 0);
    assert_eq!(state.player.current_hp(), 100);
    assert_eq!(state.opponent.current_hp(), 100);
    // No damage, so no DamageDealt events
    assert!(!events
        .events()
        .iter()
        .any(|e| matches!(e, BattleEvent::DamageDealt { .. })));
}

#[test]
fn defeating_the_opponent_ends_the_battle() {
    let mut state = create_test_battle_with_hp(100, 30);
    let mut rng = TurnRng::new_for_test(vec![2]);
    let mut events = bus();

    let result = assert_ok(resolve_turn(
        &mut state,
        BattleMove::Impact,
        &mut rng,
        &mut events,
    ));

    assert_eq!(result.phase, BattlePhase::PlayerWon);
    assert_eq!(state.opponent.current_hp(), 0);
    assert!(state.is_over());
    assert!(events.events().contains(&BattleEvent::CreatureFainted {
        creature: "Geodude".to_string()
    }));
    assert!(events.events().contains(&BattleEvent::BattleEnded {
        phase: BattlePhase::PlayerWon
    }));
}

#[test]
fn player_faint_ends_the_battle_in_defeat() {
    let mut state = create_test_battle_with_hp(30, 100);
    let mut rng = TurnRng::new_for_test(vec![1]); // wild Fight beats player's Impact
    let mut events = bus();

    let result = assert_ok(resolve_turn(
        &mut state,
        BattleMove::Impact,
        &mut rng,
        &mut events,
    ));

    assert_eq!(result.phase, BattlePhase::PlayerLost);
    assert_eq!(state.player.current_hp(), 0);
    assert!(events.events().contains(&BattleEvent::BattleEnded {
        phase: BattlePhase::PlayerLost
    }));
}

#[test]
fn opponent_victory_takes_priority_when_both_are_low() {
    // Both at one hit from fainting; the player wins the exchange, so the
    // phase is PlayerWon even though the player is equally weakened.
    let mut state = create_test_battle_with_hp(30, 30);
    let mut rng = TurnRng::new_for_test(vec![2]);
    let mut events = bus();

    let result = assert_ok(resolve_turn(
        &mut state,
        BattleMove::Impact,
        &mut rng,
        &mut events,
    ));

    assert_eq!(result.phase, BattlePhase::PlayerWon);
    assert_eq!(state.player.current_hp(), 30);
}

#[test]
fn resolving_a_turn_after_the_battle_ends_is_an_error() {
    let mut state = create_test_battle_with_hp(100, 30);
    let mut rng = TurnRng::new_for_test(vec![2, 2]);
    let mut events = bus();

    assert_ok(resolve_turn(
        &mut state,
        BattleMove::Impact,
        &mut rng,
        &mut events,
    ));
    assert!(state.is_over());

    let snapshot = state.clone();
    let result = resolve_turn(&mut state, BattleMove::Impact, &mut rng, &mut events);
    assert!(matches!(result, Err(BattleError::InvalidState(_))));
    // A rejected turn leaves the state untouched
    assert_eq!(state, snapshot);
}

#[test]
fn turn_numbers_advance_only_while_ongoing() {
    let mut state = create_test_battle_with_hp(100, 60);
    let mut rng = TurnRng::new_for_test(vec![2, 2]);
    let mut events = bus();

    assert_ok(resolve_turn(&mut state, BattleMove::Impact, &mut rng, &mut events));
    assert_eq!(state.turn_number, 2);

    // This turn finishes the opponent; the counter freezes at the final turn.
    assert_ok(resolve_turn(&mut state, BattleMove::Impact, &mut rng, &mut events));
    assert_eq!(state.turn_number, 2);
    assert!(state.is_over());
}
