use crate::battle::state::{BattleEvent, BattlePhase, BattleState, EventBus, TurnRng};
use crate::errors::{BattleError, BattleResult};
use crate::moves::BattleMove;

/// Damage dealt by the winning side of an exchange. The losing side of a
/// pairing takes this; everything else (mirror matches, non-beating
/// pairings) deals nothing.
pub const MOVE_DAMAGE: u16 = 30;

/// The outcome of one resolved turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    pub player_move: BattleMove,
    pub opponent_move: BattleMove,
    pub damage_to_opponent: u16,
    pub damage_to_player: u16,
    pub phase: BattlePhase,
}

/// Resolve one battle turn: draw the wild creature's move, settle the
/// exchange, apply damage, and update the phase.
///
/// Each side's damage is computed independently: a side deals
/// [`MOVE_DAMAGE`] iff its own move beats the other side's move. When
/// both creatures faint on the same turn, the opponent's defeat wins out
/// and the phase becomes `PlayerWon`.
pub fn resolve_turn(
    state: &mut BattleState,
    player_move: BattleMove,
    rng: &mut TurnRng,
    bus: &mut EventBus,
) -> BattleResult<TurnResult> {
    if state.is_over() {
        return Err(BattleError::InvalidState(format!(
            "cannot resolve a turn in a finished battle (phase: {:?})",
            state.phase
        )));
    }

    bus.push(BattleEvent::TurnStarted {
        turn_number: state.turn_number,
    });

    let opponent_move = draw_wild_move(rng);
    bus.push(BattleEvent::MoveUsed {
        user: state.player.name.clone(),
        move_used: player_move,
    });
    bus.push(BattleEvent::MoveUsed {
        user: state.opponent.name.clone(),
        move_used: opponent_move,
    });

    let damage_to_opponent = exchange_damage(player_move, opponent_move);
    let damage_to_player = exchange_damage(opponent_move, player_move);

    if damage_to_opponent > 0 {
        state.opponent.take_damage(damage_to_opponent);
        bus.push(BattleEvent::DamageDealt {
            target: state.opponent.name.clone(),
            damage: damage_to_opponent,
            remaining_hp: state.opponent.current_hp(),
        });
    }
    if damage_to_player > 0 {
        state.player.take_damage(damage_to_player);
        bus.push(BattleEvent::DamageDealt {
            target: state.player.name.clone(),
            damage: damage_to_player,
            remaining_hp: state.player.current_hp(),
        });
    }

    // Opponent defeat is checked first, so a simultaneous double faint
    // still counts as a player victory.
    if state.opponent.is_fainted() {
        state.phase = BattlePhase::PlayerWon;
        bus.push(BattleEvent::CreatureFainted {
            creature: state.opponent.name.clone(),
        });
    } else if state.player.is_fainted() {
        state.phase = BattlePhase::PlayerLost;
        bus.push(BattleEvent::CreatureFainted {
            creature: state.player.name.clone(),
        });
    }

    if state.is_over() {
        bus.push(BattleEvent::BattleEnded { phase: state.phase });
    } else {
        state.turn_number += 1;
    }

    Ok(TurnResult {
        player_move,
        opponent_move,
        damage_to_opponent,
        damage_to_player,
        phase: state.phase,
    })
}

/// Damage `attacker_move` deals against `defender_move` in one exchange.
fn exchange_damage(attacker_move: BattleMove, defender_move: BattleMove) -> u16 {
    if attacker_move.beats(defender_move) {
        MOVE_DAMAGE
    } else {
        0
    }
}

/// Draw the wild creature's move uniformly from the three moves.
fn draw_wild_move(rng: &mut TurnRng) -> BattleMove {
    let roll = rng.next_outcome("wild move selection");
    BattleMove::ALL[roll as usize % BattleMove::ALL.len()]
}
