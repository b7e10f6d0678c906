use crate::creature::{Creature, MAX_HP};
use crate::moves::BattleMove;
use serde::{Deserialize, Serialize};

/// The battle lifecycle. Transitions are monotonic: once a battle leaves
/// `Ongoing` it is terminal and no further turns are processed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    Ongoing,
    PlayerWon,
    PlayerLost,
}

/// The full state of one wild encounter: the player's creature, the wild
/// creature, and the current phase. Mutated only by
/// [`crate::battle::engine::resolve_turn`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleState {
    pub player: Creature,
    pub opponent: Creature,
    pub phase: BattlePhase,
    pub turn_number: u32,
}

impl BattleState {
    /// Start a battle. Both combatants enter at full health regardless of
    /// the health the passed creatures carried in.
    pub fn new(mut player: Creature, mut opponent: Creature) -> Self {
        player.set_hp(MAX_HP);
        opponent.set_hp(MAX_HP);
        Self {
            player,
            opponent,
            phase: BattlePhase::Ongoing,
            turn_number: 1,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase != BattlePhase::Ongoing
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Turn management
    TurnStarted {
        turn_number: u32,
    },

    // Move resolution
    MoveUsed {
        user: String,
        move_used: BattleMove,
    },
    DamageDealt {
        target: String,
        damage: u16,
        remaining_hp: u16,
    },
    CreatureFainted {
        creature: String,
    },

    // Battle end
    BattleEnded {
        phase: BattlePhase,
    },

    // Capture
    CaptureAttempted {
        target: String,
    },
    CreatureCaught {
        creature: String,
    },
    CreatureEscaped {
        creature: String,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::TurnStarted { turn_number } => {
                Some(format!("=== Turn {} ===", turn_number))
            }
            BattleEvent::MoveUsed { user, move_used } => {
                Some(format!("{} used {}!", user, move_used))
            }
            BattleEvent::DamageDealt { target, damage, remaining_hp } => Some(format!(
                "{} took {} damage! ({} HP left)",
                target, damage, remaining_hp
            )),
            BattleEvent::CreatureFainted { creature } => {
                Some(format!("{} fainted!", creature))
            }
            BattleEvent::BattleEnded { phase } => match phase {
                BattlePhase::PlayerWon => Some("You won the battle!".to_string()),
                BattlePhase::PlayerLost => Some("You lost the battle...".to_string()),
                BattlePhase::Ongoing => None, // Never emitted for an ongoing battle
            },
            BattleEvent::CaptureAttempted { target } => {
                Some(format!("Capturing {}...", target))
            }
            BattleEvent::CreatureCaught { creature } => {
                Some(format!("Gotcha! {} was caught!", creature))
            }
            BattleEvent::CreatureEscaped { creature } => {
                Some(format!("Oh no! {} escaped!", creature))
            }
        }
    }
}

/// Event bus for collecting battle events during turn resolution and
/// capture attempts. Owned by the caller; the engine only appends.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Print all events using their formatted text. Silent events fall
    /// back to their debug representation.
    pub fn print_formatted(&self) {
        for event in &self.events {
            match event.format() {
                Some(formatted) => println!("  {}", formatted),
                None => println!("  {:?} (silent)", event),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Injectable random source: a pre-drawn tape of outcomes in 1..=100.
/// Tests seed it with explicit values; production code pre-generates a
/// buffer from the thread RNG.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<u8>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self { outcomes, index: 0 }
    }

    pub fn new_random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        // Pre-generate enough values for a full encounter
        let outcomes: Vec<u8> = (0..100).map(|_| rng.random_range(1..=100)).collect();
        Self { outcomes, index: 0 }
    }

    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        if self.index >= self.outcomes.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }
}
