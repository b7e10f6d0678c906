use serde::{Deserialize, Serialize};

/// Health ceiling for every creature. Health is always within [0, MAX_HP].
pub const MAX_HP: u16 = 100;

/// A battling entity: species name, attack stat, and current health.
///
/// Health is kept private so the clamping invariant cannot be bypassed;
/// all mutation goes through [`Creature::take_damage`] and
/// [`Creature::set_hp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub attack: u16,
    current_hp: u16,
}

impl Creature {
    /// Create a creature at full health.
    pub fn new(name: impl Into<String>, attack: u16) -> Self {
        Creature {
            name: name.into(),
            attack,
            current_hp: MAX_HP,
        }
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    /// Set current health, clamped to MAX_HP.
    pub fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(MAX_HP);
    }

    /// Apply damage, saturating at zero. Returns true if the creature
    /// fainted as a result of this hit.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.is_fainted()
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }
}
