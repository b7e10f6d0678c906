use serde::{Deserialize, Serialize};
use std::fmt;

/// The three battle moves. Advantage is cyclic: Impact beats Strike,
/// Fight beats Impact, Strike beats Fight. Every other pairing,
/// including a mirror match, confers no advantage in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleMove {
    Impact,
    Fight,
    Strike,
}

impl BattleMove {
    /// All moves, in the order the wild-move draw indexes them.
    pub const ALL: [BattleMove; 3] = [BattleMove::Impact, BattleMove::Fight, BattleMove::Strike];

    /// Whether this move wins the exchange against `other`.
    pub fn beats(self, other: BattleMove) -> bool {
        matches!(
            (self, other),
            (BattleMove::Impact, BattleMove::Strike)
                | (BattleMove::Fight, BattleMove::Impact)
                | (BattleMove::Strike, BattleMove::Fight)
        )
    }
}

impl fmt::Display for BattleMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleMove::Impact => write!(f, "Impact"),
            BattleMove::Fight => write!(f, "Fight"),
            BattleMove::Strike => write!(f, "Strike"),
        }
    }
}
