//! Poke Master Engine
//!
//! A creature catalog, turn-based battle simulator, and capture minigame
//! with deterministic, injectable randomness. The battle engine owns no
//! UI concerns: callers feed it moves and an RNG tape and read back
//! typed results and battle events.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod catalog;
pub mod collection;
pub mod creature;
pub mod errors;
pub mod moves;

// --- PUBLIC API RE-EXPORTS ---
// The public-facing API of the `poke-master` crate, making the most
// important types importable directly from the crate root.

// Core battle engine functions and state.
pub use battle::catch::{attempt_capture, can_attempt_capture, CaptureOutcome, DEFAULT_CAPTURE_THRESHOLD};
pub use battle::engine::{resolve_turn, TurnResult, MOVE_DAMAGE};
pub use battle::state::{BattleEvent, BattlePhase, BattleState, EventBus, TurnRng};

// Core data types.
pub use catalog::{Catalog, SpeciesData};
pub use collection::Collection;
pub use creature::{Creature, MAX_HP};
pub use moves::BattleMove;

// Crate-specific error and result types.
pub use errors::{
    BattleError, BattleResult, CatalogError, CatalogResult, CollectionError, CollectionResult,
    EngineError, EngineResult,
};
