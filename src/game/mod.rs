//! Core matching-game logic: round state machine, rule engine, catalogs.

pub mod catalog;
pub mod rules;
pub mod state;

pub use catalog::{games, language_pairs, topic_items, GameInfo, Topic};
pub use rules::{RoundEngine, RoundResolution, RuleError};
pub use state::{
    IntegrityError,
    ItemId,
    MatchItem,
    Outcome,
    Pairing,
    RoundEvent,
    RoundMode,
    RoundState,
    Side,
};
