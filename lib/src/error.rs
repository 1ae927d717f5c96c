//! # Error taxonomy
use crate::card::Rarity;
use thiserror::Error;

/// Every way a simulation or its configuration can fail.
///
/// `InvalidOutcomeTable` is a configuration error: tables must be validated at
/// load time, before any simulation is offered to a user. The remaining
/// variants are rejected calls or runtime data mismatches. The engine never
/// retries and never logs; recovery belongs entirely to the caller.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum Error {
  #[error("invalid outcome table: {0}")]
  InvalidOutcomeTable(String),
  #[error("unknown booster type \"{0}\"")]
  UnknownBoosterType(String),
  #[error("cannot simulate a pack from an empty catalog")]
  EmptyCatalog,
  #[error("pool has too few {rarity:?} cards: requested {requested}, available {available}")]
  InsufficientCardPool {
    rarity: Rarity,
    requested: usize,
    available: usize,
  },
}
