//! # Booster composition tables
//!
//! Declarative description of what a booster pack of a given product type
//! contains: an ordered list of slots, each with a weighted set-selection
//! table and a weighted rarity-count outcome table. Tables are constructed
//! once, validated, and never mutated afterwards; an invalid table is a
//! configuration error caught at load time, not mid-simulation.
use crate::card::{Rarity, SetCode};
use crate::error::Error;
use crate::select::check_weights;
use std::collections::BTreeMap;

fn is_zero(n: &u32) -> bool {
  *n == 0
}

/// One rarity-count combination a slot may resolve to, picked by weight.
/// Absent rarities require 0 cards; an all-zero outcome is a legal empty
/// slot draw.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityOutcome {
  #[serde(default, skip_serializing_if = "is_zero")]
  pub commons: u32,
  #[serde(default, skip_serializing_if = "is_zero")]
  pub uncommons: u32,
  #[serde(default, skip_serializing_if = "is_zero")]
  pub rares: u32,
  #[serde(default, skip_serializing_if = "is_zero")]
  pub mythics: u32,
  /// Relative probability mass; a table's chances need not sum to 100
  pub chance: f64,
}

/// Which catalog a slot's cards come from: the primary set being opened, or
/// a named supplemental set (bonus sheets, Special Guests). Serialized as the
/// bare set string, so `"main"` and `"spg"` both read naturally from the
/// configuration JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SetChoice {
  Main,
  Supplemental(SetCode),
}

/// A (set, weight) row in a slot's set-selection table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetWeight {
  pub set: SetChoice,
  pub chance: f64,
}

/// One card-producing unit within a booster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
  /// Ordinal position, informational only; evaluation order is list order
  pub slot: u32,
  /// Weighted table deciding which set this slot pulls from
  pub set: Vec<SetWeight>,
  /// Weighted table of rarity-count outcomes
  pub chances: Vec<RarityOutcome>,
}

/// The ordered slots of one booster product type. Order only determines the
/// final pack's display order, never probability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoosterDefinition {
  pub slots: Vec<Slot>,
}

/// Booster type identifier ("setbooster", "playbooster", ...) mapped to its
/// definition. Immutable once validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeTable {
  boosters: BTreeMap<String, BoosterDefinition>,
}

impl RarityOutcome {
  /// Required card count for a rarity; rarities the outcome does not name
  /// require 0
  pub fn count_for(&self, rarity: Rarity) -> u32 {
    match rarity {
      Rarity::Common => self.commons,
      Rarity::Uncommon => self.uncommons,
      Rarity::Rare => self.rares,
      Rarity::Mythic => self.mythics,
      Rarity::Unknown => 0,
    }
  }

  /// (rarity, count) pairs in draw order
  pub fn counts(&self) -> [(Rarity, u32); 4] {
    [
      (Rarity::Common, self.commons),
      (Rarity::Uncommon, self.uncommons),
      (Rarity::Rare, self.rares),
      (Rarity::Mythic, self.mythics),
    ]
  }

  /// Total cards this outcome puts in the pack
  pub fn card_total(&self) -> u32 {
    self.commons + self.uncommons + self.rares + self.mythics
  }
}

impl From<String> for SetChoice {
  fn from(s: String) -> Self {
    if s == "main" {
      SetChoice::Main
    } else {
      SetChoice::Supplemental(SetCode::new(s))
    }
  }
}

impl From<SetChoice> for String {
  fn from(choice: SetChoice) -> String {
    match choice {
      SetChoice::Main => "main".to_string(),
      SetChoice::Supplemental(code) => code.as_str().to_string(),
    }
  }
}

impl OutcomeTable {
  /// Parses a table from its JSON configuration form and validates it
  pub fn from_json(json: &str) -> Result<Self, Error> {
    let table: Self =
      serde_json::from_str(json).map_err(|e| Error::InvalidOutcomeTable(e.to_string()))?;
    table.validate()?;
    Ok(table)
  }

  pub fn get(&self, booster_type: &str) -> Option<&BoosterDefinition> {
    self.boosters.get(booster_type)
  }

  pub fn booster_types(&self) -> impl Iterator<Item = &str> {
    self.boosters.keys().map(String::as_str)
  }

  /// Checks every slot's two weight tables against the selector
  /// preconditions and requires at least one slot per booster type.
  /// Pure function of the table: validating twice yields the same verdict.
  pub fn validate(&self) -> Result<(), Error> {
    for (name, definition) in &self.boosters {
      if definition.slots.is_empty() {
        return Err(Error::InvalidOutcomeTable(format!(
          "booster type \"{}\" has no slots",
          name
        )));
      }
      for (i, slot) in definition.slots.iter().enumerate() {
        check_weights(&slot.set, |s| s.chance).map_err(|msg| {
          Error::InvalidOutcomeTable(format!(
            "booster type \"{}\" slot {} set table: {}",
            name, i, msg
          ))
        })?;
        check_weights(&slot.chances, |o| o.chance).map_err(|msg| {
          Error::InvalidOutcomeTable(format!(
            "booster type \"{}\" slot {} outcome table: {}",
            name, i, msg
          ))
        })?;
      }
    }
    Ok(())
  }
}
