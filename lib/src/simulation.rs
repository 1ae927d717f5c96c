//! # Pack composition engine
//!
//! The composer evaluates every slot of a booster definition in order: it
//! resolves the slot's set choice and rarity outcome through the weighted
//! selector, draws the required cards per rarity without replacement, and
//! concatenates the results into the final pack.
use crate::booster::{OutcomeTable, RarityOutcome, SetChoice};
use crate::card::Card;
use crate::catalog::Catalog;
use crate::error::Error;
use crate::sample;
use crate::select::select;
use rand::prelude::*;

/// A simulated booster pack: the drawn cards in slot evaluation order, plus
/// the rarity outcome resolved for the first slot, surfaced for the summary
/// display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatedPack {
  pub cards: Vec<Card>,
  pub outcome: RarityOutcome,
}

/// PackSimulator composes packs from a validated, immutable outcome table
#[derive(Debug, Clone)]
pub struct PackSimulator {
  table: OutcomeTable,
}

impl PackSimulator {
  /// Validates `table` and returns a simulator owning it. An invalid table
  /// must fail here, before any simulation is offered.
  pub fn new(table: OutcomeTable) -> Result<Self, Error> {
    table.validate()?;
    Ok(Self { table })
  }

  pub fn table(&self) -> &OutcomeTable {
    &self.table
  }

  /// Opens one booster of `booster_type` from `catalog`.
  ///
  /// Each call is an independent fresh draw; the simulator holds no state
  /// across calls. Slots sample independently from the full rarity-bucketed
  /// catalog, so a card drawn in one slot may legitimately appear again in a
  /// later slot, matching physical boosters where slots are distinct pools.
  pub fn simulate(
    &self,
    rng: &mut impl Rng,
    catalog: &Catalog,
    booster_type: &str,
  ) -> Result<SimulatedPack, Error> {
    if catalog.is_empty() {
      return Err(Error::EmptyCatalog);
    }
    let definition = self
      .table
      .get(booster_type)
      .ok_or_else(|| Error::UnknownBoosterType(booster_type.to_string()))?;
    let mut cards = Vec::new();
    let mut first_outcome = None;
    for slot in &definition.slots {
      let choice = &select(rng, &slot.set, |s| s.chance)?.set;
      let outcome = *select(rng, &slot.chances, |o| o.chance)?;
      if first_outcome.is_none() {
        first_outcome = Some(outcome);
      }
      for &(rarity, count) in outcome.counts().iter() {
        if count == 0 {
          continue;
        }
        let mut pool = catalog.pool(choice, rarity);
        // The provider fetches one set at a time, so the resolved
        // supplemental set may be entirely absent from the catalog; such a
        // slot draws from the main pool instead. A supplemental pool that
        // exists but is short is still a data mismatch and fails below.
        if pool.is_empty() && !matches!(choice, SetChoice::Main) {
          pool = catalog.pool(&SetChoice::Main, rarity);
        }
        cards.extend(sample::draw(rng, &pool, count as usize, rarity)?);
      }
    }
    // validate() rejects definitions with no slots
    let outcome = first_outcome.ok_or_else(|| {
      Error::InvalidOutcomeTable(format!("booster type \"{}\" has no slots", booster_type))
    })?;
    Ok(SimulatedPack { cards, outcome })
  }
}
