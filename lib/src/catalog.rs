//! # Catalog
//!
//! A `Catalog` holds the fetched card list for one product set and exposes
//! the rarity-bucketed pools the pack composer samples from. It is read-only
//! input: fetched once per set selection and held for the session.
use crate::booster::SetChoice;
use crate::card::{Card, Rarity, SetCode};
use std::collections::HashMap;
use std::ops::Deref;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Catalog {
  pub cards: Vec<Card>,
}

impl Catalog {
  /// Returns a new catalog of cards, in canonical name order regardless of
  /// the provider's fetch order
  pub fn from_cards(mut cards: Vec<Card>) -> Self {
    cards.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Self { cards }
  }

  pub fn group_by_rarity<'a>(&'a self) -> HashMap<Rarity, Vec<&'a Card>> {
    let mut m = HashMap::new();
    for card in &self.cards {
      let cards = m.entry(card.rarity).or_insert(Vec::new());
      cards.push(card);
    }
    m
  }

  pub fn group_by_set<'a>(&'a self) -> HashMap<&'a SetCode, Vec<&'a Card>> {
    let mut m = HashMap::new();
    for card in &self.cards {
      let cards = m.entry(&card.set).or_insert(Vec::new());
      cards.push(card);
    }
    m
  }

  /// Returns the pool of cards a slot may draw from, restricted by the
  /// resolved set choice and the requested rarity. `Main` covers the whole
  /// catalog; a supplemental choice narrows it to that set code.
  pub fn pool<'a>(&'a self, choice: &SetChoice, rarity: Rarity) -> Vec<&'a Card> {
    self
      .cards
      .iter()
      .filter(|c| c.rarity == rarity)
      .filter(|c| match choice {
        SetChoice::Main => true,
        SetChoice::Supplemental(code) => &c.set == code,
      })
      .collect()
  }
}

impl Deref for Catalog {
  type Target = [Card];

  fn deref(&self) -> &Self::Target {
    &self.cards
  }
}
