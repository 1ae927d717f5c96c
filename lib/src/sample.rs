//! # Rarity-bucketed card sampling
use crate::card::{Card, Rarity};
use crate::error::Error;
use rand::prelude::*;

/// Draws `count` distinct cards uniformly at random from `pool`, without
/// replacement.
///
/// A pool smaller than `count` is a catalog/configuration mismatch and fails
/// with [`Error::InsufficientCardPool`]; a short draw would misrepresent the
/// resolved outcome and must never happen undetected. `rarity` only labels
/// that failure.
pub fn draw(
  rng: &mut impl Rng,
  pool: &[&Card],
  count: usize,
  rarity: Rarity,
) -> Result<Vec<Card>, Error> {
  if count == 0 {
    return Ok(Vec::new());
  }
  if count > pool.len() {
    return Err(Error::InsufficientCardPool {
      rarity,
      requested: count,
      available: pool.len(),
    });
  }
  // Shuffle a prefix of the index range and take it, rather than shuffling
  // the whole pool
  let mut indexes: Vec<usize> = (0..pool.len()).collect();
  let (chosen, _) = indexes.partial_shuffle(rng, count);
  Ok(chosen.iter().map(|&i| pool[i].clone()).collect())
}

#[cfg(test)]
mod tests {
  use crate::card::{Card, Rarity, SetCode};
  use crate::error::Error;
  use crate::sample::*;
  use rand::prelude::*;
  use rand::rngs::SmallRng;
  use std::collections::{HashMap, HashSet};

  fn pool(n: usize) -> Vec<Card> {
    (0..n)
      .map(|i| Card::with_rarity(&format!("common {}", i), Rarity::Common, SetCode::new("tst")))
      .collect()
  }

  #[test]
  fn draws_exactly_count_distinct_cards_from_the_pool() {
    let cards = pool(20);
    let refs: Vec<&Card> = cards.iter().collect();
    let mut rng = SmallRng::seed_from_u64(3);
    for count in 0..=20 {
      let drawn = draw(&mut rng, &refs, count, Rarity::Common).unwrap();
      assert_eq!(drawn.len(), count);
      let names: HashSet<&str> = drawn.iter().map(|c| c.name.as_str()).collect();
      assert_eq!(names.len(), count);
      for card in &drawn {
        assert!(cards.contains(card));
      }
    }
  }

  #[test]
  fn zero_count_is_a_noop_even_on_an_empty_pool() {
    let mut rng = SmallRng::seed_from_u64(0);
    let drawn = draw(&mut rng, &[], 0, Rarity::Mythic).unwrap();
    assert!(drawn.is_empty());
  }

  #[test]
  fn oversized_count_reports_insufficient_pool() {
    let cards = pool(6);
    let refs: Vec<&Card> = cards.iter().collect();
    let mut rng = SmallRng::seed_from_u64(5);
    match draw(&mut rng, &refs, 7, Rarity::Common) {
      Err(Error::InsufficientCardPool {
        rarity,
        requested,
        available,
      }) => {
        assert_eq!(rarity, Rarity::Common);
        assert_eq!(requested, 7);
        assert_eq!(available, 6);
      }
      other => panic!("expected InsufficientCardPool, got {:?}", other),
    }
  }

  #[test]
  fn full_pool_draw_is_a_permutation() {
    let cards = pool(8);
    let refs: Vec<&Card> = cards.iter().collect();
    let mut rng = SmallRng::seed_from_u64(9);
    let drawn = draw(&mut rng, &refs, 8, Rarity::Common).unwrap();
    let names: HashSet<&str> = drawn.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names.len(), 8);
  }

  #[test]
  fn single_card_draws_are_uniform() {
    let cards = pool(5);
    let refs: Vec<&Card> = cards.iter().collect();
    let mut rng = SmallRng::seed_from_u64(21);
    let runs = 20000;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..runs {
      let drawn = draw(&mut rng, &refs, 1, Rarity::Common).unwrap();
      *counts.entry(drawn[0].name.clone()).or_insert(0) += 1;
    }
    for (_, count) in counts {
      let actual = count as f64 / runs as f64;
      assert!(f64::abs(0.2 - actual) < 0.02);
    }
  }
}
