//! # Weighted selection
//!
//! Draws one value from a weight table with probability proportional to its
//! weight. Used twice per slot: once to pick which set the slot's cards come
//! from, once to pick which rarity-count outcome applies.
use crate::error::Error;
use rand::prelude::*;

/// Checks the selector preconditions over a weight table and returns the
/// total weight: the table must be non-empty, every weight finite and
/// non-negative, and the total positive. A failing table is a configuration
/// error, detectable before any simulation runs.
pub fn check_weights<T, F>(items: &[T], weight: F) -> Result<f64, String>
where
  F: Fn(&T) -> f64,
{
  if items.is_empty() {
    return Err("empty weight table".to_string());
  }
  let mut total = 0.0;
  for (i, item) in items.iter().enumerate() {
    let w = weight(item);
    if !w.is_finite() || w < 0.0 {
      return Err(format!(
        "weight {} at index {} is not a finite non-negative number",
        w, i
      ));
    }
    total += w;
  }
  if total <= 0.0 {
    return Err("weight table sums to zero".to_string());
  }
  Ok(total)
}

/// Draws one item with probability proportional to its weight.
///
/// Draws `r` uniformly from `[0, W)` and walks the cumulative sum; item `i`
/// wins when `r` falls in `[cum(i-1), cum(i))`, so its selection probability
/// is exactly `weight(i) / W` regardless of table order. An item with weight
/// 0 never widens the interval and can never win the walk.
pub fn select<'a, T, F>(rng: &mut impl Rng, items: &'a [T], weight: F) -> Result<&'a T, Error>
where
  F: Fn(&T) -> f64,
{
  let total = check_weights(items, &weight).map_err(Error::InvalidOutcomeTable)?;
  let r = rng.gen_range(0.0, total);
  let mut acc = 0.0;
  let mut last_positive = None;
  for item in items {
    let w = weight(item);
    if w > 0.0 {
      last_positive = Some(item);
    }
    acc += w;
    if r < acc {
      return Ok(item);
    }
  }
  // float round-off can leave r a hair under the re-accumulated total; the
  // draw belongs to the last item carrying any weight
  last_positive.ok_or_else(|| Error::InvalidOutcomeTable("weight table sums to zero".to_string()))
}
