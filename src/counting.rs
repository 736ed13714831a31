// Counting string range matches with precomputed shift ladders.

use crate::PreconditionError;

/// Smallest admissible value of the scan parameter `k`; also the
/// default.
pub const MIN_K: usize = 3;

// A shift record: whenever the current match length falls in [b, e),
// the scan may advance by b / 2 positions, all of which compare the
// same way as recorded in c.
#[derive(Clone, Copy, Debug)]
struct SpRecord {
  b: usize,
  e: usize,
  c: usize,
}

// Fallback shift record: advancing by b skips b positions of which c
// compare below the bound.
#[derive(Clone, Copy, Debug)]
struct SnRecord {
  b: usize,
  c: usize,
}

// record covering x: the unique {b, e, c} with b <= x < e, if any
fn find_sp(sp: &[SpRecord], x: usize) -> Option<SpRecord> {
  let idx = sp.partition_point(|r| r.b <= x);
  if idx == 0 {
    return None;
  }
  let record = sp[idx - 1];
  (x < record.e).then_some(record)
}

// predecessor of x: the record with the largest b <= x
fn pred_sn(sn: &[SnRecord], x: usize) -> SnRecord {
  let idx = sn.partition_point(|r| r.b <= x);
  debug_assert!(idx > 0);
  sn[idx - 1]
}

/// Counts the suffixes of a text that are lexicographically smaller
/// than a fixed bound `Y`.
///
/// Preprocessing takes `O(|Y| log |Y|)` time and `O(log |Y|)` space for
/// the two shift ladders; each [`count`](Self::count) call is a single
/// linear scan of the text. The counter borrows `Y`, which must not
/// change for its lifetime; after construction it is immutable, so one
/// counter can serve concurrent `count` calls on different texts.
pub struct LessThanCounter<'y, S> {
  y: &'y [S],
  k: usize,
  sp: Vec<SpRecord>,
  sn: Vec<SnRecord>,
}

impl<'y, S: Ord> LessThanCounter<'y, S> {
  /// Preprocesses `y` with the default scan parameter.
  pub fn new(y: &'y [S]) -> Self {
    Self::build(y, MIN_K)
  }

  /// Preprocesses `y` with a custom scan parameter `k >= 3`. Larger
  /// values trade scan locality for ladder size.
  pub fn with_parameter(y: &'y [S], k: usize) -> Result<Self, PreconditionError> {
    if k < MIN_K {
      return Err(PreconditionError::ParameterTooSmall { k });
    }
    Ok(Self::build(y, k))
  }

  // Build the ladders by running the counting scan of Y against Y
  // itself, recording a shift record whenever the match length grows
  // deep enough relative to the position.
  fn build(y: &'y [S], k: usize) -> Self {
    let m = y.len();
    let mut sp: Vec<SpRecord> = Vec::new();
    let mut sn = vec![SnRecord { b: 1, c: 0 }];

    let mut i = 1;
    let mut last = 1;
    let mut l = 0;
    let mut count = 0;
    while i < m {
      while i + l < m && y[i + l] == y[l] {
        l += 1;
      }

      let mut hit = find_sp(&sp, l);
      if hit.is_none() && (k - 1) * i <= l {
        // the window stays open one step past i + l so that a scan
        // arriving with a full-length match still shifts through it
        let record = SpRecord { b: 2 * i, e: i + l + 1, c: count };
        sp.push(record);
        hit = Some(record);
      }
      if 2 * last <= i {
        sn.push(SnRecord { b: i, c: count });
        last = i;
      }
      if i + l == m || y[i + l] < y[l] {
        count += 1;
      }
      match hit {
        Some(SpRecord { b, c, .. }) => {
          count += c;
          i += b / 2;
          l -= b / 2;
        }
        None => {
          let SnRecord { b, c } = pred_sn(&sn, l / k + 1);
          count += c;
          i += b;
          l = 0;
        }
      }
    }

    LessThanCounter { y, k, sp, sn }
  }

  /// Number of suffixes of `x` lexicographically smaller than the
  /// preprocessed bound. Linear in `x.len()`.
  pub fn count(&self, x: &[S]) -> usize {
    let y = self.y;
    let n = x.len();
    let m = y.len();

    let mut count = 0;
    let mut i = 0;
    let mut l = 0;
    while i < n {
      while i + l < n && l < m && x[i + l] == y[l] {
        l += 1;
      }

      if l < m && (i + l == n || x[i + l] < y[l]) {
        count += 1;
      }
      match find_sp(&self.sp, l) {
        Some(SpRecord { b, c, .. }) => {
          count += c;
          i += b / 2;
          l -= b / 2;
        }
        None => {
          let SnRecord { b, c } = pred_sn(&self.sn, l / self.k + 1);
          count += c;
          i += b;
          l = 0;
        }
      }
    }

    count
  }
}

/// Counts the suffixes of a text lexicographically inside `[Y, Z)`,
/// as the difference of two [`LessThanCounter`]s.
pub struct RangeCounter<'y, 'z, S> {
  lower: LessThanCounter<'y, S>,
  upper: LessThanCounter<'z, S>,
}

impl<'y, 'z, S: Ord> RangeCounter<'y, 'z, S> {
  /// Preprocesses the bounds `y <= z` with default parameters.
  pub fn new(y: &'y [S], z: &'z [S]) -> Result<Self, PreconditionError> {
    Self::with_parameters(y, z, MIN_K, MIN_K)
  }

  /// Preprocesses the bounds with separate scan parameters, both `>= 3`.
  pub fn with_parameters(
    y: &'y [S],
    z: &'z [S],
    ky: usize,
    kz: usize,
  ) -> Result<Self, PreconditionError> {
    if y > z {
      return Err(PreconditionError::BoundsOutOfOrder);
    }
    Ok(RangeCounter {
      lower: LessThanCounter::with_parameter(y, ky)?,
      upper: LessThanCounter::with_parameter(z, kz)?,
    })
  }

  /// Number of suffixes of `x` in `[Y, Z)`. Two linear scans.
  pub fn count(&self, x: &[S]) -> usize {
    self.upper.count(x) - self.lower.count(x)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::naive;
  use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};
  use test_case::test_case;

  fn random_string(rng: &mut StdRng, len: usize, alphabet: u8) -> Vec<u8> {
    (0..len)
      .map(|_| b'a' + rng.sample(Uniform::new(0, alphabet)))
      .collect()
  }

  #[test_case(0, b"ABABAB", b"AB")]
  #[test_case(3, b"ABABAB", b"AC")]
  #[test_case(4, b"AAAAAA", b"AAAAA")]
  #[test_case(6, b"AAAAAA", b"B")]
  #[test_case(0, b"", b"AB")]
  #[test_case(0, b"BACABA", b"")]
  #[test_case(3, b"BACABA", b"B")]
  fn known_counts(expected: usize, x: &[u8], y: &[u8]) {
    assert_eq!(expected, LessThanCounter::new(y).count(x));
  }

  #[test_case(3, b"ABABAB", b"AB", b"AC")]
  #[test_case(6, b"AAAAAA", b"A", b"B")]
  #[test_case(2, b"BACABA", b"AB", b"BA")]
  #[test_case(0, b"BACABA", b"AB", b"AB")]
  #[test_case(0, b"", b"AB", b"BA")]
  fn known_range_counts(expected: usize, x: &[u8], y: &[u8], z: &[u8]) {
    assert_eq!(expected, RangeCounter::new(y, z).unwrap().count(x));
  }

  #[test]
  fn rejects_small_parameter() {
    let y = b"AB".as_slice();
    assert_eq!(
      Err(PreconditionError::ParameterTooSmall { k: 2 }),
      LessThanCounter::with_parameter(y, 2).map(|_| ())
    );
    assert_eq!(
      Err(PreconditionError::ParameterTooSmall { k: 0 }),
      RangeCounter::with_parameters(y, y, 3, 0).map(|_| ())
    );
  }

  #[test]
  fn rejects_reversed_bounds() {
    assert_eq!(
      Err(PreconditionError::BoundsOutOfOrder),
      RangeCounter::new(b"B".as_slice(), b"A".as_slice()).map(|_| ())
    );
  }

  #[test]
  fn matches_naive_on_random_strings() {
    for seed in 0..400 {
      let mut rng = StdRng::seed_from_u64(seed);
      let alphabet = [1u8, 2, 3, 20][rng.sample(Uniform::new(0usize, 4))];
      let x_len = rng.sample(Uniform::new(0usize, 120));
      let x = random_string(&mut rng, x_len, alphabet);
      let y_len = rng.sample(Uniform::new(0usize, 20));
      let y = random_string(&mut rng, y_len, alphabet);

      assert_eq!(
        naive::count_less_than(&x, &y),
        LessThanCounter::new(&y).count(&x),
        "x={x:?} y={y:?}"
      );
    }
  }

  #[test]
  fn parameter_choice_does_not_change_counts() {
    for seed in 0..100 {
      let mut rng = StdRng::seed_from_u64(seed);
      let x_len = rng.sample(Uniform::new(0usize, 80));
      let x = random_string(&mut rng, x_len, 2);
      let y_len = rng.sample(Uniform::new(0usize, 16));
      let y = random_string(&mut rng, y_len, 2);

      let expected = naive::count_less_than(&x, &y);
      for k in [3, 4, 7, 100] {
        let counter = LessThanCounter::with_parameter(y.as_slice(), k).unwrap();
        assert_eq!(expected, counter.count(&x), "k={k} x={x:?} y={y:?}");
      }
    }
  }

  #[test]
  fn range_counts_match_naive() {
    for seed in 0..300 {
      let mut rng = StdRng::seed_from_u64(seed);
      let alphabet = [1u8, 2, 3][rng.sample(Uniform::new(0usize, 3))];
      let x_len = rng.sample(Uniform::new(0usize, 100));
      let x = random_string(&mut rng, x_len, alphabet);
      let y_len = rng.sample(Uniform::new(0usize, 14));
      let mut y = random_string(&mut rng, y_len, alphabet);
      let z_len = rng.sample(Uniform::new(0usize, 14));
      let mut z = random_string(&mut rng, z_len, alphabet);
      if y > z {
        std::mem::swap(&mut y, &mut z);
      }

      assert_eq!(
        naive::range_positions(&x, &y, &z).len(),
        RangeCounter::new(&y, &z).unwrap().count(&x),
        "x={x:?} y={y:?} z={z:?}"
      );
    }
  }

  #[test]
  fn ladders_stay_logarithmic() {
    let y: Vec<u8> = (0..4096).map(|i| if i % 16 == 15 { b'b' } else { b'a' }).collect();
    let counter = LessThanCounter::new(y.as_slice());
    assert!(counter.sp.len() <= 2 * 13, "sp has {} records", counter.sp.len());
    assert!(counter.sn.len() <= 13, "sn has {} records", counter.sn.len());
  }
}
