// Reporting string range matches in linear-logarithmic time and
// constant extra space. The restricted reporter handles a range whose
// endpoints share a fixed prefix; the general reporter decomposes an
// arbitrary range into two restricted reports and an exact-occurrence
// filter of the common prefix.

use std::cmp;

use crate::common::{update_ms, MsTriple};
use crate::crochemore::{exact_positions, smallest_period};
use crate::PreconditionError;

/// Which side of the bound a restricted report covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
  /// Suffixes lexicographically below the bound.
  Less,
  /// Suffixes lexicographically at or above the bound.
  GreaterEq,
}

/// Calls `emit` for every position `i` of `x` whose suffix shares a
/// prefix of at least `r` symbols with `y` and lies on the requested
/// side of `y`. Positions arrive in no particular order, each exactly
/// once. Requires `1 <= r <= y.len()`.
///
/// Runs in `O(x.len() * log(y.len() / r))` time and constant extra
/// space.
pub fn restricted_positions<S: Ord>(
  x: &[S],
  y: &[S],
  r: usize,
  side: Side,
  mut emit: impl FnMut(usize),
) -> Result<(), PreconditionError> {
  if r == 0 || r > y.len() {
    return Err(PreconditionError::PrefixOutOfRange { r, max: y.len() });
  }
  scan_restricted(x, y, r, side, &mut emit);
  Ok(())
}

// The scan proper. Splits [r0, m) into geometrically growing windows
// [r, m') with r >= 2m'/3 and decides, in one pass over the text per
// window, every suffix whose agreement with Y ends inside the window.
// Suffixes agreeing with the whole of Y surface in the last window on
// the GreaterEq side.
fn scan_restricted<S: Ord>(
  x: &[S],
  y: &[S],
  r0: usize,
  side: Side,
  emit: &mut impl FnMut(usize),
) {
  let n = x.len();
  let m_full = y.len();

  let mut r = r0;
  loop {
    let m = cmp::min(r + r / 2 + 1, m_full);

    // q-periodic extent of Y inside the window: Y[0..e) has period q
    // and either e == m or Y[e] breaks the period
    let q = smallest_period(&y[..r]);
    let mut e = 0;
    while q + e < m && y[e] == y[q + e] {
      e += 1;
    }
    e += q;

    // whether positions skipped over by a long shift can still match:
    // their suffixes break from Y exactly where the period runs out,
    // so the side they fall on is decided by that one comparison
    let propagate = e < m
      && match side {
        Side::Less => y[e] < y[e % q],
        Side::GreaterEq => y[e % q] < y[e],
      };

    let mut i = 0;
    let mut ms = MsTriple::default();
    while i < n {
      while i + ms.len < n && ms.len < m && x[i + ms.len] == y[ms.len] {
        ms = update_ms(|j| &y[j], ms);
      }

      let l = ms.len;
      let matched = match side {
        Side::Less => r <= l && l < m && (i + l == n || x[i + l] < y[l]),
        Side::GreaterEq => {
          (l == m && m == m_full) || (r <= l && l < m && i + l != n && y[l] < x[i + l])
        }
      };
      if matched {
        emit(i);
      }

      let h;
      if ms.period > 0
        && ms.period <= ms.len / 3
        && y[..ms.start] == y[ms.period..ms.period + ms.start]
      {
        h = ms.period;
        ms.len -= ms.period;
      } else {
        h = ms.len / 3 + 1;
        ms = MsTriple::default();
      }

      if propagate {
        let g = (e - r) / q;
        let mut j = i;
        for _ in 0..g {
          j += q;
          if j >= i + h {
            break;
          }
          emit(j);
        }
      }

      i += h;
    }

    if m == m_full {
      break;
    }
    r = m;
  }
}

/// Calls `emit` for every position of `x` whose suffix lies in
/// `[y, z)`, each exactly once and in no particular order. Requires
/// `y <= z`.
///
/// Runs in `O(x.len() * log(y.len() + z.len()))` time and constant
/// extra space.
pub fn range_positions<S: Ord>(
  x: &[S],
  y: &[S],
  z: &[S],
  mut emit: impl FnMut(usize),
) -> Result<(), PreconditionError> {
  if y > z {
    return Err(PreconditionError::BoundsOutOfOrder);
  }

  let n = x.len();
  let lcp = y.iter().zip(z.iter()).take_while(|(a, b)| a == b).count();

  // suffixes agreeing with Z beyond the common prefix, below Z
  if lcp < z.len() {
    scan_restricted(x, z, lcp + 1, Side::Less, &mut emit);
  }
  // suffixes agreeing with Y beyond the common prefix, at or above Y
  if lcp < y.len() {
    scan_restricted(x, y, lcp + 1, Side::GreaterEq, &mut emit);
  }

  // suffixes whose agreement with both bounds ends exactly at the
  // common prefix; the symbol right after it settles both comparisons
  exact_positions(&y[..lcp], x, |pos| {
    if pos + lcp == n {
      // the suffix is the common prefix itself
      if pos < n && y.len() == lcp && z.len() > lcp {
        emit(pos);
      }
    } else {
      let next = &x[pos + lcp];
      let below_upper = z.len() > lcp && *next < z[lcp];
      let above_lower = y.len() == lcp || y[lcp] < *next;
      if below_upper && above_lower {
        emit(pos);
      }
    }
  });

  Ok(())
}
