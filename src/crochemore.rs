// Crochemore's constant-extra-space algorithms for the shortest period
// of a string and for exact match reporting. Both drive the scan with
// the maximal-suffix triple from `common` and use only `<` and `==` on
// symbols.

use std::cmp;

use crate::common::{update_ms, MsTriple};

/// Shortest period of `x`: the smallest `p >= 1` with
/// `x[i] == x[i + p]` whenever `i + p < x.len()`.
///
/// Linear time, constant extra space. The empty string and a single
/// symbol both have period 1.
pub fn smallest_period<S: Ord>(x: &[S]) -> usize {
  let n = x.len();

  let mut per = 1;
  let mut m = 0;
  let mut ms = MsTriple::default();

  while per + m < n {
    if x[per + m] == x[m] {
      m += 1;
      continue;
    }

    // mismatch: scan the prefix X[0..m) with the offending symbol
    // X[per + m] substituted at position m
    let mismatch = per + m;
    let s = move |pos: usize| if pos == m { &x[mismatch] } else { &x[pos] };
    while ms.len <= m {
      ms = update_ms(&s, ms);
    }

    let continues = (0..ms.start).all(|t| x[t] == *s(ms.period + t));
    if continues {
      per += ms.period;
      m -= ms.period - 1;
      if ms.len - ms.start - ms.period >= ms.period {
        ms.len -= ms.period;
      } else {
        ms = MsTriple::default();
      }
    } else {
      let a = ms.start + ms.period * ((ms.len - ms.start) / ms.period);
      per += cmp::max(ms.start, cmp::min(m + 1 - ms.start, a)) + 1;
      m = 0;
      ms = MsTriple::default();
    }
  }

  per
}

/// Calls `emit` with every index `i` such that `t[i..i + p.len())`
/// equals `p`, in strictly increasing order.
///
/// Linear time, constant extra space. An empty pattern occurs at every
/// position `0..=t.len()`.
pub fn exact_positions<S: Ord>(p: &[S], t: &[S], mut emit: impl FnMut(usize)) {
  let k = p.len();
  let n = t.len();

  if k == 0 {
    for i in 0..=n {
      emit(i);
    }
    return;
  }

  let mut pos = 0;
  let mut m = 1;
  let mut ms = MsTriple::default();

  while pos < n {
    while pos + m <= n && m <= k && t[pos + m - 1] == p[m - 1] {
      m += 1;
    }
    if m == k + 1 {
      emit(pos);
    }
    if pos + m == n + 1 {
      m -= 1;
    }

    // scan the prefix P[0..m) with the symbol under the text window
    // substituted at position m - 1
    let tail = pos + m - 1;
    let s = move |i: usize| if i == m - 1 { &t[tail] } else { &p[i] };
    while ms.len < m {
      ms = update_ms(&s, ms);
    }

    let continues = (0..ms.start).all(|u| p[u] == *s(ms.period + u));
    if continues {
      pos += ms.period;
      m -= ms.period - 1;
      if ms.len - ms.start - ms.period >= ms.period {
        ms.len -= ms.period;
      } else {
        ms = MsTriple::default();
      }
    } else {
      let a = ms.start + ms.period * ((ms.len - ms.start) / ms.period);
      pos += cmp::max(ms.start, cmp::min(m - ms.start, a)) + 1;
      m = 1;
      ms = MsTriple::default();
    }
  }
}
