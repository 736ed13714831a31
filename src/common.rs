// The maximal-suffix machinery shared by all scans in this crate.

/// State of the maximal-suffix computation for a growing prefix.
///
/// For a string `Y` and the prefix `Y[0..len)`, `start` is the starting
/// index of the distinguished suffix of that prefix and `period` is the
/// shortest period of that suffix. The distinguished suffix is the one
/// that sorts first when suffixes are compared symbol by symbol with
/// the end of the string treated as the greatest symbol; the match/fail
/// shift rules in this crate are built on that convention.
///
/// The empty state (`len == 0`) is all zeroes; `start` and `period` are
/// meaningless until the first update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MsTriple {
  pub len: usize,
  pub start: usize,
  pub period: usize,
}

// arguments
// * an accessor for the scanned string, defined for positions 0..=ms.len
// * the triple for the prefix of length ms.len
// returns the triple for the prefix of length ms.len + 1
// runtime: amortised O(1) over a full left-to-right scan
pub fn update_ms<'a, S, F>(s: F, mut ms: MsTriple) -> MsTriple
where
  S: Ord + 'a,
  F: Fn(usize) -> &'a S,
{
  if ms.len == 0 {
    return MsTriple { len: 1, start: 0, period: 1 };
  }

  let mut i = ms.len;
  while i <= ms.len {
    let a = s(i);
    let b = s(i - ms.period);
    if a < b {
      // the new symbol starts a smaller suffix; realign to the period
      i -= (i - ms.start) % ms.period;
      ms.start = i;
      ms.period = 1;
    } else if a != b {
      ms.period = i - ms.start + 1;
    }
    i += 1;
  }

  ms.len += 1;
  ms
}
