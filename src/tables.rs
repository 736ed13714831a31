// Match table construction with copy-based output. The scan writes the
// answer for each position exactly once, left to right, and fills the
// positions skipped by a shift with copies of an earlier block whose
// answers provably repeat.

use std::mem;

use crate::common::{update_ms, MsTriple};
use crate::PreconditionError;

/// Positional sink for table construction.
///
/// `write` appends the next value; `copy` appends `len` copies of the
/// already-written values at `[from, from + len)`. The construction
/// guarantees the source range has been written and does not overlap
/// the destination; the copy operation is what keeps the whole table
/// linear-time, so it must not be emulated by recomputation.
pub trait TableSink {
  fn write(&mut self, value: bool);
  fn copy(&mut self, from: usize, len: usize);
}

impl TableSink for Vec<bool> {
  fn write(&mut self, value: bool) {
    self.push(value);
  }

  fn copy(&mut self, from: usize, len: usize) {
    for i in from..from + len {
      let value = self[i];
      self.push(value);
    }
  }
}

/// Cursor writing a table into a preallocated slice.
pub struct SliceSink<'a> {
  out: &'a mut [bool],
  at: usize,
}

impl<'a> SliceSink<'a> {
  pub fn new(out: &'a mut [bool]) -> Self {
    SliceSink { out, at: 0 }
  }
}

impl TableSink for SliceSink<'_> {
  fn write(&mut self, value: bool) {
    self.out[self.at] = value;
    self.at += 1;
  }

  fn copy(&mut self, from: usize, len: usize) {
    let (done, rest) = self.out.split_at_mut(self.at);
    rest[..len].copy_from_slice(&done[from..from + len]);
    self.at += len;
  }
}

/// Streams, for every position of `x` in order, whether the suffix
/// starting there is lexicographically smaller than `y`.
///
/// Linear time, constant extra space beyond the sink: the scan keeps
/// the best window seen so far and fills skipped positions with `copy`.
pub fn less_than_table<S: Ord>(x: &[S], y: &[S], sink: &mut impl TableSink) {
  let n = x.len();
  let m = y.len();

  let mut i = 0;
  let mut ms = MsTriple::default();
  let mut i_max = 0;
  let mut ms_max = MsTriple::default();

  while i < n {
    while i + ms.len < n && ms.len < m && x[i + ms.len] == y[ms.len] {
      ms = update_ms(|j| &y[j], ms);
    }
    sink.write(ms.len < m && (i + ms.len == n || x[i + ms.len] < y[ms.len]));

    let j = i_max;
    if ms.len > ms_max.len {
      mem::swap(&mut ms, &mut ms_max);
      i_max = i;
    }

    // the answers in the shifted-over window repeat those behind the
    // best window, so they are copied rather than recomputed
    if ms.period > 0
      && ms.period <= ms.len / 3
      && y[..ms.start] == y[ms.period..ms.period + ms.start]
    {
      sink.copy(j + 1, ms.period - 1);
      i += ms.period;
      ms.len -= ms.period;
    } else {
      let h = ms.len / 3 + 1;
      sink.copy(j + 1, h - 1);
      i += h;
      ms = MsTriple::default();
    }
  }
}

/// Fills `out[i] = (x[i..] < y)` for every position of `x`. Requires
/// `out.len() == x.len()`.
pub fn less_than_table_into<S: Ord>(
  x: &[S],
  y: &[S],
  out: &mut [bool],
) -> Result<(), PreconditionError> {
  if out.len() != x.len() {
    return Err(PreconditionError::TableLength { got: out.len(), want: x.len() });
  }
  let mut sink = SliceSink::new(out);
  less_than_table(x, y, &mut sink);
  Ok(())
}

/// Fills `out[i] = (y <= x[i..] && x[i..] < z)` for every position of
/// `x`, as the XOR of the two less-than tables. Requires `y <= z` and
/// `out.len() == x.len()`. Uses one scratch table of `x.len()` bools.
pub fn range_table_into<S: Ord>(
  x: &[S],
  y: &[S],
  z: &[S],
  out: &mut [bool],
) -> Result<(), PreconditionError> {
  if y > z {
    return Err(PreconditionError::BoundsOutOfOrder);
  }
  less_than_table_into(x, z, out)?;

  let mut below_lower = vec![false; x.len()];
  less_than_table_into(x, y, &mut below_lower)?;
  for (slot, below) in out.iter_mut().zip(below_lower) {
    *slot ^= below;
  }
  Ok(())
}
