// Straightforward reference implementations, used by the tests and
// benches to validate the scanning algorithms.

/// Number of suffixes of `x` lexicographically smaller than `y`.
pub fn count_less_than<S: Ord>(x: &[S], y: &[S]) -> usize {
  (0..x.len()).filter(|&i| &x[i..] < y).count()
}

/// Positions whose suffix lies in `[y, z)`, in increasing order.
pub fn range_positions<S: Ord>(x: &[S], y: &[S], z: &[S]) -> Vec<usize> {
  (0..x.len())
    .filter(|&i| y <= &x[i..] && &x[i..] < z)
    .collect()
}

/// Shortest period of `x` by direct definition.
pub fn smallest_period<S: Eq>(x: &[S]) -> usize {
  (1..)
    .find(|&p| (0..x.len().saturating_sub(p)).all(|i| x[i] == x[i + p]))
    .unwrap()
}

// Occurrences of pattern in text via the Knuth-Morris-Pratt failure
// table; an algorithm independent of the scans under test. An empty
// pattern occurs at every position 0..=text.len().
pub fn exact_positions<S: Eq>(pattern: &[S], text: &[S]) -> Vec<usize> {
  if pattern.is_empty() {
    return (0..=text.len()).collect();
  }

  let lsp = kmp::kmp_table(pattern);
  let mut hits = vec![];

  let mut text_index = 0;
  let mut pattern_index = 0;
  while text_index < text.len() {
    if text[text_index] == pattern[pattern_index] {
      text_index += 1;
      pattern_index += 1;

      if pattern_index == pattern.len() {
        hits.push(text_index - pattern_index);
        pattern_index = lsp[pattern_index - 1];
      }
    } else if pattern_index > 0 {
      pattern_index = lsp[pattern_index - 1];
    } else {
      text_index += 1;
    }
  }

  hits
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_case::test_case;

  #[test_case(0, b"ABABAB", b"AB")]
  #[test_case(3, b"ABABAB", b"AC")]
  #[test_case(6, b"AAAAAA", b"B")]
  #[test_case(0, b"", b"AB")]
  fn counts(expected: usize, x: &[u8], y: &[u8]) {
    assert_eq!(expected, count_less_than(x, y));
  }

  #[test_case(vec![1, 3], b"BACABA", b"AB", b"BA")]
  #[test_case(vec![0, 2, 4], b"ABABAB", b"AB", b"AC")]
  #[test_case(vec![], b"ABABAB", b"AB", b"AB")]
  fn ranges(expected: Vec<usize>, x: &[u8], y: &[u8], z: &[u8]) {
    assert_eq!(expected, range_positions(x, y, z));
  }

  #[test_case(2, b"ABABAB")]
  #[test_case(6, b"ABCABD")]
  #[test_case(1, b"")]
  fn periods(expected: usize, x: &[u8]) {
    assert_eq!(expected, smallest_period(x));
  }

  #[test_case(vec![0, 2, 4], b"AB", b"ABABAB")]
  #[test_case(vec![0, 1, 2], b"AAA", b"AAAAA")]
  #[test_case(vec![0, 1, 2, 3], b"", b"ABC")]
  #[test_case(vec![], b"ABC", b"AB")]
  fn occurrences(expected: Vec<usize>, p: &[u8], t: &[u8]) {
    assert_eq!(expected, exact_positions(p, t));
  }
}
