//! Character-level content delta
//!
//! Counts how many characters an edit added and removed, using Myers'
//! shortest-edit-script search over the two texts as flat `char` sequences.
//! Only the edit distance is needed, so the trace is never reconstructed.

use serde::{Deserialize, Serialize};

/// Characters added and deleted going from one text to another
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDelta {
    pub added: usize,
    pub deleted: usize,
}

impl ContentDelta {
    /// Total characters touched by the edit
    pub fn total(&self) -> usize {
        self.added + self.deleted
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Change relative to the size of the original text.
    ///
    /// The `+ 1` keeps the ratio defined for empty originals, so two empty
    /// texts compare at `0.0`.
    pub fn change_ratio(&self, original_chars: usize) -> f64 {
        self.total() as f64 / (original_chars as f64 + 1.0)
    }
}

/// Compute the characters added and deleted between `before` and `after`.
///
/// A replacement of `k` characters by `j` characters counts as `j` added and
/// `k` deleted. Never fails; `delta(x, x)` is always empty.
pub fn delta(before: &str, after: &str) -> ContentDelta {
    if before == after {
        return ContentDelta::default();
    }

    let a: Vec<char> = before.chars().collect();
    let b: Vec<char> = after.chars().collect();

    // Shared prefix and suffix never take part in the edit
    let prefix = a.iter().zip(&b).take_while(|(x, y)| x == y).count();
    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    let a = &a[prefix..a.len() - suffix];
    let b = &b[prefix..b.len() - suffix];

    let distance = edit_distance(a, b);
    let common = (a.len() + b.len() - distance) / 2;

    ContentDelta {
        added: b.len() - common,
        deleted: a.len() - common,
    }
}

/// Length of the shortest insert/delete script turning `a` into `b`.
///
/// `v[k]` holds the furthest x reached on diagonal `k = x - y` with the
/// current number of edits `d`.
fn edit_distance(a: &[char], b: &[char]) -> usize {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = n + m;
    if max == 0 {
        return 0;
    }

    let offset = max + 1;
    let mut v = vec![0isize; (2 * max + 3) as usize];

    for d in 0..=max {
        let mut k = -d;
        while k <= d {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;

            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }

            v[idx] = x;
            if x >= n && y >= m {
                return d as usize;
            }
            k += 2;
        }
    }

    max as usize
}
