//! Myers shortest-edit-script search, divide-and-conquer variant.
//!
//! The engine marks every element that is not part of the longest common
//! subsequence of two slices. Sub-problems are kept on an explicit work
//! stack, so the depth of the native call stack does not grow with the
//! input.

use log::{debug, trace};
use smallvec::{smallvec, SmallVec};

/// Result of aligning two sequences: one "modified" flag per element.
///
/// Unmarked elements of `a` and `b`, read in order, pair up one to one and
/// form a longest common subsequence under the comparer that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alignment {
    pub(crate) modified_a: Vec<bool>,
    pub(crate) modified_b: Vec<bool>,
    /// Number of marked elements of `a` (deletions)
    pub(crate) deleted: usize,
    /// Number of marked elements of `b` (insertions)
    pub(crate) inserted: usize,
}

/// One pending region of the edit graph, `a[lower_a..upper_a]` against
/// `b[lower_b..upper_b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    lower_a: usize,
    upper_a: usize,
    lower_b: usize,
    upper_b: usize,
}

/// Forward and reverse furthest-reaching x coordinates, indexed by diagonal
/// `k = x - y` biased by `max` so negative diagonals fit.
struct Frontier {
    down: Vec<isize>,
    up: Vec<isize>,
    max: isize,
}

impl Frontier {
    fn new(max: usize) -> Self {
        Self {
            down: vec![0; 2 * max + 2],
            up: vec![0; 2 * max + 2],
            max: max as isize,
        }
    }

    /// Find the middle snake of `bounds` and return the point where the
    /// region is cut in two.
    ///
    /// Both ends of the region must already be trimmed of matching elements
    /// and both sides must be non-empty.
    fn middle_snake<T, F>(&mut self, a: &[T], b: &[T], bounds: Bounds, eq: &F) -> (usize, usize)
    where
        F: Fn(&T, &T) -> bool,
    {
        let lower_a = bounds.lower_a as isize;
        let upper_a = bounds.upper_a as isize;
        let lower_b = bounds.lower_b as isize;
        let upper_b = bounds.upper_b as isize;

        let down_k = lower_a - lower_b;
        let up_k = upper_a - upper_b;

        let delta = (upper_a - lower_a) - (upper_b - lower_b);
        let odd_delta = delta & 1 != 0;

        let down_offset = self.max - down_k;
        let up_offset = self.max - up_k;

        // The middle snake is reached within ceil((len_a + len_b) / 2) + 1 steps
        let max_d = (upper_a - lower_a + upper_b - lower_b + 1) / 2 + 1;

        let down = &mut self.down;
        let up = &mut self.up;
        let at = |offset: isize, k: isize| (offset + k) as usize;

        down[at(down_offset, down_k + 1)] = lower_a;
        up[at(up_offset, up_k - 1)] = upper_a;

        for d in 0..=max_d {
            // Forward search from the top-left corner
            let mut k = down_k - d;
            while k <= down_k + d {
                let mut x = if k == down_k - d {
                    down[at(down_offset, k + 1)]
                } else {
                    let right = down[at(down_offset, k - 1)] + 1;
                    let below = down[at(down_offset, k + 1)];
                    if k < down_k + d && below >= right {
                        below
                    } else {
                        right
                    }
                };
                let mut y = x - k;

                while x < upper_a && y < upper_b && eq(&a[x as usize], &b[y as usize]) {
                    x += 1;
                    y += 1;
                }
                down[at(down_offset, k)] = x;

                if odd_delta
                    && up_k - d < k
                    && k < up_k + d
                    && up[at(up_offset, k)] <= down[at(down_offset, k)]
                {
                    return (x as usize, (x - k) as usize);
                }
                k += 2;
            }

            // Reverse search from the bottom-right corner
            let mut k = up_k - d;
            while k <= up_k + d {
                let mut x = if k == up_k + d {
                    up[at(up_offset, k - 1)]
                } else {
                    let left = up[at(up_offset, k + 1)] - 1;
                    let above = up[at(up_offset, k - 1)];
                    if k > up_k - d && above < left {
                        above
                    } else {
                        left
                    }
                };
                let mut y = x - k;

                while x > lower_a
                    && y > lower_b
                    && eq(&a[(x - 1) as usize], &b[(y - 1) as usize])
                {
                    x -= 1;
                    y -= 1;
                }
                up[at(up_offset, k)] = x;

                if !odd_delta
                    && down_k - d <= k
                    && k <= down_k + d
                    && up[at(up_offset, k)] <= down[at(down_offset, k)]
                {
                    let x = down[at(down_offset, k)];
                    return (x as usize, (x - k) as usize);
                }
                k += 2;
            }
        }

        unreachable!(
            "no middle snake within ceil((len_a + len_b) / 2) + 1 = {} steps for region {:?}",
            max_d, bounds
        );
    }
}

/// Align `a` against `b`, marking every element outside the longest common
/// subsequence under `eq`.
pub(crate) fn align<T, F>(a: &[T], b: &[T], eq: &F) -> Alignment
where
    F: Fn(&T, &T) -> bool,
{
    let n = a.len();
    let m = b.len();

    let mut modified_a = vec![false; n];
    let mut modified_b = vec![false; m];

    let mut frontier = Frontier::new(n + m + 1);
    let mut stack: SmallVec<[Bounds; 32]> = smallvec![Bounds {
        lower_a: 0,
        upper_a: n,
        lower_b: 0,
        upper_b: m,
    }];
    let mut solved = 0usize;
    let mut deleted = 0usize;
    let mut inserted = 0usize;

    while let Some(mut bounds) = stack.pop() {
        solved += 1;

        // Common prefix
        while bounds.lower_a < bounds.upper_a
            && bounds.lower_b < bounds.upper_b
            && eq(&a[bounds.lower_a], &b[bounds.lower_b])
        {
            bounds.lower_a += 1;
            bounds.lower_b += 1;
        }

        // Common suffix
        while bounds.lower_a < bounds.upper_a
            && bounds.lower_b < bounds.upper_b
            && eq(&a[bounds.upper_a - 1], &b[bounds.upper_b - 1])
        {
            bounds.upper_a -= 1;
            bounds.upper_b -= 1;
        }

        if bounds.lower_a == bounds.upper_a {
            modified_b[bounds.lower_b..bounds.upper_b].fill(true);
            inserted += bounds.upper_b - bounds.lower_b;
        } else if bounds.lower_b == bounds.upper_b {
            modified_a[bounds.lower_a..bounds.upper_a].fill(true);
            deleted += bounds.upper_a - bounds.lower_a;
        } else {
            let (cut_a, cut_b) = frontier.middle_snake(a, b, bounds, eq);
            assert!(
                (bounds.lower_a..=bounds.upper_a).contains(&cut_a)
                    && (bounds.lower_b..=bounds.upper_b).contains(&cut_b),
                "middle snake ({}, {}) outside region {:?}",
                cut_a,
                cut_b,
                bounds
            );
            trace!("middle snake at ({}, {}) for {:?}", cut_a, cut_b, bounds);

            stack.push(Bounds {
                lower_a: cut_a,
                upper_a: bounds.upper_a,
                lower_b: cut_b,
                upper_b: bounds.upper_b,
            });
            stack.push(Bounds {
                lower_a: bounds.lower_a,
                upper_a: cut_a,
                lower_b: bounds.lower_b,
                upper_b: cut_b,
            });
        }
    }

    debug!(
        "aligned {} against {} elements in {} sub-problems: {} deleted, {} inserted",
        n, m, solved, deleted, inserted
    );
    Alignment {
        modified_a,
        modified_b,
        deleted,
        inserted,
    }
}
