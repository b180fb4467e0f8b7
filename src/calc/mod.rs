use std::collections::HashMap;

use proc::trace;

use crate::types::CostModel;

mod tests;

// this sucks but is necessary to track the call depth for indentation when printing the evaluator
// recursion
#[cfg(feature = "trace")]
thread_local! {
    static CALL_DEPTH: std::cell::Cell<usize> = std::cell::Cell::new(0);
}

/// slack for comparing evaluator outputs. distances are short sums of the three cost weights, so
/// accumulated float error stays far below this
pub const EPSILON: f64 = 1e-9;

/// Calculator of optimal string distances.
///
/// Estimates the minimum transformation cost to turn a string into another, where the authorized
/// transformations are inserting, deleting and substituting a single character, each weighted by
/// the [CostModel] the calculator was constructed with. Strings are compared byte for byte, no
/// unicode normalisation is applied.
///
/// see: https://en.wikipedia.org/wiki/Levenshtein_distance
pub struct Calculator {
    costs: CostModel,
    /// best known cost for a pair of remaining suffixes. grows with every distinct mismatching
    /// pair passed to [Calculator::distance_memoized] and is never evicted
    cache: HashMap<(Vec<u8>, Vec<u8>), f64>,
    /// mismatch subproblems solved without a cache hit, allows observing cache effectiveness
    pub computations: usize,
}

/// a calculator with the default weights: add 1, remove 1, change 1.5
impl Default for Calculator {
    fn default() -> Self {
        Calculator::new(CostModel::default())
    }
}

impl Calculator {
    /// create a calculator with the given cost weights and an empty cache
    pub fn new(costs: CostModel) -> Calculator {
        Calculator {
            costs,
            cache: HashMap::new(),
            computations: 0,
        }
    }

    /// distance between [a] and [b] by direct application of the recurrence, no memoization.
    ///
    /// Given X and Y are two arbitrary strings and p and q two differing characters:
    ///
    /// ```text
    /// d(pX, pY) = d(X, Y)
    /// d(pX, qY) = min(add + d(pX, Y), remove + d(X, qY), change + d(X, Y))
    /// d(X, ε)   = |X| * remove
    /// d(ε, Y)   = |Y| * add
    /// ```
    ///
    /// the call tree branches three ways on every mismatching pair, making this evaluator
    /// exponential in the input lengths. it exists as the correctness baseline for the other two,
    /// keep inputs short or reach for [Calculator::distance_iterative]
    pub fn distance_naive(&self, a: &str, b: &str) -> f64 {
        self.naive(a.as_bytes(), b.as_bytes())
    }

    #[trace]
    fn naive(&self, a: &[u8], b: &[u8]) -> f64 {
        if a.is_empty() && b.is_empty() {
            0.0
        } else if a.is_empty() {
            b.len() as f64 * self.costs.add
        } else if b.is_empty() {
            a.len() as f64 * self.costs.remove
        } else if a[0] == b[0] {
            self.naive(
                a.get(1..).unwrap_or_default(),
                b.get(1..).unwrap_or_default(),
            )
        } else {
            let add = self.costs.add + self.naive(a, b.get(1..).unwrap_or_default());
            let remove = self.costs.remove + self.naive(a.get(1..).unwrap_or_default(), b);
            let change = self.costs.change
                + self.naive(
                    a.get(1..).unwrap_or_default(),
                    b.get(1..).unwrap_or_default(),
                );
            add.min(remove).min(change)
        }
    }

    /// distance between [a] and [b] with the recurrence of [Calculator::distance_naive], backed
    /// by the instance owned cache.
    ///
    /// the cost of every mismatching suffix pair is stored under the pair itself, so each
    /// distinct subproblem is solved at most once per calculator. pairs with equal heads are not
    /// stored, they reduce to a smaller pair whose entry captures the cost transitively. the
    /// cache survives across calls and is never evicted, repeated calls with many distinct
    /// strings grow it indefinitely
    pub fn distance_memoized(&mut self, a: &str, b: &str) -> f64 {
        self.memoized(a.as_bytes(), b.as_bytes())
    }

    #[trace]
    fn memoized(&mut self, a: &[u8], b: &[u8]) -> f64 {
        if a.is_empty() && b.is_empty() {
            0.0
        } else if a.is_empty() {
            b.len() as f64 * self.costs.add
        } else if b.is_empty() {
            a.len() as f64 * self.costs.remove
        } else if let Some(cost) = self.cache.get(&(a.to_vec(), b.to_vec())).copied() {
            cost
        } else if a[0] == b[0] {
            // equal heads are not stored themselves, the entry of the reduced pair captures their
            // cost transitively
            self.memoized(
                a.get(1..).unwrap_or_default(),
                b.get(1..).unwrap_or_default(),
            )
        } else {
            self.computations += 1;

            let add = self.costs.add + self.memoized(a, b.get(1..).unwrap_or_default());
            let remove = self.costs.remove + self.memoized(a.get(1..).unwrap_or_default(), b);
            let change = self.costs.change
                + self.memoized(
                    a.get(1..).unwrap_or_default(),
                    b.get(1..).unwrap_or_default(),
                );

            let cost = add.min(remove).min(change);
            self.cache.insert((a.to_vec(), b.to_vec()), cost);
            cost
        }
    }

    /// distance between [a] and [b] by filling a (|b|+1)x(|a|+1) cost matrix bottom up.
    ///
    /// cell (y, x) holds the distance between the first x characters of [a] and the first y
    /// characters of [b]:
    ///
    /// - moving right consumes a character of [a], a deletion, the left cost plus remove
    /// - moving down consumes a character of [b], an insertion, the upper cost plus add
    /// - moving diagonally consumes one of each, free on equal characters, otherwise change
    ///
    /// row 0 and column 0 follow the same rule against the empty string. with the default
    /// weights the matrix for "CAT" and "DOG" fills as:
    ///
    /// ```text
    ///          C    A    T
    ///    0.0  1.0  2.0  3.0
    /// D  1.0  1.5  2.5  3.5
    /// O  2.0  2.5  3.0  4.0
    /// G  3.0  3.5  4.0  4.5
    /// ```
    ///
    /// the bottom right cell is the result. O(|a|*|b|) time and space, no recursion, no state
    /// kept across calls
    pub fn distance_iterative(&self, a: &str, b: &str) -> f64 {
        let (a, b) = (a.as_bytes(), b.as_bytes());
        let mut costs = vec![vec![0f64; a.len() + 1]; b.len() + 1];

        for (x, cost) in costs[0].iter_mut().enumerate() {
            *cost = x as f64 * self.costs.remove;
        }

        for (y, row) in costs.iter_mut().enumerate() {
            row[0] = y as f64 * self.costs.add;
        }

        for y in 1..=b.len() {
            for x in 1..=a.len() {
                let change = if a[x - 1] == b[y - 1] {
                    0.0
                } else {
                    self.costs.change
                };

                costs[y][x] = (costs[y - 1][x] + self.costs.add)
                    .min(costs[y][x - 1] + self.costs.remove)
                    .min(costs[y - 1][x - 1] + change);
            }
        }

        costs[b.len()][a.len()]
    }
}
