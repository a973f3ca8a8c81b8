use crate::alphabet::Symbol;
use crate::consts::ALPHABET_LEN;
use itertools::Itertools;

const N: usize = ALPHABET_LEN;

/// Stationary first-order Markov model of the reference language: the
/// marginal symbol distribution P and a row-stochastic transition matrix Q
/// (row = current symbol, column = the symbol that follows it).
///
/// Every cell of the count matrix starts at one before the corpus is
/// scanned, so no entry of P or Q can be zero and every log below stays
/// finite, whatever the corpus looks like.
#[derive(Debug, Clone)]
pub struct BigramModel {
    p: [f64; N],
    q: [[f64; N]; N],
    log_p: [f64; N],
    log_q: [[f64; N]; N],
}

impl BigramModel {
    /// Estimates P and Q from an encoded corpus. Deterministic; both P and
    /// Q derive from the row sums of the same add-one count matrix, which
    /// keeps the marginal and the conditional on one axis convention.
    pub fn estimate(corpus: &[Symbol]) -> Self {
        let mut counts = [[1.0f64; N]; N];
        for (&a, &b) in corpus.iter().tuple_windows() {
            counts[a as usize][b as usize] += 1.0;
        }

        let grand_total: f64 = counts.iter().flatten().sum();

        let mut p = [0.0; N];
        let mut q = [[0.0; N]; N];
        let mut log_p = [0.0; N];
        let mut log_q = [[0.0; N]; N];

        for i in 0..N {
            let row_sum: f64 = counts[i].iter().sum();
            p[i] = row_sum / grand_total;
            log_p[i] = p[i].ln();
            for j in 0..N {
                q[i][j] = counts[i][j] / row_sum;
                log_q[i][j] = q[i][j].ln();
            }
        }

        Self { p, q, log_p, log_q }
    }

    /// Marginal probability of one symbol.
    pub fn marginal(&self, s: Symbol) -> f64 {
        self.p[s as usize]
    }

    /// Conditional probability of `next` given `prev`.
    pub fn transition(&self, prev: Symbol, next: Symbol) -> f64 {
        self.q[prev as usize][next as usize]
    }

    #[inline(always)]
    pub fn ln_marginal(&self, s: Symbol) -> f64 {
        self.log_p[s as usize]
    }

    #[inline(always)]
    pub fn ln_transition(&self, prev: Symbol, next: Symbol) -> f64 {
        self.log_q[prev as usize][next as usize]
    }
}
