use crate::alphabet::Symbol;
use crate::model::BigramModel;
use crate::permutation::Permutation;
use itertools::Itertools;

/// Scores candidate keys against one fixed ciphertext and language model.
/// Both are held by shared reference; scoring mutates nothing, so one
/// evaluator can back any number of concurrent chains.
#[derive(Clone, Copy)]
pub struct EnergyEvaluator<'a> {
    ciphertext: &'a [Symbol],
    model: &'a BigramModel,
}

impl<'a> EnergyEvaluator<'a> {
    pub fn new(ciphertext: &'a [Symbol], model: &'a BigramModel) -> Self {
        Self { ciphertext, model }
    }

    pub fn ciphertext(&self) -> &'a [Symbol] {
        self.ciphertext
    }

    /// Negative log-likelihood of the plaintext hypothesised by `key`:
    /// -ln P[x0] - sum of ln Q[x(t), x(t+1)] over the decoded sequence.
    /// Lower is better. Finite for every valid key because the model
    /// carries no zero probabilities; an empty ciphertext scores 0.
    pub fn energy(&self, key: &Permutation) -> f64 {
        let Some(&first) = self.ciphertext.first() else {
            return 0.0;
        };
        let mut e = -self.model.ln_marginal(key.image(first));
        for (&a, &b) in self.ciphertext.iter().tuple_windows() {
            e -= self.model.ln_transition(key.image(a), key.image(b));
        }
        e
    }
}
