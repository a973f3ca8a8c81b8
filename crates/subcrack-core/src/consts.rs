/// Number of symbols in the cipher alphabet: 'a'..='z' plus the space.
pub const ALPHABET_LEN: usize = 27;

/// Index of the space symbol within the alphabet.
pub const SPACE_INDEX: u8 = 26;

/// Capacity of the sampler's bounded history of accepted energies.
/// The plateau heuristic only fires on a full window.
pub const ENERGY_WINDOW: usize = 100;

/// Default per-chain iteration cap. The plateau heuristic carries no
/// termination guarantee, so every walk runs under an explicit cap.
pub const DEFAULT_MAX_ITERATIONS: u64 = 1_000_000;

/// Number of decoded symbols handed to progress observers on each report.
pub const DECODE_PREVIEW_LEN: usize = 64;
