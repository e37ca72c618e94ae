use nudge_core::derive_substream_seed;

const MUTATION_SUBSTREAM: u64 = 0;
const SELECTION_SUBSTREAM: u64 = 1;

/// Seed of the sampler driving the mutation loop.
pub fn mutation_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed, MUTATION_SUBSTREAM)
}

/// Seed of the sampler that picks the start node of the bottom SCC search.
pub fn selection_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed, SELECTION_SUBSTREAM)
}
