use sha2::{Digest, Sha256};

use crate::game::Game;

/// Computes the canonical structural hash for the provided game.
///
/// The digest covers node count, priorities, owners and every successor
/// list in order. Labels and predecessor order are not part of it.
pub fn canonical_hash(game: &Game) -> String {
    let mut hasher = Sha256::new();
    hasher.update((game.node_count() as u64).to_le_bytes());
    for node in game.nodes() {
        hasher.update(game.priority[node].to_le_bytes());
        hasher.update([game.owner[node].code()]);
        update_slice(&game.out[node], &mut hasher);
    }
    format!("{:x}", hasher.finalize())
}

fn update_slice(values: &[usize], hasher: &mut Sha256) {
    hasher.update((values.len() as u64).to_le_bytes());
    for value in values {
        hasher.update((*value as u64).to_le_bytes());
    }
}
