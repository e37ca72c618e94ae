use nudge_core::errors::{ErrorInfo, NudgeError};
use nudge_core::{NodeIndex, Player};

/// Parity game graph with dense node identities.
///
/// Every node carries a priority, an owner and an optional label. Edges are
/// stored twice: `out[n]` lists successors and `inc[m]` lists predecessors,
/// both in insertion order and without duplicates. Every public mutator
/// keeps the two lists symmetric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    pub(crate) priority: Vec<u64>,
    pub(crate) owner: Vec<Player>,
    pub(crate) label: Vec<Option<String>>,
    pub(crate) out: Vec<Vec<NodeIndex>>,
    pub(crate) inc: Vec<Vec<NodeIndex>>,
}

impl Game {
    /// Creates an empty game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game with `n` edgeless nodes of priority 0 owned by [`Player::Even`].
    pub fn with_nodes(n: usize) -> Self {
        Self {
            priority: vec![0; n],
            owner: vec![Player::Even; n],
            label: vec![None; n],
            out: vec![Vec::new(); n],
            inc: vec![Vec::new(); n],
        }
    }

    /// Builds a game from owners and an edge list, with every priority set to 0.
    pub fn from_edges(owners: &[Player], edges: &[(NodeIndex, NodeIndex)]) -> Result<Self, NudgeError> {
        let mut game = Self::with_nodes(owners.len());
        game.owner.copy_from_slice(owners);
        for &(from, to) in edges {
            game.add_edge(from, to)?;
        }
        Ok(game)
    }

    /// Appends a node and returns its identity.
    pub fn add_node(&mut self, priority: u64, owner: Player) -> NodeIndex {
        let id = self.priority.len();
        self.priority.push(priority);
        self.owner.push(owner);
        self.label.push(None);
        self.out.push(Vec::new());
        self.inc.push(Vec::new());
        id
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.priority.len()
    }

    /// Returns whether the game has no nodes.
    pub fn is_empty(&self) -> bool {
        self.priority.is_empty()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.out.iter().map(Vec::len).sum()
    }

    /// Iterates over all node identities.
    pub fn nodes(&self) -> std::ops::Range<NodeIndex> {
        0..self.node_count()
    }

    /// Returns every edge, grouped by source in identity order.
    pub fn edges(&self) -> Vec<(NodeIndex, NodeIndex)> {
        self.out
            .iter()
            .enumerate()
            .flat_map(|(from, succ)| succ.iter().map(move |&to| (from, to)))
            .collect()
    }

    /// Successors of `node` in insertion order.
    pub fn successors(&self, node: NodeIndex) -> Result<&[NodeIndex], NudgeError> {
        self.ensure_node(node)?;
        Ok(&self.out[node])
    }

    /// Predecessors of `node` in insertion order.
    pub fn predecessors(&self, node: NodeIndex) -> Result<&[NodeIndex], NudgeError> {
        self.ensure_node(node)?;
        Ok(&self.inc[node])
    }

    /// Owner of `node`.
    pub fn owner(&self, node: NodeIndex) -> Result<Player, NudgeError> {
        self.ensure_node(node)?;
        Ok(self.owner[node])
    }

    /// Owners of all nodes, indexed by identity.
    pub fn owners(&self) -> &[Player] {
        &self.owner
    }

    /// Replaces the owner of `node`.
    pub fn set_owner(&mut self, node: NodeIndex, owner: Player) -> Result<(), NudgeError> {
        self.ensure_node(node)?;
        self.owner[node] = owner;
        Ok(())
    }

    /// Hands `node` to the other player and returns the new owner.
    pub fn flip_owner(&mut self, node: NodeIndex) -> Result<Player, NudgeError> {
        self.ensure_node(node)?;
        let flipped = self.owner[node].opponent();
        self.owner[node] = flipped;
        Ok(flipped)
    }

    /// Priority of `node`.
    pub fn priority(&self, node: NodeIndex) -> Result<u64, NudgeError> {
        self.ensure_node(node)?;
        Ok(self.priority[node])
    }

    /// Priorities of all nodes, indexed by identity.
    pub fn priorities(&self) -> &[u64] {
        &self.priority
    }

    /// Replaces the priority of `node`.
    pub fn set_priority(&mut self, node: NodeIndex, priority: u64) -> Result<(), NudgeError> {
        self.ensure_node(node)?;
        self.priority[node] = priority;
        Ok(())
    }

    /// Label of `node`, if any.
    pub fn label(&self, node: NodeIndex) -> Result<Option<&str>, NudgeError> {
        self.ensure_node(node)?;
        Ok(self.label[node].as_deref())
    }

    /// Replaces the label of `node`.
    pub fn set_label(&mut self, node: NodeIndex, label: Option<String>) -> Result<(), NudgeError> {
        self.ensure_node(node)?;
        self.label[node] = label;
        Ok(())
    }

    /// Returns whether the edge `(from, to)` exists.
    pub fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> Result<bool, NudgeError> {
        self.ensure_node(from)?;
        self.ensure_node(to)?;
        Ok(self.out[from].contains(&to))
    }

    /// Inserts `(from, to)` unless it is already present.
    ///
    /// Returns `true` when the edge was added and `false` when it existed.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) -> Result<bool, NudgeError> {
        if self.has_edge(from, to)? {
            return Ok(false);
        }
        self.out[from].push(to);
        self.inc[to].push(from);
        Ok(true)
    }

    /// Deletes `(from, to)` from both adjacency lists.
    ///
    /// Returns `false` and leaves the game untouched when the edge is absent.
    pub fn remove_edge(&mut self, from: NodeIndex, to: NodeIndex) -> Result<bool, NudgeError> {
        self.ensure_node(from)?;
        self.ensure_node(to)?;
        let Some(pos) = self.out[from].iter().position(|&m| m == to) else {
            return Ok(false);
        };
        self.out[from].remove(pos);
        if let Some(pos) = self.inc[to].iter().position(|&m| m == from) {
            self.inc[to].remove(pos);
        }
        Ok(true)
    }

    /// Builds a new game over the nodes in `keep`.
    ///
    /// Node `keep[i]` becomes node `i`. Edges between kept nodes survive in
    /// their original relative order; edges touching a dropped node are
    /// discarded.
    pub fn extract_subgame(&self, keep: &[NodeIndex]) -> Result<Game, NudgeError> {
        let mut remap: Vec<Option<NodeIndex>> = vec![None; self.node_count()];
        for (new_id, &old_id) in keep.iter().enumerate() {
            self.ensure_node(old_id)?;
            if remap[old_id].is_some() {
                return Err(NudgeError::Game(
                    ErrorInfo::new("duplicate-keep", "node listed twice in subgame selection")
                        .with_context("node", old_id),
                ));
            }
            remap[old_id] = Some(new_id);
        }
        let translate = |list: &[NodeIndex]| -> Vec<NodeIndex> {
            list.iter().filter_map(|&node| remap[node]).collect()
        };
        let mut sub = Game::with_nodes(keep.len());
        for (new_id, &old_id) in keep.iter().enumerate() {
            sub.priority[new_id] = self.priority[old_id];
            sub.owner[new_id] = self.owner[old_id];
            sub.label[new_id] = self.label[old_id].clone();
            sub.out[new_id] = translate(&self.out[old_id]);
            sub.inc[new_id] = translate(&self.inc[old_id]);
        }
        Ok(sub)
    }

    /// Builds a new game without `node`; identities above it shift down by one.
    pub fn without_node(&self, node: NodeIndex) -> Result<Game, NudgeError> {
        self.ensure_node(node)?;
        let keep: Vec<NodeIndex> = self.nodes().filter(|&other| other != node).collect();
        self.extract_subgame(&keep)
    }

    /// Moves the node at identity `i` to identity `mapping[i]`.
    pub fn permute(&mut self, mapping: &[NodeIndex]) -> Result<(), NudgeError> {
        let n = self.node_count();
        if mapping.len() != n {
            return Err(NudgeError::Game(
                ErrorInfo::new("invalid-permutation", "mapping length differs from node count")
                    .with_context("nodes", n)
                    .with_context("mapping", mapping.len()),
            ));
        }
        let mut seen = vec![false; n];
        for (from, &to) in mapping.iter().enumerate() {
            if to >= n || seen[to] {
                return Err(NudgeError::Game(
                    ErrorInfo::new("invalid-permutation", "mapping is not a permutation")
                        .with_context("index", from)
                        .with_context("target", to),
                ));
            }
            seen[to] = true;
        }
        let mut permuted = Game::with_nodes(n);
        for (old_id, &new_id) in mapping.iter().enumerate() {
            permuted.priority[new_id] = self.priority[old_id];
            permuted.owner[new_id] = self.owner[old_id];
            permuted.label[new_id] = self.label[old_id].take();
            permuted.out[new_id] = self.out[old_id].iter().map(|&m| mapping[m]).collect();
            permuted.inc[new_id] = self.inc[old_id].iter().map(|&m| mapping[m]).collect();
        }
        *self = permuted;
        Ok(())
    }

    /// Verifies adjacency symmetry, absence of duplicates and per-node attribute totality.
    pub fn check_invariants(&self) -> Result<(), NudgeError> {
        let n = self.node_count();
        if self.owner.len() != n || self.label.len() != n || self.out.len() != n || self.inc.len() != n
        {
            return Err(NudgeError::Game(
                ErrorInfo::new("ragged-store", "per-node tables have different lengths")
                    .with_context("priorities", n)
                    .with_context("owners", self.owner.len())
                    .with_context("successor_lists", self.out.len())
                    .with_context("predecessor_lists", self.inc.len()),
            ));
        }
        for node in self.nodes() {
            check_list(&self.out[node], node, n, "successor")?;
            check_list(&self.inc[node], node, n, "predecessor")?;
            for &to in &self.out[node] {
                if !self.inc[to].contains(&node) {
                    return Err(asymmetry(node, to, "missing-predecessor"));
                }
            }
            for &from in &self.inc[node] {
                if !self.out[from].contains(&node) {
                    return Err(asymmetry(from, node, "missing-successor"));
                }
            }
        }
        Ok(())
    }

    /// Fails with `unknown-node` unless `node` is a valid identity.
    pub fn ensure_node(&self, node: NodeIndex) -> Result<(), NudgeError> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(NudgeError::Game(
                ErrorInfo::new("unknown-node", "node does not exist")
                    .with_context("node", node)
                    .with_context("nodes", self.node_count()),
            ))
        }
    }
}

fn check_list(list: &[NodeIndex], node: NodeIndex, n: usize, role: &str) -> Result<(), NudgeError> {
    for (idx, &entry) in list.iter().enumerate() {
        if entry >= n {
            return Err(NudgeError::Game(
                ErrorInfo::new("dangling-entry", "adjacency entry names a missing node")
                    .with_context("node", node)
                    .with_context("entry", entry)
                    .with_context("list", role),
            ));
        }
        if list[..idx].contains(&entry) {
            return Err(NudgeError::Game(
                ErrorInfo::new("duplicate-entry", "adjacency list repeats a node")
                    .with_context("node", node)
                    .with_context("entry", entry)
                    .with_context("list", role),
            ));
        }
    }
    Ok(())
}

fn asymmetry(from: NodeIndex, to: NodeIndex, code: &str) -> NudgeError {
    NudgeError::Game(
        ErrorInfo::new(code, "edge is recorded on one side only")
            .with_context("from", from)
            .with_context("to", to),
    )
}
