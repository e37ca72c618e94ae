use nudge_core::errors::{ErrorInfo, NudgeError};
use nudge_core::NodeIndex;

use crate::game::Game;

const UNVISITED: usize = usize::MAX;

/// Returns a terminal strongly connected component reachable from `start`.
///
/// With `downward` set the search follows successors and the result has no
/// edge leaving it. Otherwise it follows predecessors and the result has no
/// edge entering it. Members are returned in ascending order.
pub fn bottom_scc(game: &Game, start: NodeIndex, downward: bool) -> Result<Vec<NodeIndex>, NudgeError> {
    game.ensure_node(start)?;
    let adjacency = if downward { &game.out } else { &game.inc };

    // Iterative Tarjan. The first component to close has no edge to any
    // component that is still open, and none has closed before it.
    let n = game.node_count();
    let mut index = vec![UNVISITED; n];
    let mut lowlink = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut stack = Vec::new();
    let mut calls: Vec<(NodeIndex, usize)> = vec![(start, 0)];
    index[start] = 0;
    lowlink[start] = 0;
    stack.push(start);
    on_stack[start] = true;
    let mut counter = 1usize;

    while let Some(&(node, cursor)) = calls.last() {
        if let Some(&next) = adjacency[node].get(cursor) {
            if let Some(frame) = calls.last_mut() {
                frame.1 += 1;
            }
            if index[next] == UNVISITED {
                index[next] = counter;
                lowlink[next] = counter;
                counter += 1;
                stack.push(next);
                on_stack[next] = true;
                calls.push((next, 0));
            } else if on_stack[next] {
                lowlink[node] = lowlink[node].min(index[next]);
            }
            continue;
        }

        calls.pop();
        if lowlink[node] == index[node] {
            let mut component = Vec::new();
            while let Some(member) = stack.pop() {
                on_stack[member] = false;
                component.push(member);
                if member == node {
                    break;
                }
            }
            component.sort_unstable();
            return Ok(component);
        }
        if let Some(&(parent, _)) = calls.last() {
            lowlink[parent] = lowlink[parent].min(lowlink[node]);
        }
    }

    Err(NudgeError::Game(
        ErrorInfo::new("scc-not-found", "search finished without closing a component")
            .with_context("start", start),
    ))
}
