//! Target selection

use crate::agent::{Agent, TargetInfo};

/// Whether `a` and `b` are on opposing sides
pub fn is_hostile(a: &Agent, b: &Agent) -> bool {
    a.id != b.id && a.team != b.team
}

/// Index of the nearest Active agent hostile to `agents[index]`
///
/// Distances are compared squared. On a tie the agent earlier in the slice
/// wins.
pub fn nearest_hostile(agents: &[Agent], index: usize) -> Option<usize> {
    let me = agents.get(index)?;
    let mut best = None;
    let mut best_distance = f64::INFINITY;

    for (i, other) in agents.iter().enumerate() {
        if i == index || !other.is_active() || !is_hostile(me, other) {
            continue;
        }
        let distance = (other.position - me.position).magnitude_squared();
        if distance < best_distance {
            best = Some(i);
            best_distance = distance;
        }
    }
    best
}

/// Target for `agents[index]` this frame
///
/// An assigned target is kept while it is Active and hostile; otherwise the
/// nearest hostile is chosen.
pub fn select_target(agents: &[Agent], index: usize) -> Option<TargetInfo> {
    let me = agents.get(index)?;
    let assigned = me
        .assigned_target
        .map(|id| id.index())
        .filter(|&i| agents.get(i).is_some_and(|t| t.is_active() && is_hostile(me, t)));

    assigned
        .or_else(|| nearest_hostile(agents, index))
        .map(|i| TargetInfo {
            id: agents[i].id,
            position: agents[i].position,
        })
}
