//! Plain-text report for a single analysis.

use std::io::Write;
use strictly_minimax::{Board, SearchOutcome};

/// Writes the board, value, chosen move and node counts.
pub fn write_analysis<W: Write>(
    out: &mut W,
    board: &Board,
    outcome: &SearchOutcome,
) -> std::io::Result<()> {
    writeln!(out, "{}\n", board)?;
    writeln!(out, "value: {}", outcome.value())?;
    match outcome.chosen_move() {
        Some(at) => writeln!(out, "move: {}", at)?,
        None => writeln!(out, "move: none")?,
    }
    let stats = outcome.stats();
    writeln!(
        out,
        "nodes: {} evaluations: {}",
        stats.nodes_visited, stats.evaluations
    )
}
