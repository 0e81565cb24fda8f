//! Depth-first exploration of the simple cycles relevant to a coloring query.
//!
//! None of these traversals enumerate every cycle of the graph. Each one
//! only follows the paths that can still produce the cycle it is looking
//! for, and whole-graph scans share a visited set across start vertices so
//! a cycle certified from one root is not explored again from another.

pub mod lonely;
pub mod monochromatic;

pub use lonely::{scan_for_lonely_edges, LonelyCycle};
pub use monochromatic::{
    all_monochromatic_cycles_same_length, cycle_closed_by, cycle_length_closed_by,
    monochromatic_cycle_lengths, CycleLengths,
};
