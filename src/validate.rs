//! Structural checks on colorings: per-vertex color-degree bounds, separation
//! of the single-color subgraphs, and the final acceptance test for a
//! completed two-coloring.

pub mod degree;
pub mod separation;
pub mod solution;

pub use degree::{
    color_degree_violation, color_degrees_ok, color_degrees_ok_with, degree_bound_ok,
    degree_bound_ok_with, overloaded_endpoint,
};
pub use separation::{
    endpoints_separated, endpoints_separated_two_colors, joined_edge, joined_edge_two_colors,
    one_color_subgraphs_disconnected,
};
pub use solution::{
    check_solution, check_solution_with, is_solution_correct, split_two_colors, SolutionVerdict,
};
