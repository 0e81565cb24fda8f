/// Bounds applied by the color-degree validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Largest number of same-colored edges a vertex may carry while a
    /// coloring is still being built.
    pub max_color_degree: usize,
    /// Exact same-colored degree that rejects a completed coloring.
    pub forbidden_color_degree: usize,
}

impl VerifierConfig {
    /// Create a config with the default bounds (2 while building, 3 rejected when complete).
    pub fn new() -> Self {
        Self {
            max_color_degree: 2,
            forbidden_color_degree: 3,
        }
    }

    /// Customize the incremental per-vertex bound.
    pub fn with_max_color_degree(mut self, max_color_degree: usize) -> Self {
        self.max_color_degree = max_color_degree;
        self
    }

    /// Customize the degree rejected by the whole-graph check.
    pub fn with_forbidden_color_degree(mut self, forbidden_color_degree: usize) -> Self {
        self.forbidden_color_degree = forbidden_color_degree;
        self
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self::new()
    }
}
