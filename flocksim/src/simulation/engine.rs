//! High-level runtime engine settings
//!
//! Selects how the per-step force accumulation is executed.

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub parallel: bool, // false = sequential pass, true = rayon pool
}
