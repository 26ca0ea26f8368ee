/// Number system used to judge each candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arithmetic {
    /// `f64` evaluation; the result must have a zero fractional part
    #[default]
    Float,
    /// Arbitrary-precision rational evaluation; the result must be an integer
    Exact,
}

/// Configuration for the search
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub arithmetic: Arithmetic,
    /// Fan the first blank out over the rayon thread pool
    pub parallel: bool,
}
