/// Outcome of iterating a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationResult {
    Escaped { iteration: u32, smooth_value: f64 },
    Interior,
}

impl IterationResult {
    #[must_use]
    pub fn is_interior(&self) -> bool {
        matches!(self, Self::Interior)
    }
}
