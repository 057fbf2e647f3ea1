use std::time::Duration;

/// Settings for the fade-out shown once a maze is solved.
///
/// While solved, elapsed time accumulates; whenever it exceeds `interval` the
/// fade level grows by `increment` and the accumulator restarts. The controller
/// starts a new maze once the level reaches `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeConfig {
    /// Time between two fade increments.
    pub interval: Duration,
    /// Fade level added per interval.
    pub increment: u16,
    /// Fade level at which a new maze is started.
    pub threshold: u16,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(50),
            increment: 20,
            threshold: 255,
        }
    }
}

/// Construction-time settings of a [`PhaseController`](crate::PhaseController).
///
/// The entry cell is always index `0` and the goal the last cell; both follow
/// from `width` and `height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Complete the whole construction within a single tick.
    pub fast_build: bool,
    /// Complete the whole search within a single tick.
    pub fast_solve: bool,
    /// Fade-out settings.
    pub fade: FadeConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            fast_build: true,
            fast_solve: false,
            fade: FadeConfig::default(),
        }
    }
}
