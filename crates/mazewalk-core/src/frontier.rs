//! The LIFO stack shared by the builder and the solver.

/// A last-in first-out sequence of cell indices.
///
/// The top of the frontier is the cell currently being explored. Bottom-to-top
/// order is the route from the entry cell to the current cell.
///
/// Reading or popping an empty frontier is an algorithm defect and panics.
///
/// # Examples
///
/// ```
/// use mazewalk_core::Frontier;
///
/// let mut frontier = Frontier::with_capacity(4);
/// frontier.push(0);
/// frontier.push(1);
/// assert_eq!(frontier.top(), 1);
/// assert_eq!(frontier.pop(), 1);
/// assert_eq!(frontier.as_slice(), &[0]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Frontier {
    stack: Vec<usize>,
}

impl Frontier {
    /// Creates an empty frontier.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Creates an empty frontier that can hold `capacity` cells without reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
        }
    }

    /// Pushes a cell on top.
    pub fn push(&mut self, index: usize) {
        self.stack.push(index);
    }

    /// Removes and returns the top cell.
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty.
    #[track_caller]
    pub fn pop(&mut self) -> usize {
        self.stack.pop().expect("pop on an empty frontier")
    }

    /// Returns the top cell.
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty.
    #[must_use]
    #[track_caller]
    pub fn top(&self) -> usize {
        *self.stack.last().expect("top of an empty frontier")
    }

    /// Returns `true` if no cell is on the frontier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns the number of cells on the frontier.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Removes every cell.
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Returns the cells from bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.stack
    }
}
