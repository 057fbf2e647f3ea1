/// The controller's current activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Phase {
    /// The maze is being carved.
    #[display("building")]
    Building,
    /// The solver is searching for the goal.
    #[display("solving")]
    Solving,
    /// The route is found; the controller fades out before restarting.
    #[display("solved")]
    Solved,
}
