//! Snapshot-based memoization.

/// An object whose state can be captured into a memento and reconstructed
/// from it without replaying history.
///
/// For any state reachable through the public API,
/// `Memoizable::restore(x.memoize())` equals `x` on every snapshot-relevant
/// field. Uncommitted-event queues are not part of the snapshot: the
/// restored instance starts with an empty queue.
pub trait Memoizable: Sized {
    /// The snapshot type.
    type Memento;

    /// Captures the current state into a memento.
    fn memoize(&self) -> Self::Memento;

    /// Reconstructs an instance from a memento.
    fn restore(memento: Self::Memento) -> Self;
}
