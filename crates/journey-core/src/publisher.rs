//! Event publisher abstraction.

use crate::event::DomainEvent;

/// Trait for domain objects that buffer events for outside observers.
///
/// Collaborators (renderer, UI panels, audio cues) read the pending events
/// after each call into the object and then clear them. Observers never
/// mutate the publisher through this trait.
pub trait EventPublisher {
    /// The event type this publisher produces.
    type Event: DomainEvent;

    /// Returns events produced since the last clear, in emission order.
    fn pending_events(&self) -> &[Self::Event];

    /// Clears pending events after they have been observed.
    fn clear_pending_events(&mut self);

    /// Removes and returns all pending events.
    fn drain_events(&mut self) -> Vec<Self::Event>
    where
        Self::Event: Clone,
    {
        let drained = self.pending_events().to_vec();
        self.clear_pending_events();
        drained
    }
}
