use super::Event;

/// Receiver of widget events.
///
/// Implemented for `crossbeam` senders and, via [`FnSink`], for plain
/// closures, so the embedding application can forward events wherever
/// it needs without a channel when one is not wanted.
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for crossbeam::channel::Sender<Event> {
    fn send(&self, event: Event) {
        // A disconnected consumer is not this widget's failure.
        let _ = crossbeam::channel::Sender::send(self, event);
    }
}

/// Adapter that forwards events into a closure.
pub struct FnSink<F: Fn(Event)>(pub F);

impl<F: Fn(Event)> EventSink for FnSink<F> {
    fn send(&self, event: Event) {
        (self.0)(event);
    }
}
