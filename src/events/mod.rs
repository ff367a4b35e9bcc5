mod event;
mod sink;

pub use event::{
    Event, PayloadEdgeHints, PayloadNudge, PayloadOverlayOpen, PayloadScroll,
    PayloadSectionCenter,
};

pub use sink::{EventSink, FnSink};
