mod button;
mod section;

pub use button::{ButtonAction, CanvasButton};
pub use section::{Section, SectionTable};
