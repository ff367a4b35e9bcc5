use egui::{Id, Ui, Vec2};
use serde::{Deserialize, Serialize};

use crate::EdgeHints;

const KEY_PREFIX: &str = "egui_panorama_metadata";

/// How a programmatic scroll reaches its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollMode {
    /// Animated transition over the configured scroll duration.
    Smooth,
    /// Immediate jump, meant for first-paint centering before the user
    /// perceives motion.
    Instant,
}

/// A scroll request waiting to be resolved against fresh metrics.
///
/// Requests store the section name or relative amount, never a
/// precomputed offset: the offset is derived inside the widget pass that
/// consumes the request, so the metrics read happens at use time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum PendingScroll {
    Section { name: String, mode: ScrollMode },
    Nudge { amount: f32 },
}

/// In-flight smooth scroll animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct ScrollAnimation {
    pub from: f32,
    pub to: f32,
    pub start_time: f64,
    pub duration: f32,
}

impl ScrollAnimation {
    pub fn offset_at(&self, time: f64) -> f32 {
        let elapsed = (time - self.start_time) as f32;
        let t = if self.duration > 0. {
            elapsed / self.duration
        } else {
            1.
        };
        self.from + (self.to - self.from) * crate::helpers::ease_out_cubic(t)
    }

    pub fn settled_at(&self, time: f64) -> bool {
        (time - self.start_time) as f32 >= self.duration
    }
}

/// Persisted widget state.
///
/// Holds everything the widget needs to carry between frames: the
/// applied scroll offset, any pending programmatic scroll, the running
/// animation, resize coalescing state, and the last emitted edge-hint
/// pair. Layout metrics are deliberately absent; they are recomputed on
/// every pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Whether the frame is the first one.
    pub first_frame: bool,
    /// Whether the background had a rendered size on the last pass.
    pub background_seen: bool,
    /// Scroll offset applied on the last pass.
    pub offset: f32,
    /// Edge hints as last emitted, kept to suppress duplicate updates.
    pub hints: EdgeHints,

    pub(crate) pending: Option<PendingScroll>,
    pub(crate) animation: Option<ScrollAnimation>,
    pub(crate) last_viewport: Vec2,
    pub(crate) resize_deadline: Option<f64>,

    /// Custom key to identify the metadata.
    id: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            first_frame: true,
            background_seen: false,
            offset: 0.,
            hints: EdgeHints::default(),
            pending: None,
            animation: None,
            last_viewport: Vec2::ZERO,
            resize_deadline: None,
            id: String::new(),
        }
    }
}

impl Metadata {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn load(self, ui: &Ui) -> Self {
        ui.data_mut(|data| {
            data.get_persisted::<Metadata>(Id::new(self.get_key()))
                .unwrap_or(self)
        })
    }

    pub fn save(self, ui: &mut Ui) {
        ui.data_mut(|data| {
            data.insert_persisted(Id::new(self.get_key()), self);
        });
    }

    /// Queues a programmatic scroll, superseding any earlier request.
    pub(crate) fn request(&mut self, request: PendingScroll) {
        self.pending = Some(request);
    }

    /// Drops any queued request and in-flight animation.
    pub(crate) fn cancel_scroll(&mut self) {
        self.pending = None;
        self.animation = None;
    }

    /// Get key which is used to store metadata in egui cache.
    pub fn get_key(&self) -> String {
        format!("{KEY_PREFIX}_{}", self.id)
    }
}

/// Resets [`Metadata`] state.
pub fn reset_metadata(ui: &mut Ui, id: Option<String>) {
    Metadata::new(id).save(ui);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_interpolates_between_endpoints() {
        let anim = ScrollAnimation {
            from: 100.,
            to: 300.,
            start_time: 10.,
            duration: 0.5,
        };

        assert_eq!(anim.offset_at(10.), 100.);
        assert_eq!(anim.offset_at(10.5), 300.);
        assert_eq!(anim.offset_at(11.), 300.);

        let mid = anim.offset_at(10.25);
        assert!(mid > 200. && mid < 300.);
    }

    #[test]
    fn test_animation_settles_after_duration() {
        let anim = ScrollAnimation {
            from: 0.,
            to: 50.,
            start_time: 0.,
            duration: 0.25,
        };
        assert!(!anim.settled_at(0.2));
        assert!(anim.settled_at(0.25));
    }

    #[test]
    fn test_request_supersedes_previous() {
        let mut meta = Metadata::default();
        meta.request(PendingScroll::Nudge { amount: 40. });
        meta.request(PendingScroll::Section {
            name: "home".to_string(),
            mode: ScrollMode::Smooth,
        });

        assert!(matches!(
            meta.pending,
            Some(PendingScroll::Section { ref name, .. }) if name == "home"
        ));
    }

    #[test]
    fn test_key_includes_custom_id() {
        let meta = Metadata::new(Some("site".to_string()));
        assert_eq!(meta.get_key(), "egui_panorama_metadata_site");
    }
}
