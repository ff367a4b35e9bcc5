use crate::{EdgeHints, LayoutMetrics, ScrollState, SectionTable};

/// Scroll distance inside which an edge hint counts as resting against
/// that edge. Absorbs sub-pixel rounding noise from the scroll substrate
/// so hints do not flicker at rest.
pub const EDGE_HINT_TOLERANCE: f32 = 2.0;

/// Scrollable range below which the canvas counts as exactly fitting
/// the viewport and both hints stay hidden.
const MIN_SCROLLABLE_RANGE: f32 = 1.0;

/// Resolves a section name to the scroll offset that centers it in the
/// viewport.
///
/// An unknown name resolves to 0 rather than failing; a canvas without
/// horizontal overflow always resolves to 0.
///
/// # Example
/// ```
/// use egui_panorama::{resolve_offset, LayoutMetrics, Section, SectionTable};
///
/// let sections = SectionTable::from_iter([Section::new("home", 50.)]);
/// let metrics = LayoutMetrics {
///     scrollable_width: 2000.,
///     viewport_width: 400.,
///     viewport_height: 600.,
///     background_rendered_width: 2000.,
///     background_rendered_height: 600.,
/// };
///
/// assert_eq!(resolve_offset("home", &sections, &metrics), 800.);
/// assert_eq!(resolve_offset("about", &sections, &metrics), 0.);
/// ```
pub fn resolve_offset(name: &str, sections: &SectionTable, metrics: &LayoutMetrics) -> f32 {
    match sections.get(name) {
        Some(section) => resolve_anchor_offset(section.anchor_percent(), metrics),
        None => 0.,
    }
}

/// Resolves a raw anchor percentage to a centering scroll offset,
/// clamped to the valid scroll range.
///
/// Centering is on viewport width; the vertical axis never scrolls.
pub fn resolve_anchor_offset(anchor_percent: f32, metrics: &LayoutMetrics) -> f32 {
    let target_x =
        (anchor_percent / 100.) * metrics.scrollable_width - metrics.viewport_width / 2.;
    target_x.clamp(0., metrics.max_offset())
}

/// Derives edge-hint visibility from the current scroll state.
pub fn compute_edge_hints(scroll: &ScrollState) -> EdgeHints {
    if scroll.max_offset <= MIN_SCROLLABLE_RANGE {
        return EdgeHints::default();
    }

    EdgeHints {
        left_visible: scroll.current_offset > EDGE_HINT_TOLERANCE,
        right_visible: scroll.current_offset < scroll.max_offset - EDGE_HINT_TOLERANCE,
    }
}

/// Converts a device-independent virtual width into a percentage of the
/// background's rendered width.
///
/// The unit is defined as hundredths of the viewport width, re-expressed
/// relative to the background artwork so button sizing tracks the image
/// rather than the raw viewport. Returns `None` while the background has
/// no rendered width; callers skip the update for that pass and retry on
/// the next load or resize event. The viewport-width-relative sizing seen
/// in some page variants is intentionally not supported.
pub fn compute_button_width_percent(
    virtual_width_units: f32,
    metrics: &LayoutMetrics,
) -> Option<f32> {
    if metrics.background_rendered_width <= 0. || virtual_width_units <= 0. {
        return None;
    }

    let pixel_width = (virtual_width_units / 100.) * metrics.viewport_width;
    Some(pixel_width / metrics.background_rendered_width * 100.)
}

/// Ease-out interpolation for smooth scrolling, `t` in `[0, 1]`.
pub(crate) fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1. - t.clamp(0., 1.);
    1. - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Section;

    fn metrics(scrollable: f32, viewport: f32) -> LayoutMetrics {
        LayoutMetrics {
            scrollable_width: scrollable,
            viewport_width: viewport,
            viewport_height: 600.,
            background_rendered_width: scrollable,
            background_rendered_height: 600.,
        }
    }

    fn site_sections() -> SectionTable {
        SectionTable::from_iter([
            Section::new("writing", 10.),
            Section::new("code", 30.),
            Section::new("home", 50.),
            Section::new("music", 70.),
            Section::new("contact", 90.),
        ])
    }

    #[test]
    fn test_resolve_offset_centers_section() {
        let m = metrics(2000., 400.);
        assert_eq!(resolve_offset("home", &site_sections(), &m), 800.);
    }

    #[test]
    fn test_resolve_offset_is_deterministic() {
        let m = metrics(2000., 400.);
        let table = site_sections();
        assert_eq!(
            resolve_offset("music", &table, &m),
            resolve_offset("music", &table, &m)
        );
    }

    #[test]
    fn test_resolve_offset_unknown_name_is_benign() {
        let m = metrics(2000., 400.);
        assert_eq!(resolve_offset("about", &site_sections(), &m), 0.);
    }

    #[test]
    fn test_resolve_offset_clamps_to_scroll_range() {
        let m = metrics(2000., 400.);
        let table = site_sections();
        for section in table.iter() {
            let offset = resolve_offset(section.name(), &table, &m);
            assert!(offset >= 0.);
            assert!(offset <= m.max_offset());
        }
        // The rightmost anchor would overshoot without the clamp.
        assert_eq!(resolve_offset("contact", &table, &m), 1600.);
    }

    #[test]
    fn test_resolve_offset_without_overflow_is_zero() {
        let m = metrics(400., 400.);
        let table = site_sections();
        for section in table.iter() {
            assert_eq!(resolve_offset(section.name(), &table, &m), 0.);
        }

        let narrower = metrics(300., 400.);
        assert_eq!(resolve_offset("contact", &table, &narrower), 0.);
    }

    #[test]
    fn test_edge_hints_hidden_without_scrollable_range() {
        for offset in [0., 0.5, 1.] {
            let hints = compute_edge_hints(&ScrollState::new(offset, 1.));
            assert!(!hints.left_visible);
            assert!(!hints.right_visible);
        }
    }

    #[test]
    fn test_edge_hints_tolerance_boundaries() {
        let max = 1000.;

        let at_rest = compute_edge_hints(&ScrollState::new(1., max));
        assert!(!at_rest.left_visible);
        assert!(at_rest.right_visible);

        let off_edge = compute_edge_hints(&ScrollState::new(3., max));
        assert!(off_edge.left_visible);
        assert!(off_edge.right_visible);

        let near_end = compute_edge_hints(&ScrollState::new(max - 1., max));
        assert!(near_end.left_visible);
        assert!(!near_end.right_visible);
    }

    #[test]
    fn test_edge_hints_middle_shows_both() {
        let hints = compute_edge_hints(&ScrollState::new(500., 1000.));
        assert!(hints.left_visible);
        assert!(hints.right_visible);
    }

    #[test]
    fn test_button_width_relative_to_background() {
        let m = LayoutMetrics {
            scrollable_width: 3200.,
            viewport_width: 1600.,
            viewport_height: 900.,
            background_rendered_width: 3200.,
            background_rendered_height: 900.,
        };
        // 10 units = 160px on this viewport = 5% of the background.
        assert_eq!(compute_button_width_percent(10., &m), Some(5.));
    }

    #[test]
    fn test_button_width_skips_unrendered_background() {
        let m = LayoutMetrics {
            scrollable_width: 1600.,
            viewport_width: 1600.,
            viewport_height: 900.,
            background_rendered_width: 0.,
            background_rendered_height: 0.,
        };
        assert_eq!(compute_button_width_percent(10., &m), None);
    }

    #[test]
    fn test_button_width_ignores_nonpositive_units() {
        let m = metrics(2000., 400.);
        assert_eq!(compute_button_width_percent(0., &m), None);
        assert_eq!(compute_button_width_percent(-3., &m), None);
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.), 0.);
        assert_eq!(ease_out_cubic(1.), 1.);
        assert_eq!(ease_out_cubic(2.), 1.);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
