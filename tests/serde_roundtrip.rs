use egui_panorama::{
    CanvasButton, ButtonAction, EdgeHints, LayoutMetrics, OverlayContent, ScrollState, Section,
    SectionTable,
};

#[test]
fn test_serialize_deserialize_section_table() {
    let table = SectionTable::from_iter([
        Section::new("writing", 10.),
        Section::new("code", 30.),
        Section::new("home", 50.),
    ]);

    let json = serde_json::to_string(&table).expect("serialize table");
    let table2: SectionTable = serde_json::from_str(&json).expect("deserialize table");

    assert_eq!(table2.len(), table.len());
    for (a, b) in table.iter().zip(table2.iter()) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.anchor_percent(), b.anchor_percent());
    }
}

#[test]
fn test_serialize_deserialize_button() {
    let button = CanvasButton::new("Music", ButtonAction::OpenOverlay("music".to_string()), 70.)
        .with_vertical_percent(80.)
        .with_virtual_width(12.)
        .with_overlay_title("Listen");

    let json = serde_json::to_string(&button).expect("serialize button");
    let button2: CanvasButton = serde_json::from_str(&json).expect("deserialize button");

    assert_eq!(button2.label(), button.label());
    assert_eq!(button2.action(), button.action());
    assert_eq!(button2.anchor_percent(), button.anchor_percent());
    assert_eq!(button2.vertical_percent(), button.vertical_percent());
    assert_eq!(button2.virtual_width(), button.virtual_width());
    assert_eq!(button2.overlay_title(), button.overlay_title());
}

#[test]
fn test_serialize_deserialize_snapshots() {
    let metrics = LayoutMetrics {
        scrollable_width: 2000.,
        viewport_width: 400.,
        viewport_height: 600.,
        background_rendered_width: 2000.,
        background_rendered_height: 600.,
    };
    let json = serde_json::to_string(&metrics).expect("serialize metrics");
    let metrics2: LayoutMetrics = serde_json::from_str(&json).expect("deserialize metrics");
    assert_eq!(metrics2, metrics);
    assert_eq!(metrics2.max_offset(), 1600.);

    let scroll = ScrollState::new(800., 1600.);
    let json = serde_json::to_string(&scroll).expect("serialize scroll state");
    let scroll2: ScrollState = serde_json::from_str(&json).expect("deserialize scroll state");
    assert_eq!(scroll2, scroll);

    let hints = EdgeHints {
        left_visible: true,
        right_visible: false,
    };
    let json = serde_json::to_string(&hints).expect("serialize hints");
    let hints2: EdgeHints = serde_json::from_str(&json).expect("deserialize hints");
    assert_eq!(hints2, hints);
}

#[test]
fn test_serialize_deserialize_overlay_content() {
    let content = OverlayContent::new("Music", "<p>discography</p>");
    let json = serde_json::to_string(&content).expect("serialize content");
    let content2: OverlayContent = serde_json::from_str(&json).expect("deserialize content");
    assert_eq!(content2, content);
}
