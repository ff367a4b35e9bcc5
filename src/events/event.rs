use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadSectionCenter {
    /// Name of the centered section.
    pub name: String,
    /// Offset the viewport scrolls to.
    pub offset: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadNudge {
    /// Signed relative scroll distance.
    pub amount: f32,
    /// Absolute offset the nudge resolves to after clamping.
    pub target: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadScroll {
    /// Offset after the scroll settled.
    pub offset: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadEdgeHints {
    pub left_visible: bool,
    pub right_visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadOverlayOpen {
    /// Overlay identifier the open request named.
    pub id: String,
    /// Title the overlay displays.
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    SectionCenter(PayloadSectionCenter),
    Nudge(PayloadNudge),
    ScrollSettled(PayloadScroll),
    EdgeHints(PayloadEdgeHints),
    OverlayOpen(PayloadOverlayOpen),
    OverlayClose,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_contract_section_center() {
        let event = Event::SectionCenter(PayloadSectionCenter {
            name: "home".to_string(),
            offset: 800.0,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"SectionCenter":{"name":"home","offset":800.0}}"#);

        let event: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(
            event,
            Event::SectionCenter(PayloadSectionCenter {
                name: "home".to_string(),
                offset: 800.0,
            })
        );
    }

    #[test]
    fn test_contract_nudge() {
        let event = Event::Nudge(PayloadNudge {
            amount: -256.0,
            target: 544.0,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"Nudge":{"amount":-256.0,"target":544.0}}"#);

        let event: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(
            event,
            Event::Nudge(PayloadNudge {
                amount: -256.0,
                target: 544.0,
            })
        );
    }

    #[test]
    fn test_contract_edge_hints() {
        let event = Event::EdgeHints(PayloadEdgeHints {
            left_visible: true,
            right_visible: false,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"EdgeHints":{"left_visible":true,"right_visible":false}}"#
        );

        let event: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(
            event,
            Event::EdgeHints(PayloadEdgeHints {
                left_visible: true,
                right_visible: false,
            })
        );
    }

    #[test]
    fn test_contract_overlay() {
        let event = Event::OverlayOpen(PayloadOverlayOpen {
            id: "music".to_string(),
            title: "Music".to_string(),
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"OverlayOpen":{"id":"music","title":"Music"}}"#);

        let close = serde_json::to_string(&Event::OverlayClose).unwrap();
        assert_eq!(close, r#""OverlayClose""#);

        let event: Event = serde_json::from_str(&close).unwrap();
        assert_eq!(event, Event::OverlayClose);
    }
}
