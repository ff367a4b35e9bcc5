use std::collections::HashMap;

use egui::{Id, Ui};
use serde::{Deserialize, Serialize};

const KEY_PREFIX: &str = "egui_panorama_overlay";

/// Shown when an overlay opens without body content.
pub(crate) const PLACEHOLDER_BODY: &str = "Content coming soon.";

/// Resolved overlay content: a title and body markup, possibly empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayContent {
    pub title: String,
    pub body: String,
}

impl OverlayContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Overlay content source: identifier to content lookup, supplied by
/// the embedding application.
#[derive(Clone, Debug, Default)]
pub struct OverlayRegistry {
    contents: HashMap<String, OverlayContent>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, content: OverlayContent) {
        self.contents.insert(id.into(), content);
    }

    pub fn get(&self, id: &str) -> Option<&OverlayContent> {
        self.contents.get(id)
    }

    /// Resolves an identifier to displayable content.
    ///
    /// Unregistered identifiers degrade to a prettified title and an
    /// empty body; `title_override` takes precedence over both the
    /// registered and derived titles.
    pub fn resolve(&self, id: &str, title_override: Option<&str>) -> OverlayContent {
        let mut content = self
            .contents
            .get(id)
            .cloned()
            .unwrap_or_else(|| OverlayContent::new(title_from_id(id), ""));
        if let Some(title) = title_override {
            content.title = title.to_string();
        }
        content
    }
}

impl FromIterator<(String, OverlayContent)> for OverlayRegistry {
    fn from_iter<T: IntoIterator<Item = (String, OverlayContent)>>(iter: T) -> Self {
        Self {
            contents: iter.into_iter().collect(),
        }
    }
}

/// Derives a human-readable title from an overlay identifier:
/// separators become spaces and each word is title-cased.
pub fn title_from_id(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The single modal overlay session.
///
/// At most one overlay is visible; opening while one is shown replaces
/// its content in place. Closing clears the content and is idempotent.
/// The accessibility-hidden flag mirrors visibility for assistive
/// technology.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OverlaySession {
    visible: bool,
    accessibility_hidden: bool,
    title: String,
    body: String,

    /// Custom key to identify the session.
    id: String,
}

impl Default for OverlaySession {
    fn default() -> Self {
        Self {
            visible: false,
            accessibility_hidden: true,
            title: String::new(),
            body: String::new(),
            id: String::new(),
        }
    }
}

impl OverlaySession {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn load(self, ui: &Ui) -> Self {
        ui.data_mut(|data| {
            data.get_persisted::<OverlaySession>(Id::new(self.get_key()))
                .unwrap_or(self)
        })
    }

    pub fn save(self, ui: &mut Ui) {
        ui.data_mut(|data| {
            data.insert_persisted(Id::new(self.get_key()), self);
        });
    }

    /// Opens the overlay, replacing any displayed content.
    pub fn open(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.title = title.into();
        self.body = body.into();
        self.visible = true;
        self.accessibility_hidden = false;
    }

    /// Closes the overlay and destroys its content. A no-op when the
    /// overlay is already closed.
    pub fn close(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        self.accessibility_hidden = true;
        self.title.clear();
        self.body.clear();
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn accessibility_hidden(&self) -> bool {
        self.accessibility_hidden
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Get key which is used to store the session in egui cache.
    pub fn get_key(&self) -> String {
        format!("{KEY_PREFIX}_{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces_content_in_place() {
        let mut session = OverlaySession::default();
        session.open("Contact", "");
        session.open("Music", "<p>x</p>");

        assert!(session.is_open());
        assert_eq!(session.title(), "Music");
        assert_eq!(session.body(), "<p>x</p>");
    }

    #[test]
    fn test_close_clears_content() {
        let mut session = OverlaySession::default();
        session.open("Contact", "details");
        session.close();

        assert!(!session.is_open());
        assert!(session.accessibility_hidden());
        assert_eq!(session.title(), "");
        assert_eq!(session.body(), "");
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut session = OverlaySession::default();
        session.open("Contact", "");
        session.close();

        let snapshot = session.clone();
        session.close();

        assert_eq!(session.is_open(), snapshot.is_open());
        assert_eq!(session.accessibility_hidden(), snapshot.accessibility_hidden());
        assert_eq!(session.title(), snapshot.title());
    }

    #[test]
    fn test_accessibility_flag_tracks_visibility() {
        let mut session = OverlaySession::default();
        assert!(session.accessibility_hidden());

        session.open("Music", "");
        assert!(!session.accessibility_hidden());

        session.close();
        assert!(session.accessibility_hidden());
    }

    #[test]
    fn test_registry_resolves_unknown_id_to_derived_title() {
        let registry = OverlayRegistry::new();
        let content = registry.resolve("professional-experience", None);

        assert_eq!(content.title, "Professional Experience");
        assert_eq!(content.body, "");
    }

    #[test]
    fn test_registry_title_override_wins() {
        let mut registry = OverlayRegistry::new();
        registry.insert("music", OverlayContent::new("Music", "<p>discography</p>"));

        let content = registry.resolve("music", Some("Listen"));
        assert_eq!(content.title, "Listen");
        assert_eq!(content.body, "<p>discography</p>");
    }

    #[test]
    fn test_title_from_id_handles_separators() {
        assert_eq!(title_from_id("coming_soon"), "Coming Soon");
        assert_eq!(title_from_id("a--b"), "A B");
        assert_eq!(title_from_id(""), "");
    }
}
