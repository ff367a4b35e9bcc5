use serde::{Deserialize, Serialize};

/// A named logical region of the wide canvas, identified by its anchor
/// position along the scrollable surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    name: String,
    anchor_percent: f32,
}

impl Section {
    /// Creates a section anchored at `anchor_percent` of the total
    /// scrollable width. The percentage is clamped to `[0, 100]`.
    pub fn new(name: impl Into<String>, anchor_percent: f32) -> Self {
        Self {
            name: name.into(),
            anchor_percent: anchor_percent.clamp(0., 100.),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn anchor_percent(&self) -> f32 {
        self.anchor_percent
    }
}

/// Declared section table, authored by the embedding application and
/// read-only to the widget.
///
/// Sections keep declaration order; names are unique and inserting an
/// existing name replaces that entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionTable {
    sections: Vec<Section>,
}

impl SectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: Section) {
        match self.sections.iter_mut().find(|s| s.name == section.name) {
            Some(existing) => *existing = section,
            None => self.sections.push(section),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl FromIterator<Section> for SectionTable {
    fn from_iter<T: IntoIterator<Item = Section>>(iter: T) -> Self {
        let mut table = Self::new();
        for section in iter {
            table.insert(section);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_percent_is_clamped() {
        assert_eq!(Section::new("a", 120.).anchor_percent(), 100.);
        assert_eq!(Section::new("b", -5.).anchor_percent(), 0.);
    }

    #[test]
    fn test_insert_replaces_by_name() {
        let mut table = SectionTable::from_iter([
            Section::new("home", 50.),
            Section::new("contact", 90.),
        ]);
        table.insert(Section::new("home", 40.));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("home").unwrap().anchor_percent(), 40.);
        // Declaration order is preserved across replacement.
        assert_eq!(table.iter().next().unwrap().name(), "home");
    }

    #[test]
    fn test_get_unknown_name() {
        let table = SectionTable::from_iter([Section::new("home", 50.)]);
        assert!(table.get("about").is_none());
    }
}
