//! Multi-select tag sets (genres, needed band positions).
//!
//! A [`TagSet`] holds tags picked from its group's fixed vocabulary.
//! Toggling a selected tag removes it, toggling an unselected one appends it,
//! so selection order is insertion order and a tag never appears twice.
//! There is no cardinality limit.

use crate::error::TagError;
use crate::models::{BAND_POSITIONS, GENRES};

/// A tag vocabulary a form can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagGroup {
    Genres,
    Positions,
}

impl TagGroup {
    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            TagGroup::Genres => GENRES,
            TagGroup::Positions => BAND_POSITIONS,
        }
    }

    /// Heading shown above the tag buttons.
    pub fn label(&self) -> &'static str {
        match self {
            TagGroup::Genres => "Musical Genres",
            TagGroup::Positions => "Looking for",
        }
    }

    /// Multipart key the selection is encoded under.
    pub fn payload_key(&self) -> &'static str {
        match self {
            TagGroup::Genres => "genres",
            TagGroup::Positions => "memberNeeds",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TagGroup::Genres => "genre",
            TagGroup::Positions => "position",
        }
    }
}

/// Selected tags of one group, without duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagSet {
    group: TagGroup,
    selected: Vec<String>,
}

impl TagSet {
    pub fn new(group: TagGroup) -> Self {
        Self {
            group,
            selected: Vec::new(),
        }
    }

    pub fn group(&self) -> TagGroup {
        self.group
    }

    /// Flip `tag` in or out of the selection.
    ///
    /// Returns whether the tag is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> Result<bool, TagError> {
        if !self.group.vocabulary().contains(&tag) {
            return Err(TagError::Unknown {
                group: self.group.name(),
                tag: tag.to_string(),
            });
        }

        if let Some(pos) = self.selected.iter().position(|t| t == tag) {
            self.selected.remove(pos);
            Ok(false)
        } else {
            self.selected.push(tag.to_string());
            Ok(true)
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.selected.iter().any(|t| t == tag)
    }

    /// Selected tags in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// JSON array string, as sent in the registration payload.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut genres = TagSet::new(TagGroup::Genres);
        assert_eq!(genres.toggle("Rock"), Ok(true));
        assert!(genres.contains("Rock"));
        assert_eq!(genres.toggle("Rock"), Ok(false));
        assert!(genres.is_empty());
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut positions = TagSet::new(TagGroup::Positions);
        positions.toggle("Drums").unwrap();
        positions.toggle("Lead Vocalist").unwrap();
        positions.toggle("Piano").unwrap();
        positions.toggle("Lead Vocalist").unwrap();
        assert_eq!(positions.as_slice(), ["Drums", "Piano"]);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let mut genres = TagSet::new(TagGroup::Genres);
        let err = genres.toggle("Lead Guitar").unwrap_err();
        assert!(err.to_string().contains("Lead Guitar"));
        assert!(genres.is_empty());
    }

    #[test]
    fn test_selection_is_odd_toggled_tags() {
        // Seeded random walk over both vocabularies.
        for group in [TagGroup::Genres, TagGroup::Positions] {
            let vocab = group.vocabulary();
            let mut set = TagSet::new(group);
            let mut counts = vec![0usize; vocab.len()];
            let mut rng = StdRng::seed_from_u64(0x2545_F491_4F6C_DD1D);

            for _ in 0..500 {
                let idx = rng.gen_range(0..vocab.len());
                set.toggle(vocab[idx]).unwrap();
                counts[idx] += 1;
            }

            let expected: BTreeSet<&str> = vocab
                .iter()
                .zip(&counts)
                .filter(|(_, n)| *n % 2 == 1)
                .map(|(t, _)| *t)
                .collect();
            let actual: BTreeSet<&str> = set.as_slice().iter().map(String::as_str).collect();
            assert_eq!(actual, expected);
            assert_eq!(set.len(), expected.len(), "no duplicates");
        }
    }

    #[test]
    fn test_to_json() {
        let mut genres = TagSet::new(TagGroup::Genres);
        assert_eq!(genres.to_json().unwrap(), "[]");
        genres.toggle("R&B").unwrap();
        genres.toggle("Hip Hop").unwrap();
        assert_eq!(genres.to_json().unwrap(), r#"["R&B","Hip Hop"]"#);
    }
}
