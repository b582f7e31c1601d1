use std::collections::HashSet;

use super::{Artwork, ArtworkId};

/// Deduplicated, insertion-ordered collection of selected artworks
///
/// No id appears twice. The order is kept only so listings stay stable.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    items: Vec<Artwork>,
    ids: HashSet<ArtworkId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// Add an artwork. Returns false (and changes nothing) if its id is already selected.
    pub fn insert(&mut self, artwork: Artwork) -> bool {
        if !self.ids.insert(artwork.id) {
            return false;
        }
        self.items.push(artwork);
        true
    }

    pub fn remove(&mut self, id: ArtworkId) -> Option<Artwork> {
        if !self.ids.remove(&id) {
            return None;
        }
        let pos = self.items.iter().position(|a| a.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Flip the selection state of an artwork. Returns whether it is now selected.
    pub fn toggle(&mut self, artwork: &Artwork) -> bool {
        if self.remove(artwork.id).is_some() {
            false
        } else {
            self.insert(artwork.clone())
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.items.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.items.iter().map(|a| a.id)
    }

    pub fn as_slice(&self) -> &[Artwork] {
        &self.items
    }
}

impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for SelectionSet {}

impl FromIterator<Artwork> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = Artwork>>(iter: I) -> Self {
        let mut set = SelectionSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Artwork> for SelectionSet {
    fn extend<I: IntoIterator<Item = Artwork>>(&mut self, iter: I) {
        for artwork in iter {
            self.insert(artwork);
        }
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a Artwork;
    type IntoIter = std::slice::Iter<'a, Artwork>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
