//! Source to destination mapping
//!
//! The mapping is the only thing the matching core hands to the rest of the
//! program: display and symlink creation both read it and never change it.

use std::collections::BTreeMap;
use std::collections::btree_map::Iter;
use std::path::{Path, PathBuf};

/// Matched source paths and their expanded destinations
///
/// Entries are kept sorted by source path. That is also the order in which the
/// walk discovers them, so iteration follows step numbering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: BTreeMap<PathBuf, PathBuf>,
}

impl Mapping {
    /// Creates an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the destination of a source path
    ///
    /// Returns the previous destination if the source was already present.
    pub fn insert(&mut self, source: PathBuf, destination: PathBuf) -> Option<PathBuf> {
        self.entries.insert(source, destination)
    }

    /// The destination of a source path
    pub fn get(&self, source: &Path) -> Option<&Path> {
        self.entries.get(source).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(source, destination)` pairs in source order
    pub fn iter(&self) -> Iter<'_, PathBuf, PathBuf> {
        self.entries.iter()
    }

    pub fn sources(&self) -> Vec<&Path> {
        self.entries.keys().map(PathBuf::as_path).collect()
    }

    pub fn destinations(&self) -> Vec<&Path> {
        self.entries.values().map(PathBuf::as_path).collect()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a PathBuf, &'a PathBuf);
    type IntoIter = Iter<'a, PathBuf, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(PathBuf, PathBuf)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (PathBuf, PathBuf)>>(iter: I) -> Self {
        Mapping {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_in_source_order() {
        let mapping: Mapping = [
            ("media/b.mkv", "out/2.mkv"),
            ("media/a/x.mkv", "out/1.mkv"),
            ("media/a.mkv", "out/3.mkv"),
        ]
        .into_iter()
        .map(|(s, d)| (PathBuf::from(s), PathBuf::from(d)))
        .collect();

        assert_eq!(
            mapping.sources(),
            vec![
                Path::new("media/a/x.mkv"),
                Path::new("media/a.mkv"),
                Path::new("media/b.mkv"),
            ]
        );
        assert_eq!(mapping.get(Path::new("media/b.mkv")), Some(Path::new("out/2.mkv")));
    }

    #[test]
    fn test_insert_replaces_destination() {
        let mut mapping = Mapping::new();
        assert!(mapping.is_empty());

        mapping.insert(PathBuf::from("a"), PathBuf::from("x"));
        let previous = mapping.insert(PathBuf::from("a"), PathBuf::from("y"));

        assert_eq!(previous, Some(PathBuf::from("x")));
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.destinations(), vec![Path::new("y")]);
    }
}
