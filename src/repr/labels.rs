use fxhash::FxHashMap;

use crate::*;

/// Bidirectional mapping between vertex labels and dense indices `0..n`.
///
/// Both directions are always mutual inverses. Removing a label shifts all larger
/// indices down by one.
#[derive(Debug, Clone, Default)]
pub struct LabelRegistry {
    index_of: FxHashMap<String, Node>,
    labels: Vec<String>,
}

impl LabelRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns *true* if no label is registered
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Registers a new label and returns its index.
    /// Returns `None` if the label is already present.
    pub fn insert(&mut self, label: String) -> Option<Node> {
        if self.index_of.contains_key(&label) {
            return None;
        }

        let index = self.labels.len() as Node;
        self.index_of.insert(label.clone(), index);
        self.labels.push(label);
        Some(index)
    }

    /// Removes a label and returns the index it had before.
    pub fn remove(&mut self, label: &str) -> Option<Node> {
        let index = self.index_of.remove(label)?;
        self.labels.remove(index as usize);

        for v in self.index_of.values_mut() {
            if *v > index {
                *v -= 1;
            }
        }

        Some(index)
    }

    /// Returns the index of a label
    pub fn index_of(&self, label: &str) -> Option<Node> {
        self.index_of.get(label).copied()
    }

    /// Returns the label of an index
    pub fn label_of(&self, u: Node) -> Option<&str> {
        self.labels.get(u as usize).map(String::as_str)
    }

    /// Iterates over all labels in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn insert_and_lookup() {
        let mut reg = LabelRegistry::new();
        assert_eq!(reg.insert("A".into()), Some(0));
        assert_eq!(reg.insert("B".into()), Some(1));
        assert_eq!(reg.insert("A".into()), None);

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.index_of("B"), Some(1));
        assert_eq!(reg.label_of(0), Some("A"));
        assert_eq!(reg.label_of(2), None);
    }

    #[test]
    fn remove_compacts() {
        let mut reg = LabelRegistry::new();
        for l in ["a", "b", "c", "d"] {
            reg.insert(l.to_string());
        }

        assert_eq!(reg.remove("b"), Some(1));
        assert_eq!(reg.remove("b"), None);
        assert_eq!(reg.iter().collect_vec(), vec!["a", "c", "d"]);

        for (i, label) in reg.iter().enumerate() {
            assert_eq!(reg.index_of(label), Some(i as Node));
        }
    }
}
