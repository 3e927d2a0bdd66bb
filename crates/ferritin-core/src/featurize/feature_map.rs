use std::collections::BTreeMap;

/// Residue index → value lookup that falls back to a fixed default on a miss.
///
/// Keys need not be contiguous; a residue missing from the structure simply has
/// no entry and reads as the default.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMap<T> {
    values: BTreeMap<i64, T>,
    default: T,
}

impl<T> FeatureMap<T> {
    pub fn new(default: T) -> Self {
        FeatureMap {
            values: BTreeMap::new(),
            default,
        }
    }
    /// Later inserts for the same residue replace earlier ones.
    pub fn insert(&mut self, res_id: i64, value: T) -> Option<T> {
        self.values.insert(res_id, value)
    }
    pub fn get(&self, res_id: i64) -> &T {
        self.values.get(&res_id).unwrap_or(&self.default)
    }
    pub fn contains(&self, res_id: i64) -> bool {
        self.values.contains_key(&res_id)
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_with_default() {
        let mut map = FeatureMap::new(0.0);
        map.insert(1, 80.0);
        map.insert(7, 55.5);

        assert_eq!(*map.get(1), 80.0);
        assert_eq!(*map.get(7), 55.5);
        assert_eq!(*map.get(2), 0.0);
        assert_eq!(*map.get(-4), 0.0);
        assert!(map.contains(7));
        assert!(!map.contains(2));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_last_insert_wins() {
        let mut map = FeatureMap::new("Unknown".to_string());
        assert_eq!(map.insert(3, "C".to_string()), None);
        assert_eq!(map.insert(3, "H".to_string()), Some("C".to_string()));
        assert_eq!(map.get(3), "H");
        assert_eq!(map.get(4), "Unknown");
        assert_eq!(map.len(), 1);
    }
}
