/// Prepared-layout cache keyed by digits, scale and height

use crate::encoder::ModuleSequence;
use crate::rendering::layout::BarLayout;

/// Inputs that determine a layout. Floats are compared bit-for-bit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutKey {
    digits: String,
    scale_bits: u64,
    height_bits: u64,
}

impl LayoutKey {
    pub fn new(digits: &str, scale: f64, height: f64) -> Self {
        Self {
            digits: digits.to_string(),
            scale_bits: scale.to_bits(),
            height_bits: height.to_bits(),
        }
    }
}

/// Encoder output and pixel layout computed ahead of a render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedLayout {
    pub sequence: ModuleSequence,
    pub layout: BarLayout,
}

/// Holds at most one prepared layout. Callers invalidate it explicitly when
/// an input changes; lookups also require an exact key match.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    entry: Option<(LayoutKey, PreparedLayout)>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &LayoutKey) -> Option<&PreparedLayout> {
        match &self.entry {
            Some((k, prepared)) if k == key => Some(prepared),
            _ => None,
        }
    }

    pub fn insert(&mut self, key: LayoutKey, prepared: PreparedLayout) {
        self.entry = Some((key, prepared));
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::rendering::layout::layout_sequence;

    fn prepared(scale: f64) -> PreparedLayout {
        let sequence = encode("4006381333931").unwrap();
        let layout = layout_sequence(&sequence, scale, 10.0).unwrap();
        PreparedLayout { sequence, layout }
    }

    #[test]
    fn lookup_requires_matching_key() {
        let mut cache = LayoutCache::new();
        let key = LayoutKey::new("4006381333931", 2.0, 10.0);
        cache.insert(key.clone(), prepared(2.0));
        assert!(cache.get(&key).is_some());
        assert!(cache.get(&LayoutKey::new("4006381333931", 3.0, 10.0)).is_none());
        assert!(cache.get(&LayoutKey::new("4006381333931", 2.0, 11.0)).is_none());
        assert!(cache.get(&LayoutKey::new("0036000291452", 2.0, 10.0)).is_none());
    }

    #[test]
    fn invalidate_clears_entry() {
        let mut cache = LayoutCache::new();
        let key = LayoutKey::new("4006381333931", 1.0, 10.0);
        cache.insert(key.clone(), prepared(1.0));
        assert!(!cache.is_empty());
        cache.invalidate();
        assert!(cache.is_empty());
        assert!(cache.get(&key).is_none());
    }
}
