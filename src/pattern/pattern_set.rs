// Sun Oct 18 2026 - Alex

use crate::pattern::Signature;

/// Signatures in command line order. Results are reported by position, so
/// insertion order is kept as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureSet {
    signatures: Vec<Signature>,
}

impl SignatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, signature: Signature) {
        self.signatures.push(signature);
    }

    pub fn get(&self, index: usize) -> Option<&Signature> {
        self.signatures.get(index)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Signature> {
        self.signatures.iter()
    }
}

impl FromIterator<Signature> for SignatureSet {
    fn from_iter<I: IntoIterator<Item = Signature>>(iter: I) -> Self {
        Self {
            signatures: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SignatureSet {
    type Item = &'a Signature;
    type IntoIter = std::slice::Iter<'a, Signature>;

    fn into_iter(self) -> Self::IntoIter {
        self.signatures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile_hex_pattern;

    #[test]
    fn test_preserves_insertion_order() {
        let mut set = SignatureSet::new();
        assert!(set.is_empty());

        set.add(compile_hex_pattern("42").unwrap());
        set.add(compile_hex_pattern("41").unwrap());
        set.add(compile_hex_pattern("42").unwrap());

        assert_eq!(set.len(), 3);
        let rendered: Vec<String> = set.iter().map(|s| s.to_hex_string()).collect();
        assert_eq!(rendered, vec!["42", "41", "42"]);
        assert_eq!(set.get(1).map(|s| s.to_hex_string()), Some("41".to_string()));
        assert!(set.get(3).is_none());
    }

    #[test]
    fn test_collect() {
        let set: SignatureSet = ["01", "02 ?"]
            .iter()
            .map(|p| compile_hex_pattern(p).unwrap())
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!((&set).into_iter().map(|s| s.len()).sum::<usize>(), 3);
    }
}
