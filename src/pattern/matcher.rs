// Sun Oct 18 2026 - Alex

use crate::pattern::{Signature, SignatureSet};

/// Scans one in-memory buffer. Matches may overlap: after a hit at `p` the
/// next candidate is `p + 1`.
pub struct SignatureMatcher<'a> {
    data: &'a [u8],
}

impl<'a> SignatureMatcher<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Start offsets of every match, in ascending order.
    pub fn positions<'s>(&self, signature: &'s Signature) -> impl Iterator<Item = usize> + 's
    where
        'a: 's,
    {
        assert_ne!(signature.len(), 0, "signature must not be empty");

        let data: &'s [u8] = self.data;
        let last_start = (data.len() + 1).checked_sub(signature.len());
        let anchor = signature.first_exact();

        last_start
            .into_iter()
            .flat_map(|end| 0..end)
            .filter(move |&i| {
                if let Some((offset, byte)) = anchor {
                    if data[i + offset] != byte {
                        return false;
                    }
                }
                signature.matches(&data[i..])
            })
    }

    pub fn find_first(&self, signature: &Signature) -> Option<usize> {
        self.positions(signature).next()
    }

    pub fn find_all(&self, signature: &Signature) -> Vec<usize> {
        self.positions(signature).collect()
    }

    pub fn count(&self, signature: &Signature) -> usize {
        self.positions(signature).count()
    }

    /// Counts for every signature, in set order.
    pub fn count_all(&self, signatures: &SignatureSet) -> Vec<usize> {
        signatures.iter().map(|sig| self.count(sig)).collect()
    }
}

pub fn count(data: &[u8], signature: &Signature) -> usize {
    SignatureMatcher::new(data).count(signature)
}
