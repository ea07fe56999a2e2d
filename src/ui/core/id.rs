/// Stable identity of a UI or grid node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub u64);

impl Id {
    pub const fn raw(v: u64) -> Self {
        Self(v)
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
/// Ends every segment so `("ab", "c")` and `("a", "bc")` differ.
const SEGMENT_END: u8 = 0xff;

/// Builds an [`Id`] from a path of segments with FNV-1a 64, which gives the
/// same id for the same path on every run and every toolchain.
#[derive(Clone, Copy, Debug)]
pub struct IdPath(u64);

impl IdPath {
    pub fn root(namespace: &'static str) -> Self {
        Self(FNV_OFFSET).feed(namespace.as_bytes())
    }

    pub fn push_str(self, s: &str) -> Self {
        self.segment(s.as_bytes())
    }

    pub fn push_u64(self, v: u64) -> Self {
        self.segment(&v.to_le_bytes())
    }

    pub fn push_index(self, idx: usize) -> Self {
        self.push_u64(idx as u64)
    }

    pub fn finish(self) -> Id {
        Id(self.0)
    }

    fn segment(self, bytes: &[u8]) -> Self {
        self.feed(bytes).feed(&[SEGMENT_END])
    }

    fn feed(self, bytes: &[u8]) -> Self {
        let hash = bytes
            .iter()
            .fold(self.0, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        Self(hash)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/id.rs"]
mod tests;
