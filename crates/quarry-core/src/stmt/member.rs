/// A declared field, identified by its index in the owning entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Member {
    pub index: usize,
    pub name: &'static str,
}

impl Member {
    pub const fn new(index: usize, name: &'static str) -> Member {
        Member { index, name }
    }
}
