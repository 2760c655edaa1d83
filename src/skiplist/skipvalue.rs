use crate::skiplist::skipnode::NodeId;

pub enum SkipData<T> {
    // leftmost nodes of every level
    Sentinel,
    // bottom nodes (except leftmost)
    Owned(T),
    // express lane copy, points to the bottom node of its tower
    Tower(NodeId),
}

impl<T> SkipData<T> {
    pub fn is_sentinel(&self) -> bool {
        matches!(self, SkipData::Sentinel)
    }

    pub fn base(&self) -> Option<NodeId> {
        match self {
            SkipData::Tower(base) => Some(*base),
            _ => None,
        }
    }

    pub fn owned(&self) -> Option<&T> {
        match self {
            SkipData::Owned(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_owned(self) -> Option<T> {
        match self {
            SkipData::Owned(value) => Some(value),
            _ => None,
        }
    }
}
