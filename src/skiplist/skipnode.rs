use std::fmt;

use crate::skiplist::skipvalue::SkipData;

/// Stable handle of a node inside a [`NodeArena`]. Stays valid until the node is released.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct SkipNode<T> {
    data: SkipData<T>,
    next: Option<NodeId>,
    prev: Option<NodeId>,
    down: Option<NodeId>,
    up: Option<NodeId>,
}

impl<T> SkipNode<T> {
    pub fn new(data: SkipData<T>) -> Self {
        return SkipNode {
            data,
            next: None,
            prev: None,
            down: None,
            up: None,
        };
    }

    pub fn data(&self) -> &SkipData<T> {
        &self.data
    }

    // returns the previous data
    pub fn set_data(&mut self, data: SkipData<T>) -> SkipData<T> {
        std::mem::replace(&mut self.data, data)
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    pub fn down(&self) -> Option<NodeId> {
        self.down
    }

    pub fn up(&self) -> Option<NodeId> {
        self.up
    }

    pub fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }

    pub fn set_prev(&mut self, prev: Option<NodeId>) {
        self.prev = prev;
    }

    pub fn set_down(&mut self, down: Option<NodeId>) {
        self.down = down;
    }

    pub fn set_up(&mut self, up: Option<NodeId>) {
        self.up = up;
    }
}

enum Slot<T> {
    Occupied(SkipNode<T>),
    // index of the next free slot
    Free(Option<usize>),
}

/// Owns every node of one skiplist. Released slots are chained into a free list and reused.
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    live: usize,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    pub fn alloc(&mut self, node: SkipNode<T>) -> NodeId {
        self.live += 1;
        match self.free_head {
            Some(index) => {
                let slot = std::mem::replace(&mut self.slots[index], Slot::Occupied(node));
                self.free_head = match slot {
                    Slot::Free(next_free) => next_free,
                    Slot::Occupied(_) => panic!("free list points to an occupied slot"),
                };
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Returns the node's data and recycles its slot.
    pub fn release(&mut self, id: NodeId) -> SkipData<T> {
        let slot = std::mem::replace(&mut self.slots[id.0], Slot::Free(self.free_head));
        match slot {
            Slot::Occupied(node) => {
                self.free_head = Some(id.0);
                self.live -= 1;
                node.data
            }
            Slot::Free(next_free) => {
                // put it back, double release is a caller bug
                self.slots[id.0] = Slot::Free(next_free);
                panic!("node {} released twice", id)
            }
        }
    }

    pub fn get(&self, id: NodeId) -> &SkipNode<T> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Free(_) => panic!("node {} is released", id),
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SkipNode<T> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Free(_) => panic!("node {} is released", id),
        }
    }

    pub fn is_live(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.0), Some(Slot::Occupied(_)))
    }

    /// Value carried by a node, following tower copies down to the owning bottom node.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        let node = self.get(id);
        match &node.data {
            SkipData::Sentinel => None,
            SkipData::Owned(value) => Some(value),
            SkipData::Tower(base) => self.get(*base).data.owned(),
        }
    }

    pub fn len_live(&self) -> usize {
        self.live
    }

    // occupied plus free slots
    #[cfg(test)]
    pub fn slots_len(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }
}

/// Read-only view of a node, handed out by [`SkipList::head`](crate::SkipList::head),
/// [`SkipList::front`](crate::SkipList::front) and [`SkipList::find`](crate::SkipList::find).
pub struct NodeRef<'a, T> {
    arena: &'a NodeArena<T>,
    id: NodeId,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(arena: &'a NodeArena<T>, id: NodeId) -> Self {
        NodeRef { arena, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// None for sentinels.
    pub fn value(&self) -> Option<&'a T> {
        self.arena.value(self.id)
    }

    pub fn is_sentinel(&self) -> bool {
        self.arena.get(self.id).data.is_sentinel()
    }

    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.arena.get(self.id).next())
    }

    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.arena.get(self.id).prev())
    }

    pub fn down(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.arena.get(self.id).down())
    }

    pub fn up(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.arena.get(self.id).up())
    }

    fn link(&self, id: Option<NodeId>) -> Option<NodeRef<'a, T>> {
        id.map(|id| NodeRef::new(self.arena, id))
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "NodeRef({}, {:?})", self.id, value),
            None => write!(f, "NodeRef({}, sentinel)", self.id),
        }
    }
}
