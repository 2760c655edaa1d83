use std::cmp::Ordering;
use std::sync::Arc;

use crate::comparator::{KeyComparator, NaturalOrder};
use crate::errors::{Error, Result};
use crate::opts::SkipListOptions;
use crate::skiplist::skipnode::{NodeArena, SkipNode};
use crate::skiplist::skipvalue::SkipData;

pub use crate::skiplist::coinflipper::{CoinFlipper, CoinFlipperRand, CoinFlipperScripted};
pub use crate::skiplist::skipiterator::{SkipDrain, SkipIterator};
pub use crate::skiplist::skipnode::{NodeId, NodeRef};

mod coinflipper;
mod dump;
mod skipnode;
mod skipvalue;
mod skipiterator;

pub type Comparator<T> = Arc<dyn KeyComparator<T> + Send + Sync>;

/// Ordered multiset built from a column of sentinels and randomized express lanes.
///
/// Level 0 holds every value. A value inserted with `k` successful coin flips also occupies
/// levels `1..=k`, forming a tower linked by `down`/`up`. The sentinel column always has one
/// spare empty level on top, so `head` sits at level `height` and the highest level holding
/// real nodes is `height - 1`.
///
/// Equal values are kept: every insert builds its own tower, placed after the towers with the
/// same value that are already present.
pub struct SkipList<T> {
    len: usize,
    height: usize,
    max_height: usize,
    // top sentinel, the only entry point for searches
    head: NodeId,
    // level 0 sentinel, its next is the first element
    head_bottom: NodeId,
    arena: NodeArena<T>,
    coin_flipper: Box<dyn CoinFlipper>,
    key_comparator: Comparator<T>,
}

impl<T> SkipList<T> {
    pub fn new(key_comparator: Comparator<T>) -> Self {
        Self::build(key_comparator, Box::new(CoinFlipperRand::new()), SkipListOptions::default().max_height)
    }

    pub fn with_options(key_comparator: Comparator<T>, opts: &SkipListOptions) -> Result<Self> {
        opts.validate()?;
        let coin_flipper = match opts.seed {
            Some(seed) => CoinFlipperRand::seeded(seed),
            None => CoinFlipperRand::new(),
        };
        Ok(Self::build(key_comparator, Box::new(coin_flipper), opts.max_height))
    }

    pub fn with_coin_flipper(key_comparator: Comparator<T>, coin_flipper: Box<dyn CoinFlipper>) -> Self {
        Self::build(key_comparator, coin_flipper, SkipListOptions::default().max_height)
    }

    fn build(key_comparator: Comparator<T>, coin_flipper: Box<dyn CoinFlipper>, max_height: usize) -> Self {
        let mut arena = NodeArena::new();
        let (head, head_bottom) = Self::init_sentinels(&mut arena);
        SkipList {
            len: 0,
            height: 1,
            max_height,
            head,
            head_bottom,
            arena,
            coin_flipper,
            key_comparator,
        }
    }

    // level 0 sentinel plus the spare level 1 sentinel above it
    fn init_sentinels(arena: &mut NodeArena<T>) -> (NodeId, NodeId) {
        let bottom = arena.alloc(SkipNode::new(SkipData::Sentinel));
        let top = arena.alloc(SkipNode::new(SkipData::Sentinel));
        arena.get_mut(top).set_down(Some(bottom));
        arena.get_mut(bottom).set_up(Some(top));
        (top, bottom)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.arena.get(self.head_bottom).next().is_none()
    }

    /// Number of levels able to hold real nodes. 1 for an empty list.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Top sentinel. Diagnostic entry point, it never carries a value.
    pub fn head(&self) -> NodeRef<'_, T> {
        NodeRef::new(&self.arena, self.head)
    }

    /// First element of level 0.
    pub fn front(&self) -> Option<NodeRef<'_, T>> {
        self.arena.get(self.head_bottom).next().map(|id| NodeRef::new(&self.arena, id))
    }

    // number of extra levels for a new tower
    fn random_levels(&mut self) -> usize {
        let mut levels = 0;
        while levels + 1 < self.max_height && self.coin_flipper.flip() {
            levels += 1;
        }
        levels
    }

    // grows the sentinel column so that a tower with `levels` express levels fits below the spare
    fn adjust_height(&mut self, levels: usize) {
        while levels >= self.height {
            let sentinel = self.arena.alloc(SkipNode::new(SkipData::Sentinel));
            self.arena.get_mut(sentinel).set_down(Some(self.head));
            self.arena.get_mut(self.head).set_up(Some(sentinel));
            self.head = sentinel;
            self.height += 1;
            debug!("skiplist height grown to {}", self.height);
        }
    }

    // drops empty top levels, keeping one spare and at least height 1
    fn shrink_height(&mut self) {
        while self.height > 1 {
            let Some(below) = self.arena.get(self.head).down() else {
                break;
            };
            if self.arena.get(below).next().is_some() {
                break;
            }
            let old_head = self.head;
            self.head = below;
            self.arena.get_mut(below).set_up(None);
            self.arena.release(old_head);
            self.height -= 1;
            debug!("skiplist height shrunk to {}", self.height);
        }
    }

    fn node_value(&self, id: NodeId) -> &T {
        match self.arena.value(id) {
            Some(value) => value,
            None => panic!("sentinel {} has no value", id),
        }
    }

    //  1 -> 2 -> 3 -> 4 -> 5, target = 3
    // returns the level 0 node right before the first value >= target
    fn search_prev(&self, target: &T) -> NodeId {
        let mut cur = self.head;
        loop {
            while let Some(next) = self.arena.get(cur).next() {
                if self.key_comparator.compare(self.node_value(next), target).is_ge() {
                    break;
                }
                cur = next;
            }

            match self.arena.get(cur).down() {
                Some(down) => cur = down,
                None => return cur,
            }
        }
    }

    fn find_id(&self, key: &T) -> Option<NodeId> {
        if self.is_empty() {
            return None;
        }
        let prev = self.search_prev(key);
        let next = self.arena.get(prev).next()?;
        if self.key_comparator.compare(self.node_value(next), key) == Ordering::Equal {
            Some(next)
        } else {
            None
        }
    }

    /// Leftmost level 0 node equal to `key`.
    pub fn find(&self, key: &T) -> Option<NodeRef<'_, T>> {
        self.find_id(key).map(|id| NodeRef::new(&self.arena, id))
    }

    pub fn get(&self, key: &T) -> Option<&T> {
        self.find_id(key).map(|id| self.node_value(id))
    }

    pub fn contains(&self, key: &T) -> bool {
        self.find_id(key).is_some()
    }

    fn splice_after(&mut self, after: NodeId, data: SkipData<T>) -> NodeId {
        let link = self.arena.alloc(SkipNode::new(data));
        let next = self.arena.get(after).next();

        let node = self.arena.get_mut(link);
        node.set_prev(Some(after));
        node.set_next(next);

        if let Some(next) = next {
            self.arena.get_mut(next).set_prev(Some(link));
        }
        self.arena.get_mut(after).set_next(Some(link));
        link
    }

    pub fn insert(&mut self, value: T) {
        let levels = self.random_levels();
        self.adjust_height(levels);

        // splice points for levels `levels` down to 1, top first
        let mut preds = Vec::with_capacity(levels);
        let mut cur = self.head;
        let mut level = self.height;
        loop {
            while let Some(next) = self.arena.get(cur).next() {
                if self.key_comparator.compare(self.node_value(next), &value).is_gt() {
                    break;
                }
                cur = next;
            }

            if level == 0 {
                break;
            }
            if level <= levels {
                preds.push(cur);
            }
            match self.arena.get(cur).down() {
                Some(down) => {
                    cur = down;
                    level -= 1;
                }
                None => panic!("sentinel column is shorter than height {}", self.height),
            }
        }

        let base = self.splice_after(cur, SkipData::Owned(value));
        let mut below = base;
        for &pred in preds.iter().rev() {
            let node = self.splice_after(pred, SkipData::Tower(base));
            self.arena.get_mut(node).set_down(Some(below));
            self.arena.get_mut(below).set_up(Some(node));
            below = node;
        }

        self.len += 1;
        trace!("inserted tower with {} express levels, height {}, len {}", levels, self.height, self.len);
    }

    fn unlink(&mut self, id: NodeId) {
        let node = self.arena.get(id);
        let (prev, next) = (node.prev(), node.next());
        if let Some(prev) = prev {
            self.arena.get_mut(prev).set_next(next);
        }
        if let Some(next) = next {
            self.arena.get_mut(next).set_prev(prev);
        }
    }

    // removes the whole tower standing on `base`, top level first
    fn erase_tower(&mut self, base: NodeId) -> T {
        let mut tower = vec![base];
        while let Some(up) = self.arena.get(tower[tower.len() - 1]).up() {
            tower.push(up);
        }

        let mut removed = None;
        for &id in tower.iter().rev() {
            self.unlink(id);
            if let Some(value) = self.arena.release(id).into_owned() {
                removed = Some(value);
            }
        }

        self.len -= 1;
        self.shrink_height();
        trace!("removed tower of {} levels, height {}, len {}", tower.len(), self.height, self.len);

        match removed {
            Some(value) => value,
            None => panic!("bottom node {} should own its value", base),
        }
    }

    /// Removes one occurrence of `key`, the leftmost one. Returns None when absent.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let found = self.find_id(key)?;
        Some(self.erase_tower(found))
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        let (head, head_bottom) = Self::init_sentinels(&mut self.arena);
        self.head = head;
        self.head_bottom = head_bottom;
        self.height = 1;
        self.len = 0;
    }

    fn sentinel_at(&self, level: usize) -> Option<NodeId> {
        if level > self.height {
            return None;
        }
        let mut cur = self.head;
        for _ in level..self.height {
            cur = self.arena.get(cur).down()?;
        }
        Some(cur)
    }

    /// Values of one level, left to right. Empty for levels above `height`.
    pub fn level_values(&self, level: usize) -> Vec<&T> {
        let mut values = Vec::new();
        let mut cur = self.sentinel_at(level).and_then(|s| self.arena.get(s).next());
        while let Some(id) = cur {
            values.push(self.node_value(id));
            cur = self.arena.get(id).next();
        }
        values
    }

    /// Every level holding real nodes, level 0 first.
    pub fn levels(&self) -> Vec<Vec<&T>> {
        (0..self.height).map(|level| self.level_values(level)).collect()
    }

    /// Walks the whole structure and reports the first broken invariant.
    pub fn check_invariants(&self) -> Result<()> {
        let head = self.arena.get(self.head);
        if !head.data().is_sentinel() {
            return illegal("head is not a sentinel".to_string());
        }
        if head.up().is_some() {
            return illegal("head.up is assigned".to_string());
        }
        if head.next().is_some() {
            return illegal("spare top level is not empty".to_string());
        }
        if self.arena.get(self.head_bottom).down().is_some() {
            return illegal("head_bottom.down is assigned".to_string());
        }

        // sentinel column, top to bottom
        let mut sentinels = vec![self.head];
        while let Some(down) = self.arena.get(sentinels[sentinels.len() - 1]).down() {
            if !self.arena.is_live(down) {
                return illegal(format!("sentinel down link {} is released", down));
            }
            if self.arena.get(down).up() != Some(sentinels[sentinels.len() - 1]) {
                return illegal(format!("sentinel {} has a broken up link", down));
            }
            sentinels.push(down);
        }
        if sentinels.len() != self.height + 1 {
            return illegal(format!("{} sentinels for height {}", sentinels.len(), self.height));
        }
        if sentinels[sentinels.len() - 1] != self.head_bottom {
            return illegal("sentinel column does not end at head_bottom".to_string());
        }

        let mut nodes = sentinels.len();
        for (depth, &sentinel) in sentinels.iter().enumerate().skip(1) {
            let level = self.height - depth;
            if !self.arena.get(sentinel).data().is_sentinel() || self.arena.get(sentinel).prev().is_some() {
                return illegal(format!("level {} starts with a malformed sentinel", level));
            }
            let count = self.check_level(sentinel, level)?;
            if level == self.height - 1 && level > 0 && count == 0 {
                return illegal(format!("top level {} is empty", level));
            }
            if level == 0 && count != self.len {
                return illegal(format!("level 0 holds {} values, len is {}", count, self.len));
            }
            nodes += count;
        }

        if nodes != self.arena.len_live() {
            return illegal(format!("{} reachable nodes, {} allocated", nodes, self.arena.len_live()));
        }
        Ok(())
    }

    fn check_level(&self, sentinel: NodeId, level: usize) -> Result<usize> {
        let mut count = 0;
        let mut prev = sentinel;
        while let Some(id) = self.arena.get(prev).next() {
            if !self.arena.is_live(id) {
                return illegal(format!("level {} links released node {}", level, id));
            }
            let node = self.arena.get(id);
            if node.prev() != Some(prev) {
                return illegal(format!("node {} at level {} has a broken prev link", id, level));
            }
            if prev != sentinel
                && self.key_comparator.compare(self.node_value(prev), self.node_value(id)).is_gt() {
                return illegal(format!("level {} is out of order at node {}", level, id));
            }
            if let Some(up) = node.up() {
                if !self.arena.is_live(up) || self.arena.get(up).down() != Some(id) {
                    return illegal(format!("node {} at level {} has a broken up link", id, level));
                }
            }

            if level == 0 {
                if node.data().owned().is_none() {
                    return illegal(format!("bottom node {} does not own a value", id));
                }
            } else {
                let Some(down) = node.down() else {
                    return illegal(format!("tower node {} at level {} has no down link", id, level));
                };
                if !self.arena.is_live(down) || self.arena.get(down).up() != Some(id) {
                    return illegal(format!("node {} at level {} has a broken down link", id, level));
                }
                let below_base = self.arena.get(down).data().base().unwrap_or(down);
                if node.data().base() != Some(below_base) {
                    return illegal(format!("tower node {} at level {} skips its base", id, level));
                }
            }

            count += 1;
            prev = id;
        }
        Ok(count)
    }

    pub fn iter(&self) -> SkipIterator<'_, T> {
        SkipIterator::new(&self.arena, self.arena.get(self.head_bottom).next(), self.len)
    }

    pub fn drain(&mut self) -> SkipDrain<'_, T> {
        SkipDrain::new(self)
    }

    // used by drain, removes the first tower
    fn pop_front(&mut self) -> Option<T> {
        let first = self.arena.get(self.head_bottom).next()?;
        Some(self.erase_tower(first))
    }
}

fn illegal<R>(message: String) -> Result<R> {
    Err(Error::IllegalState(message))
}

impl<T: Ord> Default for SkipList<T> {
    fn default() -> Self {
        SkipList::new(Arc::new(NaturalOrder {}))
    }
}

impl<T> Extend<T> for SkipList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
