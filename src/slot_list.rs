//! SlotList: singly-linked sequence over a slot arena.

use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<DefaultKey>,
}

/// Singly-linked list with tracked head and tail.
///
/// Nodes live in a slot arena and link forward through `next`; there
/// are no backward links. Front operations and `push_back` are O(1);
/// `pop_back` walks forward to the penultimate node and indexed
/// operations walk from the head.
pub struct SlotList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl<T> SlotList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push_front(&mut self, value: T) {
        let k = self.nodes.insert(Node {
            value,
            next: self.head,
        });
        self.head = Some(k);
        if self.tail.is_none() {
            self.tail = Some(k);
        }
    }

    pub fn push_back(&mut self, value: T) {
        let k = self.nodes.insert(Node { value, next: None });
        match self.tail {
            Some(t) => self.nodes[t].next = Some(k),
            None => self.head = Some(k),
        }
        self.tail = Some(k);
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|k| &self.nodes[k].value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|k| &self.nodes[k].value)
    }

    /// Remove and return the first element. Clearing the last element
    /// resets both head and tail.
    pub fn pop_front(&mut self) -> Option<T> {
        let k = self.head?;
        let node = self.nodes.remove(k)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(node.value)
    }

    /// Remove and return the last element. There are no backward links,
    /// so the penultimate node is found by a forward walk: O(n).
    pub fn pop_back(&mut self) -> Option<T> {
        let t = self.tail?;
        match self.penultimate() {
            Some(p) => {
                self.nodes[p].next = None;
                self.tail = Some(p);
            }
            None => {
                // Single-element list.
                self.head = None;
                self.tail = None;
            }
        }
        self.nodes.remove(t).map(|n| n.value)
    }

    /// Node just before the tail, `None` for lists shorter than two.
    fn penultimate(&self) -> Option<DefaultKey> {
        let tail = self.tail?;
        let mut cur = self.head?;
        if cur == tail {
            return None;
        }
        while let Some(next) = self.nodes[cur].next {
            if next == tail {
                return Some(cur);
            }
            cur = next;
        }
        None
    }

    /// Arena key of the node at `index`, walking from the head.
    fn node_at(&self, index: usize) -> Option<DefaultKey> {
        if index >= self.len() {
            return None;
        }
        let mut cur = self.head?;
        for _ in 0..index {
            cur = self.nodes[cur].next?;
        }
        Some(cur)
    }

    /// 0-based indexed read, O(index). `None` when `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(|k| &self.nodes[k].value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let k = self.node_at(index)?;
        Some(&mut self.nodes[k].value)
    }

    /// Insert `value` at `index`; the valid range is `[0, len()]`
    /// inclusive. Index 0 is a push_front, index `len()` a push_back,
    /// anything else links the new node after the node at `index - 1`.
    /// An out-of-range index returns `Err(value)` without mutation.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), T> {
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len() {
            self.push_back(value);
            return Ok(());
        }
        let Some(prev) = self.node_at(index - 1) else {
            return Err(value);
        };
        let k = self.nodes.insert(Node {
            value,
            next: self.nodes[prev].next,
        });
        self.nodes[prev].next = Some(k);
        Ok(())
    }

    /// Remove and return the element at `index`; the valid range is
    /// `[0, len() - 1]`. Index 0 is a pop_front and the last index a
    /// pop_back; anything else is spliced out after the node at
    /// `index - 1`. An out-of-range index returns `None` without
    /// mutation.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        if index == 0 {
            return self.pop_front();
        }
        if index == self.len() - 1 {
            return self.pop_back();
        }
        let prev = self.node_at(index - 1)?;
        let target = self.nodes[prev].next?;
        self.nodes[prev].next = self.nodes[target].next;
        self.nodes.remove(target).map(|n| n.value)
    }

    /// Visit elements in list order, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cur: self.head,
        }
    }

    /// Consume the list, passing each remaining value to `cleanup` in
    /// list order. Each node is taken out of the arena as an owned value
    /// and its next link read before the value is handed over, so the
    /// walk never touches a released node.
    pub fn dispose<F>(mut self, mut cleanup: F)
    where
        F: FnMut(T),
    {
        let mut cur = self.head;
        while let Some(k) = cur {
            let node = match self.nodes.remove(k) {
                Some(n) => n,
                None => break,
            };
            cur = node.next;
            cleanup(node.value);
        }
        self.head = None;
        self.tail = None;
    }
}

impl<T> Default for SlotList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-order iterator over `SlotList`.
pub struct Iter<'a, T> {
    list: &'a SlotList<T>,
    cur: Option<DefaultKey>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cur?;
        let node = &self.list.nodes[k];
        self.cur = node.next;
        Some(&node.value)
    }
}
