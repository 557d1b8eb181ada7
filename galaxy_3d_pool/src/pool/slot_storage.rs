/// Paged slot storage.
///
/// Slots live in fixed-size pages of `1 << page_shift` slots, so an index
/// maps to its page and offset with a shift and a mask. A page reserves its
/// full length when opened and is never reallocated, so growing the storage
/// never moves an existing slot. A bounded pool sizes its single page to the
/// whole pool; a growable pool fills pages one after the other.

use std::ops::{Index, IndexMut};
use super::pool_id::SENTINEL;

/// One storage cell of a pool
pub(crate) struct Slot<T> {
    /// Payload, recycled in place between lives
    pub(crate) object: T,
    /// Current generation while alive, last generation while dormant
    /// (`SENTINEL` if never checked out)
    pub(crate) generation: u32,
    /// Next dormant slot in the free list (meaningless while alive)
    pub(crate) next: u32,
    pub(crate) alive: bool,
}

impl<T> Slot<T> {
    pub(crate) fn is_live(&self, generation: u32) -> bool {
        self.alive && self.generation == generation
    }
}

/// Paged slot container with stable slot addresses
pub(crate) struct SlotStorage<T> {
    pages: Vec<Vec<Slot<T>>>,
    page_shift: u32,
    /// Most slots this storage will ever hold; no page reserves past it
    limit: usize,
    len: usize,
}

impl<T> SlotStorage<T> {
    /// Empty storage with pages of `1 << page_shift` slots
    pub(crate) fn new(page_shift: u32, limit: usize) -> Self {
        debug_assert!(page_shift < u32::BITS, "page shift out of range");
        Self {
            pages: Vec::new(),
            page_shift,
            limit,
            len: 0,
        }
    }

    /// Total slot count across all pages
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_len(&self) -> usize {
        1usize << self.page_shift
    }

    /// Map a global index to (page, offset); `None` when out of bounds
    fn locate(&self, index: u32) -> Option<(usize, usize)> {
        if index as usize >= self.len {
            return None;
        }
        let mask = (1u32 << self.page_shift) - 1;
        Some(((index >> self.page_shift) as usize, (index & mask) as usize))
    }

    pub(crate) fn get(&self, index: u32) -> Option<&Slot<T>> {
        self.locate(index).map(|(page, offset)| &self.pages[page][offset])
    }

    pub(crate) fn get_mut(&mut self, index: u32) -> Option<&mut Slot<T>> {
        self.locate(index).map(|(page, offset)| &mut self.pages[page][offset])
    }

    /// All slots in index order
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Slot<T>> + '_ {
        self.pages.iter().flat_map(|page| page.iter())
    }

    /// All slots in index order
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Slot<T>> + '_ {
        self.pages.iter_mut().flat_map(|page| page.iter_mut())
    }

    /// Thread the free list through every slot in index order
    ///
    /// Marks every slot dormant. Returns the new free-list head.
    pub(crate) fn relink_all(&mut self) -> u32 {
        let len = self.len as u32;
        for (index, slot) in (0u32..).zip(self.iter_mut()) {
            slot.alive = false;
            slot.next = if index + 1 < len { index + 1 } else { SENTINEL };
        }
        if len == 0 { SENTINEL } else { 0 }
    }
}

impl<T: Default> SlotStorage<T> {
    /// Append `additional` dormant slots linked in index order
    ///
    /// Fills the last page before opening new ones. The last new slot links
    /// to `tail`. Returns the global index of the first new slot. The caller
    /// keeps `len + additional` within the storage limit.
    pub(crate) fn push_chunk(&mut self, additional: usize, tail: u32) -> u32 {
        debug_assert!(additional > 0, "empty chunk");
        debug_assert!(self.len + additional <= self.limit, "chunk exceeds storage limit");
        debug_assert!(self.limit <= SENTINEL as usize, "limit exceeds index space");

        let page_len = self.page_len();
        let first = self.len as u32;
        let last = first + (additional as u32 - 1);
        for index in first..=last {
            if self.pages.last().map_or(true, |page| page.len() == page_len) {
                let page_start = self.pages.len() * page_len;
                self.pages.push(Vec::with_capacity(page_len.min(self.limit - page_start)));
            }
            if let Some(page) = self.pages.last_mut() {
                page.push(Slot {
                    object: T::default(),
                    generation: SENTINEL,
                    next: if index < last { index + 1 } else { tail },
                    alive: false,
                });
            }
        }

        self.len += additional;
        first
    }
}

impl<T> Index<u32> for SlotStorage<T> {
    type Output = Slot<T>;

    fn index(&self, index: u32) -> &Slot<T> {
        match self.get(index) {
            Some(slot) => slot,
            None => panic!("slot index {} out of bounds (len = {})", index, self.len),
        }
    }
}

impl<T> IndexMut<u32> for SlotStorage<T> {
    fn index_mut(&mut self, index: u32) -> &mut Slot<T> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => slot,
            None => panic!("slot index {} out of bounds (len = {})", index, len),
        }
    }
}

#[cfg(test)]
#[path = "slot_storage_tests.rs"]
mod tests;
