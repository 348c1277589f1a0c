//! Ordered child collections with a single-parent invariant.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Rejected, TableError};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a table, row or cell. Unique for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity plus the back-reference to the owning container.
///
/// Only this crate creates or changes one. A clone is a new element: it
/// gets a fresh identity and no parent.
#[derive(Debug, PartialEq, Eq)]
pub struct ElementBase {
    id: ElementId,
    parent: Option<ElementId>,
}

impl Clone for ElementBase {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl ElementBase {
    pub(crate) fn new() -> Self {
        Self {
            id: ElementId::next(),
            parent: None,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ElementId>) {
        self.parent = parent;
    }
}

pub(crate) mod sealed {
    use super::ElementBase;

    /// Proof of being inside the crate; cannot be built elsewhere.
    pub struct Token(pub(crate) ());

    /// Write access to identity and parent, kept inside the crate.
    pub trait Sealed {
        fn base_mut(&mut self, token: Token) -> &mut ElementBase;
    }
}

use sealed::{Sealed, Token};

/// An element that can live in an [`ItemCollection`].
///
/// Implemented by tables, rows and cells only.
pub trait Parented: Sealed {
    fn base(&self) -> &ElementBase;

    fn element_id(&self) -> ElementId {
        self.base().id()
    }

    fn parent(&self) -> Option<ElementId> {
        self.base().parent()
    }
}

/// Ordered children of one container.
///
/// Items are appended with [`add`](Self::add), which refuses items that
/// already have a parent, and leave through [`remove`](Self::remove), which
/// hands them back detached. Removal marks the owner's layout as stale
/// until the next render.
#[derive(Debug)]
pub struct ItemCollection<T> {
    owner: ElementId,
    items: Vec<T>,
    needs_layout: bool,
}

impl<T: Parented> ItemCollection<T> {
    pub fn new(owner: ElementId) -> Self {
        Self {
            owner,
            items: Vec::new(),
            needs_layout: false,
        }
    }

    pub fn owner(&self) -> ElementId {
        self.owner
    }

    /// Append `item` and make this collection's owner its parent. An item
    /// that already has a parent is handed back inside the error.
    pub fn add(&mut self, mut item: T) -> Result<(), Rejected<T>> {
        if let Some(parent) = item.parent() {
            let error = TableError::AlreadyParented {
                element: item.element_id(),
                parent,
            };
            return Err(Rejected { error, item });
        }

        item.base_mut(Token(())).set_parent(Some(self.owner));
        self.items.push(item);
        Ok(())
    }

    /// Append an item created by this crate that cannot have a parent yet.
    pub(crate) fn adopt(&mut self, mut item: T) {
        debug_assert!(item.parent().is_none(), "adopted item already has a parent");
        item.base_mut(Token(())).set_parent(Some(self.owner));
        self.items.push(item);
    }

    /// Detach the first item with identity `id`. Returns `None` if no such
    /// item is in the collection.
    pub fn remove(&mut self, id: ElementId) -> Option<T> {
        let index = self.position(id)?;
        let mut item = self.items.remove(index);
        item.base_mut(Token(())).set_parent(None);

        self.needs_layout = true;
        log::debug!("[collection] removed {id} from {}", self.owner);

        Some(item)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn at(&self, index: usize) -> Result<&T, TableError> {
        let count = self.items.len();
        self.items
            .get(index)
            .ok_or_else(|| TableError::out_of_range(index, count))
    }

    /// Mutable access to one item. See [`ItemMut`].
    pub fn at_mut(&mut self, index: usize) -> Result<ItemMut<'_, T>, TableError> {
        let count = self.items.len();
        let owner = self.owner;
        let item = self
            .items
            .get_mut(index)
            .ok_or_else(|| TableError::out_of_range(index, count))?;
        Ok(ItemMut { item, owner })
    }

    pub fn position(&self, id: ElementId) -> Option<usize> {
        self.items.iter().position(|item| item.element_id() == id)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Whether an item was removed since the owner last rendered.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub(crate) fn clear_layout_flag(&mut self) {
        self.needs_layout = false;
    }

    /// Make the owner the parent of every item again, after items may have
    /// been swapped in through mutable access.
    pub(crate) fn reclaim(&mut self) {
        let owner = self.owner;
        for item in &mut self.items {
            item.base_mut(Token(())).set_parent(Some(owner));
        }
    }

    /// Copy of this collection for a new owner. Items are cloned, so each
    /// copy has its own identity, and all of them are parented to `owner`.
    pub(crate) fn clone_for(&self, owner: ElementId) -> Self
    where
        T: Clone,
    {
        let mut copy = Self {
            owner,
            items: self.items.clone(),
            needs_layout: self.needs_layout,
        };
        copy.reclaim();
        copy
    }
}

impl<'a, T: Parented> IntoIterator for &'a ItemCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mutable borrow of an item in an [`ItemCollection`].
///
/// Whatever sits in the slot when the borrow ends is parented to the
/// collection's owner, so swapping or replacing through it cannot leave an
/// item that does not know its container.
pub struct ItemMut<'a, T: Parented> {
    item: &'a mut T,
    owner: ElementId,
}

impl<T: Parented> Deref for ItemMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.item
    }
}

impl<T: Parented> DerefMut for ItemMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.item
    }
}

impl<T: Parented> Drop for ItemMut<'_, T> {
    fn drop(&mut self) {
        self.item.base_mut(Token(())).set_parent(Some(self.owner));
    }
}
