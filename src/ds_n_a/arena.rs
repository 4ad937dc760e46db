
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::Index;
use derivative::Derivative;

/// An append-only table of `T`.
///
/// Each allocation is addressed by a [`Handle<T>`], which stays valid for as long as the [`Arena`] lives.
/// There is no way to free an individual item; all items are dropped together with the arena.
pub struct Arena<T> {
    items: Vec<T>,
}
impl<T> Default for Arena<T> {
    /// [`Arena`] is `Default` regardless of whether `T` is `Default`.
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}
impl<T> Arena<T> {
    pub fn alloc(&mut self, item: T) -> Handle<T> {
        let handle = Handle::new(self.items.len());
        self.items.push(item);
        handle
    }

    pub fn get(&self, handle: Handle<T>) -> &T {
        &self.items[handle.idx]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| (Handle::new(idx), item))
    }
}
impl<T> Index<Handle<T>> for Arena<T> {
    type Output = T;
    fn index(&self, handle: Handle<T>) -> &T {
        self.get(handle)
    }
}
impl<T: Debug> Debug for Arena<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// An index into exactly one [`Arena<T>`].
///
/// Caveat: a handle is meaningful solely against the arena that issued it.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = "")
)]
pub struct Handle<T> {
    idx: usize,

    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    _marker: PhantomData<fn() -> T>,
}
impl<T> Handle<T> {
    fn new(idx: usize) -> Self {
        Self { idx, _marker: PhantomData }
    }
    pub fn as_int(&self) -> usize {
        self.idx
    }
}
impl<T> Debug for Handle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_int())
    }
}
