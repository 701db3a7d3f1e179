//! Generational slot arena.
//!
//! Every value pushed into an [`Arena`] is addressed by an [`IndexSlot`], a
//! `Copy` key made of a slot index and the generation the slot had when the
//! value was inserted. Removing a value vacates the slot and bumps its
//! generation, so any key still naming the old value is detectably stale.
//!
//! Accessors come in two flavours:
//! - [`Arena::get`] / [`Arena::get_mut`] / [`Arena::remove`] treat a stale key
//!   as a programming error and panic.
//! - [`Arena::try_get`] / [`Arena::try_get_mut`] / [`Arena::try_remove`]
//!   return `None` instead.

use crate::profiling::profile_function;
use std::num::NonZeroU64;

/// Generational key into an [`Arena`].
///
/// Packs the generation in the upper 32 bits and the slot index in the lower
/// 32 bits, offset by one so the whole key is never zero and
/// `Option<IndexSlot>` stays eight bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexSlot(NonZeroU64);

impl IndexSlot {
    /// Highest generation a slot reaches; a slot removed at this generation
    /// is retired instead of reused.
    pub const MAX_GENERATION: u32 = u32::MAX - 1;

    pub fn new(generation: u32, idx: u32) -> Self {
        assert!(
            generation <= Self::MAX_GENERATION,
            "generation {generation} out of range"
        );
        let packed = ((generation as u64) << 32) | idx as u64;
        Self(NonZeroU64::MIN.saturating_add(packed))
    }

    pub fn generation(&self) -> u32 {
        ((self.0.get() - 1) >> 32) as u32
    }

    pub fn index(&self) -> u32 {
        ((self.0.get() - 1) & u32::MAX as u64) as u32
    }
}

enum SlotState<T> {
    Occupied(T),
    Vacant,
}

struct Entry<T> {
    generation: u32,
    state: SlotState<T>,
}

/// Slot storage with generation checks on every access.
pub struct Arena<T> {
    entries: Vec<Entry<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Insert a value, reusing a vacated slot when one is available.
    pub fn push(&mut self, data: T) -> IndexSlot {
        profile_function!();
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            let entry = &mut self.entries[idx as usize];
            entry.state = SlotState::Occupied(data);
            IndexSlot::new(entry.generation, idx)
        } else {
            let idx = self.entries.len() as u32;
            self.entries.push(Entry {
                generation: 0,
                state: SlotState::Occupied(data),
            });
            IndexSlot::new(0, idx)
        }
    }

    /// Whether `idx` still names a live value.
    pub fn contains(&self, idx: IndexSlot) -> bool {
        self.try_get(idx).is_some()
    }

    pub fn get(&self, idx: IndexSlot) -> &T {
        match self.try_get(idx) {
            Some(data) => data,
            None => panic!("invalid generation, use after free! ({idx:?})"),
        }
    }

    pub fn get_mut(&mut self, idx: IndexSlot) -> &mut T {
        match self.try_get_mut(idx) {
            Some(data) => data,
            None => panic!("invalid generation, use after free! ({idx:?})"),
        }
    }

    pub fn try_get(&self, idx: IndexSlot) -> Option<&T> {
        let entry = self.entries.get(idx.index() as usize)?;
        match &entry.state {
            SlotState::Occupied(data) if entry.generation == idx.generation() => Some(data),
            _ => None,
        }
    }

    pub fn try_get_mut(&mut self, idx: IndexSlot) -> Option<&mut T> {
        let entry = self.entries.get_mut(idx.index() as usize)?;
        match &mut entry.state {
            SlotState::Occupied(data) if entry.generation == idx.generation() => Some(data),
            _ => None,
        }
    }

    /// Remove a value, panicking if `idx` is stale.
    pub fn remove(&mut self, idx: IndexSlot) -> T {
        match self.try_remove(idx) {
            Some(data) => data,
            None => panic!("invalid generation, use after free! ({idx:?})"),
        }
    }

    pub fn try_remove(&mut self, idx: IndexSlot) -> Option<T> {
        profile_function!();
        let index = idx.index();
        let entry = self.entries.get_mut(index as usize)?;
        if entry.generation != idx.generation() {
            return None;
        }
        match std::mem::replace(&mut entry.state, SlotState::Vacant) {
            SlotState::Occupied(data) => {
                if entry.generation < IndexSlot::MAX_GENERATION {
                    entry.generation += 1;
                    self.free.push(index);
                } else {
                    tracing::debug!("Retiring arena slot {} after its last generation", index);
                }
                self.len -= 1;
                Some(data)
            }
            SlotState::Vacant => None,
        }
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate live values in slot order together with their keys.
    pub fn iter(&self) -> impl Iterator<Item = (IndexSlot, &T)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| match &entry.state {
                SlotState::Occupied(data) => {
                    Some((IndexSlot::new(entry.generation, idx as u32), data))
                }
                SlotState::Vacant => None,
            })
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_eq_size!(IndexSlot, Option<IndexSlot>);
