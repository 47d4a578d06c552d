//! The deduplicating input table.
//!
//! An insertion-ordered map from [`BuilderArg`] to [`CallArg`]. Values live
//! in an arena indexed by first-insertion order; a hash index maps each key
//! to its slot. Re-inserting a key replaces the stored value but never moves
//! it, so an `Argument::Input(i)` handed out earlier stays valid.
//!
//! [`InputTable::checkpoint`] opens a rollback point. While one is open,
//! replaced values are kept in an undo log, so [`InputTable::rollback`]
//! costs only as much as the changes made since the checkpoint.

use crate::transaction::argument::{BuilderArg, CallArg};
use std::collections::HashMap;
use tracing::trace;

/// Insertion-ordered, deduplicating storage for transaction inputs.
#[derive(Debug, Clone, Default)]
pub struct InputTable {
    keys: Vec<BuilderArg>,
    values: Vec<CallArg>,
    index: HashMap<BuilderArg, usize>,
    /// Values replaced while a checkpoint is open, oldest first.
    undo: Vec<(usize, CallArg)>,
    open_checkpoints: usize,
}

/// A rollback point returned by [`InputTable::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Checkpoint {
    len: usize,
    undo_len: usize,
}

impl InputTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key` and returns its slot.
    ///
    /// A new key gets the next slot. An existing key keeps its slot and the
    /// stored value is replaced.
    pub fn insert(&mut self, key: BuilderArg, value: CallArg) -> usize {
        if let Some(&slot) = self.index.get(&key) {
            trace!(slot, "input already present, replacing value");
            let old = std::mem::replace(&mut self.values[slot], value);
            if self.open_checkpoints > 0 {
                self.undo.push((slot, old));
            }
            return slot;
        }
        let slot = self.values.len();
        self.index.insert(key.clone(), slot);
        self.keys.push(key);
        self.values.push(value);
        slot
    }

    /// Opens a rollback point. Every checkpoint must be closed with
    /// [`commit`](Self::commit) or [`rollback`](Self::rollback), innermost
    /// first.
    pub fn checkpoint(&mut self) -> Checkpoint {
        self.open_checkpoints += 1;
        Checkpoint {
            len: self.values.len(),
            undo_len: self.undo.len(),
        }
    }

    /// Keeps every change made since `checkpoint`.
    pub fn commit(&mut self, _checkpoint: Checkpoint) {
        self.close();
    }

    /// Undoes every insert and replacement made since `checkpoint`.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        while self.undo.len() > checkpoint.undo_len {
            if let Some((slot, old)) = self.undo.pop() {
                self.values[slot] = old;
            }
        }
        for key in self.keys.drain(checkpoint.len..) {
            self.index.remove(&key);
        }
        self.values.truncate(checkpoint.len);
        self.close();
    }

    // An inner commit keeps its undo entries; an enclosing rollback still
    // needs them.
    fn close(&mut self) {
        self.open_checkpoints = self.open_checkpoints.saturating_sub(1);
        if self.open_checkpoints == 0 {
            self.undo.clear();
        }
    }

    /// Returns the slot and current value stored under `key`.
    pub fn get(&self, key: &BuilderArg) -> Option<(usize, &CallArg)> {
        self.index.get(key).map(|&slot| (slot, &self.values[slot]))
    }

    /// Returns the value at `slot`.
    pub fn get_index(&self, slot: usize) -> Option<&CallArg> {
        self.values.get(slot)
    }

    /// The key that first claimed `slot`.
    pub fn key_at(&self, slot: usize) -> Option<&BuilderArg> {
        self.keys.get(slot)
    }

    /// Returns the number of distinct inputs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the current values in slot order.
    pub fn values(&self) -> impl Iterator<Item = &CallArg> {
        self.values.iter()
    }

    /// Consumes the table, returning the values in slot order.
    pub fn into_values(self) -> Vec<CallArg> {
        self.values
    }
}
