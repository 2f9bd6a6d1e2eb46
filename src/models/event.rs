//! 编辑模型发出的事件
//!
//! 每个 `EditModel` 持有自己的监听器列表，事件在触发调用内同步分发。

use super::text_change::TextChange;
use crate::core::{Position, Range};
use slotmap::{new_key_type, SlotMap};
use std::fmt;

new_key_type! {
    pub struct ListenerId;
}

/// Where an edit came from. Listeners use it to decide whether to record the change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditSource {
    Type,
    Undo,
    Redo,
    Other(&'static str),
}

impl EditSource {
    /// Undo/redo replays must not be recorded again.
    pub fn records_history(&self) -> bool {
        !matches!(self, EditSource::Undo | EditSource::Redo)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EditSource::Type => "type",
            EditSource::Undo => "undo",
            EditSource::Redo => "redo",
            EditSource::Other(name) => *name,
        }
    }
}

impl fmt::Display for EditSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelEvent {
    TextChange {
        change: TextChange,
        source: EditSource,
    },
    CursorLocate {
        previous: Position,
        position: Position,
    },
    SelectionChange {
        previous: Range,
        current: Range,
        scroll_to_view: bool,
    },
}

pub type Listener = Box<dyn FnMut(&ModelEvent)>;

#[derive(Default)]
pub struct Listeners {
    slots: SlotMap<ListenerId, Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: Listener) -> ListenerId {
        self.slots.insert(listener)
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.slots.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn emit(&mut self, event: &ModelEvent) {
        for listener in self.slots.values_mut() {
            listener(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/event.rs"]
mod tests;
