use std::sync::Mutex;

/// A media stream whose tracks can be stopped. Stopping must be idempotent.
pub trait MediaStream: Send {
    fn stop_all_tracks(&self);
}

/// Owns the single optional stream handle for a camera device. Replacing or
/// clearing the slot always stops every track of the outgoing stream first,
/// so the hardware is never left engaged behind a dropped handle.
pub struct StreamSlot<S: MediaStream> {
    slot: Mutex<Option<S>>,
}

impl<S: MediaStream> StreamSlot<S> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    pub fn replace(&self, stream: S) {
        let mut slot = self.slot.lock().unwrap();
        if let Some(old) = slot.take() {
            old.stop_all_tracks();
        }
        *slot = Some(stream);
    }

    pub fn clear(&self) {
        if let Some(old) = self.slot.lock().unwrap().take() {
            old.stop_all_tracks();
        }
    }

    pub fn is_active(&self) -> bool {
        self.slot.lock().unwrap().is_some()
    }

    pub fn with_active<T>(&self, f: impl FnOnce(&S) -> T) -> Option<T> {
        self.slot.lock().unwrap().as_ref().map(f)
    }
}

impl<S: MediaStream> Default for StreamSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}
