use std::cell::Cell;

/// Which mount is the live one. `unmount` bumps the generation, so an
/// initialisation that is still awaiting the GPU can tell it was cancelled.
#[derive(Debug, Default)]
pub struct MountGeneration {
    current: Cell<u64>,
}

/// Handed to an initialisation when it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountTicket(u64);

impl MountGeneration {
    pub const fn new() -> Self {
        Self {
            current: Cell::new(0),
        }
    }

    /// Start a mount. Any older mount still in flight becomes stale.
    pub fn begin(&self) -> MountTicket {
        self.cancel();
        MountTicket(self.current.get())
    }

    pub fn cancel(&self) {
        self.current.set(self.current.get().wrapping_add(1));
    }

    #[inline]
    pub fn is_current(&self, ticket: MountTicket) -> bool {
        self.current.get() == ticket.0
    }
}
