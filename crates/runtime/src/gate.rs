//! Single-slot latch that serializes ball input against its presentation.

/// Closed after every accepted ball until the frontend has finished showing
/// it. While closed, further ball submissions are rejected.
#[derive(Debug, Default)]
pub struct InputGate {
    held: bool,
}

impl InputGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Closes the gate. Returns false if it was already closed.
    pub fn try_acquire(&mut self) -> bool {
        !std::mem::replace(&mut self.held, true)
    }

    /// Opens the gate. Releasing an open gate is a no-op.
    pub fn release(&mut self) {
        self.held = false;
    }
}
