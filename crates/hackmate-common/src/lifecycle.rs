/// Resources owned by one open dialog, released together once it closes.
///
/// The DOM layer keeps its event listener closures here instead of leaking
/// them, and drops whatever [`close`](Self::close) hands back after the
/// closing callback has returned.
#[derive(Debug)]
pub struct DialogHandles<H> {
    held: Vec<H>,
    closed: bool,
}

impl<H> Default for DialogHandles<H> {
    fn default() -> Self {
        Self {
            held: Vec::new(),
            closed: false,
        }
    }
}

impl<H> DialogHandles<H> {
    /// Keep `handle` until the dialog closes. Once closed, it is dropped at once.
    pub fn hold(&mut self, handle: H) {
        if !self.closed {
            self.held.push(handle);
        }
    }

    pub fn held(&self) -> usize {
        self.held.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Mark the dialog closed and return everything held.
    pub fn close(&mut self) -> Vec<H> {
        self.closed = true;
        std::mem::take(&mut self.held)
    }
}
