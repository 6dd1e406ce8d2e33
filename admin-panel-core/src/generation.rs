use std::cell::Cell;

/// Number handed to a request when it is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Per-container request counter. Only the latest ticket is current.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: Cell<u64>,
}

impl RequestGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, making every earlier ticket stale.
    pub fn issue(&self) -> RequestTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        RequestTicket(next)
    }

    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Number of tickets issued so far.
    #[must_use]
    pub fn latest(&self) -> u64 {
        self.latest.get()
    }
}
