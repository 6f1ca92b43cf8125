use shared::domain::TICK_BOUND;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    Tick(u8),
    Complete,
}

/// One bounded countdown opened by a coincidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownSession {
    id: u64,
    ticks: u8,
}

impl CountdownSession {
    pub fn new(id: u64) -> Self {
        Self { id, ticks: 0 }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn ticks(&self) -> u8 {
        self.ticks
    }

    /// Advances on a timer firing. The bound is checked before the counter
    /// moves, so the firing after the last tick completes the session.
    pub fn advance(&mut self) -> SessionStep {
        if self.ticks >= TICK_BOUND {
            return SessionStep::Complete;
        }
        self.ticks += 1;
        SessionStep::Tick(self.ticks)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
