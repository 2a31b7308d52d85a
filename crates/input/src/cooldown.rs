//! Cooldown gate: at most one accepted direction per window.
//!
//! The gate is armed on acceptance and disarmed once `window_ms` of elapsed
//! time has been reported through [`CooldownGate::update`].

#[derive(Debug, Clone)]
pub struct CooldownGate {
    window_ms: u32,
    remaining_ms: u32,
}

impl CooldownGate {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            remaining_ms: 0,
        }
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    pub fn is_active(&self) -> bool {
        self.remaining_ms > 0
    }

    /// Accept an emission if the gate is open, arming it for a full window.
    pub fn try_accept(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.remaining_ms = self.window_ms;
        true
    }

    pub fn update(&mut self, elapsed_ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
    }

    pub fn reset(&mut self) {
        self.remaining_ms = 0;
    }
}
