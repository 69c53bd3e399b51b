use std::time::{Duration, Instant};

/// Keeps consecutive terminal frames at least `target_delta_time` apart.
pub struct Pacer {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Pacer {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps off whatever is left of the frame time, returns whether it slept at all.
    pub fn wait(&mut self) -> bool {
        let slept = match self.remaining() {
            Some(remaining) => {
                spin_sleep::sleep(remaining);
                true
            }
            None => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }

    /// Time left until the next frame is due, `None` when already late or never waited before.
    pub fn remaining(&self) -> Option<Duration> {
        let last_instant = self.last_instant?;
        let delta_time = Instant::now() - last_instant;

        self.target_delta_time
            .checked_sub(delta_time)
            .filter(|remaining| !remaining.is_zero())
    }
}
