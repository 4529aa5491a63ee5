use crate::controllers::playback::script::{PlaybackAction, PlaybackScript};
use std::time::Instant;

/// Steps through a script one command at a time.
///
/// At most one command is armed at any moment; it becomes due `delay` after
/// the previous command ran. The host polls with the current time and applies
/// whatever comes back.
#[derive(Debug)]
pub struct PlaybackScheduler {
    script: PlaybackScript,
    next_index: usize,
    pending: Option<(Instant, PlaybackAction)>,
}

impl PlaybackScheduler {
    #[must_use]
    pub fn new(script: PlaybackScript) -> Self {
        let next_index = script.len();

        Self {
            script,
            next_index,
            pending: None,
        }
    }

    /// (Re)starts from the first command.
    pub fn start(&mut self, now: Instant) {
        self.next_index = 0;
        self.pending = None;
        self.arm(now);

        log::info!("playback started with {} commands", self.script.len());
    }

    /// Returns the armed action if it is due, and arms the next one.
    pub fn poll(&mut self, now: Instant) -> Option<PlaybackAction> {
        let (due, action) = self.pending?;

        if now < due {
            return None;
        }

        self.pending = None;
        log::info!("playback step {}/{}: {}", self.next_index, self.script.len(), action);
        self.arm(now);

        Some(action)
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.map(|(due, _)| due)
    }

    /// Drops the armed command and everything after it. Already applied
    /// actions stay applied.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::info!("playback cancelled");
        }

        self.next_index = self.script.len();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pending.is_none() && self.next_index >= self.script.len()
    }

    fn arm(&mut self, now: Instant) {
        let Some(command) = self.script.commands().get(self.next_index) else {
            return;
        };

        self.pending = Some((now + command.delay, command.action));
        self.next_index += 1;
    }
}
