use core::time::Duration;

/// Where the sequencer is in its cycle through the shape catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Not started yet, stopped, or the catalog is empty.
    Idle,
    /// Holding the shape at this index.
    Showing(usize),
    /// Swarm is being retargeted from one shape to the next.
    Transitioning { from: usize, to: usize },
}

/// Cycles through `shape_count` shapes, advancing when a shape's time is up.
///
/// The sequencer only tracks indices and elapsed time; the owner performs the
/// reconciliation between [`begin_transition`](Self::begin_transition) and
/// [`complete_transition`](Self::complete_transition).
#[derive(Debug, Clone)]
pub struct ShapeSequencer {
    shape_count: usize,
    state: SequencerState,
    elapsed: Duration,
}

impl ShapeSequencer {
    pub fn new(shape_count: usize) -> Self {
        Self {
            shape_count,
            state: SequencerState::Idle,
            elapsed: Duration::ZERO,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Index of the shape currently shown, if any
    pub fn current(&self) -> Option<usize> {
        match self.state {
            SequencerState::Showing(index) => Some(index),
            _ => None,
        }
    }

    /// Enters `Showing(0)` and returns 0, or stays idle for an empty catalog.
    pub fn start(&mut self) -> Option<usize> {
        self.elapsed = Duration::ZERO;
        if self.shape_count == 0 {
            self.state = SequencerState::Idle;
            return None;
        }
        self.state = SequencerState::Showing(0);
        Some(0)
    }

    /// Moves from `Showing(i)` to `Transitioning` and returns the next index.
    pub fn begin_transition(&mut self) -> Option<usize> {
        let SequencerState::Showing(from) = self.state else {
            return None;
        };
        let to = (from + 1) % self.shape_count;
        self.state = SequencerState::Transitioning { from, to };
        Some(to)
    }

    pub fn complete_transition(&mut self) {
        if let SequencerState::Transitioning { to, .. } = self.state {
            self.state = SequencerState::Showing(to);
            self.elapsed = Duration::ZERO;
        }
    }

    /// Adds `dt` to the logical clock of the current shape.
    ///
    /// For hosts without a timer of their own that advance time per frame;
    /// a host with a real timer calls `begin_transition` when it fires.
    ///
    /// Returns true once the shape has been shown for `shape_duration`; the
    /// clock restarts from zero, so a long `dt` triggers one transition only.
    pub fn elapse(&mut self, dt: Duration, shape_duration: Duration) -> bool {
        if !matches!(self.state, SequencerState::Showing(_)) {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= shape_duration {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    pub fn stop(&mut self) {
        self.state = SequencerState::Idle;
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let sequencer = ShapeSequencer::new(3);
        assert_eq!(sequencer.state(), SequencerState::Idle);
        assert_eq!(sequencer.current(), None);
    }

    #[test]
    fn test_cycles_through_shapes() {
        let mut sequencer = ShapeSequencer::new(3);
        assert_eq!(sequencer.start(), Some(0));

        let mut shown = [0usize; 7];
        for slot in shown.iter_mut().skip(1) {
            let next = sequencer.begin_transition().unwrap();
            sequencer.complete_transition();
            *slot = next;
        }

        assert_eq!(shown, [0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(sequencer.state(), SequencerState::Showing(0));
    }

    #[test]
    fn test_transitioning_state() {
        let mut sequencer = ShapeSequencer::new(2);
        sequencer.start();

        assert_eq!(sequencer.begin_transition(), Some(1));
        assert_eq!(
            sequencer.state(),
            SequencerState::Transitioning { from: 0, to: 1 }
        );
        // Already transitioning
        assert_eq!(sequencer.begin_transition(), None);

        sequencer.complete_transition();
        assert_eq!(sequencer.current(), Some(1));
    }

    #[test]
    fn test_empty_catalog_stays_idle() {
        let mut sequencer = ShapeSequencer::new(0);
        assert_eq!(sequencer.start(), None);
        assert_eq!(sequencer.begin_transition(), None);
        assert!(!sequencer.elapse(Duration::from_secs(10), Duration::from_secs(1)));
    }

    #[test]
    fn test_elapse_fires_after_duration() {
        let mut sequencer = ShapeSequencer::new(5);
        sequencer.start();
        let duration = Duration::from_millis(2000);

        assert!(!sequencer.elapse(Duration::from_millis(1500), duration));
        assert!(sequencer.elapse(Duration::from_millis(500), duration));
        // Clock restarted
        assert!(!sequencer.elapse(Duration::from_millis(1999), duration));
        assert!(sequencer.elapse(Duration::from_millis(10_000), duration));
        assert!(!sequencer.elapse(Duration::ZERO, duration));
    }

    #[test]
    fn test_stop_returns_to_idle() {
        let mut sequencer = ShapeSequencer::new(2);
        sequencer.start();
        sequencer.stop();

        assert_eq!(sequencer.state(), SequencerState::Idle);
        assert_eq!(sequencer.begin_transition(), None);
        assert!(!sequencer.elapse(Duration::from_secs(5), Duration::from_secs(1)));
    }
}
