//! The hero's phone demo: ticks off a routine step by step, celebrates,
//! shares, shows the feed, then starts over.
use std::time::Duration;

/// One product in the demo routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutineStep {
    pub product: &'static str,
    pub frequency: &'static str,
}

pub const HERO_STEPS: &[RoutineStep] = &[
    RoutineStep {
        product: "Banila Co Clean It Zero",
        frequency: "Daily",
    },
    RoutineStep {
        product: "La Roche-Posay Cleanser",
        frequency: "Daily",
    },
    RoutineStep {
        product: "COSRX Snail Mucin Essence",
        frequency: "Daily",
    },
    RoutineStep {
        product: "The Ordinary Niacinamide",
        frequency: "Daily",
    },
    RoutineStep {
        product: "Laneige Sleeping Mask",
        frequency: "Tue/Thu/Sat",
    },
];

const FIRST_CHECK: Duration = Duration::from_millis(1200);
const NEXT_CHECK: Duration = Duration::from_millis(800);
const ALL_CHECKED: Duration = Duration::from_millis(600);
const CELEBRATION: Duration = Duration::from_millis(2200);
const SHARE: Duration = Duration::from_millis(3000);
const FEED: Duration = Duration::from_millis(4000);
const RESETTING: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoPhase {
    /// `done` steps of the routine are ticked.
    Checking { done: usize },
    Celebration,
    Share,
    Feed,
    Resetting,
}

#[derive(Debug)]
pub struct DemoSequence {
    steps: usize,
    phase: DemoPhase,
}

impl DemoSequence {
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            phase: DemoPhase::Checking { done: 0 },
        }
    }

    pub fn phase(&self) -> DemoPhase {
        self.phase
    }

    /// How long the current phase is shown before `advance` is due.
    pub fn delay(&self) -> Duration {
        match self.phase {
            DemoPhase::Checking { done } if done >= self.steps => ALL_CHECKED,
            DemoPhase::Checking { done: 0 } => FIRST_CHECK,
            DemoPhase::Checking { .. } => NEXT_CHECK,
            DemoPhase::Celebration => CELEBRATION,
            DemoPhase::Share => SHARE,
            DemoPhase::Feed => FEED,
            DemoPhase::Resetting => RESETTING,
        }
    }

    pub fn advance(&mut self) -> DemoPhase {
        self.phase = match self.phase {
            DemoPhase::Checking { done } if done >= self.steps => DemoPhase::Celebration,
            DemoPhase::Checking { done } => DemoPhase::Checking { done: done + 1 },
            DemoPhase::Celebration => DemoPhase::Share,
            DemoPhase::Share => DemoPhase::Feed,
            DemoPhase::Feed => DemoPhase::Resetting,
            DemoPhase::Resetting => DemoPhase::Checking { done: 0 },
        };
        self.phase
    }

    /// Tick state of every step. Everything stays ticked until the sequence
    /// restarts.
    pub fn checked(&self) -> Vec<bool> {
        match self.phase {
            DemoPhase::Checking { done } => (0..self.steps).map(|i| i < done).collect(),
            _ => vec![true; self.steps],
        }
    }

    /// Runs `transitions` phase changes, sleeping for each phase's delay and
    /// handing every new phase to `on_phase`.
    pub async fn play<F>(&mut self, transitions: usize, mut on_phase: F)
    where
        F: FnMut(DemoPhase),
    {
        for _ in 0..transitions {
            tokio::time::sleep(self.delay()).await;
            on_phase(self.advance());
        }
    }
}

impl Default for DemoSequence {
    fn default() -> Self {
        Self::new(HERO_STEPS.len())
    }
}
