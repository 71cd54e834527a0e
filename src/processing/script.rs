/// Scripted progress sequence for the processing stage
///
/// The stage walks through four named phases, each with a fixed wall-clock
/// duration and a fixed target percentage. A single timer drives the whole
/// sequence: every tick interpolates the displayed value toward the current
/// phase's target, so progress is monotonic by construction and lands on
/// exactly 100 when the last phase ends. Only then is the service call
/// allowed to go out.

use std::time::Duration;

/// Interval between progress ticks
pub const TICK: Duration = Duration::from_millis(50);

/// One cosmetic phase of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Analyzing,
    Generating,
    Creating,
    Finalizing,
}

impl Phase {
    /// Short label for the phase list
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Analyzing => "Analyzing Images",
            Phase::Generating => "Generating Content",
            Phase::Creating => "Building Presentation",
            Phase::Finalizing => "Finalizing",
        }
    }

    /// One-line description shown under the label
    pub fn description(&self) -> &'static str {
        match self {
            Phase::Analyzing => "AI is analyzing your project photos",
            Phase::Generating => "Creating slide content and descriptions",
            Phase::Creating => "Assembling presentation slides",
            Phase::Finalizing => "Preparing your presentation for download",
        }
    }
}

/// Duration and progress target of one phase
#[derive(Debug, Clone, Copy)]
pub struct PhaseSpec {
    pub phase: Phase,
    pub duration: Duration,
    /// Progress value the phase interpolates toward (0-100)
    pub target: f32,
}

impl PhaseSpec {
    /// Number of timer ticks this phase spans
    fn ticks(&self) -> u32 {
        (self.duration.as_millis() / TICK.as_millis()).max(1) as u32
    }
}

/// The fixed sequence: durations and targets match the product script
pub const PHASES: [PhaseSpec; 4] = [
    PhaseSpec {
        phase: Phase::Analyzing,
        duration: Duration::from_millis(2000),
        target: 25.0,
    },
    PhaseSpec {
        phase: Phase::Generating,
        duration: Duration::from_millis(3000),
        target: 50.0,
    },
    PhaseSpec {
        phase: Phase::Creating,
        duration: Duration::from_millis(2500),
        target: 75.0,
    },
    PhaseSpec {
        phase: Phase::Finalizing,
        duration: Duration::from_millis(1500),
        target: 100.0,
    },
];

/// Interpolating walker over [`PHASES`], advanced once per tick
///
/// Progress is derived from an integer tick counter rather than repeated
/// float addition, so every phase ends on its exact target value.
#[derive(Debug, Clone)]
pub struct ProgressScript {
    phase_index: usize,
    tick_in_phase: u32,
    progress: f32,
}

impl ProgressScript {
    /// Start the sequence at the first phase with zero progress
    pub fn new() -> Self {
        Self {
            phase_index: 0,
            tick_in_phase: 0,
            progress: 0.0,
        }
    }

    /// Progress value the current phase started from
    fn phase_start(&self) -> f32 {
        if self.phase_index == 0 {
            0.0
        } else {
            PHASES[self.phase_index - 1].target
        }
    }

    /// Advance one tick. No-op once the sequence has finished.
    pub fn tick(&mut self) {
        if self.is_finished() {
            return;
        }

        let spec = &PHASES[self.phase_index];
        let total = spec.ticks();
        self.tick_in_phase += 1;

        if self.tick_in_phase >= total {
            // Phase complete: land exactly on the target and move on
            self.progress = spec.target;
            self.phase_index += 1;
            self.tick_in_phase = 0;
        } else {
            let start = self.phase_start();
            let fraction = self.tick_in_phase as f32 / total as f32;
            self.progress = start + (spec.target - start) * fraction;
        }
    }

    /// Current displayed progress, 0-100
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Phase currently running, or `None` once the sequence is done
    pub fn current_phase(&self) -> Option<Phase> {
        PHASES.get(self.phase_index).map(|spec| spec.phase)
    }

    /// Index of the running phase (== PHASES.len() when finished)
    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    /// True once all four phases have reached their targets
    pub fn is_finished(&self) -> bool {
        self.phase_index >= PHASES.len()
    }
}

impl Default for ProgressScript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic_and_ends_at_exactly_100() {
        let mut script = ProgressScript::new();
        let mut last = script.progress();
        let mut ticks = 0;

        while !script.is_finished() {
            script.tick();
            assert!(
                script.progress() >= last,
                "progress went backwards: {} -> {}",
                last,
                script.progress()
            );
            last = script.progress();
            ticks += 1;
            assert!(ticks < 10_000, "script never finished");
        }

        assert_eq!(script.progress(), 100.0);
        assert!(script.current_phase().is_none());
    }

    #[test]
    fn test_phases_run_in_order() {
        let mut script = ProgressScript::new();
        let mut seen = vec![script.current_phase().unwrap()];

        while !script.is_finished() {
            script.tick();
            if let Some(phase) = script.current_phase() {
                if *seen.last().unwrap() != phase {
                    seen.push(phase);
                }
            }
        }

        assert_eq!(
            seen,
            vec![
                Phase::Analyzing,
                Phase::Generating,
                Phase::Creating,
                Phase::Finalizing
            ]
        );
    }

    #[test]
    fn test_each_phase_stops_at_its_target() {
        let mut script = ProgressScript::new();

        // Run out the first phase: 2000ms at 50ms ticks = 40 ticks
        for _ in 0..40 {
            assert!(script.progress() <= 25.0);
            script.tick();
        }
        assert_eq!(script.progress(), 25.0);
        assert_eq!(script.current_phase(), Some(Phase::Generating));
    }

    #[test]
    fn test_tick_after_finish_is_a_noop() {
        let mut script = ProgressScript::new();
        while !script.is_finished() {
            script.tick();
        }
        script.tick();
        script.tick();
        assert_eq!(script.progress(), 100.0);
        assert!(script.is_finished());
    }

    #[test]
    fn test_total_tick_count_matches_the_schedule() {
        // 2000 + 3000 + 2500 + 1500 ms at 50ms per tick = 180 ticks
        let mut script = ProgressScript::new();
        let mut ticks = 0;
        while !script.is_finished() {
            script.tick();
            ticks += 1;
        }
        assert_eq!(ticks, 180);
    }
}
