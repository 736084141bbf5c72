//! Step-list value driver for timed UI choreography.

/// How a step moves the value toward its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    /// Interpolate from the value at step entry to the target over the
    /// step's duration.
    Linear,
    /// Jump to the target at step entry and hold it for the duration.
    Hold,
}

/// One timed phase of a timeline.
#[derive(Debug, Clone, Copy)]
pub struct TimedStep {
    pub target: f32,
    pub duration: f32,
    pub ease: Ease,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineStatus {
    Running,
    Finished,
}

/// An active choreography run: an ordered step list plus the resumable
/// cursor state (step index, elapsed-in-step, value at step entry).
///
/// Each step ends by snapping the value exactly to its target, so
/// floating-point drift never accumulates across steps. A cancelled
/// timeline reports `Finished` without ever snapping to the final target.
#[derive(Debug, Clone)]
pub struct Timeline {
    steps: Vec<TimedStep>,
    step_index: usize,
    elapsed_in_step: f32,
    step_start_value: f32,
    value: f32,
    unscaled: bool,
    cancelled: bool,
}

impl Timeline {
    pub fn new(start_value: f32, steps: Vec<TimedStep>) -> Self {
        Self {
            steps,
            step_index: 0,
            elapsed_in_step: 0.0,
            step_start_value: start_value,
            value: start_value,
            unscaled: false,
            cancelled: false,
        }
    }

    /// Single linear step from `from` to `to`.
    pub fn tween(from: f32, to: f32, duration: f32) -> Self {
        Self::new(
            from,
            vec![TimedStep {
                target: to,
                duration,
                ease: Ease::Linear,
            }],
        )
    }

    /// Alternate between `peak` and `rest` offsets `times` times within
    /// `total_duration`, snapping between endpoints, ending back at `rest`.
    pub fn bounce(rest: f32, peak: f32, times: u32, total_duration: f32) -> Self {
        let times = times.max(1);
        let step_duration = total_duration / (times * 2) as f32;
        let mut steps = Vec::with_capacity((times * 2) as usize);
        for i in 0..times * 2 {
            steps.push(TimedStep {
                target: if i % 2 == 0 { peak } else { rest },
                duration: step_duration,
                ease: Ease::Hold,
            });
        }
        Self::new(rest, steps)
    }

    /// Append a linear step toward `target`.
    pub fn then_tween(mut self, target: f32, duration: f32) -> Self {
        self.steps.push(TimedStep {
            target,
            duration,
            ease: Ease::Linear,
        });
        self
    }

    /// Append a hold at the last step's target (or the start value).
    pub fn then_delay(mut self, duration: f32) -> Self {
        let target = self
            .steps
            .last()
            .map(|s| s.target)
            .unwrap_or(self.step_start_value);
        self.steps.push(TimedStep {
            target,
            duration,
            ease: Ease::Hold,
        });
        self
    }

    /// Tick this timeline from the real-time clock instead of scaled game
    /// time. The owner picks the clock when advancing; this flag records
    /// the choice.
    pub fn unscaled(mut self) -> Self {
        self.unscaled = true;
        self
    }

    pub fn is_unscaled(&self) -> bool {
        self.unscaled
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.cancelled || self.step_index >= self.steps.len()
    }

    /// Stop ticking immediately. The value stays wherever it was; no
    /// completion snap happens.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Advance by `dt` seconds, crossing as many step boundaries as the
    /// delta covers. Returns `Finished` once the last step has snapped.
    pub fn advance(&mut self, dt: f32) -> TimelineStatus {
        if self.is_finished() {
            return TimelineStatus::Finished;
        }

        let mut remaining = dt.max(0.0);
        loop {
            let step = self.steps[self.step_index];
            let left_in_step = (step.duration - self.elapsed_in_step).max(0.0);

            if remaining >= left_in_step {
                // Step complete: snap exactly to the target.
                remaining -= left_in_step;
                self.value = step.target;
                self.step_start_value = step.target;
                self.step_index += 1;
                self.elapsed_in_step = 0.0;

                if self.step_index >= self.steps.len() {
                    return TimelineStatus::Finished;
                }
            } else {
                self.elapsed_in_step += remaining;
                self.value = match step.ease {
                    Ease::Linear => {
                        let t = if step.duration > 0.0 {
                            self.elapsed_in_step / step.duration
                        } else {
                            1.0
                        };
                        self.step_start_value + (step.target - self.step_start_value) * t
                    }
                    Ease::Hold => step.target,
                };
                return TimelineStatus::Running;
            }
        }
    }
}
