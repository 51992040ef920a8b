use std::fmt;
use std::time::{Duration, Instant};

use crate::measurement_pipeline::pipeline::PipelineStage;

/// Time spent in one stage of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTiming {
    pub stage: PipelineStage,
    pub elapsed: Duration,
}

/// Per-stage wall-clock times of a single request, in the order the stages ran.
#[derive(Debug, Default, Clone)]
pub struct PipelineTimings {
    stages: Vec<StageTiming>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `work` as `stage`, recording how long it took. The time is recorded
    /// even when `work` returns an error.
    pub fn record<T>(&mut self, stage: PipelineStage, work: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let out = work();
        self.stages.push(StageTiming {
            stage,
            elapsed: started.elapsed(),
        });
        out
    }

    pub fn stages(&self) -> &[StageTiming] {
        &self.stages
    }

    pub fn elapsed(&self, stage: PipelineStage) -> Option<Duration> {
        self.stages
            .iter()
            .filter(|t| t.stage == stage)
            .map(|t| t.elapsed)
            .reduce(|a, b| a + b)
    }

    pub fn total(&self) -> Duration {
        self.stages.iter().map(|t| t.elapsed).sum()
    }
}

impl fmt::Display for PipelineTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for timing in &self.stages {
            writeln!(
                f,
                "{:>10}: {:>9.3} ms",
                timing.stage,
                timing.elapsed.as_secs_f64() * 1e3
            )?;
        }
        write!(f, "{:>10}: {:>9.3} ms", "total", self.total().as_secs_f64() * 1e3)
    }
}
