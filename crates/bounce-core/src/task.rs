//! Background simulation tasks.
//!
//! [`SimulationTask`] runs a request on a dedicated worker thread and
//! streams per-step snapshots over a channel while the run is in flight.
//! The final result is always a [`RunOutcome`]: request errors, divergence,
//! and even a panicking worker all come back as data.

use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;

use bounce_types::{FailureReport, RunOutcome, SimulationRequest, StepSnapshot};
use tracing::debug;

use crate::runner::SimulationRunner;

/// A simulation running on its own worker thread.
///
/// Drop the task without calling [`join`](Self::join) and the worker keeps
/// running detached until the run finishes.
#[derive(Debug)]
pub struct SimulationTask {
    handle: JoinHandle<RunOutcome>,
    progress: Receiver<StepSnapshot>,
}

impl SimulationTask {
    /// Spawn a worker thread running `request`.
    #[must_use]
    pub fn spawn(request: SimulationRequest) -> Self {
        let (sender, progress) = mpsc::channel();

        let handle = std::thread::spawn(move || {
            let result = SimulationRunner::run_with_progress(&request, |snapshot| {
                // A dropped receiver just means nobody is watching.
                let _ = sender.send(snapshot.clone());
            });
            RunOutcome::from_result(result)
        });

        Self { handle, progress }
    }

    /// The channel of per-step snapshots.
    ///
    /// Snapshots arrive in step order. The channel closes once the run
    /// finishes, so draining it with [`Receiver::iter`] terminates.
    #[must_use]
    pub fn progress(&self) -> &Receiver<StepSnapshot> {
        &self.progress
    }

    /// Check whether the worker has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the worker and take its outcome.
    ///
    /// A panicked worker is reported as a [`RunOutcome::Failure`] rather
    /// than propagating the panic.
    #[must_use]
    pub fn join(self) -> RunOutcome {
        match self.handle.join() {
            Ok(outcome) => outcome,
            Err(_) => {
                debug!("simulation worker panicked");
                RunOutcome::Failure(FailureReport::from_message("simulation worker panicked"))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_task_delivers_progress_and_outcome() {
        let request = SimulationRequest::gravity_drop().with_time_steps(12);
        let task = SimulationTask::spawn(request);

        let steps: Vec<usize> = task.progress().iter().map(|s| s.step).collect();
        assert_eq!(steps, (0..12).collect::<Vec<_>>());

        let outcome = task.join();
        let report = outcome.report().unwrap();
        assert_eq!(report.as_gravity().unwrap().positions.len(), 12);
    }

    #[test]
    fn test_task_reports_request_errors() {
        let request = SimulationRequest::collision().with_num_objects(0);
        let outcome = SimulationTask::spawn(request).join();

        assert!(outcome.is_failure());
        assert!(outcome.failure().unwrap().error.contains("num_objects"));
    }

    #[test]
    fn test_outcome_available_without_draining_progress() {
        let request = SimulationRequest::collision().with_time_steps(30);
        let task = SimulationTask::spawn(request);

        // Never read the channel; the worker must still finish.
        let outcome = task.join();
        assert!(!outcome.is_failure());
    }
}
