use std::collections::VecDeque;

use crate::queue::job::{MediaJobPayload, ProcessingJob};

/// Snapshot returned by [`ProcessingQueue::queue_status`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct QueueStatus {
    /// Jobs waiting to be dequeued.
    pub pending_count: usize,
    /// Whether a dequeued job has not been marked complete yet.
    pub is_processing: bool,
}

/// In-memory priority queue with a single-flight guard.
///
/// Pending jobs are kept priority-descending, FIFO among equal priorities. At most one job is in
/// flight: [`process_next`](Self::process_next) hands out the head and refuses (returns `None`)
/// until [`complete`](Self::complete) is called. Contention and emptiness both read as `None`;
/// use [`queue_status`](Self::queue_status) to tell them apart.
///
/// Once a job is handed out the queue forgets it. Success, failure, retries and timeouts of the
/// actual work belong to the caller.
#[derive(Debug)]
pub struct ProcessingQueue<P = MediaJobPayload> {
    pending: VecDeque<ProcessingJob<P>>,
    processing: bool,
}

impl<P> Default for ProcessingQueue<P> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
            processing: false,
        }
    }
}

impl<P> ProcessingQueue<P> {
    /// Empty, idle queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `job` behind every pending job of equal or higher priority.
    ///
    /// Same result as appending and stable-sorting by descending priority. Allowed while a job is
    /// in flight; does not change the processing state.
    pub fn add_job(&mut self, job: ProcessingJob<P>) {
        let at = self.pending.partition_point(|p| p.priority >= job.priority);
        tracing::debug!(
            job = %job.id,
            priority = ?job.priority,
            position = at,
            pending = self.pending.len() + 1,
            "job queued"
        );
        self.pending.insert(at, job);
    }

    /// Take the highest-priority pending job and mark the queue as processing.
    ///
    /// Returns `None` while another job is in flight or when nothing is pending.
    pub fn process_next(&mut self) -> Option<ProcessingJob<P>> {
        if self.processing {
            tracing::debug!("process_next rejected: a job is already in flight");
            return None;
        }
        let job = self.pending.pop_front()?;
        self.processing = true;
        tracing::debug!(
            job = %job.id,
            priority = ?job.priority,
            pending = self.pending.len(),
            "job dequeued"
        );
        Some(job)
    }

    /// Mark the in-flight job as finished, returning the queue to idle.
    pub fn complete(&mut self) {
        if self.processing {
            tracing::debug!(pending = self.pending.len(), "queue idle");
        }
        self.processing = false;
    }

    /// Dequeue one job, run `work` on it, and return to idle afterwards.
    ///
    /// `None` when contended or empty. Whatever `work` returns (including an error value) is
    /// handed back unchanged; the queue is idle again either way.
    pub fn process_with<R>(&mut self, work: impl FnOnce(ProcessingJob<P>) -> R) -> Option<R> {
        let job = self.process_next()?;
        let out = work(job);
        self.complete();
        Some(out)
    }

    /// Pending count and processing flag.
    pub fn queue_status(&self) -> QueueStatus {
        QueueStatus {
            pending_count: self.pending.len(),
            is_processing: self.processing,
        }
    }

    /// Whether a job is in flight.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Pending jobs in dequeue order.
    pub fn pending(&self) -> impl ExactSizeIterator<Item = &ProcessingJob<P>> {
        self.pending.iter()
    }
}

impl<P> Extend<ProcessingJob<P>> for ProcessingQueue<P> {
    fn extend<I: IntoIterator<Item = ProcessingJob<P>>>(&mut self, iter: I) {
        for job in iter {
            self.add_job(job);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/queue/processing.rs"]
mod tests;
