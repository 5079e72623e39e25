//! Background ranking unit.
//!
//! A [`RankingWorker`] owns one thread. Each [`post`](RankingWorker::post)
//! sends exactly one request and returns a [`PendingResponse`] that yields
//! exactly one response. There is no streaming and no cancellation; to
//! abandon work, drop the worker and spawn a new one.

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::debug;

use super::protocol::{handle_request, TopsisRequest, WorkerResponse};
use crate::decision::RankedAlternative;
use crate::error::{McdaError, Result};

struct Job {
    request: TopsisRequest,
    reply: Sender<WorkerResponse>,
}

/// A dedicated thread that ranks requests one at a time.
///
/// # Usage
///
/// ```
/// use u_mcda::decision::Alternative;
/// use u_mcda::topsis::Direction;
/// use u_mcda::worker::{RankingWorker, TopsisRequest};
///
/// let worker = RankingWorker::spawn().unwrap();
/// let request = TopsisRequest::new(
///     vec![Alternative::new("A", 8000.0, 0.1, 0.99)],
///     vec![0.4, 0.4, 0.2],
///     &[Direction::Min, Direction::Max, Direction::Min],
/// );
/// let ranked = worker.post(request).wait().unwrap();
/// assert_eq!(ranked.len(), 1);
/// ```
pub struct RankingWorker {
    jobs: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
}

impl RankingWorker {
    /// Starts the worker thread.
    pub fn spawn() -> Result<Self> {
        let (tx, rx) = unbounded::<Job>();
        let handle = thread::Builder::new()
            .name("u-mcda-ranking".into())
            .spawn(move || run(rx))?;
        Ok(Self {
            jobs: Some(tx),
            handle: Some(handle),
        })
    }

    /// Posts one request.
    ///
    /// If the worker thread is gone, the returned handle reports
    /// [`McdaError::WorkerDisconnected`].
    pub fn post(&self, request: TopsisRequest) -> PendingResponse {
        let (reply, rx) = bounded(1);
        if let Some(jobs) = &self.jobs {
            // A failed send drops the job and its reply sender, which the
            // pending response observes as a disconnect.
            let _ = jobs.send(Job { request, reply });
        }
        PendingResponse { rx }
    }

    /// Posts a request and blocks for its response.
    pub fn rank(&self, request: TopsisRequest) -> Result<Vec<RankedAlternative>> {
        self.post(request).wait()
    }

    /// Stops the worker after it finishes any queued requests.
    pub fn terminate(self) {}
}

impl Drop for RankingWorker {
    fn drop(&mut self) {
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                debug!("ranking worker thread panicked");
            }
        }
    }
}

/// The one response owed for a posted request.
pub struct PendingResponse {
    rx: Receiver<WorkerResponse>,
}

impl PendingResponse {
    /// Blocks for the raw response message.
    pub fn recv(self) -> Result<WorkerResponse> {
        self.rx.recv().map_err(|_| McdaError::WorkerDisconnected)
    }

    /// Blocks for the response and unwraps it into ranked alternatives.
    ///
    /// An `error` response becomes [`McdaError::Rejected`].
    pub fn wait(self) -> Result<Vec<RankedAlternative>> {
        self.recv()?.into_result()
    }
}

fn run(jobs: Receiver<Job>) {
    debug!("ranking worker started");
    for job in jobs.iter() {
        let response = handle_request(&job.request);
        // The caller may have dropped its pending response.
        let _ = job.reply.send(response);
    }
    debug!("ranking worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Alternative;
    use crate::topsis::Direction::{Max, Min};

    fn request(weights: Vec<f64>) -> TopsisRequest {
        TopsisRequest::new(
            vec![
                Alternative::new("A", 8000.0, 0.1, 0.99),
                Alternative::new("B", 12000.0, 0.05, 0.999),
            ],
            weights,
            &[Min, Max, Min],
        )
    }

    #[test]
    fn test_worker_ranks() {
        let worker = RankingWorker::spawn().unwrap();
        let ranked = worker.rank(request(vec![0.4, 0.4, 0.2])).unwrap();
        assert_eq!(ranked[0].name(), "A");
        worker.terminate();
    }

    #[test]
    fn test_worker_error_response() {
        let worker = RankingWorker::spawn().unwrap();
        let err = worker.rank(request(vec![0.4, 0.4])).unwrap_err();
        assert!(matches!(err, McdaError::Rejected(_)));

        // The worker survives a rejected request.
        assert!(worker.rank(request(vec![0.4, 0.4, 0.2])).is_ok());
    }

    #[test]
    fn test_one_response_per_post() {
        let worker = RankingWorker::spawn().unwrap();
        let pending: Vec<PendingResponse> = (0..8)
            .map(|i| worker.post(request(vec![0.4, 0.4, 0.2 + i as f64 * 0.01])))
            .collect();
        for p in pending {
            assert!(matches!(p.recv().unwrap(), WorkerResponse::Success { .. }));
        }
    }

    #[test]
    fn test_independent_workers() {
        let workers: Vec<RankingWorker> = (0..4).map(|_| RankingWorker::spawn().unwrap()).collect();
        let pending: Vec<PendingResponse> = workers
            .iter()
            .map(|w| w.post(request(vec![0.4, 0.4, 0.2])))
            .collect();
        let results: Vec<Vec<RankedAlternative>> =
            pending.into_iter().map(|p| p.wait().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_disconnected_reply() {
        let (reply, rx) = bounded::<WorkerResponse>(1);
        drop(reply);
        let err = PendingResponse { rx }.wait().unwrap_err();
        assert!(matches!(err, McdaError::WorkerDisconnected));
    }

    #[test]
    fn test_post_without_thread_disconnects() {
        let worker = RankingWorker {
            jobs: None,
            handle: None,
        };
        let err = worker.post(request(vec![0.4, 0.4, 0.2])).wait().unwrap_err();
        assert!(matches!(err, McdaError::WorkerDisconnected));
    }
}
