//! Message-passing boundary for off-thread ranking.
//!
//! The caller posts a single request message and receives exactly one
//! response: `success` with the ranked alternatives, or `error` with a
//! message. Each request is computed on its own fresh matrices, so any
//! number of workers can run side by side without locking.
//!
//! - [`handle_message`] / [`handle_request`]: stateless message handlers,
//!   also used by the `wasm` export
//! - [`RankingWorker`]: a native background thread speaking the same protocol

mod protocol;
mod unit;

pub use protocol::{handle_message, handle_request, RankedPayload, TopsisRequest, WorkerResponse};
pub use unit::{PendingResponse, RankingWorker};
