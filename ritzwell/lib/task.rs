//! Running solves off the calling thread, with cooperative cancellation.
//!
//! A solve blocks for its full duration (dominated by the cubic cost of the
//! eigen-decomposition), so interactive callers should hand it to a
//! [`SolveTask`] and poll or join it later.
//!
//! ```no_run
//! use ritzwell::{ potential::PotentialKind, solve::{ SolveParams, Solver } };
//!
//! let params = SolveParams::new(1.0, 250, PotentialKind::Linear, 10.0, 20);
//! let task = Solver::default().spawn(params);
//! // ... do other work, or `task.cancel()`
//! let solved = task.join().unwrap();
//! println!("{:?}", solved.energies());
//! ```

use std::{
    sync::{ Arc, atomic::{ AtomicBool, Ordering } },
    thread,
};
use tracing::debug;
use crate::{
    error::SolveError,
    solve::{ SolveResult, Solved },
};

/// Shared flag used to request cancellation of a running solve.
///
/// Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a new, un-cancelled token.
    pub fn new() -> Self { Self::default() }

    /// Request cancellation.
    pub fn cancel(&self) { self.0.store(true, Ordering::Release); }

    /// Return `true` if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool { self.0.load(Ordering::Acquire) }

    /// Return [`SolveError::Cancelled`] if cancellation has been requested.
    pub fn check(&self) -> SolveResult<()> {
        (!self.is_cancelled()).then_some(()).ok_or(SolveError::Cancelled)
    }
}

/// Handle to a solve running on a background thread.
///
/// Dropping the handle detaches the worker; the result is then discarded when
/// the worker finishes.
#[derive(Debug)]
pub struct SolveTask {
    handle: thread::JoinHandle<SolveResult<Solved>>,
    cancel: CancelToken,
}

impl SolveTask {
    /// Start `job` on a new thread. `job` receives a token it is expected to
    /// check between units of work.
    pub fn spawn<F>(job: F) -> Self
    where F: FnOnce(&CancelToken) -> SolveResult<Solved> + Send + 'static
    {
        let cancel = CancelToken::new();
        let token = cancel.clone();
        let handle = thread::spawn(move || job(&token));
        debug!("spawned background solve");
        Self { handle, cancel }
    }

    /// Request cancellation. The solve stops at its next checkpoint and
    /// [`Self::join`] returns [`SolveError::Cancelled`]; a solve that has
    /// already passed its last checkpoint still completes normally.
    pub fn cancel(&self) { self.cancel.cancel(); }

    /// Get a clone of the task's cancellation token.
    pub fn token(&self) -> CancelToken { self.cancel.clone() }

    /// Return `true` if the worker has finished, successfully or not.
    pub fn is_finished(&self) -> bool { self.handle.is_finished() }

    /// Block until the worker finishes and return its result.
    pub fn join(self) -> SolveResult<Solved> {
        self.handle.join().map_err(|_| SolveError::WorkerPanicked)?
    }
}
