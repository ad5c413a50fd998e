//! Form submit guard
//!
//! The "loading" flag of a form: while one submission is in flight a second
//! one is refused with [`ClientError::Busy`].

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    busy: Arc<AtomicBool>,
}

/// Held while a submission runs; releases the guard on drop
#[derive(Debug)]
pub struct SubmitPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for SubmitPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn try_begin(&self) -> ClientResult<SubmitPermit> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Submission refused, another one is in flight");
            return Err(ClientError::Busy);
        }
        Ok(SubmitPermit {
            busy: Arc::clone(&self.busy),
        })
    }

    /// Run `submit` unless a submission is already running
    pub async fn submit<F, T>(&self, submit: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        let _permit = self.try_begin()?;
        submit.await
    }
}
