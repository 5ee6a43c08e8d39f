//! # Request Gate
//!
//! Last-request-wins coordination for asynchronous recomputation.
//!
//! Every call to [`RequestGate::begin`] bumps a generation counter and
//! hands out a [`RequestTicket`]. A ticket is current until the next
//! `begin`. In-flight work wrapped with [`RequestTicket::run`] is abandoned
//! as soon as it is superseded, and a [`Published`] cell only accepts a
//! value from the current ticket, so a stale completion can never overwrite
//! a newer result.

use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Hands out request generations.
#[derive(Debug)]
pub struct RequestGate {
    latest: watch::Sender<u64>,
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestGate {
    /// Creates a gate at generation zero.
    #[must_use]
    pub fn new() -> Self {
        let (latest, _) = watch::channel(0);
        Self { latest }
    }

    /// Starts a new request, superseding every earlier ticket.
    #[must_use]
    pub fn begin(&self) -> RequestTicket {
        let mut generation = 0;
        self.latest.send_modify(|g| {
            *g += 1;
            generation = *g;
        });
        RequestTicket {
            generation,
            receiver: self.latest.subscribe(),
        }
    }

    /// Returns the generation of the most recent request.
    #[must_use]
    pub fn current_generation(&self) -> u64 {
        *self.latest.borrow()
    }
}

/// Handle for one request generation.
#[derive(Debug)]
pub struct RequestTicket {
    generation: u64,
    receiver: watch::Receiver<u64>,
}

impl RequestTicket {
    /// Returns this ticket's generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true while no newer request has begun.
    #[must_use]
    pub fn is_current(&self) -> bool {
        *self.receiver.borrow() == self.generation
    }

    /// Resolves once a newer request has begun.
    pub async fn superseded(&mut self) {
        while self.is_current() {
            if self.receiver.changed().await.is_err() {
                // gate dropped: nothing can supersede us any more
                std::future::pending::<()>().await;
            }
        }
    }

    /// Drives `work` to completion unless superseded first.
    ///
    /// Returns `None` when a newer request began; `work` is dropped at that
    /// point and its result is never observed.
    pub async fn run<F>(&mut self, work: F) -> Option<F::Output>
    where
        F: Future,
    {
        if !self.is_current() {
            return None;
        }
        tokio::select! {
            biased;
            () = self.superseded() => None,
            output = work => Some(output),
        }
    }
}

/// Outcome of a gated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus<T> {
    /// The result was published and is now the latest.
    Published(Arc<T>),
    /// A newer request began first; the result was discarded.
    Superseded,
}

impl<T> RequestStatus<T> {
    /// Returns the published value, if any.
    #[must_use]
    pub fn published(&self) -> Option<&Arc<T>> {
        match self {
            Self::Published(value) => Some(value),
            Self::Superseded => None,
        }
    }

    /// Returns true if the result was discarded.
    #[must_use]
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}

/// A cell holding the most recently published value.
#[derive(Debug)]
pub struct Published<T> {
    slot: Mutex<Option<(u64, Arc<T>)>>,
}

impl<T> Default for Published<T> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<T> Published<T> {
    /// Creates an empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` if `ticket` is still current and nothing newer has
    /// been stored. Returns whether the value was stored.
    pub fn publish(&self, ticket: &RequestTicket, value: Arc<T>) -> bool {
        let mut slot = self.slot.lock();
        if !ticket.is_current() {
            return false;
        }
        if let Some((stored, _)) = slot.as_ref()
            && *stored > ticket.generation()
        {
            return false;
        }
        *slot = Some((ticket.generation(), value));
        true
    }

    /// Returns the latest published value.
    #[must_use]
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.lock().as_ref().map(|(_, value)| Arc::clone(value))
    }
}
