//! Query cells — app-owned fetch state with last-request-wins resolution.
//!
//! A [`QueryCell`] tracks one query key. Every fetch starts with
//! [`QueryCell::begin`], which hands out a [`RequestTicket`]; only the ticket
//! of the most recent request can resolve the cell. Data from a previous
//! success stays readable while a refresh is in flight and after a failed
//! refresh (stale-while-revalidate).

use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

/// Background refresh period for coin and OHLC queries.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Identifies what a cell caches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Coin { id: CoinId },
    Ohlc { id: CoinId, days: u32 },
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Coin { id } => write!(f, "coins/{}", id),
            QueryKey::Ohlc { id, days } => write!(f, "ohlc/{}/{}", id, days),
        }
    }
}

/// Observable state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Nothing requested yet.
    Idle,
    /// First fetch in flight, no data to show.
    Loading,
    /// Data available (possibly being refreshed).
    Success,
    /// Last fetch failed and no refresh is in flight.
    Error,
}

/// Proof that a request was issued for a specific generation of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    key: QueryKey,
    generation: u64,
}

impl RequestTicket {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

/// Fetch state for one query key.
#[derive(Debug, Clone)]
pub struct QueryCell<T> {
    key: QueryKey,
    generation: u64,
    in_flight: bool,
    data: Option<T>,
    error: Option<String>,
    /// Last successful resolve.
    updated_at: Option<DateTime<Utc>>,
    /// Last accepted resolve, success or failure. Drives `is_due`.
    attempted_at: Option<DateTime<Utc>>,
}

impl<T> QueryCell<T> {
    pub fn new(key: QueryKey) -> Self {
        Self {
            key,
            generation: 0,
            in_flight: false,
            data: None,
            error: None,
            updated_at: None,
            attempted_at: None,
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Switches to a new key, keeping the current data as a placeholder until
    /// the new key resolves. Outstanding requests for the old key are voided.
    pub fn set_key(&mut self, key: QueryKey) {
        if key == self.key {
            return;
        }
        self.key = key;
        self.generation += 1;
        self.in_flight = false;
        self.error = None;
        self.updated_at = None;
        self.attempted_at = None;
    }

    /// Registers a new request; any earlier ticket becomes stale.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.in_flight = true;
        RequestTicket {
            key: self.key.clone(),
            generation: self.generation,
        }
    }

    /// Applies a fetch result. Returns `false` if the ticket was superseded
    /// and the result discarded.
    pub fn resolve<E: fmt::Display>(
        &mut self,
        ticket: RequestTicket,
        result: Result<T, E>,
        now: DateTime<Utc>,
    ) -> bool {
        if ticket.generation != self.generation || ticket.key != self.key || !self.in_flight {
            tracing::debug!(
                key = %ticket.key,
                ticket = ticket.generation,
                current = self.generation,
                "Discarding superseded query result"
            );
            return false;
        }

        self.in_flight = false;
        self.attempted_at = Some(now);
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.updated_at = Some(now);
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Query failed");
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Voids any in-flight request (e.g. on unmount).
    pub fn cancel(&mut self) {
        if self.in_flight {
            self.generation += 1;
            self.in_flight = false;
        }
    }

    pub fn status(&self) -> QueryStatus {
        if self.error.is_some() && !self.in_flight {
            QueryStatus::Error
        } else if self.data.is_some() {
            QueryStatus::Success
        } else if self.in_flight {
            QueryStatus::Loading
        } else {
            QueryStatus::Idle
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    /// Latest successful data, possibly stale.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Whether a background refresh should start now.
    ///
    /// Measured from the last attempt; a failed fetch waits a full interval.
    pub fn is_due(&self, now: DateTime<Utc>, interval: Duration) -> bool {
        if self.in_flight {
            return false;
        }
        match self.attempted_at {
            None => true,
            Some(at) => now
                .signed_duration_since(at)
                .to_std()
                .map(|elapsed| elapsed >= interval)
                .unwrap_or(false),
        }
    }
}
