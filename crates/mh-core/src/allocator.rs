//! Timestamp allocation for a batch of migration requests.
//!
//! The clock is read once per invocation; the i-th request gets the base
//! instant plus `i` milliseconds, so prefixes within a batch are distinct and
//! sort in request order.

use crate::error::CoreResult;
use crate::request::MigrationRequest;
use crate::timestamp::Timestamp;
use chrono::{Local, NaiveDateTime, TimeDelta};

/// Allocate `n` timestamps starting at the current local time.
pub fn allocate(n: usize) -> Vec<Timestamp> {
    allocate_from(Local::now().naive_local(), n)
}

/// Allocate `n` strictly increasing timestamps starting at `base`.
pub fn allocate_from(base: NaiveDateTime, n: usize) -> Vec<Timestamp> {
    (0..n)
        .map(|i| {
            let offset = TimeDelta::milliseconds(i as i64);
            Timestamp::from_naive(&(base + offset))
        })
        .collect()
}

/// Stamp `requests` in order with timestamps allocated from `base`.
pub fn stamp_all(
    requests: Vec<MigrationRequest>,
    base: NaiveDateTime,
) -> CoreResult<Vec<MigrationRequest>> {
    let timestamps = allocate_from(base, requests.len());
    let stamped = requests
        .into_iter()
        .zip(timestamps)
        .map(|(request, ts)| request.stamp(ts))
        .collect::<CoreResult<Vec<_>>>()?;
    log::debug!("Stamped {} migration request(s)", stamped.len());
    Ok(stamped)
}

#[cfg(test)]
#[path = "allocator_test.rs"]
mod tests;
