//! Clock and id generator implementations.

use crate::infrastructure::ports::{ClockPort, IdGeneratorPort};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random v4 uuids.
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGeneratorPort for UuidGenerator {
    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fixed id for testing.
#[cfg(test)]
pub struct FixedIdGenerator(pub Uuid);

#[cfg(test)]
impl IdGeneratorPort for FixedIdGenerator {
    fn gen_uuid(&self) -> Uuid {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock::new();
        let first = clock.now();
        assert!(clock.now() >= first);
    }

    #[test]
    fn generated_uuids_are_v4_and_distinct() {
        let ids = UuidGenerator::default();
        let a = ids.gen_uuid();
        assert_eq!(a.get_version_num(), 4);
        assert_ne!(a, ids.gen_uuid());
    }
}
