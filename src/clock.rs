use crate::Error;
use time::{OffsetDateTime, UtcOffset};

/// A source of "now".
///
/// Everything in this crate that depends on the current time takes a `Clock`
/// rather than reading the system time directly, so that callers (and tests)
/// can pin the current instant.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

/// Reads the system wall clock, reporting instants in a fixed UTC offset.
///
/// The local offset is looked up once, when the clock is created.  Looking it
/// up on every call is unsound on some platforms once the process has spawned
/// threads, and `time` will refuse to do so.  As a consequence a long-lived
/// `SystemClock` does not follow daylight-saving transitions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    /// Create a clock reporting the machine's current local offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndeterminateOffset`] if the platform cannot report
    /// the local offset.
    pub fn local() -> Result<SystemClock, Error> {
        let offset = UtcOffset::current_local_offset()?;
        log::debug!("Resolved local UTC offset to {offset}");
        Ok(SystemClock { offset })
    }

    pub fn utc() -> SystemClock {
        SystemClock {
            offset: UtcOffset::UTC,
        }
    }

    pub fn with_offset(offset: UtcOffset) -> SystemClock {
        SystemClock { offset }
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> SystemClock {
        SystemClock::utc()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

/// A clock that is stuck at a single instant
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FixedClock(OffsetDateTime);

impl FixedClock {
    pub fn new(instant: OffsetDateTime) -> FixedClock {
        FixedClock(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
