use chrono::{Local, NaiveDateTime, TimeZone, Utc};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
    /// The current date time of the local wall clock
    fn local_now(&self) -> NaiveDateTime;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// System frozen at a single point in time, used by tests
pub struct StaticTimeSys(pub NaiveDateTime);
impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc.from_utc_datetime(&self.0).timestamp_millis()
    }

    fn local_now(&self) -> NaiveDateTime {
        self.0
    }
}
