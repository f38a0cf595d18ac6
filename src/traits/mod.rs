mod time;

pub use time::{ManualClock, SystemClock, TimeProvider};
