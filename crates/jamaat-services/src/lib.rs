//! Dashboard services: wires the location, prayer and weather clients to a
//! display sink and drives the timers that keep it current.

pub mod clock;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod scheduler;
pub mod session;
pub mod suggestions;
pub mod task;

pub use clock::{FixedClock, LocalClock, TimeSource};
pub use dashboard::Dashboard;
pub use display::{DisplaySink, MemorySink, Slot};
pub use error::RefreshError;
pub use scheduler::{boot, spawn_clock, spawn_schedules};
pub use session::Session;
pub use task::TaskSlot;
