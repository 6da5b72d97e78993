pub mod clock;
pub mod interviews;
pub mod pipeline;
pub mod router;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use router::dashboard_router;
pub use store::MemoryStore;
