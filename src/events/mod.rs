pub mod event_types;
pub mod event_queue;
pub mod dispatcher;

pub use event_types::{Event, FormEvent};
pub use event_queue::FormEventQueue;
pub use dispatcher::{dispatch, DispatchStats, FormEventDispatcher};
