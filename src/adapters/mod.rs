//! Content provider adapters.
//!
//! `builtin` serves the bundled industry tables and is the fallback for
//! every other adapter. `live` talks to a remote content service.
//! `recording` and `replaying` wrap the cassette machinery for
//! deterministic runs.

pub mod builtin;
pub mod live;
pub mod recording;
pub mod replaying;

pub use builtin::BuiltinContentProvider;
pub use live::LiveContentProvider;
pub use recording::RecordingContentProvider;
pub use replaying::ReplayingContentProvider;
