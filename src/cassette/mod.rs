//! Cassette format for recording and replaying content provider calls.
//!
//! A cassette captures every `industry_content` exchange of a generation
//! run as YAML. Replaying one makes a run fully deterministic, which is
//! what the snapshot-style pipeline tests build on.

pub mod format;
pub mod recorder;
pub mod replayer;

pub use format::{Cassette, Exchange};
pub use recorder::CassetteRecorder;
pub use replayer::CassetteReplayer;
