//! Cassette format for recording and replaying ticket provider calls.

pub mod format;
pub mod recorder;
pub mod replayer;

pub use format::{Cassette, Interaction, RecordedError};
pub use recorder::CassetteRecorder;
pub use replayer::CassetteReplayer;
