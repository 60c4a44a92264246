//! Writer implementations

pub mod debug;
pub mod file;
pub mod ring_buffer;
pub mod stream;

pub use debug::DebugWriter;
pub use file::FileWriter;
pub use ring_buffer::RingBufferWriter;
pub use stream::StreamWriter;

pub use crate::core::LogWriter;
