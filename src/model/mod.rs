mod key;
mod message_type;
mod payload;

pub use key::*;
pub use message_type::*;
pub use payload::*;
