//! Command implementations

mod countdown;
mod drag;
mod move_stream;
mod order;
mod reset_order;
mod show_order;
mod streams_file;

pub use countdown::countdown;
pub use drag::drag;
pub use move_stream::move_stream;
pub use order::order;
pub use reset_order::reset_order;
pub use show_order::show_order;
