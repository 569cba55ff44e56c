pub mod pointer;
pub mod resize;

pub use pointer::wire_pointer_handlers;
pub use resize::{wire_icon_load, wire_resize};
