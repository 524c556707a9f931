//! Bot behavior on top of the tracker and the transport
//!
//! - `payload` - Opaque control payload encoding (`ACT|…`, `END|…`)
//! - `render` - User-visible message texts and keyboards
//! - `Handlers` - `/start` and callback handling over the tracker
//! - `Dispatcher` - Long-poll loop and background heartbeat

pub mod dispatcher;
pub mod handlers;
pub mod payload;
pub mod render;

pub use dispatcher::Dispatcher;
pub use handlers::Handlers;
pub use payload::ControlPayload;
