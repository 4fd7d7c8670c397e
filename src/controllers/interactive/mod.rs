//! Background rendering for interactive shells.
//!
//! A shell submits [`RenderRequest`](crate::core::data::render_request::RenderRequest)s
//! from its UI thread; one worker thread renders the newest of them and hands
//! the result to a [`FramePresenterPort`]. Each submission gets a generation
//! number and a finished render whose generation has been superseded is
//! dropped instead of presented.

mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use controller::RenderWorker;
pub use data::frame_data::FrameData;
pub use data::render_failure::RenderFailure;
pub use events::render_event::RenderEvent;
pub use ports::presenter::FramePresenterPort;
