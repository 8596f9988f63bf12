pub mod header;
pub mod bottom_nav;
pub mod live_clock;

pub use header::render_header;
pub use bottom_nav::render_bottom_nav;
pub use live_clock::render_live_clock;
