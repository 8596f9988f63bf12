pub mod ticket_viewmodel;

pub use ticket_viewmodel::{Clock, SystemClock, TicketViewModel};
