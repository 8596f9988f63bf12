pub mod operator;
pub mod ticket;

pub use operator::Operator;
pub use ticket::{ActiveTicketState, TicketConfig, TicketOffer, TicketType};
