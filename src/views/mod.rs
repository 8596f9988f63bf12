pub mod app;
pub mod shared;
pub mod operator_list;
pub mod ticket_selection;
pub mod ticket_card;
pub mod activation;
pub mod active_ticket;
pub mod tamper_panel;
pub mod profile;

pub use app::render_app;
pub use operator_list::render_operator_list;
pub use ticket_selection::render_ticket_selection;
pub use ticket_card::render_ticket_card;
pub use activation::render_activation;
pub use active_ticket::render_active_ticket;
pub use tamper_panel::render_tamper_panel;
pub use profile::render_profile;
