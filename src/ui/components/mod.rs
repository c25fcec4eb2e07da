pub mod agent_console;
pub mod cart_line;
pub mod kpi_card;
pub mod provider_card;
pub mod rating;
pub mod skill_tags;
pub mod status_badge;
pub mod toast;
