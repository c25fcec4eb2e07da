//! Marketplace domain: catalog content, cart pricing and form models.

pub mod app_state;
pub mod cart;
pub mod catalog;
pub mod entities;
pub mod proposal;

pub use app_state::{AppState, DashboardTab, PersistedState, ResolvedTheme, ThemeMode};
pub use cart::{billed_hours, format_price, item_total};
pub use entities::{
    Availability, BillingCycle, CartItem, DashboardStat, FaqEntry, HowItWorksStep, PriceBasis,
    PricingTier, Project, ProjectStatus, ProviderKind, ProviderProfile, TeamItem,
};
pub use proposal::{Proposal, ProposalForm};
