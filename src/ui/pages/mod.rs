pub mod cart;
pub mod dashboard;
pub mod how_it_works;
pub mod not_found;
pub mod pricing;
pub mod profile;
pub mod proposer;

pub use cart::CartPage;
pub use dashboard::DashboardPage;
pub use how_it_works::HowItWorksPage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use profile::ProfilePage;
pub use proposer::ProposerPage;
