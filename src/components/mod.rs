//! UI Components
//!
//! Page views and shared Leptos components.

mod article_dashboard;
mod attendance;
mod center_load;
mod fetch_states;
mod load_by_centers;
mod load_filters_form;
mod load_listing;
mod nav_bar;
mod prices_card;
mod service_control;

pub use article_dashboard::ArticleDashboard;
pub use attendance::Attendance;
pub use center_load::CenterLoad;
pub use fetch_states::{ErrorMessage, LoadingMessage, NoDataMessage};
pub use load_by_centers::LoadByCenters;
pub use load_filters_form::LoadFiltersForm;
pub use load_listing::LoadListing;
pub use nav_bar::NavBar;
pub use prices_card::PricesCard;
pub use service_control::ServiceControl;
