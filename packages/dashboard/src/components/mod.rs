mod header;
mod layout;
mod sidebar;
mod stats;

pub use header::Header;
pub use layout::DashboardLayout;
pub use sidebar::Sidebar;
pub use stats::{StatTile, StatsPanel};
