//! Views rendered under the stats block, plus the routes outside the dashboard shell.
//!
//! Tab views are read-only consumers of the profile the layout loaded. They receive it as a prop
//! and render nothing profile-specific until it has arrived.

mod login;
mod not_found;
mod tabs;

pub use login::Login;
pub use not_found::NotFound;
pub use tabs::{Dashboard, Profile, Rank, Redeem, Scan};
