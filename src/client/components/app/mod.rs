pub mod layout;
pub mod navbar;

pub use layout::AppLayout;
pub use navbar::AppNavbar;
