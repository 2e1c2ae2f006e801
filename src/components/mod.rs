// Shared rendering pieces used by every screen

pub mod breadcrumb;
pub mod footer;
pub mod header;
pub mod help_overlay;

pub use breadcrumb::Breadcrumb;
pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
