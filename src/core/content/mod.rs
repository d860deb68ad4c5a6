//! Static Hebrew site copy.

pub mod home;
pub mod nav;
pub mod poster;
pub mod print;
pub mod script;

pub use nav::{NavItem, SectionId, NAV_ITEMS};
pub use script::{ScriptSection, SCRIPT};
