pub mod router;
pub mod site;
pub mod state;
