pub mod fonts;
pub mod icon;
pub mod palette;
pub mod scene;
