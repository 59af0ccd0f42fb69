pub mod colors;
pub mod record;
pub mod session;
pub mod threshold;
pub mod view_model;
