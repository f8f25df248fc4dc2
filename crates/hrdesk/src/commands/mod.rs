pub mod activity;
pub mod bugs;
pub mod idle;
pub mod palette;
pub mod replay;
pub mod version;
