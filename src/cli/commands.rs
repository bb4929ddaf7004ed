pub mod check;
pub mod models;
pub mod predict;

pub use check::check;
pub use models::list_models;
pub use predict::predict;
