//! Registry API endpoint groups.

mod cameras;

pub use cameras::CamerasApi;
