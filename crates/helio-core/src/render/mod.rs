pub mod frame;
pub mod instance;
pub mod stars;
#[cfg(feature = "vectors")]
pub mod vector;
