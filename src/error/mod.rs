pub mod entity;
pub mod gateway;

pub use entity::NotFoundError;
pub use gateway::{GatewayError, GatewayResult};
