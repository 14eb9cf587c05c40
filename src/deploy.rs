pub mod gateway;
pub mod plan;
