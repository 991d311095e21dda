pub mod particle;
pub mod trail;
