pub mod constraint;
pub mod pool;
