pub mod duty;
pub mod health;
