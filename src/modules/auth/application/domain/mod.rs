pub mod entities;
pub mod ownership;
