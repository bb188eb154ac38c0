pub mod health;
pub mod secure;
