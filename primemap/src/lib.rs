pub mod config;
mod hash;
pub mod prime;
pub mod table;
pub use config::{Config, ConfigError};
pub use prime::{is_prime, next_prime};
pub use table::{MapEntry, OccupiedEntry, StringMap, VacantEntry};
