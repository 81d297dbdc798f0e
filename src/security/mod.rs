pub mod memory;
pub mod validation;

pub use memory::SecretString;
pub use validation::InputValidator;
