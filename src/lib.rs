pub mod guide;
pub mod utils;

pub use guide::{write_instructions, INSTRUCTIONS};
pub use utils::error::{CorsFixError, Result};
