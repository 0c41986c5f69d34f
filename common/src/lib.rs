// Platform fee common library - main library exports

pub mod byte_array;
pub mod configuration;
pub mod dimensions;
pub mod errors;
pub mod tx;

// Flattened re-exports
pub use self::byte_array::*;
pub use self::configuration::FeeConfig;
pub use self::dimensions::{add_dimensions, Dimensions, FeeDimension};
pub use self::errors::{ComplexityError, TxDecodeError};
pub use self::tx::*;
