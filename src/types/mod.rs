pub mod chain;
pub mod declaration;
pub mod error;
pub mod property_set;

pub use chain::PropertyChain;
pub use declaration::SourceDeclaration;
pub use error::{PropError, Result};
pub use property_set::PropertySet;
