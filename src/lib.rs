//! Running maxima, one per value type.
//!
//! - [`find_max`] finds the first greatest element of a sequence.
//! - [`MaxTracker`] keeps the maximum of a stream of values of one type.
//! - [`MaxRegistry`] keeps one tracker per type behind a single container.
//!
//! ```
//! use generic_max::{MaxRegistry, TypeKey};
//!
//! let mut registry = MaxRegistry::new();
//! registry.deposit(TypeKey::<i32>::new(), 10)?;
//! registry.deposit(TypeKey::<String>::new(), "x".to_owned())?;
//! assert_eq!(registry.deposit(TypeKey::<i32>::new(), 3)?, Some(3));
//!
//! assert_eq!(registry.get_max(TypeKey::<i32>::new())?, Some(&10));
//! assert_eq!(registry.get_max(TypeKey::<String>::new())?.map(String::as_str), Some("x"));
//! # Ok::<(), generic_max::RegistryError>(())
//! ```

pub use self::comparator::{ByFn, Comparator, Max, Min};
pub use self::error::{MaxError, RegistryError, Result};
pub use self::find_max::{find_max, find_max_by, find_max_by_key, find_max_with, require_max_by};
pub use self::registry::{DynKey, MaxRegistry, TypeKey};
pub use self::tracker::{MaxTracker, Offer};

pub mod comparator;
pub mod error;
pub mod find_max;
pub mod registry;
pub mod tracker;
