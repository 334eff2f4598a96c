//! Rebuilds a string from template literal segments and substitution values,
//! `segment[0] + sub[0] + segment[1] + ... + segment[n-1]`, with the coercion
//! rules of `String.cooked`.
//!
//! ```
//! use string_cooked::cook;
//!
//! let cooked = cook(&["mmm ... ", " cooked string"], &["delicious"]).unwrap();
//! assert_eq!(cooked, "mmm ... delicious cooked string");
//! ```

mod coerce;
mod cook;
mod error;
pub mod namespace;
mod template;
mod value;

pub use coerce::Coerce;
pub use coerce::Displayed;
pub use coerce::MAX_LENGTH;
pub use coerce::format_number;
pub use coerce::string_to_number;
pub use coerce::to_length;
pub use coerce::to_number;
pub use cook::cook;
pub use error::CoercionTarget;
pub use error::CookError;
pub use error::Result;
pub use namespace::StringNamespace;
pub use namespace::install;
pub use template::Template;
pub use value::Symbol;
pub use value::Value;
