//! The backtick template mini-language
//!
//! Templates combine literal text with placeholder names delimited by
//! backticks. A placeholder resolves to a well-known user property, the first
//! value of a user attribute, or - when nothing matches - the placeholder
//! name itself. A backslash escapes a backtick.
//!
//! # Example
//!
//! ```
//! use attrweave::{resolve, UserRecord};
//!
//! let user = UserRecord::new().with_username("alice");
//! assert_eq!(resolve("user:`username`", &user), "user:alice");
//! ```

mod resolver;
mod scanner;

pub use resolver::{resolve, resolve_name, PropertyAccessor, WELL_KNOWN_PROPERTIES};
pub use scanner::{lex, scan, Segment, Token};
