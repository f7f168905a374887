//! Scripture reference parsing and validation.
//!
//! Converts free-text references typed by admins ("John 3:16",
//! "Romans 12:1-2", "1 Corinthians 13") into a normalized [`ScriptureRef`]
//! carrying the USFM book code, plus two string projections:
//!
//! - [`ScriptureRef::formatted`]: the canonical machine form
//!   (`JHN.3.16`, `ROM.12.1-ROM.12.2`) passed verbatim to the upstream
//!   scripture content API, whose passage syntax this crate's output is a
//!   compatibility contract with.
//! - [`ScriptureRef::display`]: the human form shown back to the user
//!   (`John 3:16`, `Romans 12:1-2`).
//!
//! The crate is pure and synchronous: static lookup tables, one regex, no
//! I/O. Parse failure is structural (`Option`), and [`validate`] layers the
//! user-facing accept/reject contract on top for form input.

mod books;
mod reference;
mod validate;

pub use books::{book_code, book_display_name};
pub use reference::ScriptureRef;
pub use validate::{validate, ReferenceError};
