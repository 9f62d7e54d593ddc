//! Procedural macros for lspwire
//!
//! This crate provides derive macros that write record and variant codec
//! declarations for you. Each derive implements `lspwire_core::Wire` with a
//! codec built once, on first use, and shared for the life of the program.
//!
//! # Available Macros
//!
//! ## `#[derive(Record)]` - Struct ↔ JSON object
//!
//! Every field names its wire key explicitly. `Option<T>` fields are optional
//! and omitted when `None`.
//!
//! ## `#[derive(Variant)]` - Enum ↔ one of several shapes
//!
//! Every variant wraps exactly one type and names its alternative explicitly.
//! The enum chooses untagged (trial decoding, first declared wins) or tagged
//! (discriminator object) representation.
//!
//! # Why Explicit Names?
//!
//! The protocol spells keys in lowerCamelCase and Rust in snake_case. Deriving
//! one from the other would hide mismatches such as the protocol's
//! `unregisterations`. Discriminators stay explicit for the same reason: renaming
//! a Rust type must never change the wire format.
//!
//! # Examples
//!
//! ```ignore
//! use lspwire_macros::{Record, Variant};
//!
//! #[derive(Debug, Clone, Default, PartialEq, Record)]
//! struct Position {
//!     #[wire(key = "line")]
//!     line: u32,
//!     #[wire(key = "character")]
//!     character: u32,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Variant)]
//! #[wire(untagged)]
//! enum Code {
//!     #[wire(name = "integer")]
//!     Number(i32),
//!     #[wire(name = "string")]
//!     Text(String),
//! }
//! ```
//!
//! # Generated Code
//!
//! The generated `Wire` impl refers to `::lspwire_core`. Crates that reach the
//! engine through another path set it with `#[wire(crate = "path")]` on the
//! type.
//!
//! # Limitations
//!
//! - Generic types are rejected.
//! - A record may not contain itself, even behind `Box`, since its codec would
//!   be needed while it is being built.

mod attrs;
mod record;
mod variant;

use proc_macro::TokenStream;

/// Derive `Wire` for a struct with named fields
///
/// The struct must implement `Default`; decoding starts from the default value
/// and fills in each field.
///
/// # Field attributes
///
/// - `#[wire(key = "...")]` (required): the wire key, unique within the struct
///   and its constants
/// - `#[wire(nullable)]`: on an `Option<T>` field, write `null` when `None`
///   instead of omitting the key
/// - `#[wire(required)]`: on an `Option<T>` field, write `null` when `None`
///   and reject input that lacks the key (`id: integer | string | null`)
/// - `#[wire(with = "expr")]`: codec expression to use instead of the type's
///   canonical codec; for `Option<T>` fields this is the codec of `T`
///
/// # Struct attributes
///
/// - `#[wire(name = "...")]`: name used in diagnostics (default: the type name)
/// - `#[wire(constant(key = "...", value = ...))]`: a fixed wire member with no
///   Rust field, such as `"kind": "create"`; `value` is a string, integer or
///   boolean literal
/// - `#[wire(crate = "path")]`: path to `lspwire_core`
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Default, PartialEq, Record)]
/// #[wire(constant(key = "kind", value = "create"))]
/// struct CreateFile {
///     #[wire(key = "uri")]
///     uri: String,
///     #[wire(key = "options")]
///     options: Option<CreateFileOptions>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(wire))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}

/// Derive `Wire` for an enum of single-field tuple variants
///
/// # Enum attributes
///
/// - `#[wire(untagged)]`: no discriminator; decoding tries variants in
///   declaration order and keeps the first that succeeds
/// - `#[wire(tagged)]`: `{"type": <name>, "data": <payload>}`; change the
///   field names with `tag = "..."` and `payload = "..."`
/// - `#[wire(name = "...")]`, `#[wire(crate = "path")]` as for records
///
/// # Variant attributes
///
/// - `#[wire(name = "...")]` (required): the discriminator or alternative label,
///   unique within the enum
/// - `#[wire(with = "expr")]`: codec expression for the wrapped type
#[proc_macro_derive(Variant, attributes(wire))]
pub fn derive_variant(input: TokenStream) -> TokenStream {
    variant::derive_variant_impl(input)
}
