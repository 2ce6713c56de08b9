//! Conversions between the domain model and wire types.
//!
//! - `enum_mapper` - domain string ids <-> wire enums
//! - `choice_resolver` - rules choice trees -> flattened choices, selections -> domain
//! - `draft_assembler` - requests -> domain inputs, drafts -> views

pub mod choice_resolver;
pub mod draft_assembler;
pub mod enum_mapper;
