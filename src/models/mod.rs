//! Typed boundary models: input documents and printable output payloads.

pub mod input;
pub mod output;
