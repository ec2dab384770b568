//! FFI bridge crate for the Flutter presentation layer.
//!
//! The generated Dart bindings call into [`api`]; nothing else is public.

pub mod api;
