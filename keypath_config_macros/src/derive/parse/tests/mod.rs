//! Unit tests for derive input parsing.

mod attrs;
mod roles;
