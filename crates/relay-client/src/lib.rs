//! HTTP-backed implementation of the greeting client contract.

mod rest;

pub use rest::RestHelloClient;
