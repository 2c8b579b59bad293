//! Inbound adapters exposing the directory over HTTP.

pub mod http;
