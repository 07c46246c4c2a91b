// SPDX-License-Identifier: MPL-2.0
//! Minimal HTTP access to the panel backend.
//!
//! - [`params`] - ordered query parameters and their encoding
//! - [`body`] - POST payloads and JSON-with-text-fallback decoding
//! - [`client`] - the `Client` issuing GET and POST requests

pub mod body;
pub mod client;
pub mod params;

pub use body::{parse_body, Payload, ResponseBody};
pub use client::{default_parser, Client};
pub use params::{serialize, ParamValue, Params};
