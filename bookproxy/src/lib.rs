#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use bookproxy_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_context, DefaultContext};

mod router;
pub use router::Router;

#[cfg(feature = "amazon")]
pub mod amazon;

#[cfg(feature = "google")]
pub mod google;

#[cfg(feature = "openai")]
pub mod openai;
