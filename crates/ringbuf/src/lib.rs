#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod buffer;
mod capacity;
mod error;
mod trace;

pub use crate::buffer::RingBuf;
pub use crate::capacity::{CapacityParseError, RingBufConfig, parse_capacity};
pub use crate::error::RingBufError;
