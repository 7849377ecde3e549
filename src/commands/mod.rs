// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! Command implementations

pub mod completions;
pub mod export;
pub mod render;
pub mod stats;
