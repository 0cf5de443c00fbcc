// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message model: logical lines and their roles.

mod message;
mod role;

pub use message::{CommitMessage, LogicalLine};
pub use role::LineRole;
