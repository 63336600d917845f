// SPDX-License-Identifier: Apache-2.0

//! CLI command modules.

pub mod create;
pub mod list;
pub mod results;
pub mod show;
pub mod vote;
