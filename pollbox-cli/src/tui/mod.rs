// SPDX-License-Identifier: Apache-2.0

//! Live results view.

mod app;

pub use app::run_live;
