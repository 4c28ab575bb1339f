// SPDX-License-Identifier: MPL-2.0
//! Small widgets shared across screens.

pub mod dialog;
pub mod header;
