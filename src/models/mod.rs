// SPDX-License-Identifier: MIT

//! Domain layer: binding table and value types shared by the UI components.

pub mod binding;
pub mod password;
