// SPDX-License-Identifier: MIT

//! Reusable egui components structured for MVU-style updates.

pub mod form;
pub mod password_field;
