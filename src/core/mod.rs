// src/core/mod.rs

pub mod html;
pub mod net;
pub mod pdf;
pub mod sanitize;
