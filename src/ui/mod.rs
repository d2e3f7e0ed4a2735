//! UI module - reusable widgets shared by the views

pub mod components;
