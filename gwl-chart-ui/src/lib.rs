//! Dashboard presentation layer for the GWL server.
//!
//! This crate provides:
//! - `figure`: the serializable line-chart model handed to D3.js
//! - `components`: Dioxus RSX components rendered to HTML on the server
//! - `page`: full-document rendering of the dashboard page
//! - `assets`: embedded JS/CSS served alongside the page

pub mod assets;
pub mod components;
pub mod figure;
pub mod page;
