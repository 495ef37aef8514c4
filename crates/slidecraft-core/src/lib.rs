//! Slidecraft Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Slidecraft layout
//! engine and its writers. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, insets and rectangles ([`geometry`] module)
//! - **Themes**: Semantic color roles resolved to concrete colors ([`theme::Theme`])
//! - **Draw**: Paragraphs, text blocks and shapes ([`draw`] module)
//! - **Document**: Slides and the document tree handed to writers ([`document`] module)

pub mod color;
pub mod document;
pub mod draw;
pub mod geometry;
pub mod theme;
