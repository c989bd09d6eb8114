//! GitLook Core Types and Definitions
//!
//! This crate provides the foundational types shared by the GitLook animation
//! engine. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Visual primitives for rendered scenes ([`draw`] module)
//! - **Scene**: Declarative scene descriptions ([`scene`] module)
//! - **Lesson**: Lesson module, quiz and animation content ([`lesson`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod lesson;
pub mod scene;
