//! A scratch card: a modal dialog holding a ₹100 cashback reward hidden under a
//! blue "Scratch me" layer that wipes away under the pointer.
//!
//! Everything is software-rendered into a `0x00RRGGBB` [`types::FrameBuffer`];
//! only [`draw::Drawer`] touches a real window.

pub mod app;
pub mod brush;
pub mod card;
pub mod config;
pub mod confetti;
pub mod dialog;
pub mod draw;
pub mod error;
pub mod font;
pub mod gamma;
pub mod input;
pub mod reward;
pub mod scratch;
pub mod terms;
pub mod types;
