// Crate-level lints: Allow the pixel-math cast patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32/u8 casts in transition math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in offset and progress calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 for pixel coordinates
#![allow(clippy::cast_sign_loss)] // i32->u32 where geometry keeps values positive
#![allow(clippy::module_name_repetitions)] // MenuWidget, MenuPage etc. read better qualified

//! Paginated hierarchical menu system for a small square display.
//!
//! The display shows one screen at a time: a page of up to three menu items,
//! or a full-screen application. Seven physical buttons drive everything;
//! three of them sit beside the screen, one per item slot, so item layout is
//! part of the input contract, not just presentation.
//!
//! # Architecture
//!
//! - [`menu::MenuWidget`] is the state machine: the current menu or
//!   application, the page index, and a stack of parked screens to return
//!   to. Every operation maps to a button.
//! - [`transition`] runs screen switches one at a time with a queue, the
//!   way the display hardware wants them: slides between related screens,
//!   a fade through black when an application takes over, and a frame-rate
//!   hint to the driver while anything animates.
//! - [`render`] is the per-frame compositor: it asks the widget what is on
//!   screen (settled, or two sides of a running switch) and draws it into a
//!   [`framebuffer::FrameBuffer`] with the offsets and fades of the moment.
//! - [`widgets`] are free drawing functions in the immediate-mode style:
//!   item rows, pages, scrollbar, chrome, gauges.
//! - [`application::Application`] is the trait full-screen programs
//!   implement; the widget forwards paging and back presses to them and
//!   polls them for self-close.
//!
//! # Frame Loop
//!
//! The embedding calls [`menu::MenuWidget::tick`] with the elapsed time,
//! draws with [`menu::MenuWidget::draw`], and presents the frame. Nothing
//! here schedules frames; the loop owns the cadence and may slow down when
//! the [`transition::FpsController`] reports the screen is idle.

pub mod animations;
pub mod application;
pub mod colors;
pub mod config;
pub mod error;
pub mod framebuffer;
pub mod input;
pub mod menu;
mod render;
pub mod styles;
pub mod transition;
pub mod widgets;

pub use application::{Application, ApplicationId};
pub use error::MenuError;
pub use framebuffer::FrameBuffer;
pub use input::{Button, dispatch_button};
pub use menu::{ActionResult, Item, ItemKind, Menu, MenuPage, MenuWidget};
pub use transition::{FixedFps, FpsController};
