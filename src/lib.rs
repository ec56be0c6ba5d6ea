//! Aspect-Ratio Lock
//!
//! This crate sits between the OS window-manager resize protocol and a host
//! application's window: while installed, every in-progress drag-resize
//! proposal is rewritten so the window keeps a fixed width/height ratio,
//! visibly during the drag rather than on release.
//!
//! # Architecture
//!
//! One component, four seams:
//!
//! 1. The locator finds the process's visible, unowned top-level window.
//! 2. The interceptor subclasses that window and routes resize-in-progress
//!    notifications through a registered handler; everything else forwards
//!    to the previous handling chain.
//! 3. The corrector is a pure function from a proposed rectangle and the
//!    dragged handle to the ratio-honoring rectangle.
//! 4. The session owns the handle, the ratio and the hook between install
//!    and uninstall.
//!
//! Built as both `rlib` and `cdylib`: foreign hosts (a game engine loading
//! a native plugin, say) call the three `AspectLock_*` C exports, while
//! Rust hosts use [`install`] or [`install_for`] directly.
//!
//! # Usage
//!
//! ```ignore
//! // Rust host that already owns a window (winit, baseview, ...):
//! aspect_lock::install_for(&window, 16.0, 9.0)?;
//!
//! // Host with a window created elsewhere in the process:
//! if aspect_lock::install(16.0, 9.0).is_ok() {
//!     // dragging any edge or corner now keeps 16:9
//! }
//! ```

mod ffi;
mod geometry;
mod interceptor;
mod locator;
mod session;

pub use geometry::{apply_aspect, AspectRatio, Rect, ResizeEdge};
pub use locator::{find_main_window, WindowRef};
pub use session::{install, install_for, is_installed, uninstall, InstallError};
