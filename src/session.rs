//! Lock session: the process-wide installation lifecycle.
//!
//! Install creates one owned session (window handle, locked ratio, live
//! hook); uninstall tears it down. The three fields live and die together,
//! so "installed" is simply "a session exists".
//!
//! All of install/uninstall/is_installed are expected on the UI thread that
//! owns the window's messages, like the rest of the window machinery. The
//! mutex around the session slot exists to satisfy `static` requirements
//! and stays uncontended under that discipline; resize callbacks never
//! take it.

use std::sync::Mutex;

use raw_window_handle::{HasRawWindowHandle, RawWindowHandle};

use crate::geometry::{apply_aspect, AspectRatio, Rect, ResizeEdge};
use crate::interceptor::{self, Hook, ResizeHandler};
use crate::locator::{self, WindowRef};

/// Ways an install can fail. Each is reported once, locally; nothing is
/// left half-installed.
#[derive(Debug)]
pub enum InstallError {
    /// Aspect inputs were zero, negative or non-finite.
    InvalidAspect,
    /// No visible, unowned top-level window belongs to this process.
    NoWindow,
    /// The OS rejected the resize-hook registration.
    Attach,
}

impl std::fmt::Display for InstallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAspect => write!(f, "aspect inputs must be positive and finite"),
            Self::NoWindow => write!(f, "no eligible top-level window for this process"),
            Self::Attach => write!(f, "failed to attach the resize hook"),
        }
    }
}

impl std::error::Error for InstallError {}

/// The constraint the interceptor drives on every resize step.
struct AspectConstraint {
    aspect: AspectRatio,
}

impl ResizeHandler for AspectConstraint {
    fn resize_in_progress(&self, edge: ResizeEdge, rect: &mut Rect) -> bool {
        apply_aspect(rect, edge, self.aspect)
    }
}

/// One installation. The hook box is what the subclass reference data
/// points at; it must outlive the attachment, which uninstall guarantees by
/// detaching before the session drops.
struct LockSession {
    window: WindowRef,
    _hook: Box<Hook>,
}

static SESSION: Mutex<Option<LockSession>> = Mutex::new(None);

/// Install the aspect lock on this process's main window.
///
/// Discovers the window, attaches the resize hook and stores the session.
/// Idempotent: a second install while one is active succeeds without
/// re-attaching. Fails without side effects on invalid inputs, when no
/// eligible window exists, or when the hook cannot be attached.
pub fn install(aspect_width: f32, aspect_height: f32) -> Result<(), InstallError> {
    let mut slot = SESSION.lock().unwrap();
    if slot.is_some() {
        tracing::debug!("aspect lock already installed, leaving it in place");
        return Ok(());
    }

    let aspect =
        AspectRatio::new(aspect_width, aspect_height).ok_or(InstallError::InvalidAspect)?;
    let window =
        locator::find_main_window(std::process::id()).ok_or(InstallError::NoWindow)?;
    attach_session(&mut slot, window, aspect)
}

/// Install the aspect lock on a window the host already owns, skipping
/// discovery. The handle must be a Win32 window belonging to this process;
/// any other handle kind fails like a missing window.
pub fn install_for(
    window: &impl HasRawWindowHandle,
    aspect_width: f32,
    aspect_height: f32,
) -> Result<(), InstallError> {
    let mut slot = SESSION.lock().unwrap();
    if slot.is_some() {
        tracing::debug!("aspect lock already installed, leaving it in place");
        return Ok(());
    }

    let aspect =
        AspectRatio::new(aspect_width, aspect_height).ok_or(InstallError::InvalidAspect)?;
    let window = match window.raw_window_handle() {
        RawWindowHandle::Win32(handle) => WindowRef(handle.hwnd as isize),
        _ => return Err(InstallError::NoWindow),
    };
    attach_session(&mut slot, window, aspect)
}

fn attach_session(
    slot: &mut Option<LockSession>,
    window: WindowRef,
    aspect: AspectRatio,
) -> Result<(), InstallError> {
    let hook = Hook::new(Box::new(AspectConstraint { aspect }));
    if !interceptor::attach(window, &hook) {
        tracing::warn!("resize hook attach failed");
        return Err(InstallError::Attach);
    }

    tracing::info!(ratio = aspect.value(), "aspect lock installed");
    *slot = Some(LockSession {
        window,
        _hook: hook,
    });
    Ok(())
}

/// Tear down the active installation, if any. Detach is best-effort: the
/// window may already have been destroyed externally, which is fine.
pub fn uninstall() {
    let mut slot = SESSION.lock().unwrap();
    if let Some(session) = slot.take() {
        interceptor::detach(session.window);
        tracing::info!("aspect lock removed");
    }
}

/// Whether an installation is currently active. No side effects.
pub fn is_installed() -> bool {
    SESSION.lock().unwrap().is_some()
}
