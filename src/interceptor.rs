//! Resize interception via window subclassing.
//!
//! A subclass procedure registered under a fixed identity token watches the
//! target window's message stream. Only resize-in-progress notifications are
//! acted on; everything else forwards to the window's previous handling
//! chain. The registered handler rides in the subclass reference data, so
//! the per-message hot path reads one pointer and touches no process-wide
//! state.

use crate::geometry::{Rect, ResizeEdge};
#[cfg(not(target_os = "windows"))]
use crate::locator::WindowRef;

/// Capability interface the interceptor drives.
///
/// `resize_in_progress` receives the dragged handle and the proposed
/// rectangle and may rewrite the rectangle in place. Returning `true`
/// reports the rectangle as modified to the window manager so the change
/// takes effect visually during the drag; returning `false` leaves the
/// notification to the default chain. Default handling of every other
/// message stays with the window's existing procedure.
pub trait ResizeHandler: Send + Sync {
    fn resize_in_progress(&self, edge: ResizeEdge, rect: &mut Rect) -> bool;
}

/// Owns the handler for the lifetime of one attachment.
///
/// The subclass reference data points at this heap allocation, so the hook
/// must stay boxed and unmoved from attach until after detach. The session
/// guarantees that ordering.
pub struct Hook {
    #[cfg_attr(not(target_os = "windows"), allow(dead_code))]
    handler: Box<dyn ResizeHandler>,
}

impl Hook {
    pub fn new(handler: Box<dyn ResizeHandler>) -> Box<Self> {
        Box::new(Self { handler })
    }
}

#[cfg(target_os = "windows")]
mod imp {
    use super::Hook;
    use crate::geometry::{Rect, ResizeEdge};
    use crate::locator::WindowRef;
    use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
    use windows::Win32::UI::Controls::{
        InitCommonControlsEx, ICC_STANDARD_CLASSES, INITCOMMONCONTROLSEX,
    };
    use windows::Win32::UI::Shell::{DefSubclassProc, RemoveWindowSubclass, SetWindowSubclass};
    use windows::Win32::UI::WindowsAndMessaging::WM_SIZING;

    /// Identity token for this crate's subclass registration ("ASPL"). Any
    /// fixed value works as long as it cannot collide with other
    /// subclassers of the same window; it doubles as the deregistration key.
    const SUBCLASS_ID: usize = 0x4153_504C;

    unsafe extern "system" fn resize_subclass_proc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
        _subclass_id: usize,
        ref_data: usize,
    ) -> LRESULT {
        if msg == WM_SIZING && ref_data != 0 && lparam.0 != 0 {
            if let Some(edge) = ResizeEdge::from_wmsz(wparam.0 as u32) {
                let hook = unsafe { &*(ref_data as *const Hook) };
                let proposal = unsafe { &mut *(lparam.0 as *mut RECT) };
                let mut rect = Rect::new(
                    proposal.left,
                    proposal.top,
                    proposal.right,
                    proposal.bottom,
                );
                if hook.handler.resize_in_progress(edge, &mut rect) {
                    proposal.left = rect.left;
                    proposal.top = rect.top;
                    proposal.right = rect.right;
                    proposal.bottom = rect.bottom;
                    // Non-zero tells the window manager the rectangle was
                    // rewritten and must be used for this drag step.
                    return LRESULT(1);
                }
            }
        }
        unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) }
    }

    /// Register the subclass on `window`. Must run on the thread that owns
    /// the window. Fails when the OS rejects the registration.
    pub fn attach(window: WindowRef, hook: &Hook) -> bool {
        let hwnd = HWND(window.0 as *mut core::ffi::c_void);

        // SetWindowSubclass lives in comctl32; make sure it is initialized
        // before the first registration.
        let icc = INITCOMMONCONTROLSEX {
            dwSize: std::mem::size_of::<INITCOMMONCONTROLSEX>() as u32,
            dwICC: ICC_STANDARD_CLASSES,
        };
        let _ = unsafe { InitCommonControlsEx(&icc) };

        unsafe {
            SetWindowSubclass(
                hwnd,
                Some(resize_subclass_proc),
                SUBCLASS_ID,
                hook as *const Hook as usize,
            )
        }
        .as_bool()
    }

    /// Remove the subclass registration. Idempotent; failure (typically the
    /// window is already gone) is ignored.
    pub fn detach(window: WindowRef) {
        let hwnd = HWND(window.0 as *mut core::ffi::c_void);
        let _ = unsafe {
            RemoveWindowSubclass(hwnd, Some(resize_subclass_proc), SUBCLASS_ID)
        };
    }
}

#[cfg(target_os = "windows")]
pub use imp::{attach, detach};

#[cfg(not(target_os = "windows"))]
pub fn attach(_window: WindowRef, _hook: &Hook) -> bool {
    false
}

#[cfg(not(target_os = "windows"))]
pub fn detach(_window: WindowRef) {}
