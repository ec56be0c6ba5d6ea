//! Window discovery: the visible, unowned top-level window of a process.

/// A located top-level window. The raw handle value is stored as an integer
/// so it can live in process-wide state without platform types leaking
/// upward.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRef(pub(crate) isize);

#[cfg(target_os = "windows")]
mod imp {
    use super::WindowRef;
    use windows::core::BOOL;
    use windows::Win32::Foundation::{HWND, LPARAM};
    use windows::Win32::UI::WindowsAndMessaging::{
        EnumWindows, GetWindow, GetWindowThreadProcessId, IsWindowVisible, GW_OWNER,
    };

    struct Search {
        pid: u32,
        found: Option<WindowRef>,
    }

    unsafe extern "system" fn enum_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
        let search = unsafe { &mut *(lparam.0 as *mut Search) };

        let mut pid = 0u32;
        unsafe { GetWindowThreadProcessId(hwnd, Some(&mut pid)) };
        if pid != search.pid {
            return BOOL(1);
        }
        if !unsafe { IsWindowVisible(hwnd) }.as_bool() {
            return BOOL(1);
        }
        // A window with an owner is a dialog or tool window, not the main
        // window.
        let owner = unsafe { GetWindow(hwnd, GW_OWNER) }.unwrap_or_default();
        if !owner.0.is_null() {
            return BOOL(1);
        }

        search.found = Some(WindowRef(hwnd.0 as isize));
        BOOL(0) // first match wins, stop enumerating
    }

    /// First visible, unowned top-level window owned by `pid`. No window
    /// class filtering: any true main window of the process qualifies.
    pub fn find_main_window(pid: u32) -> Option<WindowRef> {
        let mut search = Search { pid, found: None };
        // EnumWindows reports an error when the callback stops it early, so
        // its result says nothing useful; the found slot does.
        let _ = unsafe {
            EnumWindows(
                Some(enum_proc),
                LPARAM(&mut search as *mut Search as isize),
            )
        };
        search.found
    }
}

#[cfg(target_os = "windows")]
pub use imp::find_main_window;

/// Without a Win32 window manager there is never an eligible window; install
/// surfaces this as the documented discovery failure.
#[cfg(not(target_os = "windows"))]
pub fn find_main_window(_pid: u32) -> Option<WindowRef> {
    None
}
