//! C ABI boundary.
//!
//! The three exports below are the entire foreign surface. They accept and
//! return only primitive numbers so any host capable of a C calling
//! convention can drive the lock. Failures collapse to 0 and panics never
//! cross the boundary.

use std::panic;

use crate::session;

/// Install the aspect lock for the calling process's main window.
///
/// Returns 1 on success, 0 on failure (invalid ratio, no eligible window,
/// or hook attach failure). Already installed counts as success.
#[allow(non_snake_case)]
#[no_mangle]
pub extern "C" fn AspectLock_Install(aspect_width: f32, aspect_height: f32) -> i32 {
    panic::catch_unwind(|| match session::install(aspect_width, aspect_height) {
        Ok(()) => 1,
        Err(err) => {
            tracing::debug!(%err, "install rejected");
            0
        }
    })
    .unwrap_or(0)
}

/// Remove the aspect lock. Always succeeds from the caller's perspective,
/// including when nothing is installed.
#[allow(non_snake_case)]
#[no_mangle]
pub extern "C" fn AspectLock_Uninstall() {
    let _ = panic::catch_unwind(session::uninstall);
}

/// Returns 1 while an installation is active, 0 otherwise.
#[allow(non_snake_case)]
#[no_mangle]
pub extern "C" fn AspectLock_IsInstalled() -> i32 {
    panic::catch_unwind(|| session::is_installed() as i32).unwrap_or(0)
}
