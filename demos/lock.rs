//! Manual harness: opens a bare top-level window, locks it to 16:9 and lets
//! you drag the edges and corners to feel the constraint.
//!
//! Run with: cargo run --example lock

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    app::run();
}

#[cfg(target_os = "windows")]
mod app {
    use windows::core::w;
    use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
    use windows::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows::Win32::UI::WindowsAndMessaging::{
        CreateWindowExW, DefWindowProcW, DispatchMessageW, GetMessageW, PostQuitMessage,
        RegisterClassW, TranslateMessage, CW_USEDEFAULT, MSG, WINDOW_EX_STYLE, WM_DESTROY,
        WNDCLASSW, WS_OVERLAPPEDWINDOW, WS_VISIBLE,
    };

    unsafe extern "system" fn wnd_proc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        if msg == WM_DESTROY {
            unsafe { PostQuitMessage(0) };
            return LRESULT(0);
        }
        unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
    }

    pub fn run() {
        let class_name = w!("aspect_lock_demo");
        let instance = unsafe { GetModuleHandleW(None) }.expect("GetModuleHandleW failed");

        let wc = WNDCLASSW {
            lpfnWndProc: Some(wnd_proc),
            hInstance: instance.into(),
            lpszClassName: class_name,
            ..Default::default()
        };
        if unsafe { RegisterClassW(&wc) } == 0 {
            panic!("RegisterClassW failed");
        }

        let _hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                class_name,
                w!("aspect_lock demo - drag an edge"),
                WS_OVERLAPPEDWINDOW | WS_VISIBLE,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                960,
                540,
                None,
                None,
                Some(instance.into()),
                None,
            )
        }
        .expect("CreateWindowExW failed");

        match aspect_lock::install(16.0, 9.0) {
            Ok(()) => println!("16:9 lock installed, drag the window edges"),
            Err(err) => println!("install failed: {err}"),
        }

        let mut msg = MSG::default();
        while unsafe { GetMessageW(&mut msg, None, 0, 0) }.as_bool() {
            let _ = unsafe { TranslateMessage(&msg) };
            unsafe { DispatchMessageW(&msg) };
        }

        aspect_lock::uninstall();
        println!("window closed, lock removed");
    }
}

#[cfg(not(target_os = "windows"))]
mod app {
    pub fn run() {
        // Discovery has nothing to find here; show the failure path instead.
        match aspect_lock::install(16.0, 9.0) {
            Ok(()) => println!("unexpected: lock installed"),
            Err(err) => println!("nothing to lock on this platform: {err}"),
        }
    }
}
