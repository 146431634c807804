/// Macros for timestamped console logging.
/// In the browser these wrap gloo_console and prefix every line with `Date.now()`.
/// Native builds (unit tests) have no JS host, so the same call sites are routed
/// through `tracing` instead.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), $fmt));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!("{}", $fmt);
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!("{}", format!($fmt, $($arg)*));
    }};
}

#[macro_export]
macro_rules! console_log {
    ($fmt:expr) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::log!(format!("[{}] {}", js_sys::Date::now(), $fmt));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::trace!("{}", $fmt);
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::log!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::trace!("{}", format!($fmt, $($arg)*));
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), $fmt));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!("{}", $fmt);
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!("{}", format!($fmt, $($arg)*));
    }};
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), $fmt));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::error!("{}", $fmt);
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::error!("{}", format!($fmt, $($arg)*));
    }};
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::debug!(format!("[{}] {}", js_sys::Date::now(), $fmt));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!("{}", $fmt);
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::debug!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!("{}", format!($fmt, $($arg)*));
    }};
}
