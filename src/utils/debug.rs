use once_cell::sync::Lazy;

/// Global debug mode flag, initialized once at startup
pub static DEBUG_MODE: Lazy<bool> = Lazy::new(|| std::env::var("WLSIZE_DEBUG").is_ok());

/// Conditional debug output macro
///
/// Prints to stderr only when `WLSIZE_DEBUG` is set, so the calculator can be
/// traced without touching stdout.
///
/// # Examples
///
/// ```
/// use workload_sizer::debug_println;
///
/// let free_scan_quota = 80.0;
/// debug_println!("free scan quota: {}", free_scan_quota);
/// ```
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if *$crate::utils::debug::DEBUG_MODE {
            eprintln!($($arg)*);
        }
    };
}

/// Re-export for internal use
pub use debug_println;
