//! log macro's for campus logging

/// Writes a debug! message to the app::campus logger
#[macro_export]
macro_rules! campus_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::campus", $($arg)+)
    };
}

/// Writes an info! message to the app::campus logger
#[macro_export]
macro_rules! campus_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::campus", $($arg)+)
    };
}

/// Writes an warn! message to the app::campus logger
#[macro_export]
macro_rules! campus_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::campus", $($arg)+)
    };
}

/// Writes an error! message to the app::campus logger
#[macro_export]
macro_rules! campus_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::campus", $($arg)+)
    };
}
