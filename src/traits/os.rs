//! Operating system detection abstraction for testability.
//!
//! Provides a trait for reading the host OS so tests can pose as any
//! platform.

/// Abstraction over host platform detection.
pub trait OsProvider: Send + Sync {
    /// Name of the operating system, in the form of `std::env::consts::OS`
    /// (`"windows"`, `"macos"`, `"linux"`, ...).
    fn os_name(&self) -> String;

    /// CPU architecture, in the form of `std::env::consts::ARCH`.
    fn arch(&self) -> String {
        std::env::consts::ARCH.to_string()
    }
}

/// Real implementation reading the compile-time target constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealOsProvider;

impl RealOsProvider {
    pub fn new() -> Self {
        Self
    }
}

impl OsProvider for RealOsProvider {
    fn os_name(&self) -> String {
        std::env::consts::OS.to_string()
    }
}

/// Mock implementation for testing with a fixed platform.
#[cfg(test)]
pub use mock::MockOsProvider;

#[cfg(test)]
mod mock {
    use super::*;

    #[derive(Debug, Clone)]
    pub struct MockOsProvider {
        os: String,
    }

    impl MockOsProvider {
        pub fn new(os: impl Into<String>) -> Self {
            Self { os: os.into() }
        }

        pub fn windows() -> Self {
            Self::new("windows")
        }

        pub fn macos() -> Self {
            Self::new("macos")
        }

        pub fn linux() -> Self {
            Self::new("linux")
        }
    }

    impl OsProvider for MockOsProvider {
        fn os_name(&self) -> String {
            self.os.clone()
        }
    }
}
