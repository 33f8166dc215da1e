use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Information about the current invocation.
///
/// Handed to every handler. Functions are free to ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    function_name: String,
    invocation_id: String,
    invoked_at: u64,
}

impl Context {
    /// Context for the running executable.
    pub fn new() -> Self {
        let name = std::env::args()
            .next()
            .as_deref()
            .and_then(|arg0| Path::new(arg0).file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string());

        Self::for_function(name)
    }

    pub fn for_function<S: Into<String>>(function_name: S) -> Self {
        Self {
            function_name: function_name.into(),
            invocation_id: format!("{:016x}", crate::random::<u64>()),
            invoked_at: get_unix_time(),
        }
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    /// Seconds since the UNIX epoch at which the invocation started.
    pub fn invoked_at(&self) -> u64 {
        self.invoked_at
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_ids_are_hex_and_unique() {
        let first = Context::for_function("sum");
        let second = Context::for_function("sum");

        assert_eq!(first.function_name(), "sum");
        assert_eq!(first.invocation_id().len(), 16);
        assert!(first
            .invocation_id()
            .chars()
            .all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first.invocation_id(), second.invocation_id());
    }

    #[test]
    fn invocation_time_is_recent() {
        let before = get_unix_time();
        let context = Context::for_function("sum");
        assert!(context.invoked_at() >= before);
    }
}
