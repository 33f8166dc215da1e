pub use ::log::{debug, error, info, trace, warn};

#[macro_export]
macro_rules! fatal {
    ($($args:tt)*) => {
        $crate::log::error!("Got fatal error: {}", format!($($args)*));
        panic!($($args)*);
    }
}

pub use crate::fatal;

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "out of cheese")]
    fn fatal_panics() {
        crate::log::fatal!("out of {}", "cheese");
    }
}
