/// Macro to return early with an error
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::error::Error::from($crate::eyre::Error::msg(format!($($arg)*))))
    };
}
