use core::fmt;

/// Debugging trait which is specialized for handling secret values
pub trait Strategy<T> {
    /// Format information about the secret's type.
    fn fmt(value: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Debug with type
#[derive(Debug)]
pub enum WithType {}

impl<T> Strategy<T> for WithType {
    fn fmt(_: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("*** ")?;
        fmt.write_str(std::any::type_name::<T>())?;
        fmt.write_str(" ***")
    }
}

/// Debug without type
#[derive(Debug)]
pub enum WithoutType {}

impl<T> Strategy<T> for WithoutType {
    fn fmt(_: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("*** ***")
    }
}

/// Merchant API key. Shows whether a key was supplied at all, never its content.
#[derive(Debug)]
pub enum ApiKey {}

impl<T> Strategy<T> for ApiKey
where
    T: AsRef<str>,
{
    fn fmt(value: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if value.as_ref().is_empty() {
            fmt.write_str("*** api-key: <empty> ***")
        } else {
            fmt.write_str("*** api-key ***")
        }
    }
}

/// Merchant password.
#[derive(Debug)]
pub enum Password {}

impl<T> Strategy<T> for Password
where
    T: AsRef<str>,
{
    fn fmt(value: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if value.as_ref().is_empty() {
            fmt.write_str("*** password: <empty> ***")
        } else {
            fmt.write_str("*** password ***")
        }
    }
}
