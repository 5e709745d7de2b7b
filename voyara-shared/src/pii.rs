use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wrapper for card data and other sensitive form fields. Masks the value in
/// Debug and Display output so `tracing::info!("{:?}", state)` can never leak
/// a card number, while serialization still carries the real value to the
/// form layer that owns it.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> From<T> for Masked<T> {
    fn from(value: T) -> Self {
        Masked(value)
    }
}

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl Masked<String> {
    /// Last four characters, the only part of a card number safe to show back
    /// to the customer.
    pub fn last4(&self) -> &str {
        let len = self.0.len();
        &self.0[len.saturating_sub(4)..]
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
