//! Pulling an externally changed value into the raw buffer.

use smol_str::SmolStr;

use crate::format::external_text;
use crate::mode::DECIMAL_POINT;

/// Outcome of reconciling the raw buffer with an external value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconcile {
    /// Buffer already shows the external value.
    InSync,
    /// Buffer ends in a decimal point; the update is held back until the
    /// user moves past it.
    MidEdit,
    /// Buffer must be replaced with this text.
    Replace(SmolStr),
}

impl Reconcile {
    /// Buffer contents after applying this outcome to `current`.
    pub fn into_buffer(self, current: &str) -> SmolStr {
        match self {
            Reconcile::Replace(text) => text,
            Reconcile::InSync | Reconcile::MidEdit => SmolStr::from(current),
        }
    }
}

/// A buffer ending in a decimal point is an in-progress decimal.
pub fn is_mid_edit(buffer: &str) -> bool {
    buffer.ends_with(DECIMAL_POINT)
}

/// Decide how the buffer follows a new external value.
pub fn reconcile(external: Option<f64>, buffer: &str) -> Reconcile {
    let text = external_text(external);
    if text == buffer {
        Reconcile::InSync
    } else if is_mid_edit(buffer) {
        Reconcile::MidEdit
    } else {
        Reconcile::Replace(text)
    }
}

/// The buffer after reconciling with `external`.
pub fn reconciled_buffer(external: Option<f64>, buffer: &str) -> SmolStr {
    reconcile(external, buffer).into_buffer(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_sync() {
        assert_eq!(reconcile(Some(12.0), "12"), Reconcile::InSync);
        assert_eq!(reconcile(None, ""), Reconcile::InSync);
    }

    #[test]
    fn test_replace() {
        assert_eq!(reconcile(Some(7.0), "12"), Reconcile::Replace("7".into()));
        assert_eq!(reconcile(None, "12"), Reconcile::Replace("".into()));
        assert_eq!(reconciled_buffer(Some(0.25), ""), "0.25");
    }

    #[test]
    fn test_trailing_point_holds_back_update() {
        assert_eq!(reconcile(Some(12.0), "12."), Reconcile::MidEdit);
        assert_eq!(reconcile(Some(99.0), "12."), Reconcile::MidEdit);
        assert_eq!(reconciled_buffer(Some(12.0), "12."), "12.");
        assert_eq!(reconciled_buffer(None, "."), ".");
    }

    #[test]
    fn test_leading_zeros_are_replaced() {
        // "007" and 7 differ as text, so an external change rewrites it.
        assert_eq!(reconciled_buffer(Some(7.0), "007"), "7");
    }
}
