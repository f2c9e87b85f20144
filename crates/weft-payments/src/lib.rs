//! weft-payments: the PayPal section of the payments settings page.
//!
//! - `model` - connection state as sent by the server
//! - `section` - which variant of the section to show and its controls
//! - `disconnect` - the disconnect request, with injected HTTP, alert and reload services
//!
//! Eligibility and account linking are decided by the server; this crate
//! only reflects them.

pub mod disconnect;
pub mod model;
pub mod section;

pub use disconnect::{
    AlertLevel, DisconnectOutcome, HttpClient, Notifier, PageReloader, disconnect_paypal,
};
#[cfg(feature = "reqwest")]
pub use disconnect::WeftHttpClient;
pub use model::{DisconnectResponse, PayPalConnect};
pub use section::{ConnectButton, DisconnectButton, PayPalSection, SectionState};
