//! What the PayPal settings section shows.
//!
//! `PayPalSection::build` turns the server's [`PayPalConnect`] state into a
//! toolkit-agnostic description of the section. Rendering it is left to the
//! caller.

use serde::Serialize;
use weft_common::Routes;

use crate::model::PayPalConnect;

pub const HEADING: &str = "PayPal";
pub const LEARN_MORE: &str = "Learn more";
pub const CONNECT_LABEL: &str = "Connect with Paypal";
pub const DISCONNECT_LABEL: &str = "Disconnect PayPal account";
pub const ACCOUNT_LABEL: &str = "PayPal account";

pub const REQUIREMENTS_HEADING: &str =
    "You must meet the following requirements in order to connect a PayPal account:";
pub const REQUIREMENTS: [&str; 3] = [
    "Your account must be marked as compliant",
    "You must have earned at least $100",
    "You must have received at least one successful payout",
];

pub const DISCONNECT_BLOCKED_WARNING: &str = "You cannot disconnect your PayPal account because it is being used for active subscription or preorder payments.";
pub const MISSING_PERMISSIONS_WARNING: &str = "Your PayPal account connect with Gumroad is incomplete because of missing permissions. Please try connecting again and grant the requested permissions.";

/// Intro paragraph for sellers without a linked account.
pub fn intro_text(unsupported_countries: &[String]) -> String {
    format!(
        "Connecting a personal or business PayPal account will allow you to accept payments with PayPal. \
         Each purchase made with PayPal will be deposited into your PayPal account immediately. \
         Payments via PayPal are supported in every country except {}.",
        unsupported_countries.join(", ")
    )
}

/// The PayPal section of the payments settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayPalSection {
    pub help_href: String,
    pub fee_info: String,
    pub state: SectionState,
}

/// Which variant of the section applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionState {
    /// No linked account.
    NotConnected {
        intro: String,
        connect: Option<ConnectButton>,
    },
    /// Linked and verified.
    Verified {
        merchant_id: String,
        disconnect: Option<DisconnectButton>,
    },
    /// Linked but the processor did not grant the needed permissions.
    Incomplete { connect: Option<ConnectButton> },
}

/// The "Connect with Paypal" link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectButton {
    pub href: String,
    /// Link is present but not interactive.
    pub inert: bool,
    /// Show [`REQUIREMENTS_HEADING`] and [`REQUIREMENTS`] below the link.
    pub show_requirements: bool,
}

/// The "Disconnect PayPal account" button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisconnectButton {
    pub disabled: bool,
    /// Show [`DISCONNECT_BLOCKED_WARNING`] below the button.
    pub show_blocked_warning: bool,
}

impl PayPalSection {
    pub fn build(
        connect: &PayPalConnect,
        is_form_disabled: bool,
        fee_info: impl Into<String>,
        routes: &Routes,
    ) -> Self {
        let connect_button = || {
            connect.show_paypal_connect.then(|| ConnectButton {
                href: routes.connect_paypal_path(),
                inert: is_form_disabled || !connect.allow_paypal_connect,
                show_requirements: !connect.allow_paypal_connect,
            })
        };

        let state = match connect.merchant_id() {
            None => SectionState::NotConnected {
                intro: intro_text(&connect.unsupported_countries),
                connect: connect_button(),
            },
            Some(merchant_id) if connect.charge_processor_verified => SectionState::Verified {
                merchant_id: merchant_id.to_owned(),
                disconnect: connect.show_paypal_connect.then(|| DisconnectButton {
                    disabled: is_form_disabled || !connect.paypal_disconnect_allowed,
                    show_blocked_warning: !connect.paypal_disconnect_allowed,
                }),
            },
            Some(_) => SectionState::Incomplete {
                connect: connect_button(),
            },
        };

        Self {
            help_href: routes.paypal_help_article.clone(),
            fee_info: fee_info.into(),
            state,
        }
    }

    /// Whether the disconnect button can be clicked.
    pub fn can_disconnect(&self) -> bool {
        matches!(
            &self.state,
            SectionState::Verified { disconnect: Some(button), .. } if !button.disabled
        )
    }

    /// Whether the missing-permissions warning is shown.
    pub fn shows_missing_permissions(&self) -> bool {
        matches!(
            &self.state,
            SectionState::Incomplete { connect: Some(_) }
        )
    }
}
