use std::{fmt, str::FromStr};

use crate::foundation::error::{LcmError, LcmResult};

macro_rules! screen_names {
    ($($variant:ident => $name:literal,)+) => {
        /// Named display state of the device GUI.
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
            serde::Deserialize,
        )]
        pub enum ScreenName {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl ScreenName {
            /// Every screen the GUI knows about, in wire-name order.
            pub const ALL: &'static [ScreenName] = &[$(ScreenName::$variant,)+];

            /// Name as it appears in the configuration document.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(ScreenName::$variant => $name,)+
                }
            }
        }
    };
}

screen_names! {
    BeRightThere => "BE_RIGHT_THERE",
    Blank => "BLANK",
    ConnectingWifi => "CONNECTING_WIFI",
    DoNotDisturb => "DO_NOT_DISTURB",
    DoorLocked => "DOOR_LOCKED",
    DoorUnlocked => "DOOR_UNLOCKED",
    FactoryResetting => "FACTORY_RESETTING",
    FingerprintErrorBig => "FINGERPRINT_ERROR_BIG",
    FingerprintErrorMiddle => "FINGERPRINT_ERROR_MIDDLE",
    FingerprintRecognized => "FINGERPRINT_RECOGNIZED",
    FingerprintScanFinger => "FINGERPRINT_SCAN_FINGER",
    FingerprintScanningFinger => "FINGERPRINT_SCANNING_FINGER",
    Initializing => "INITIALIZING",
    InsufficientPower => "INSUFFICIENT_POWER",
    LeavePackageAtDoor => "LEAVE_PACKAGE_AT_DOOR",
    Message => "MESSAGE",
    NfcAccessGranted => "NFC_ACCESS_GRANTED",
    NfcAccessRejected => "NFC_ACCESS_REJECTED",
    NfcCardNotSupported => "NFC_CARD_NOT_SUPPORTED",
    NfcCardRejected => "NFC_CARD_REJECTED",
    NfcConfirmCard => "NFC_CONFIRM_CARD",
    NfcConfirmPocket => "NFC_CONFIRM_POCKET",
    NfcConsoleOffline => "NFC_CONSOLE_OFFLINE",
    NfcPlaceCard => "NFC_PLACE_CARD",
    NfcPocketRejected => "NFC_POCKET_REJECTED",
    NfcRegisterError => "NFC_REGISTER_ERROR",
    NfcRegisteredOtherSite => "NFC_REGISTERED_OTHER_SITE",
    NfcScanCardAgain => "NFC_SCAN_CARD_AGAIN",
    NoConnectionKnock => "NO_CONNECTION_KNOCK",
    NoWifiInRange => "NO_WIFI_IN_RANGE",
    Offline => "OFFLINE",
    OpenMobileApp => "OPEN_MOBILE_APP",
    PairComplete => "PAIR_COMPLETE",
    PairFailed => "PAIR_FAILED",
    Pairing => "PAIRING",
    PoorWifiSignal => "POOR_WIFI_SIGNAL",
    ResetHold => "RESET_HOLD",
    Restarting => "RESTARTING",
    SetupComplete => "SETUP_COMPLETE",
    ShuttingDownCount => "SHUTTING_DOWN_COUNT",
    ShuttingDown => "SHUTTING_DOWN",
    Talking => "TALKING",
    Unconfigured => "UNCONFIGURED",
    UpdatingFirmware => "UPDATING_FIRMWARE",
    UpdatingMcu => "UPDATING_MCU",
    WaitingForResponse => "WAITING_FOR_RESPONSE",
    WelcomeText => "WELCOME_TEXT",
    Welcome => "WELCOME",
    WifiReconfigure => "WIFI_RECONFIGURE",
}

impl FromStr for ScreenName {
    type Err = LcmError;

    fn from_str(s: &str) -> LcmResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| {
                LcmError::input(format!("'{s}' is not a valid screen name"))
            })
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/screen.rs"]
mod tests;
