//! Payload builders: pure string templating for the formats QR scanners
//! understand. Empty output means "nothing to encode" and suppresses
//! generation upstream.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::AppError;
use crate::core::models::PayloadSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WifiSecurity {
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    Nopass,
}

impl Default for WifiSecurity {
    fn default() -> Self {
        WifiSecurity::Wpa
    }
}

impl FromStr for WifiSecurity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wpa" => Ok(WifiSecurity::Wpa),
            "wep" => Ok(WifiSecurity::Wep),
            "nopass" => Ok(WifiSecurity::Nopass),
            other => Err(AppError::Unknown(format!(
                "unknown wifi security '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for WifiSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            WifiSecurity::Wpa => "WPA",
            WifiSecurity::Wep => "WEP",
            WifiSecurity::Nopass => "nopass",
        };
        write!(f, "{}", token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiNetwork {
    pub ssid: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub security: WifiSecurity,
    #[serde(default)]
    pub hidden: bool,
}

impl WifiNetwork {
    /// Builds a `WIFI:` credential string.
    ///
    /// Grammar: `WIFI:T:<security>;S:<ssid>;[P:<password>;][H:true;];`
    /// The password segment is omitted when empty or when security is
    /// `nopass`; the trailing `;;` is always present. An empty ssid yields
    /// an empty string.
    pub fn to_payload(&self) -> String {
        let ssid = self.ssid.trim();
        if ssid.is_empty() {
            return String::new();
        }

        let mut out = format!("WIFI:T:{};S:{};", self.security, ssid);
        if !self.password.is_empty() && self.security != WifiSecurity::Nopass {
            out.push_str(&format!("P:{};", self.password));
        }
        if self.hidden {
            out.push_str("H:true;");
        }
        out.push(';');
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactCard {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub website: String,
}

impl ContactCard {
    /// Builds a minimal vCard 3.0 record, emitting lines only for non-empty
    /// fields. Requires at least one of name/phone/email; otherwise yields
    /// an empty string.
    pub fn to_payload(&self) -> String {
        let name = self.name.trim();
        let phone = self.phone.trim();
        let email = self.email.trim();
        let company = self.company.trim();
        let website = self.website.trim();

        if name.is_empty() && phone.is_empty() && email.is_empty() {
            return String::new();
        }

        let mut vcard = String::from("BEGIN:VCARD\nVERSION:3.0\n");
        if !name.is_empty() {
            vcard.push_str(&format!("FN:{}\n", name));
        }
        if !phone.is_empty() {
            vcard.push_str(&format!("TEL:{}\n", phone));
        }
        if !email.is_empty() {
            vcard.push_str(&format!("EMAIL:{}\n", email));
        }
        if !company.is_empty() {
            vcard.push_str(&format!("ORG:{}\n", company));
        }
        if !website.is_empty() {
            vcard.push_str(&format!("URL:{}\n", website));
        }
        vcard.push_str("END:VCARD");
        vcard
    }
}

/// Resolves any payload kind to the text handed to the encoder.
pub fn build_payload(spec: &PayloadSpec) -> String {
    match spec {
        PayloadSpec::Text { text } => text.trim().to_string(),
        PayloadSpec::Wifi(wifi) => wifi.to_payload(),
        PayloadSpec::Contact(contact) => contact.to_payload(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wifi_nopass_omits_password() {
        let wifi = WifiNetwork {
            ssid: "Home".to_string(),
            password: "x".to_string(),
            security: WifiSecurity::Nopass,
            hidden: false,
        };
        assert_eq!(wifi.to_payload(), "WIFI:T:nopass;S:Home;;");
    }

    #[test]
    fn test_wifi_wpa_hidden() {
        let wifi = WifiNetwork {
            ssid: "Office".to_string(),
            password: "secret1".to_string(),
            security: WifiSecurity::Wpa,
            hidden: true,
        };
        assert_eq!(wifi.to_payload(), "WIFI:T:WPA;S:Office;P:secret1;H:true;;");
    }

    #[test]
    fn test_wifi_empty_password_omits_segment() {
        let wifi = WifiNetwork {
            ssid: "Cafe".to_string(),
            password: String::new(),
            security: WifiSecurity::Wep,
            hidden: false,
        };
        assert_eq!(wifi.to_payload(), "WIFI:T:WEP;S:Cafe;;");
    }

    #[test]
    fn test_wifi_empty_ssid_suppresses_output() {
        let wifi = WifiNetwork {
            ssid: "   ".to_string(),
            password: "secret".to_string(),
            security: WifiSecurity::Wpa,
            hidden: true,
        };
        assert_eq!(wifi.to_payload(), "");
    }

    #[test]
    fn test_wifi_ssid_is_trimmed() {
        let wifi = WifiNetwork {
            ssid: "  Home  ".to_string(),
            password: String::new(),
            security: WifiSecurity::Nopass,
            hidden: false,
        };
        assert_eq!(wifi.to_payload(), "WIFI:T:nopass;S:Home;;");
    }

    #[test]
    fn test_contact_name_and_email_only() {
        let contact = ContactCard {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            contact.to_payload(),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nEMAIL:jane@x.com\nEND:VCARD"
        );
    }

    #[test]
    fn test_contact_all_fields() {
        let contact = ContactCard {
            name: "Jane Doe".to_string(),
            phone: "+1 555 0100".to_string(),
            email: "jane@x.com".to_string(),
            company: "Acme".to_string(),
            website: "https://acme.test".to_string(),
        };
        assert_eq!(
            contact.to_payload(),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nTEL:+1 555 0100\nEMAIL:jane@x.com\nORG:Acme\nURL:https://acme.test\nEND:VCARD"
        );
    }

    #[test]
    fn test_contact_all_empty_suppresses_output() {
        assert_eq!(ContactCard::default().to_payload(), "");
    }

    #[test]
    fn test_contact_company_alone_is_not_enough() {
        // A card with only ORG would be useless to a scanner; at least one
        // of name/phone/email is required.
        let contact = ContactCard {
            company: "Acme".to_string(),
            ..Default::default()
        };
        assert_eq!(contact.to_payload(), "");
    }

    #[test]
    fn test_build_payload_trims_text() {
        let spec = PayloadSpec::Text {
            text: "  https://example.com  ".to_string(),
        };
        assert_eq!(build_payload(&spec), "https://example.com");
    }

    #[test]
    fn test_build_payload_empty_text() {
        let spec = PayloadSpec::Text {
            text: "   ".to_string(),
        };
        assert_eq!(build_payload(&spec), "");
    }

    #[test]
    fn test_wifi_security_parsing() {
        assert_eq!("WPA".parse::<WifiSecurity>().unwrap(), WifiSecurity::Wpa);
        assert_eq!("wep".parse::<WifiSecurity>().unwrap(), WifiSecurity::Wep);
        assert_eq!(
            "nopass".parse::<WifiSecurity>().unwrap(),
            WifiSecurity::Nopass
        );
        assert!("wpa3-enterprise".parse::<WifiSecurity>().is_err());
    }
}
