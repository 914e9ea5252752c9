// src/flash.rs
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Danger,
}

impl FlashKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Danger => "danger",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(FlashKind::Success),
            "danger" => Some(FlashKind::Danger),
            _ => None,
        }
    }
}

/// One-shot message carried across a redirect in the `flash` cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Danger,
            message: message.into(),
        }
    }

    pub fn set_cookie(&self) -> String {
        let payload = format!("{}\n{}", self.kind.as_str(), self.message);
        format!(
            "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    pub fn clear_cookie() -> String {
        format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }

    /// Decode a cookie value. Anything malformed is dropped.
    pub fn from_cookie(value: &str) -> Option<Self> {
        let raw = URL_SAFE_NO_PAD.decode(value.trim()).ok()?;
        let text = String::from_utf8(raw).ok()?;
        let (kind, message) = text.split_once('\n')?;
        Some(Self {
            kind: FlashKind::parse(kind)?,
            message: message.to_string(),
        })
    }
}
