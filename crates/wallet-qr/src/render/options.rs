//! Render options: error correction, module size, quiet zone and colors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ExportError, Result};

/// Largest accepted module size in pixels
pub const MAX_MODULE_SIZE: u32 = 32;

/// Largest accepted quiet zone in modules
pub const MAX_BORDER: u32 = 16;

/// Largest rendered image edge in pixels
pub const MAX_IMAGE_SIDE: u32 = 4096;

/// QR error-correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorCorrection {
    /// ~7% damage tolerance
    #[serde(rename = "L")]
    Low,
    /// ~15% damage tolerance
    #[default]
    #[serde(rename = "M")]
    Medium,
    /// ~25% damage tolerance
    #[serde(rename = "Q")]
    Quartile,
    /// ~30% damage tolerance
    #[serde(rename = "H")]
    High,
}

impl From<ErrorCorrection> for qrcode::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => qrcode::EcLevel::L,
            ErrorCorrection::Medium => qrcode::EcLevel::M,
            ErrorCorrection::Quartile => qrcode::EcLevel::Q,
            ErrorCorrection::High => qrcode::EcLevel::H,
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::Low => "L",
            Self::Medium => "M",
            Self::Quartile => "Q",
            Self::High => "H",
        };
        f.write_str(letter)
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(Self::Low),
            "M" | "MEDIUM" => Ok(Self::Medium),
            "Q" | "QUARTILE" => Ok(Self::Quartile),
            "H" | "HIGH" => Ok(Self::High),
            other => Err(format!(
                "unknown error-correction level '{}' (expected L, M, Q or H)",
                other
            )),
        }
    }
}

/// RGB color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const WHITE: Color = Color([255, 255, 255]);
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        let bytes =
            hex::decode(digits).map_err(|e| format!("invalid color '{}': {}", s, e))?;
        let rgb: [u8; 3] = bytes
            .try_into()
            .map_err(|_| format!("invalid color '{}': expected #rrggbb", s))?;
        Ok(Self(rgb))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.0))
    }
}

/// How the QR symbol is rasterized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Error-correction level (default M)
    pub error_correction: ErrorCorrection,
    /// Pixels per module edge
    pub module_size: u32,
    /// Quiet zone width in modules
    pub border: u32,
    /// Dark module color
    pub foreground: Color,
    /// Light module and quiet zone color
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::Medium,
            module_size: 10,
            border: 4,
            foreground: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

impl RenderOptions {
    /// Check the options describe a drawable two-color symbol
    pub fn validate(&self) -> Result<()> {
        if self.module_size == 0 || self.module_size > MAX_MODULE_SIZE {
            return Err(ExportError::Settings(format!(
                "module size must be between 1 and {} pixels, got {}",
                MAX_MODULE_SIZE, self.module_size
            )));
        }
        if self.border > MAX_BORDER {
            return Err(ExportError::Settings(format!(
                "border must be at most {} modules, got {}",
                MAX_BORDER, self.border
            )));
        }
        if self.foreground == self.background {
            return Err(ExportError::Settings(
                "foreground and background colors must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Edge length in pixels of the image for a symbol `modules` wide
    pub fn image_side(&self, modules: u32) -> Result<u32> {
        let side = (modules + 2 * self.border) * self.module_size;
        if side > MAX_IMAGE_SIDE {
            return Err(ExportError::Settings(format!(
                "image would be {}px wide (limit {}px) - lower the module size or border",
                side, MAX_IMAGE_SIDE
            )));
        }
        Ok(side)
    }
}
