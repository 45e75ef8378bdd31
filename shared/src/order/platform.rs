//! Sales channel vocabulary

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Channel an order came in through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Momo 購物網
    Momo,
    /// 蝦皮購物
    Shopee,
    /// 官方網站
    Official,
    /// 門店
    Offline,
    /// 手動建立
    Manual,
}

/// Icon shown next to an order row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformIcon {
    ShoppingCart,
    Smartphone,
    Globe,
    Store,
    Plus,
}

impl PlatformIcon {
    /// Single-cell-ish glyph for terminal rendering
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::ShoppingCart => "🛒",
            Self::Smartphone => "📱",
            Self::Globe => "🌐",
            Self::Store => "🏪",
            Self::Plus => "➕",
        }
    }
}

/// Accent color of a platform badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformColor {
    Purple,
    Orange,
    Blue,
    Green,
    Gray,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Momo,
        Platform::Shopee,
        Platform::Official,
        Platform::Offline,
        Platform::Manual,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Momo => "momo",
            Self::Shopee => "shopee",
            Self::Official => "official",
            Self::Offline => "offline",
            Self::Manual => "manual",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Momo => "Momo",
            Self::Shopee => "蝦皮",
            Self::Official => "官網",
            Self::Offline => "門店",
            Self::Manual => "手動",
        }
    }

    pub const fn icon(&self) -> PlatformIcon {
        match self {
            Self::Momo => PlatformIcon::ShoppingCart,
            Self::Shopee => PlatformIcon::Smartphone,
            Self::Official => PlatformIcon::Globe,
            Self::Offline => PlatformIcon::Store,
            Self::Manual => PlatformIcon::Plus,
        }
    }

    pub const fn color(&self) -> PlatformColor {
        match self {
            Self::Momo => PlatformColor::Purple,
            Self::Shopee => PlatformColor::Orange,
            Self::Official => PlatformColor::Blue,
            Self::Offline => PlatformColor::Green,
            Self::Manual => PlatformColor::Gray,
        }
    }

    /// Next entry of the platform dropdown; `None` stands for "所有平台"
    pub fn cycle(current: Option<Platform>) -> Option<Platform> {
        match current {
            None => Some(Self::ALL[0]),
            Some(p) => {
                let idx = Self::ALL.iter().position(|x| *x == p).unwrap_or(0);
                Self::ALL.get(idx + 1).copied()
            }
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AppError::invalid_format("platform", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_metadata() {
        assert_eq!(Platform::Shopee.label(), "蝦皮");
        assert_eq!(Platform::Shopee.icon(), PlatformIcon::Smartphone);
        assert_eq!(Platform::Shopee.color(), PlatformColor::Orange);
        assert_eq!(Platform::Offline.icon().glyph(), "🏪");
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!("official".parse::<Platform>().unwrap(), Platform::Official);
        assert!("amazon".parse::<Platform>().is_err());

        let p: Platform = serde_json::from_str("\"momo\"").unwrap();
        assert_eq!(p, Platform::Momo);
    }

    #[test]
    fn test_platform_cycle_wraps_through_all() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..6 {
            current = Platform::cycle(current);
            seen.push(current);
        }
        assert_eq!(seen[0], Some(Platform::Momo));
        assert_eq!(seen[4], Some(Platform::Manual));
        assert_eq!(seen[5], None);
    }
}
