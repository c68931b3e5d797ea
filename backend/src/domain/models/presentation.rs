//! Cosmetic display settings of an identity card. No security meaning.
use serde::{Deserialize, Serialize};
use shared::{DashboardLayout, ThemeColor, ThemePattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationConfig {
    pub color: ThemeColor,
    pub pattern: ThemePattern,
    pub layout: DashboardLayout,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            color: ThemeColor::Indigo,
            pattern: ThemePattern::Abstract,
            layout: DashboardLayout::Grid,
        }
    }
}
