//! Configuration type definitions

use crate::note::ReviewType;
use serde::{Deserialize, Serialize};

/// Arbor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArborConfig {
    /// Note reconciliation settings
    #[serde(default)]
    pub reconcile: ReconcileConfig,

    /// Recall estimation settings
    #[serde(default)]
    pub recall: RecallConfig,
}

/// Settings for matching old notes to re-parsed sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// A match whose relative content change reaches this value starts a
    /// fresh note instead of inheriting history (default 0.5)
    #[serde(default = "default_content_change_threshold")]
    pub content_change_threshold: f64,
}

/// Settings for the forgetting-curve model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecallConfig {
    /// Attenuation of a parent's recall before it boosts a child (default 0.9)
    #[serde(default = "default_depth_decay")]
    pub depth_decay: f64,

    /// Days for review-derived recall to halve, per review type
    #[serde(default)]
    pub half_life_days: HalfLives,
}

/// Half-life in days for each review type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalfLives {
    #[serde(default = "default_flash_cards_half_life")]
    pub flash_cards: f64,
    #[serde(default = "default_multiple_choice_half_life")]
    pub multiple_choice: f64,
    #[serde(default = "default_open_ended_half_life")]
    pub open_ended: f64,
    #[serde(default = "default_chat_half_life")]
    pub chat: f64,
}

impl HalfLives {
    pub fn get(&self, review_type: ReviewType) -> f64 {
        match review_type {
            ReviewType::FlashCards => self.flash_cards,
            ReviewType::MultipleChoice => self.multiple_choice,
            ReviewType::OpenEnded => self.open_ended,
            ReviewType::Chat => self.chat,
        }
    }
}

pub const DEFAULT_CONTENT_CHANGE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_DEPTH_DECAY: f64 = 0.9;

fn default_content_change_threshold() -> f64 {
    DEFAULT_CONTENT_CHANGE_THRESHOLD
}

fn default_depth_decay() -> f64 {
    DEFAULT_DEPTH_DECAY
}

fn default_flash_cards_half_life() -> f64 {
    2.0
}

fn default_multiple_choice_half_life() -> f64 {
    7.0
}

fn default_open_ended_half_life() -> f64 {
    16.0
}

fn default_chat_half_life() -> f64 {
    25.0
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            content_change_threshold: default_content_change_threshold(),
        }
    }
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            depth_decay: default_depth_decay(),
            half_life_days: HalfLives::default(),
        }
    }
}

impl Default for HalfLives {
    fn default() -> Self {
        Self {
            flash_cards: default_flash_cards_half_life(),
            multiple_choice: default_multiple_choice_half_life(),
            open_ended: default_open_ended_half_life(),
            chat: default_chat_half_life(),
        }
    }
}
