//! 配置文件 (~/.config/ui-kit/config.toml)
//!
//! 文件不存在时使用默认值，缺省的字段同样取默认值。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
}

/// 窗口标题与期望尺寸 (dp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "UI Kit Demo - Complete Design System".to_string(),
            width: 900.0,
            height: 700.0,
        }
    }
}

/// 进度动画
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// 两次推进之间的最短间隔 (毫秒)
    pub tick_interval_ms: u64,
    /// 每次推进的增量
    pub step: f32,
    /// 自动推进的上限
    pub ceiling: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            step: 0.002,
            ceiling: 0.8,
        }
    }
}

impl AnimationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Config {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ui-kit").join("config.toml"))
    }

    /// 从 TOML 文件加载，文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let window = &self.window;
        if !is_positive(window.width) || !is_positive(window.height) {
            bail!(
                "window size must be positive, got {}x{}",
                window.width,
                window.height
            );
        }

        let animation = &self.animation;
        if animation.tick_interval_ms == 0 {
            bail!("animation.tick_interval_ms must be positive");
        }
        if !is_positive(animation.step) {
            bail!("animation.step must be positive, got {}", animation.step);
        }
        if !(0.0..=1.0).contains(&animation.ceiling) {
            bail!(
                "animation.ceiling must be within [0, 1], got {}",
                animation.ceiling
            );
        }
        Ok(())
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.window.title, "UI Kit Demo - Complete Design System");
        assert_eq!(config.window.width, 900.0);
        assert_eq!(config.window.height, 700.0);
        assert_eq!(config.animation.tick_interval(), Duration::from_millis(50));
        assert_eq!(config.animation.step, 0.002);
        assert_eq!(config.animation.ceiling, 0.8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("[animation]\nstep = 0.01\n").unwrap();
        assert_eq!(config.animation.step, 0.01);
        assert_eq!(config.animation.tick_interval_ms, 50);
        assert_eq!(config.window, WindowConfig::default());

        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Config::parse("[animation]\nstep = 0.0\n").is_err());
        assert!(Config::parse("[animation]\nceiling = 1.5\n").is_err());
        assert!(Config::parse("[animation]\ntick_interval_ms = 0\n").is_err());
        assert!(Config::parse("[window]\nwidth = -1.0\n").is_err());
        assert!(Config::parse("[window]\ntitle = 3\n").is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("ui-kit-missing-config-test.toml");
        let _ = fs::remove_file(&path);
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("ui-kit-config-{}.toml", std::process::id()));
        fs::write(&path, "[window]\ntitle = \"Demo\"\n").unwrap();
        let config = Config::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.window.title, "Demo");
        assert_eq!(config.window.width, 900.0);
    }
}
