use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

static CONFIG_FILE: &str = "scaffold";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub output_dir: PathBuf,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl ScaffoldConfig {
    /// 读取当前目录下的 scaffold.toml，文件不存在时使用默认值
    pub fn load() -> Result<Self> {
        Self::build(
            config::File::with_name(CONFIG_FILE)
                .format(config::FileFormat::Toml)
                .required(false),
        )
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Self::build(config::File::from_str(content, config::FileFormat::Toml))
    }

    fn build<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .add_source(source)
            .build()?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("配置文件反序列化失败: {}", e))
    }
}
