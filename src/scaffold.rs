use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

use crate::chapters::Chapter;
use crate::config::ScaffoldConfig;

pub static EXTENSION: &str = "sql";

/// 空格替换为下划线，其他字符原样保留
pub fn sanitize_title(title: &str) -> String {
    title.replace(' ', "_")
}

pub fn chapter_filename(index: usize, title: &str) -> String {
    format!("{}_{}.{}", index, sanitize_title(title), EXTENSION)
}

#[derive(Debug, Clone)]
pub struct Scaffolder {
    output_dir: PathBuf,
}

impl Default for Scaffolder {
    fn default() -> Self {
        Self::from_config(&ScaffoldConfig::default())
    }
}

impl Scaffolder {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn from_config(config: &ScaffoldConfig) -> Self {
        Self::new(config.output_dir.clone())
    }

    /// 按顺序计算每个章节对应的文件名，不接触文件系统
    pub fn plan<S: AsRef<str>>(&self, titles: &[S]) -> Vec<Chapter> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let index = i + 1;
                let title = title.as_ref();
                Chapter {
                    index,
                    title: title.to_owned(),
                    filename: chapter_filename(index, title),
                }
            })
            .collect()
    }

    /// 创建空文件，已存在则截断
    #[instrument(skip_all, fields(filename = %chapter.filename))]
    pub async fn create_file(&self, chapter: &Chapter) -> Result<PathBuf> {
        let path = self.output_dir.join(&chapter.filename);
        let mut file = File::create(&path).await?;
        file.flush().await?;
        drop(file);
        debug!("已创建文件: {}", path.display());
        Ok(path)
    }

    /// 依次创建所有章节文件，每个文件关闭后向 `out` 输出一行确认信息
    #[instrument(skip_all, fields(count = titles.len()))]
    pub async fn scaffold_to<S, W>(&self, titles: &[S], out: &mut W) -> Result<Vec<Chapter>>
    where
        S: AsRef<str>,
        W: Write,
    {
        info!("正在生成章节文件: {}", self.output_dir.display());
        let chapters = self.plan(titles);
        for chapter in &chapters {
            self.create_file(chapter).await?;
            writeln!(out, "Created file: {}", chapter.filename)?;
        }
        Ok(chapters)
    }

    pub async fn scaffold<S: AsRef<str>>(&self, titles: &[S]) -> Result<Vec<Chapter>> {
        let mut out = std::io::stdout();
        self.scaffold_to(titles, &mut out).await
    }
}
