use std::time::Duration;

use tracing::{info, instrument};

pub fn format_elapsed(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms >= 60000 {
        // 超过1分钟：显示分秒
        let mins = total_ms / 60000;
        let secs = (total_ms % 60000) / 1000;
        format!("{}分{}秒", mins, secs)
    } else if total_ms >= 1000 {
        let secs = total_ms / 1000;
        let ms_remaining = total_ms % 1000;
        if ms_remaining > 0 {
            format!("{}秒{}毫秒", secs, ms_remaining)
        } else {
            format!("{}秒", secs)
        }
    } else {
        format!("{}毫秒", total_ms)
    }
}

#[instrument(skip(duration))]
pub fn display_summary(count: usize, duration: Duration) {
    info!("✅ 已生成 {} 个文件，耗时: {}", count, format_elapsed(duration));
}
