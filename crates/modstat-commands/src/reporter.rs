//! Status message lifecycle and histogram publishing.

use crate::source::{ReplySink, StatusHandle};
use modstat_common::{ChannelId, Result};
use modstat_graphs::{HistogramRenderer, HistogramSpec};
use std::path::{Path, PathBuf};
use tracing::info;

/// Text of the status message sent when collection starts.
pub const STATUS_COLLECTING: &str = "Collecting data...";

/// Appended to the status message once the image is written.
pub const STATUS_DONE_SUFFIX: &str = " Done.";

/// Which report is being produced; fixes its file and attachment names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Moderator log against the public baseline
    ModLog,
    /// Hourly activity of the moderators or of one user
    HourlyActivity,
    /// Logged actions per day
    LogHistory,
}

impl ReportKind {
    /// File written under the output directory. Reused by every run.
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportKind::ModLog => "message_log.png",
            ReportKind::HourlyActivity => "hourly_activity.png",
            ReportKind::LogHistory => "log_history.png",
        }
    }

    /// Name of the uploaded attachment.
    pub fn attachment_name(&self) -> &'static str {
        match self {
            ReportKind::ModLog => "Modlog history.png",
            ReportKind::HourlyActivity => "Hourly activity.png",
            ReportKind::LogHistory => "Log history.png",
        }
    }
}

/// Sends the status message, renders the image and uploads it.
pub struct Reporter<'a> {
    sink: &'a dyn ReplySink,
    renderer: &'a dyn HistogramRenderer,
    output_dir: &'a Path,
}

impl<'a> Reporter<'a> {
    /// Creates a reporter writing images into `output_dir`.
    pub fn new(
        sink: &'a dyn ReplySink,
        renderer: &'a dyn HistogramRenderer,
        output_dir: &'a Path,
    ) -> Self {
        Self {
            sink,
            renderer,
            output_dir,
        }
    }

    /// Path the given report is written to.
    pub fn output_path(&self, kind: ReportKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }

    /// Announces that collection has started.
    pub async fn begin(&self, channel: ChannelId) -> Result<StatusHandle> {
        self.sink.say(channel, STATUS_COLLECTING).await
    }

    /// Renders `spec`, marks `status` done and uploads the image to the
    /// status message's channel.
    pub async fn publish(
        &self,
        status: &StatusHandle,
        kind: ReportKind,
        spec: &HistogramSpec,
    ) -> Result<PathBuf> {
        tokio::fs::create_dir_all(self.output_dir).await?;

        let path = self.output_path(kind);
        self.renderer.render_to_file(spec, &path).await?;

        let done = format!("{}{}", status.content, STATUS_DONE_SUFFIX);
        self.sink.edit(status, &done).await?;

        self.sink
            .send_file(status.channel, &path, kind.attachment_name())
            .await?;

        info!(
            "Published {} to channel {}",
            kind.attachment_name(),
            status.channel
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_names() {
        assert_eq!(ReportKind::ModLog.file_name(), "message_log.png");
        assert_eq!(ReportKind::ModLog.attachment_name(), "Modlog history.png");
        assert_eq!(ReportKind::HourlyActivity.file_name(), "hourly_activity.png");
        assert_eq!(ReportKind::LogHistory.attachment_name(), "Log history.png");
    }

    #[test]
    fn test_done_text() {
        assert_eq!(
            format!("{STATUS_COLLECTING}{STATUS_DONE_SUFFIX}"),
            "Collecting data... Done."
        );
    }
}
