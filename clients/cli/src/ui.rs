use chrono::{DateTime, Utc};
use colored::Colorize;
use once_cell::sync::Lazy;
use scc_api_model::{AttachmentStatus, ComplianceStatus, EvaluationStatus};

static SHOULD_COLORIZE: Lazy<bool> = Lazy::new(|| {
    colored::control::ShouldColorize::from_env().should_colorize()
});

pub trait FancyToString {
    fn fancy(&self) -> String;
}

/// Convenience to enable fancy() on Option<T>
impl<T> FancyToString for Option<T>
where
    T: FancyToString,
{
    fn fancy(&self) -> String {
        match self {
            | Some(t) => t.fancy(),
            | None => "".to_string(),
        }
    }
}

impl FancyToString for ComplianceStatus {
    fn fancy(&self) -> String {
        match self {
            | ComplianceStatus::Compliant => {
                format!("{}{}", emoji("✅"), self.to_string().green())
            }
            | ComplianceStatus::NotCompliant => {
                format!("{}{}", emoji("❌"), self.to_string().red())
            }
            | ComplianceStatus::UnableToPerform => {
                format!("{}{}", emoji("⚠️"), self.to_string().yellow())
            }
            | ComplianceStatus::UserEvaluationRequired => {
                format!("{}{}", emoji("📝"), self.to_string().italic())
            }
            | ComplianceStatus::Unknown => {
                self.to_string().dimmed().to_string()
            }
            | s => s.to_string(),
        }
    }
}

impl FancyToString for EvaluationStatus {
    fn fancy(&self) -> String {
        match self {
            | EvaluationStatus::Pass => self.to_string().green().to_string(),
            | EvaluationStatus::Failure => self.to_string().red().to_string(),
            | EvaluationStatus::Error => {
                format!("{}{}", emoji("⚠️"), self.to_string().yellow())
            }
            | EvaluationStatus::Skipped => {
                self.to_string().italic().to_string()
            }
            | EvaluationStatus::Unknown => {
                self.to_string().dimmed().to_string()
            }
            | s => s.to_string(),
        }
    }
}

impl FancyToString for AttachmentStatus {
    fn fancy(&self) -> String {
        match self {
            | AttachmentStatus::Enabled => self.to_string().green().to_string(),
            | AttachmentStatus::Disabled => {
                format!("{}{self}", emoji("⏸"))
            }
            | AttachmentStatus::Unknown => {
                self.to_string().dimmed().to_string()
            }
            | s => s.to_string(),
        }
    }
}

impl FancyToString for DateTime<Utc> {
    fn fancy(&self) -> String {
        self.to_rfc2822()
    }
}

/// Respects NO_COLOR environment variable to avoid showing emojis if tty can't
/// display them.
pub fn emoji(s: &str) -> String {
    if *SHOULD_COLORIZE {
        format!("{} ", s)
    } else {
        String::new()
    }
}

/// Prints `value` as colored, pretty JSON.
pub async fn emit_json<T, A>(
    out: &mut tokio::io::BufWriter<A>,
    value: &T,
) -> anyhow::Result<()>
where
    T: serde::Serialize + Sync,
    A: tokio::io::AsyncWrite + Send + Sync + Unpin,
{
    let json = serde_json::to_value(value)?;
    let colored = colored_json::to_colored_json_auto(&json)?;
    crate::emitln!(out, "{}", colored);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_status_renders_as_unknown() {
        colored::control::set_override(false);
        let status: ComplianceStatus =
            serde_json::from_value(serde_json::json!("partially_compliant"))
                .unwrap();
        assert_eq!(status.fancy(), "unknown");
        assert_eq!(Some(EvaluationStatus::Unknown).fancy(), "unknown");
    }
}
