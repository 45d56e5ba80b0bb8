//! Copy-to-clipboard feedback model
//!
//! The clipboard write itself is asynchronous and lives in the `dom` adapter;
//! this module pins down the control's labels and the transient feedback
//! shown after a write resolves. Labels match the original theme strings.

/// Resting label of the copy control.
pub const COPY_LABEL: &str = "複製";

/// Accessible label announced for the copy control.
pub const COPY_ARIA_LABEL: &str = "複製代碼";

/// Result of an attempted clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The clipboard accepted the text.
    Copied,
    /// The write was rejected (permissions, insecure context, ...).
    Failed,
}

/// Transient label and background applied to the control after a write,
/// reverted after the configured feedback duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    /// Replacement label text.
    pub label: &'static str,
    /// Replacement CSS background color.
    pub background: &'static str,
}

/// Feedback shown for a given write outcome.
#[must_use]
pub const fn feedback(outcome: CopyOutcome) -> CopyFeedback {
    match outcome {
        CopyOutcome::Copied => CopyFeedback {
            label: "已複製!",
            background: "#27ae60",
        },
        CopyOutcome::Failed => CopyFeedback {
            label: "複製失敗",
            background: "#e74c3c",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_feedback_is_green() {
        let fb = feedback(CopyOutcome::Copied);
        assert_eq!(fb.label, "已複製!");
        assert_eq!(fb.background, "#27ae60");
    }

    #[test]
    fn failure_feedback_is_red() {
        let fb = feedback(CopyOutcome::Failed);
        assert_eq!(fb.label, "複製失敗");
        assert_eq!(fb.background, "#e74c3c");
    }

    #[test]
    fn feedback_labels_differ_from_resting_label() {
        assert_ne!(feedback(CopyOutcome::Copied).label, COPY_LABEL);
        assert_ne!(feedback(CopyOutcome::Failed).label, COPY_LABEL);
    }
}
