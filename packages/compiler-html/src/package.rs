use mailblock_document::Document;
use serde::{Deserialize, Serialize};

use crate::compiler::{compile_with, CompileOptions};

/// A compiled email ready to hand to a sending service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPackage {
    pub subject: String,
    pub recipients: Vec<String>,
    pub html: String,
}

impl EmailPackage {
    /// Compile `document` and bundle it with its subject and recipients.
    ///
    /// Recipients are trimmed, blanks are dropped, and repeats keep only
    /// their first occurrence.
    pub fn build<I, S>(
        subject: impl Into<String>,
        recipients: I,
        document: &Document,
        options: &CompileOptions,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for recipient in recipients {
            let recipient = recipient.as_ref().trim();
            if recipient.is_empty() || unique.iter().any(|seen| seen == recipient) {
                continue;
            }
            unique.push(recipient.to_string());
        }

        let html = compile_with(document, options);
        tracing::debug!(
            "packaged email for {} recipient(s), {} bytes",
            unique.len(),
            html.len()
        );

        Self {
            subject: subject.into(),
            recipients: unique,
            html,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
