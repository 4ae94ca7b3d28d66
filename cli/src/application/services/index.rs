//! Index Template Loader: register Filebeat's index template with Elasticsearch.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, LocalFs};
use crate::application::services::ensure_success;
use crate::domain::layout::Layout;

/// URL the index template is PUT to.
#[must_use]
pub fn template_url(search_host: &str) -> String {
    format!("{}/_template/filebeat?pretty", search_host.trim_end_matches('/'))
}

/// PUT the index template document to `{search_host}/_template/filebeat`.
///
/// Single attempt, no timeout beyond the HTTP client's own.
///
/// # Errors
///
/// Returns an error if the document is missing or empty, or the HTTP client
/// fails (including non-2xx responses).
pub async fn load_index_template(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    layout: &Layout,
    search_host: &str,
) -> Result<()> {
    let doc = &layout.index_template;
    let len = fs
        .file_len(doc)
        .with_context(|| format!("cannot read index template {}", doc.display()))?;
    anyhow::ensure!(len > 0, "index template {} is empty", doc.display());

    let url = template_url(search_host);
    let body = format!("-d@{}", doc.display());
    let status = runner
        .run_logged(
            &layout.http_program,
            &[
                "-sS",
                "--fail",
                "-XPUT",
                "-H",
                "Content-Type: application/json",
                &url,
                &body,
            ],
            None,
        )
        .await?;
    ensure_success(&layout.http_program, status)
}
