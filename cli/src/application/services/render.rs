//! Template Renderer: read a template, fill it from a record, write it out.

use std::path::Path;

use serde::Serialize;

use crate::application::ports::LocalFs;
use crate::domain::error::RenderError;
use crate::domain::template;

/// Render `data` into the template at `template_path` and write the result to
/// `dest_path` with exactly the permission bits in `mode`.
///
/// Rendering happens entirely in memory first: when the template is
/// unreadable, empty or invalid, `dest_path` is not touched.
///
/// # Errors
///
/// Returns a [`RenderError`] describing which stage failed.
pub fn render_to_file(
    fs: &impl LocalFs,
    data: &impl Serialize,
    template_path: &Path,
    dest_path: &Path,
    mode: u32,
) -> Result<(), RenderError> {
    let content = fs
        .read_to_string(template_path)
        .map_err(|source| RenderError::Read {
            path: template_path.to_path_buf(),
            source,
        })?;
    if content.is_empty() {
        return Err(RenderError::EmptyTemplate {
            path: template_path.to_path_buf(),
        });
    }

    let rendered = template::render(&content, data)?;

    fs.write_with_mode(dest_path, rendered.as_bytes(), mode)
        .map_err(|source| RenderError::Write {
            path: dest_path.to_path_buf(),
            source,
        })
}
