//! User identity lookup over `/etc/passwd` content.

/// Find the login name for `uid` in passwd-formatted `content`.
///
/// Lines are `name:password:uid:gid:gecos:home:shell`; comments and malformed
/// lines are skipped.
#[must_use]
pub fn username_for_uid(content: &str, uid: u32) -> Option<String> {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .find_map(|line| {
            let mut parts = line.split(':');
            let name = parts.next()?;
            let entry_uid = parts.nth(1)?.parse::<u32>().ok()?;
            (entry_uid == uid && !name.is_empty()).then(|| name.to_string())
        })
}
