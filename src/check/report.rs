use super::types::EmailCheckResult;

/// Number of MX hosts shown in a report line.
pub const MX_PREVIEW_LIMIT: usize = 3;

/// Comma-joined first hosts of `mx_hosts`, with a `,...` marker when some
/// were left out.
pub fn mx_preview(mx_hosts: &[String]) -> String {
    let mut preview = mx_hosts
        .iter()
        .take(MX_PREVIEW_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",");
    if mx_hosts.len() > MX_PREVIEW_LIMIT {
        preview.push_str(",...");
    }
    preview
}

/// `<email>\t<status>\tmx=[<hosts>]\tsmtp=<result>`
pub fn render_line(result: &EmailCheckResult) -> String {
    format!(
        "{}\t{}\tmx=[{}]\tsmtp={}",
        result.email(),
        result.status(),
        mx_preview(result.mx_hosts()),
        result.smtp_result()
    )
}
