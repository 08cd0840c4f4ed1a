/// Builds the record key for a hostname: `{prefix}:{hostname}`.
///
/// The hostname is used verbatim, no case folding or port stripping.
pub fn tenant_key(prefix: &str, hostname: &str) -> String {
    format!("{}:{}", prefix, hostname)
}
