/// Parse and validate the `--host` flag.
///
/// Accepts IP literals and `localhost`; the value is kept as typed so the
/// config layer can report it verbatim.
///
/// # Errors
///
/// Returns an error message for hostnames that are not `localhost`.
pub fn parse_host_arg(s: &str) -> Result<String, String> {
    crate::config::parse_host(s)
        .map(|_| s.to_string())
        .map_err(|_| format!("Host must be an IP address or 'localhost': '{}'", s))
}
