/// parses a `NAME=VALUE` command line argument. the value may be empty, which
/// leaves the named criterion without that parameter.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected format: NAME=VALUE, got: {s}"))?;
    let name = name.trim();
    if name.is_empty() {
        Err(format!("missing criterion name in '{s}'"))
    } else {
        Ok((name.to_string(), value.trim().to_string()))
    }
}
