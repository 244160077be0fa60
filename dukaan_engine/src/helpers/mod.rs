pub mod de;

/// True when a field would be rejected as absent: missing entirely, or present but empty.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
