/// Formats a percent change with an explicit sign and one decimal place,
/// the way chart annotations display it.
///
/// # Examples
/// ```
/// use backend::shared::format::signed_pct;
/// assert_eq!(signed_pct(12.34), "+12.3%");
/// assert_eq!(signed_pct(-8.0), "-8.0%");
/// ```
pub fn signed_pct(value: f64) -> String {
    format!("{:+.1}%", value)
}
