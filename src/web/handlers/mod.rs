pub mod fragments;
pub mod pages;

/// A rendered response body kept in the render cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub body: String,
    /// Swap the body into `#projectModal` instead of the requested target
    pub retarget_overlay: bool,
}

/// Project ids come from the URL; anything that is not a positive integer
/// cannot match a record.
pub fn parse_project_id(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_id() {
        assert_eq!(parse_project_id("5"), Some(5));
        assert_eq!(parse_project_id(" 12 "), Some(12));
        assert_eq!(parse_project_id("0"), None);
        assert_eq!(parse_project_id("-1"), None);
        assert_eq!(parse_project_id("five"), None);
    }
}
