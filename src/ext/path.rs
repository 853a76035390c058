use std::path::Path;

/// Extension trait for Path with template file naming helpers
pub trait PathExt {
    /// Returns `true` when the file name ends with `suffix` and has a
    /// non-empty stem before it.
    ///
    /// # Examples
    /// ```
    /// use promptkit::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert!(Path::new("templates/greet.tmpl").has_template_suffix(".tmpl"));
    /// assert!(!Path::new("templates/.tmpl").has_template_suffix(".tmpl"));
    /// ```
    fn has_template_suffix(&self, suffix: &str) -> bool;

    /// The file name with `suffix` stripped, used as a fallback template
    /// name and as the include name.
    ///
    /// # Examples
    /// ```
    /// use promptkit::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("templates/includes/header.tmpl");
    /// assert_eq!(path.template_stem(".tmpl"), Some("header"));
    /// ```
    fn template_stem(&self, suffix: &str) -> Option<&str>;
}

impl PathExt for Path {
    fn has_template_suffix(&self, suffix: &str) -> bool {
        self.template_stem(suffix).is_some()
    }

    fn template_stem(&self, suffix: &str) -> Option<&str> {
        self.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(suffix))
            .filter(|stem| !stem.is_empty())
    }
}
