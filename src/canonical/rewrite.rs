/// Literal (non-pattern) replacement of obsolete site URLs.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    canonical: String,
    obsolete: Vec<String>,
}

impl LinkRewriter {
    pub fn new(canonical: impl Into<String>, obsolete: Vec<String>) -> Self {
        Self {
            canonical: canonical.into(),
            // An empty needle would match between every char.
            obsolete: obsolete.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }

    /// Returns the rewritten content, or `None` if nothing changed.
    pub fn rewrite(&self, content: &str) -> Option<String> {
        let mut out = content.to_string();
        for old in &self.obsolete {
            if out.contains(old.as_str()) {
                out = out.replace(old.as_str(), &self.canonical);
            }
        }
        (out != content).then_some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "https://zawadiintelnews.vercel.app";

    fn rewriter() -> LinkRewriter {
        LinkRewriter::new(
            CANONICAL,
            vec![
                "https:/mannick254.github.io/Zawadi-intel-app".to_string(),
                "https://mannick254.github.io/Zawadi-intel-app".to_string(),
            ],
        )
    }

    #[test]
    fn test_rewrite_both_variants() {
        let html = r#"<link rel="canonical" href="https://mannick254.github.io/Zawadi-intel-app/news.html">
<meta property="og:url" content="https:/mannick254.github.io/Zawadi-intel-app/news.html">"#;
        let out = rewriter().rewrite(html).unwrap();
        assert!(!out.contains("mannick254"));
        assert_eq!(out.matches("https://zawadiintelnews.vercel.app/news.html").count(), 2);
    }

    #[test]
    fn test_rewrite_single_variant() {
        let html = "<a href=\"https:/mannick254.github.io/Zawadi-intel-app\">home</a>";
        let out = rewriter().rewrite(html).unwrap();
        assert_eq!(out, "<a href=\"https://zawadiintelnews.vercel.app\">home</a>");
    }

    #[test]
    fn test_rewrite_unchanged_returns_none() {
        let html = "<a href=\"https://zawadiintelnews.vercel.app/about.html\">about</a>";
        assert!(rewriter().rewrite(html).is_none());
        assert!(rewriter().rewrite("").is_none());
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let html = "https://mannick254.github.io/Zawadi-intel-app/a https:/mannick254.github.io/Zawadi-intel-app/b";
        let once = rewriter().rewrite(html).unwrap();
        assert!(rewriter().rewrite(&once).is_none());
    }

    #[test]
    fn test_rewrite_is_literal() {
        let rw = LinkRewriter::new("X", vec!["a.c".to_string()]);
        assert!(rw.rewrite("abc").is_none());
        assert_eq!(rw.rewrite("a.c").as_deref(), Some("X"));
    }

    #[test]
    fn test_empty_obsolete_entries_ignored() {
        let rw = LinkRewriter::new("X", vec![String::new()]);
        assert!(rw.rewrite("anything").is_none());
    }
}
