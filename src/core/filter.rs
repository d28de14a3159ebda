//! Path selection predicates
//!
//! Pure functions of (path, filename, policy). Paths are `/`-separated and
//! relative to the walk root; a directory name matches when it is a whole
//! segment of the path, or a run of segments when it contains `/` itself.

use crate::core::models::{SelectionMode, SelectionPolicy};

/// Decides which directories are descended and which files are emitted.
#[derive(Debug, Clone, Copy)]
pub struct PathFilter<'a> {
    policy: &'a SelectionPolicy,
}

impl<'a> PathFilter<'a> {
    pub fn new(policy: &'a SelectionPolicy) -> Self {
        Self { policy }
    }

    /// True when no included directories are configured, or the path lies
    /// under one of them.
    pub fn is_included(&self, path: &str) -> bool {
        self.policy.included_dir_names.is_empty()
            || self
                .policy
                .included_dir_names
                .iter()
                .any(|dir| contains_segment(path, dir))
    }

    pub fn is_excluded_dir(&self, path: &str) -> bool {
        !self.is_included(path)
            || self
                .policy
                .excluded_dir_names
                .iter()
                .any(|dir| contains_segment(path, dir))
    }

    pub fn is_test_artifact(&self, path: &str, filename: &str) -> bool {
        let rules = &self.policy.test_rules;
        contains_segment(path, &rules.dir_name)
            || (!rules.suffix.is_empty() && filename.ends_with(&rules.suffix))
            || (!rules.prefix.is_empty() && filename.starts_with(&rules.prefix))
    }

    pub fn should_descend(&self, dir_path: &str) -> bool {
        !self.is_excluded_dir(dir_path)
    }

    pub fn should_emit(&self, file_path: &str, filename: &str) -> bool {
        if self.is_excluded_dir(file_path) || self.is_test_artifact(file_path, filename) {
            return false;
        }
        match self.policy.mode {
            SelectionMode::All => true,
            SelectionMode::ByName => self
                .policy
                .name_tokens
                .iter()
                .any(|token| filename.contains(token.as_str())),
        }
    }
}

/// Whether `needle` occurs in `path` as whole `/`-delimited segments.
fn contains_segment(path: &str, needle: &str) -> bool {
    let needle = needle.trim_matches('/');
    if needle.is_empty() {
        return false;
    }
    let haystack = format!("/{}/", path.trim_matches('/'));
    haystack.contains(&format!("/{}/", needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::TestExclusionRules;

    #[test]
    fn test_contains_segment() {
        assert!(contains_segment("src/test/Bar.java", "test"));
        assert!(contains_segment("a/node_modules", "node_modules"));
        assert!(contains_segment("core/src/main/java", "src/main"));
        assert!(!contains_segment("src/testing/Bar.java", "test"));
        assert!(!contains_segment("src/contest", "test"));
        assert!(!contains_segment("src", ""));
    }

    #[test]
    fn test_is_included_when_empty() {
        let policy = SelectionPolicy::all();
        let filter = PathFilter::new(&policy);
        for path in ["", "a", "deep/nested/path", "x/Y.java"] {
            assert!(filter.is_included(path));
        }
    }

    #[test]
    fn test_included_dirs_restrict() {
        let policy = SelectionPolicy::all().with_included(["micro-spring-core"]);
        let filter = PathFilter::new(&policy);
        assert!(filter.should_descend("micro-spring-core"));
        assert!(filter.should_descend("micro-spring-core/src/main"));
        assert!(!filter.should_descend("micro-spring-web"));
        assert!(!filter.should_emit("micro-spring-web/src/A.java", "A.java"));
    }

    #[test]
    fn test_excluded_dirs() {
        let policy = SelectionPolicy::default();
        let filter = PathFilter::new(&policy);
        assert!(!filter.should_descend(".git"));
        assert!(!filter.should_descend("web/node_modules"));
        assert!(filter.should_descend("src"));
        assert!(!filter.should_emit("web/node_modules/pkg/A.java", "A.java"));
    }

    #[test]
    fn test_test_artifacts() {
        let policy = SelectionPolicy::all();
        let filter = PathFilter::new(&policy);
        assert!(filter.is_test_artifact("src/test/java/A.java", "A.java"));
        assert!(filter.is_test_artifact("src/main/ATest.java", "ATest.java"));
        assert!(filter.is_test_artifact("src/main/TestA.java", "TestA.java"));
        assert!(!filter.is_test_artifact("src/main/Attest.java", "Attest.java"));
        assert!(!filter.should_emit("src/main/ATest.java", "ATest.java"));
    }

    #[test]
    fn test_empty_test_rules_disable() {
        let policy = SelectionPolicy::all().with_test_rules(TestExclusionRules {
            dir_name: String::new(),
            suffix: String::new(),
            prefix: String::new(),
        });
        let filter = PathFilter::new(&policy);
        assert!(filter.should_emit("src/test/TestA.java", "TestA.java"));
    }

    #[test]
    fn test_by_name_mode() {
        let policy = SelectionPolicy::all().by_name(["BeanFactory", "BeanDefinition"]);
        let filter = PathFilter::new(&policy);
        assert!(filter.should_emit("beans/BeanFactory.java", "BeanFactory.java"));
        assert!(filter.should_emit("beans/DefaultBeanFactory.java", "DefaultBeanFactory.java"));
        assert!(filter.should_emit("beans/BeanDefinition.java", "BeanDefinition.java"));
        assert!(!filter.should_emit("beans/Other.java", "Other.java"));
    }

    #[test]
    fn test_by_name_still_honours_exclusions() {
        let policy = SelectionPolicy::all()
            .by_name(["BeanFactory"])
            .with_excluded(["legacy"]);
        let filter = PathFilter::new(&policy);
        assert!(!filter.should_emit("legacy/BeanFactory.java", "BeanFactory.java"));
        assert!(!filter.should_emit("src/test/BeanFactory.java", "BeanFactory.java"));
    }

    #[test]
    fn test_predicates_are_deterministic() {
        let policy = SelectionPolicy::default().with_included(["src"]);
        let filter = PathFilter::new(&policy);
        let first: Vec<bool> = ["src/A.java", "lib/B.java", "src/test/C.java"]
            .iter()
            .map(|p| filter.should_emit(p, p.rsplit('/').next().unwrap()))
            .collect();
        let second: Vec<bool> = ["src/A.java", "lib/B.java", "src/test/C.java"]
            .iter()
            .map(|p| filter.should_emit(p, p.rsplit('/').next().unwrap()))
            .collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![true, false, false]);
    }
}
