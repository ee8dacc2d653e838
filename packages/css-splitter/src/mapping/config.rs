//! Built-in mapping table for a portfolio-style stylesheet.

use super::table::MappingTable;
use super::types::MappingRule;

/// Default `(pattern, destination)` records in evaluation order.
///
/// Grouped by target directory:
///
/// ```text
/// css/
/// ├── base/        reset, variables, accessibility
/// ├── layout/      container, header, navigation, footer
/// ├── components/  cards, badges, buttons, skills, forms, modals, scroll
/// ├── features/    timeline, blog, animations, loading, projects
/// └── utilities/   dark-mode, responsive, helpers
/// ```
pub const DEFAULT_MAPPINGS: &[(&str, &str)] = &[
    // Base styles
    (r"/\* Base Reset \*/", "css/base/reset.css"),
    (r"/\* .*Color System.*\*/", "css/base/variables.css"),
    (r"/\* Dark Mode.*\*/", "css/utilities/dark-mode.css"),
    // Layout
    (r"/\* Container \*/", "css/layout/container.css"),
    (r"/\* .*Header.*\*/", "css/layout/header.css"),
    (r"/\* .*Navigation.*\*/", "css/layout/navigation.css"),
    (r"/\* Footer \*/", "css/layout/footer.css"),
    // Components
    (r"/\* .*Cards.*\*/", "css/components/cards.css"),
    (r"/\* .*Badge.*\*/", "css/components/badges.css"),
    (r"/\* .*Button.*\*/", "css/components/buttons.css"),
    (r"/\* Skills.*\*/", "css/components/skills.css"),
    (r"/\* Contact Form \*/", "css/components/forms.css"),
    (r"/\* Modal \*/", "css/components/modals.css"),
    (r"/\* Scroll.*\*/", "css/components/scroll.css"),
    // Features
    (r"/\* Timeline.*\*/", "css/features/timeline.css"),
    (r"/\* Blog.*\*/", "css/features/blog.css"),
    (r"/\* .*Animations.*\*/", "css/features/animations.css"),
    (r"/\* Loading.*\*/", "css/features/loading.css"),
    (r"/\* Project Grid \*/", "css/features/projects.css"),
    // Utilities
    (r"/\* Accessibility.*\*/", "css/base/accessibility.css"),
    (r"/\* Responsive.*\*/", "css/utilities/responsive.css"),
    (r"/\* .*Utility.*\*/", "css/utilities/helpers.css"),
];

/// Create the built-in mapping table.
#[must_use]
pub fn create_default_mapping() -> MappingTable {
    let mut table = MappingTable::new();

    for (pattern, destination) in DEFAULT_MAPPINGS {
        #[allow(clippy::expect_used)] // Static patterns covered by tests
        let rule = MappingRule::new(pattern, *destination).expect("valid default mapping");
        table.register(rule);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FALLBACK_DESTINATION;
    use crate::mapping::Classification;

    #[test]
    fn test_create_default_mapping() {
        let table = create_default_mapping();
        assert_eq!(table.len(), DEFAULT_MAPPINGS.len());
        assert_eq!(table.fallback(), DEFAULT_FALLBACK_DESTINATION);

        let first = table.rules().next().unwrap();
        assert_eq!(first.destination, "css/base/reset.css");
    }

    #[test]
    fn test_default_mapping_boundary_headers() {
        let table = create_default_mapping();
        assert_eq!(
            table.classify("/* Base Reset */"),
            Classification::Destination("css/base/reset.css")
        );
        assert_eq!(
            table.classify("/* Container */"),
            Classification::Destination("css/layout/container.css")
        );
    }

    #[test]
    fn test_default_mapping_wildcards() {
        let table = create_default_mapping();
        assert_eq!(
            table.classify("/* Enhanced Color System */"),
            Classification::Destination("css/base/variables.css")
        );
        assert_eq!(
            table.classify("/* Dark Mode Overrides */"),
            Classification::Destination("css/utilities/dark-mode.css")
        );
        assert_eq!(
            table.classify("/* Blog Post Cards */"),
            Classification::Destination("css/components/cards.css")
        );
    }

    #[test]
    fn test_default_mapping_first_match_wins() {
        let table = create_default_mapping();
        // Matches both the Header and the Navigation pattern; Header is declared first
        assert_eq!(
            table.classify("/* Header Navigation */"),
            Classification::Destination("css/layout/header.css")
        );
    }

    #[test]
    fn test_default_mapping_unclassified() {
        let table = create_default_mapping();
        assert!(table.classify("/* Print Styles */").is_unclassified());
        // Exact-match entries do not tolerate extra words
        assert!(table.classify("/* Footer Links */").is_unclassified());
    }
}
