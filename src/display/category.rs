//! Category display formatting

use crate::models::Category;

/// Format categories as a bulleted list
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nCategories are created when you add an expense \
                or run 'spendora categories add <name>'.\n"
            .to_string();
    }

    let mut output = String::new();
    output.push_str("Available Categories:\n");
    output.push_str(&"-".repeat(30));
    output.push('\n');

    for category in categories {
        output.push_str(&format!("- {}\n", category.name));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list() {
        let categories = vec![Category::new("Food"), Category::new("Transport")];
        let output = format_category_list(&categories);

        assert!(output.starts_with("Available Categories:"));
        assert!(output.contains("- Food\n"));
        assert!(output.contains("- Transport\n"));
    }

    #[test]
    fn test_format_empty() {
        assert!(format_category_list(&[]).starts_with("No categories found."));
    }
}
