//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format a table of categories
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|c| CategoryRow {
            name: c.name.clone(),
            kind: c.kind.to_string(),
            budget: if c.has_budget() {
                c.budget_limit.to_string()
            } else {
                "-".to_string()
            },
            id: c.id.to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format category details
pub fn format_category_details(category: &Category) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:     {}\n", category.id));
    output.push_str(&format!("  Kind:   {}\n", category.kind));

    if category.has_budget() {
        output.push_str(&format!("  Budget: {} / month\n", category.budget_limit));
    } else {
        output.push_str("  Budget: (none)\n");
    }

    output.push_str(&format!("  Color:  {}\n", category.color));
    output.push_str(&format!(
        "  Created: {}\n",
        category.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryKind, Money};

    #[test]
    fn test_empty_list() {
        assert!(format_category_list(&[]).contains("No categories found"));
    }

    #[test]
    fn test_list_contains_names_and_budgets() {
        let mut groceries = Category::new("Groceries", CategoryKind::Expense);
        groceries.budget_limit = Money::from_cents(50000);
        let salary = Category::new("Salary", CategoryKind::Income);

        let output = format_category_list(&[groceries, salary]);
        assert!(output.contains("Groceries"));
        assert!(output.contains("$500.00"));
        assert!(output.contains("Salary"));
        assert!(output.contains("income"));
    }

    #[test]
    fn test_details() {
        let category = Category::new("Rent", CategoryKind::Expense);
        let output = format_category_details(&category);
        assert!(output.contains("Category: Rent"));
        assert!(output.contains("Budget: (none)"));
    }
}
