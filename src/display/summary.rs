//! Balance and monthly summary formatting

use crate::ledger::{Ledger, MonthlySummary};
use crate::models::Money;

/// Format the overall balance summary
pub fn format_balance_summary(ledger: &Ledger, currency_symbol: &str) -> String {
    let total_income = ledger.total_income();
    let total_expenses = ledger.total_expenses();
    let balance = ledger.balance();

    let mut output = String::new();
    output.push_str("Balance Summary\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Total Income:    {}\n",
        total_income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Total Expenses:  {}\n",
        total_expenses.format_with_symbol(currency_symbol)
    ));
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Net Balance:     {}\n",
        balance.format_with_symbol(currency_symbol)
    ));

    if total_income.is_positive() {
        let savings_rate = balance.cents() as f64 / total_income.cents() as f64 * 100.0;
        output.push_str(&format!("Savings Rate:    {:.1}%\n", savings_rate));
    }

    output
}

/// Format a monthly summary with its category breakdown
pub fn format_monthly_summary(summary: &MonthlySummary, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Summary for {}\n", summary.month));
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Income:          {}\n",
        summary.income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Expenses:        {}\n",
        summary.expenses.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Balance:         {}\n",
        summary.balance.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Transactions:    {}\n", summary.transaction_count));

    if !summary.category_totals.is_empty() {
        output.push_str("\nExpenses by Category:\n");

        // Largest categories first; ties broken by label for stable output
        let mut breakdown: Vec<(&str, Money)> = summary
            .category_totals
            .iter()
            .map(|(category, amount)| (category.label(), *amount))
            .collect();
        breakdown.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        for (label, amount) in breakdown {
            output.push_str(&format!(
                "  {:<20} {}\n",
                label,
                amount.format_with_symbol(currency_symbol)
            ));
        }
    }

    output
}
