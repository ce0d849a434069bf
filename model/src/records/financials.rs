//! Income and expense ledgers and the summary figures derived from them.

use chrono::NaiveDate;
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;

use super::date;
use crate::choice::Choice;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::EnumIter, strum::EnumIs)]
pub enum PaymentStatus {
    Completed,
    Paid,
    Pending,
}

impl Choice for PaymentStatus {
    fn value(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Paid => "paid",
            Self::Pending => "pending",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Paid => "Paid",
            Self::Pending => "Pending",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub status: PaymentStatus,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: &str, category: &str, amount: f64, status: PaymentStatus) -> Self {
        Self {
            date,
            description: description.to_string(),
            category: category.to_string(),
            amount,
            status,
        }
    }
}

/// Income and expense entries, newest first.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Ledger {
    pub income: Vec<Transaction>,
    pub expenses: Vec<Transaction>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::sample()
    }
}

impl Ledger {
    pub fn sample() -> Self {
        use PaymentStatus::*;
        Self {
            income: vec![
                Transaction::new(date(2023, 6, 15), "Egg Sales - Retail", "Product Sales", 1250.0, Completed),
                Transaction::new(date(2023, 6, 12), "Egg Sales - Wholesale", "Product Sales", 3450.0, Completed),
                Transaction::new(date(2023, 6, 10), "Broiler Sales", "Bird Sales", 2800.0, Pending),
                Transaction::new(date(2023, 6, 5), "Egg Sales - Restaurant", "Product Sales", 1850.0, Completed),
                Transaction::new(date(2023, 6, 1), "Manure Sales", "Other", 450.0, Completed),
            ],
            expenses: vec![
                Transaction::new(date(2023, 6, 14), "Feed Purchase", "Feed", 3200.0, Paid),
                Transaction::new(date(2023, 6, 10), "Medication - Vitamins", "Medicine", 850.0, Paid),
                Transaction::new(date(2023, 6, 8), "Electricity Bill", "Utilities", 1250.0, Paid),
                Transaction::new(date(2023, 6, 5), "Staff Salaries", "Labor", 4500.0, Paid),
                Transaction::new(date(2023, 6, 1), "Equipment Maintenance", "Maintenance", 750.0, Pending),
            ],
        }
    }

    /// Inserts an expense keeping newest-first order.
    pub fn record_expense(&mut self, expense: Transaction) {
        let at = self
            .expenses
            .iter()
            .position(|e| e.date <= expense.date)
            .unwrap_or(self.expenses.len());
        self.expenses.insert(at, expense);
    }

    /// Expense totals per category, largest first.
    pub fn expenses_by_category(&self) -> Vec<(String, f64)> {
        self.expenses
            .iter()
            .map(|t| (t.category.clone(), t.amount))
            .into_grouping_map()
            .sum()
            .into_iter()
            .sorted_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            .collect()
    }

    pub fn summary(&self) -> FinancialSummary {
        FinancialSummary::from_ledger(self)
    }
}

/// The four figures on the financials screen plus the margin.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FinancialSummary {
    pub revenue: f64,
    pub expenses: f64,
    pub net_profit: f64,
    /// Income not yet received.
    pub pending_payments: f64,
    /// Net profit as a percentage of revenue; 0 when there is no revenue.
    pub profit_margin: f64,
}

impl FinancialSummary {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let revenue: f64 = ledger.income.iter().map(|t| t.amount).sum();
        let expenses: f64 = ledger.expenses.iter().map(|t| t.amount).sum();
        let pending_payments = ledger
            .income
            .iter()
            .filter(|t| t.status.is_pending())
            .map(|t| t.amount)
            .sum();
        let net_profit = revenue - expenses;
        Self {
            revenue,
            expenses,
            net_profit,
            pending_payments,
            profit_margin: percentage(net_profit, revenue),
        }
    }
}

/// `part / whole * 100`, or 0 when `whole` is 0.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// A report offered on the Reports tab.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIter)]
pub enum ReportKind {
    IncomeStatement,
    CashFlow,
    BalanceSheet,
    TaxReport,
    ExpenseAnalysis,
    RevenueAnalysis,
}

impl ReportKind {
    pub fn description(&self) -> &'static str {
        match self {
            Self::IncomeStatement => "Revenue, expenses and profit for a period",
            Self::CashFlow => "Cash movement analysis",
            Self::BalanceSheet => "Assets, liabilities and equity",
            Self::TaxReport => "Taxable income and deductions",
            Self::ExpenseAnalysis => "Spending by category",
            Self::RevenueAnalysis => "Income source breakdown",
        }
    }
}

impl Choice for ReportKind {
    fn value(&self) -> &'static str {
        match self {
            Self::IncomeStatement => "income",
            Self::CashFlow => "cash-flow",
            Self::BalanceSheet => "balance-sheet",
            Self::TaxReport => "tax",
            Self::ExpenseAnalysis => "expense",
            Self::RevenueAnalysis => "revenue",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::IncomeStatement => "Income Statement",
            Self::CashFlow => "Cash Flow",
            Self::BalanceSheet => "Balance Sheet",
            Self::TaxReport => "Tax Report",
            Self::ExpenseAnalysis => "Expense Analysis",
            Self::RevenueAnalysis => "Revenue Analysis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_sample_ledger() {
        let summary = Ledger::sample().summary();
        assert_eq!(summary.revenue, 9800.0);
        assert_eq!(summary.expenses, 10550.0);
        assert_eq!(summary.net_profit, -750.0);
        assert_eq!(summary.pending_payments, 2800.0);
        assert!((summary.profit_margin - (-750.0 / 9800.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn empty_ledger_has_zero_margin() {
        let ledger = Ledger {
            income: vec![],
            expenses: vec![],
        };
        let summary = ledger.summary();
        assert_eq!(summary.revenue, 0.0);
        assert_eq!(summary.profit_margin, 0.0);
    }

    #[test]
    fn recorded_expense_lands_in_date_order() {
        let mut ledger = Ledger::sample();
        ledger.record_expense(Transaction::new(
            date(2023, 6, 9),
            "Vaccines",
            "Medicine",
            300.0,
            PaymentStatus::Paid,
        ));
        let dates: Vec<u32> = ledger.expenses.iter().map(|e| chrono::Datelike::day(&e.date)).collect();
        assert_eq!(dates, vec![14, 10, 9, 8, 5, 1]);
        assert_eq!(ledger.summary().expenses, 10850.0);
    }

    #[test]
    fn expenses_group_by_category() {
        let mut ledger = Ledger::sample();
        ledger.record_expense(Transaction::new(date(2023, 6, 20), "Layer Mash", "Feed", 800.0, PaymentStatus::Paid));
        let totals = ledger.expenses_by_category();
        assert_eq!(totals[0], ("Labor".to_string(), 4500.0));
        assert_eq!(totals[1], ("Feed".to_string(), 4000.0));
        assert_eq!(totals.len(), 5);
        assert_eq!(totals.iter().map(|(_, amount)| amount).sum::<f64>(), 11350.0);
    }

    #[test]
    fn percentage_handles_zero_whole() {
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, 1000.0), 0.5);
    }
}
