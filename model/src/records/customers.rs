use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::contains_ignore_case;
use super::date;
use super::financials::PaymentStatus;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    /// Retail, Restaurant, Wholesale...
    pub kind: String,
    pub last_purchase: NaiveDate,
    pub total_spent: f64,
}

impl Customer {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: u32,
        name: &str,
        contact: &str,
        email: &str,
        phone: &str,
        kind: &str,
        last_purchase: NaiveDate,
        total_spent: f64,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            contact: contact.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            kind: kind.to_string(),
            last_purchase,
            total_spent,
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        contains_ignore_case(&self.name, query)
            || contains_ignore_case(&self.contact, query)
            || contains_ignore_case(&self.email, query)
    }
}

pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new(
            1,
            "Greenfield Supermarket",
            "John Smith",
            "john@greenfield.com",
            "(555) 123-4567",
            "Retail",
            date(2023, 6, 10),
            12450.0,
        ),
        Customer::new(
            2,
            "Farm Fresh Restaurant",
            "Sarah Johnson",
            "sarah@farmfresh.com",
            "(555) 234-5678",
            "Restaurant",
            date(2023, 6, 15),
            8320.0,
        ),
        Customer::new(
            3,
            "City Grocers",
            "Michael Brown",
            "michael@citygrocers.com",
            "(555) 345-6789",
            "Wholesale",
            date(2023, 6, 12),
            24780.0,
        ),
        Customer::new(
            4,
            "Sunrise Bakery",
            "Emily Davis",
            "emily@sunrisebakery.com",
            "(555) 456-7890",
            "Bakery",
            date(2023, 6, 8),
            5640.0,
        ),
        Customer::new(
            5,
            "Golden Eggs Distributor",
            "Robert Wilson",
            "robert@goldeneggs.com",
            "(555) 567-8901",
            "Distributor",
            date(2023, 6, 14),
            32150.0,
        ),
    ]
}

/// Customers whose name, contact or email contains `query`, ignoring case.
pub fn search<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    customers.iter().filter(|c| c.matches(query)).collect()
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Purchase {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub invoice: String,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub amount: f64,
    pub method: String,
    pub reference: String,
}

impl Payment {
    pub fn new(date: NaiveDate, amount: f64, method: &str, reference: &str) -> Self {
        Self {
            date,
            amount,
            method: method.to_string(),
            reference: reference.to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct PurchaseHistory {
    pub purchases: Vec<Purchase>,
    pub payments: Vec<Payment>,
}

impl PurchaseHistory {
    pub fn sample() -> Self {
        let purchase = |d, description: &str, category: &str, amount, status, invoice: &str| Purchase {
            date: d,
            description: description.to_string(),
            category: category.to_string(),
            amount,
            status,
            invoice: invoice.to_string(),
        };
        Self {
            purchases: vec![
                purchase(
                    date(2023, 6, 15),
                    "Egg Sales - Retail",
                    "Product Sales",
                    1250.0,
                    PaymentStatus::Paid,
                    "INV-2023-001",
                ),
                purchase(
                    date(2023, 6, 10),
                    "Egg Sales - Wholesale",
                    "Product Sales",
                    3450.0,
                    PaymentStatus::Paid,
                    "INV-2023-002",
                ),
                purchase(
                    date(2023, 6, 5),
                    "Broiler Sales",
                    "Bird Sales",
                    2800.0,
                    PaymentStatus::Pending,
                    "INV-2023-003",
                ),
            ],
            payments: vec![
                Payment::new(date(2023, 6, 15), 1250.0, "Bank Transfer", "REF123456"),
                Payment::new(date(2023, 6, 10), 3450.0, "Check", "CHK789012"),
            ],
        }
    }

    pub fn total_purchases(&self) -> f64 {
        self.purchases.iter().map(|p| p.amount).sum()
    }

    pub fn total_payments(&self) -> f64 {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Amount still owed. Negative when the customer has overpaid.
    pub fn balance(&self) -> f64 {
        self.total_purchases() - self.total_payments()
    }

    pub fn record_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_name_contact_and_email() {
        let customers = sample_customers();
        let names = |query| search(&customers, query).iter().map(|c| c.id).collect::<Vec<_>>();

        assert_eq!(names(""), vec![1, 2, 3, 4, 5]);
        assert_eq!(names("grocers"), vec![3]);
        assert_eq!(names("SARAH"), vec![2]);
        assert_eq!(names("goldeneggs.com"), vec![5]);
        assert!(names("nobody").is_empty());
    }

    #[test]
    fn purchase_history_balance() {
        let mut history = PurchaseHistory::sample();
        assert_eq!(history.total_purchases(), 7500.0);
        assert_eq!(history.total_payments(), 4700.0);
        assert_eq!(history.balance(), 2800.0);

        history.record_payment(Payment::new(date(2023, 6, 20), 2800.0, "Cash", "CASH-1"));
        assert_eq!(history.balance(), 0.0);
    }

    #[test]
    fn empty_history_owes_nothing() {
        assert_eq!(PurchaseHistory::default().balance(), 0.0);
    }
}
