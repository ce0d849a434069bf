//! Declarative form schemas and their validation.
//!
//! Every form in the dashboard is described by a [`Schema`]: an ordered list
//! of [`Field`]s, each with the [`Rule`]s it must satisfy. Values arrive as
//! raw strings from the input controls ([`FormValues`]); numeric fields are
//! coerced before their rules run.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::choice::Choice;
use crate::currency::Currency;
use crate::prefs::user_prefs::DateFormat;
use crate::prefs::user_prefs::Language;
use crate::prefs::user_prefs::Theme;
use crate::prefs::user_prefs::TimeFormat;
use crate::prefs::user_prefs::Timezone;
use crate::records::financials::ReportKind;
use crate::records::inventory::BirdType;
use crate::records::users::Role;

/// Message reported when a number field holds something that is not a number.
pub const NOT_A_NUMBER: &str = "Expected a number";

/// `(value, label)` pairs of a select control.
pub type Options = Vec<(&'static str, &'static str)>;

#[derive(Clone, PartialEq, Debug)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    /// Coerced: empty reads as 0, anything else must parse.
    Number,
    Date,
    Time,
    TextArea,
    Checkbox,
    Select(Options),
}

impl FieldKind {
    /// The `type` attribute of the matching `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::Checkbox => "checkbox",
            Self::Text | Self::TextArea | Self::Select(_) => "text",
        }
    }
}

/// A constraint on one field, carrying the message shown when it fails.
#[derive(Clone, PartialEq, Debug)]
pub enum Rule {
    Required(&'static str),
    Email(&'static str),
    MinLen(usize, &'static str),
    Min(f64, &'static str),
    Max(f64, &'static str),
    /// Must equal the value of the named field.
    Matches(&'static str, &'static str),
}

impl Rule {
    fn check(&self, raw: &str, number: Option<f64>, values: &FormValues) -> Result<(), &'static str> {
        let ok = match self {
            Self::Required(_) => !raw.trim().is_empty(),
            Self::Email(_) => is_valid_email(raw),
            Self::MinLen(len, _) => raw.chars().count() >= *len,
            Self::Min(min, _) => number.is_some_and(|n| n >= *min),
            Self::Max(max, _) => number.is_some_and(|n| n <= *max),
            Self::Matches(other, _) => raw == values.text(other),
        };
        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    pub fn message(&self) -> &'static str {
        match *self {
            Self::Required(m)
            | Self::Email(m)
            | Self::MinLen(_, m)
            | Self::Min(_, m)
            | Self::Max(_, m)
            | Self::Matches(_, m) => m,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: Vec<Rule>,
    pub placeholder: &'static str,
    pub default: &'static str,
}

impl Field {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            rules: vec![],
            placeholder: "",
            default: "",
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn required(self, message: &'static str) -> Self {
        self.rule(Rule::Required(message))
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn default_value(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }

    /// The label a select field shows for `value`.
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        match &self.kind {
            FieldKind::Select(options) => options.iter().find(|(v, _)| *v == value).map(|(_, label)| *label),
            _ => None,
        }
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required(_) | Rule::Email(_)))
    }

    /// Returns the first failing rule's message.
    fn validate(&self, values: &FormValues) -> Result<(), String> {
        let raw = values.text(self.name);
        let number = match self.kind {
            FieldKind::Number => Some(coerce_number(raw).ok_or_else(|| NOT_A_NUMBER.to_string())?),
            _ => None,
        };
        self.rules
            .iter()
            .try_for_each(|rule| rule.check(raw, number, values))
            .map_err(str::to_string)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Schema {
    pub id: &'static str,
    pub title: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(id: &'static str, title: &'static str, submit_label: &'static str, fields: Vec<Field>) -> Self {
        Self {
            id,
            title,
            submit_label,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The label of the option chosen in a select field, or the raw value.
    pub fn display_value<'a>(&self, values: &'a FormValues, name: &str) -> &'a str {
        let raw = values.text(name);
        self.field(name).and_then(|f| f.option_label(raw)).unwrap_or(raw)
    }

    /// Values pre-filled from each field's default.
    pub fn defaults(&self) -> FormValues {
        let mut values = FormValues::default();
        for field in &self.fields {
            values.set(field.name, field.default);
        }
        values
    }

    /// Checks every field; reports the first failing rule of each.
    pub fn validate(&self, values: &FormValues) -> Result<(), FormErrors> {
        let errors: BTreeMap<_, _> = self
            .fields
            .iter()
            .filter_map(|field| field.validate(values).err().map(|e| (field.name, e)))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors(errors))
        }
    }
}

/// Raw input values keyed by field name.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// The raw value, empty when unset.
    pub fn text(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    /// The coerced number, 0 when empty or unparseable.
    pub fn number(&self, name: &str) -> f64 {
        coerce_number(self.text(name)).unwrap_or(0.0)
    }

    /// Whole, non-negative count, rounding a fractional input down.
    pub fn count(&self, name: &str) -> u32 {
        self.number(name).max(0.0).floor().min(f64::from(u32::MAX)) as u32
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.text(name), "true" | "on")
    }

    pub fn choice<T: Choice>(&self, name: &str) -> Option<T> {
        T::from_value(self.text(name))
    }

    /// Parses an `<input type="date">` value (`YYYY-MM-DD`).
    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.text(name), "%Y-%m-%d").ok()
    }
}

/// Field name to message for every field that failed validation.
#[derive(Error, Clone, PartialEq, Eq, Debug, Default)]
#[error("invalid form fields: {}", .0.keys().copied().collect::<Vec<_>>().join(", "))]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, message)| (*name, message.as_str()))
    }
}

fn coerce_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A pragmatic address check: one `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

pub const COUP_OPTIONS: &[(&str, &str)] = &[
    ("coup-a", "Coup A"),
    ("coup-b", "Coup B"),
    ("coup-c", "Coup C"),
    ("coup-d", "Coup D"),
    ("coup-e", "Coup E"),
];

const PAYMENT_METHODS: &[(&str, &str)] = &[
    ("cash", "Cash"),
    ("bank-transfer", "Bank Transfer"),
    ("check", "Check"),
    ("credit-card", "Credit Card"),
    ("mobile-payment", "Mobile Payment"),
];

fn select(options: &[(&'static str, &'static str)]) -> FieldKind {
    FieldKind::Select(options.to_vec())
}

fn coups() -> FieldKind {
    select(COUP_OPTIONS)
}

fn bird_types() -> FieldKind {
    FieldKind::Select(BirdType::options())
}

/// Largest batch a single stock form may move.
pub const MAX_QUANTITY: f64 = 1_000_000.0;

fn quantity() -> Field {
    Field::new("quantity", "Quantity", FieldKind::Number)
        .rule(Rule::Min(1.0, "Quantity must be at least 1"))
        .rule(Rule::Max(MAX_QUANTITY, "Quantity must be at most 1,000,000"))
}

fn notes() -> Field {
    Field::new("notes", "Additional Notes", FieldKind::TextArea)
}

pub fn login() -> Schema {
    Schema::new(
        "login",
        "Sign in",
        "Sign in",
        vec![
            Field::new("email", "Email", FieldKind::Email)
                .rule(Rule::Email("Please enter a valid email address"))
                .placeholder("you@example.com"),
            Field::new("password", "Password", FieldKind::Password)
                .rule(Rule::MinLen(6, "Password must be at least 6 characters"))
                .placeholder("••••••••"),
            Field::new("remember_me", "Remember me", FieldKind::Checkbox),
        ],
    )
}

pub fn forgot_password() -> Schema {
    Schema::new(
        "forgot-password",
        "Reset your password",
        "Send reset link",
        vec![Field::new("email", "Email", FieldKind::Email)
            .rule(Rule::Email("Please enter a valid email address"))
            .placeholder("you@example.com")],
    )
}

pub fn add_birds() -> Schema {
    Schema::new(
        "add-birds",
        "Add Birds",
        "Add Birds",
        vec![
            Field::new("bird_type", "Bird Type", bird_types()).required("Bird type is required"),
            quantity().default_value("0"),
            Field::new("age", "Age (weeks)", FieldKind::Number)
                .rule(Rule::Min(0.0, "Age must be a positive number"))
                .default_value("0"),
            Field::new("coup", "Assign to Coup", coups()).required("Coup assignment is required"),
            Field::new(
                "source",
                "Source",
                select(&[("hatchery", "Hatchery"), ("supplier", "Supplier"), ("farm-bred", "Farm Bred")]),
            )
            .required("Source is required"),
            Field::new("purchase_price", "Purchase Price", FieldKind::Number)
                .rule(Rule::Min(0.0, "Purchase price must be a positive number"))
                .default_value("0"),
            Field::new("purchase_date", "Purchase Date", FieldKind::Date).required("Purchase date is required"),
        ],
    )
}

pub fn record_mortality() -> Schema {
    Schema::new(
        "record-mortality",
        "Record Mortality",
        "Record Mortality",
        vec![
            Field::new("coup", "Coup", coups()).required("Coup is required"),
            Field::new("bird_type", "Bird Type", bird_types()).required("Bird type is required"),
            quantity(),
            Field::new("date", "Date", FieldKind::Date).required("Date is required"),
            Field::new(
                "cause",
                "Cause of Death",
                select(&[
                    ("disease", "Disease"),
                    ("injury", "Injury"),
                    ("predator", "Predator"),
                    ("environmental", "Environmental Factors"),
                    ("unknown", "Unknown"),
                ]),
            )
            .required("Cause is required"),
            notes(),
        ],
    )
}

pub fn assign_birds() -> Schema {
    Schema::new(
        "assign-birds",
        "Assign Birds",
        "Transfer Birds",
        vec![
            Field::new("source_coup", "Source Coup", coups()).required("Source coup is required"),
            Field::new("target_coup", "Target Coup", coups()).required("Target coup is required"),
            Field::new("bird_type", "Bird Type", bird_types()).required("Bird type is required"),
            quantity(),
            Field::new(
                "reason",
                "Reason for Transfer",
                select(&[
                    ("space-optimization", "Space Optimization"),
                    ("age-grouping", "Age Grouping"),
                    ("health-management", "Health Management"),
                    ("production-optimization", "Production Optimization"),
                    ("other", "Other"),
                ]),
            )
            .required("Reason is required"),
            Field::new("date", "Transfer Date", FieldKind::Date).required("Date is required"),
        ],
    )
}

pub fn mark_for_sale() -> Schema {
    Schema::new(
        "mark-for-sale",
        "Mark for Sale",
        "Mark for Sale",
        vec![
            Field::new("coup", "Coup", coups()).required("Coup is required"),
            Field::new("bird_type", "Bird Type", bird_types()).required("Bird type is required"),
            quantity(),
            Field::new("target_sale_date", "Target Sale Date", FieldKind::Date)
                .required("Target sale date is required"),
            Field::new("expected_price", "Expected Price per Bird", FieldKind::Number)
                .rule(Rule::Min(0.0, "Expected price must be a positive number"))
                .default_value("0"),
            Field::new(
                "reason",
                "Reason for Sale",
                select(&[
                    ("age", "Optimal Age Reached"),
                    ("production-decline", "Production Decline"),
                    ("space-management", "Space Management"),
                    ("scheduled-rotation", "Scheduled Rotation"),
                    ("other", "Other"),
                ]),
            )
            .required("Reason is required"),
            notes(),
        ],
    )
}

pub fn record_expense() -> Schema {
    Schema::new(
        "record-expense",
        "Record Expense",
        "Record Expense",
        vec![
            Field::new("date", "Date", FieldKind::Date).required("Date is required"),
            Field::new(
                "category",
                "Category",
                select(&[
                    ("feed", "Feed"),
                    ("medicine", "Medicine"),
                    ("utilities", "Utilities"),
                    ("labor", "Labor"),
                    ("equipment", "Equipment"),
                    ("maintenance", "Maintenance"),
                    ("other", "Other Expense"),
                ]),
            )
            .required("Category is required"),
            Field::new("description", "Description", FieldKind::Text).required("Description is required"),
            Field::new("amount", "Amount", FieldKind::Number).rule(Rule::Min(0.01, "Amount must be greater than 0")),
            Field::new(
                "supplier",
                "Supplier (Optional)",
                select(&[
                    ("feed-supplier-x", "Feed Supplier X"),
                    ("farm-equipment-co", "Farm Equipment Co."),
                    ("veterinary-supplies", "Veterinary Supplies Inc."),
                    ("utility-company", "Utility Company"),
                    ("other", "Other"),
                ]),
            ),
            Field::new("payment_method", "Payment Method", select(PAYMENT_METHODS))
                .required("Payment method is required"),
            Field::new("receipt_number", "Receipt Number (Optional)", FieldKind::Text),
            Field::new("notes", "Notes (Optional)", FieldKind::TextArea),
        ],
    )
}

pub fn generate_report() -> Schema {
    Schema::new(
        "generate-report",
        "Generate Report",
        "Generate",
        vec![
            Field::new("report_type", "Report Type", FieldKind::Select(ReportKind::options()))
                .required("Report type is required"),
            Field::new("start_date", "Start Date", FieldKind::Date).required("Start date is required"),
            Field::new("end_date", "End Date", FieldKind::Date).required("End date is required"),
            Field::new(
                "format",
                "Report Format",
                select(&[("pdf", "PDF"), ("excel", "Excel"), ("csv", "CSV")]),
            )
            .required("Format is required")
            .default_value("pdf"),
        ],
    )
}

pub fn record_payment() -> Schema {
    Schema::new(
        "record-payment",
        "Record Payment",
        "Record Payment",
        vec![
            Field::new("amount", "Amount", FieldKind::Number).rule(Rule::Min(0.01, "Amount must be greater than 0")),
            Field::new("date", "Payment Date", FieldKind::Date).required("Date is required"),
            Field::new("payment_method", "Payment Method", select(PAYMENT_METHODS))
                .required("Payment method is required"),
            Field::new("invoice_number", "Invoice Number (Optional)", FieldKind::Text),
            Field::new("notes", "Notes (Optional)", FieldKind::TextArea),
        ],
    )
}

pub fn edit_customer() -> Schema {
    Schema::new(
        "edit-customer",
        "Edit Customer",
        "Save Changes",
        vec![
            Field::new("name", "Business Name", FieldKind::Text).required("Name is required"),
            Field::new("contact", "Contact Person", FieldKind::Text).required("Contact person is required"),
            Field::new("email", "Email", FieldKind::Email).rule(Rule::Email("Invalid email address")),
            Field::new("phone", "Phone", FieldKind::Text).required("Phone number is required"),
            Field::new(
                "kind",
                "Customer Type",
                select(&[
                    ("Retail", "Retail"),
                    ("Restaurant", "Restaurant"),
                    ("Wholesale", "Wholesale"),
                    ("Bakery", "Bakery"),
                    ("Distributor", "Distributor"),
                ]),
            )
            .required("Customer type is required"),
            Field::new("address", "Address", FieldKind::TextArea).required("Address is required"),
            Field::new("notes", "Notes (Optional)", FieldKind::TextArea),
        ],
    )
}

pub fn add_user() -> Schema {
    Schema::new(
        "add-user",
        "Add User",
        "Create User",
        vec![
            Field::new("first_name", "First Name", FieldKind::Text).required("First name is required"),
            Field::new("last_name", "Last Name", FieldKind::Text).required("Last name is required"),
            Field::new("email", "Email", FieldKind::Email).rule(Rule::Email("Invalid email address")),
            Field::new("role", "Role", FieldKind::Select(Role::options())).required("Role is required"),
            Field::new("password", "Password", FieldKind::Password)
                .rule(Rule::MinLen(8, "Password must be at least 8 characters")),
            Field::new("confirm_password", "Confirm Password", FieldKind::Password)
                .rule(Rule::Matches("password", "Passwords do not match")),
            Field::new("send_invite", "Send invitation email", FieldKind::Checkbox).default_value("true"),
        ],
    )
}

pub fn coup_management() -> Schema {
    Schema::new(
        "coup-management",
        "Coup",
        "Save Coup",
        vec![
            Field::new("name", "Coup Name", FieldKind::Text).required("Coup name is required"),
            Field::new(
                "kind",
                "Coup Type",
                select(&[
                    ("layers", "Layers"),
                    ("broilers", "Broilers"),
                    ("mixed", "Mixed"),
                    ("breeding", "Breeding"),
                    ("quarantine", "Quarantine"),
                ]),
            )
            .required("Coup type is required"),
            Field::new("capacity", "Capacity (birds)", FieldKind::Number)
                .rule(Rule::Min(1.0, "Capacity must be at least 1")),
            Field::new("dimensions", "Dimensions (Optional)", FieldKind::Text),
            Field::new("location", "Location (Optional)", FieldKind::Text),
            Field::new("description", "Description (Optional)", FieldKind::TextArea),
        ],
    )
}

pub fn alert_settings() -> Schema {
    let percent = |name, label, default| {
        Field::new(name, label, FieldKind::Number)
            .rule(Rule::Min(0.0, "Must be a positive number"))
            .rule(Rule::Max(100.0, "Must be less than 100"))
            .default_value(default)
    };
    Schema::new(
        "alert-settings",
        "Alert Configuration",
        "Save Alert Settings",
        vec![
            percent("mortality_threshold", "Mortality Rate Threshold (%)", "2"),
            Field::new("feed_stock_threshold", "Feed Stock Threshold (kg)", FieldKind::Number)
                .rule(Rule::Min(0.0, "Must be a positive number"))
                .default_value("500"),
            Field::new("temperature_min", "Minimum Temperature (°C)", FieldKind::Number).default_value("18"),
            Field::new("temperature_max", "Maximum Temperature (°C)", FieldKind::Number).default_value("32"),
            percent("egg_drop_threshold", "Egg Production Drop (%)", "10"),
            Field::new("email_alerts", "Email alerts", FieldKind::Checkbox).default_value("true"),
            Field::new("sms_alerts", "SMS alerts", FieldKind::Checkbox).default_value("false"),
            Field::new("push_alerts", "Push notifications", FieldKind::Checkbox).default_value("true"),
            Field::new("recipients", "Alert Recipients", FieldKind::Text)
                .default_value("admin@poultryfarm.com, manager@poultryfarm.com"),
        ],
    )
}

pub fn backup_settings() -> Schema {
    Schema::new(
        "backup-settings",
        "Backup & Restore",
        "Save Backup Settings",
        vec![
            Field::new("auto_backup", "Automatic backups", FieldKind::Checkbox).default_value("true"),
            Field::new(
                "frequency",
                "Backup Frequency",
                select(&[("hourly", "Hourly"), ("daily", "Daily"), ("weekly", "Weekly"), ("monthly", "Monthly")]),
            )
            .required("Frequency is required")
            .default_value("daily"),
            Field::new("time", "Backup Time", FieldKind::Time)
                .required("Time is required")
                .default_value("02:00"),
            Field::new("retention_days", "Retention Period (days)", FieldKind::Number)
                .rule(Rule::Min(1.0, "Must be at least 1"))
                .default_value("30"),
            Field::new(
                "location",
                "Backup Location",
                select(&[("local", "Local Storage"), ("cloud", "Cloud Storage"), ("external", "External Drive")]),
            )
            .required("Location is required")
            .default_value("local"),
            Field::new("notify_on_completion", "Notify on completion", FieldKind::Checkbox).default_value("true"),
            Field::new("notify_on_failure", "Notify on failure", FieldKind::Checkbox).default_value("true"),
        ],
    )
}

pub fn edit_profile() -> Schema {
    Schema::new(
        "edit-profile",
        "Personal Information",
        "Save Changes",
        vec![
            Field::new("first_name", "First Name", FieldKind::Text)
                .required("First name is required")
                .default_value("John"),
            Field::new("last_name", "Last Name", FieldKind::Text)
                .required("Last name is required")
                .default_value("Doe"),
            Field::new("email", "Email Address", FieldKind::Email)
                .rule(Rule::Email("Invalid email address"))
                .default_value("john@poultryfarm.com"),
            Field::new("phone", "Phone Number", FieldKind::Text).default_value("(555) 123-4567"),
            Field::new("job_title", "Job Title", FieldKind::Text).default_value("Farm Manager"),
            Field::new("bio", "Bio", FieldKind::TextArea).default_value(
                "Experienced farm manager with over 10 years in poultry management. \
                 Specializing in optimizing production and maintaining high welfare standards.",
            ),
        ],
    )
}

pub fn change_password() -> Schema {
    Schema::new(
        "change-password",
        "Change Password",
        "Update Password",
        vec![
            Field::new("current_password", "Current Password", FieldKind::Password)
                .required("Current password is required"),
            Field::new("new_password", "New Password", FieldKind::Password)
                .rule(Rule::MinLen(8, "Password must be at least 8 characters")),
            Field::new("confirm_password", "Confirm New Password", FieldKind::Password)
                .rule(Rule::Matches("new_password", "Passwords do not match")),
        ],
    )
}

/// Display preferences on the settings screen.
pub fn preferences() -> Schema {
    Schema::new(
        "preferences",
        "Preferences",
        "Save Preferences",
        vec![
            Field::new("language", "Language", FieldKind::Select(Language::options())).default_value("en"),
            Field::new("timezone", "Timezone", FieldKind::Select(Timezone::options()))
                .default_value(Timezone::default().value()),
            Field::new("date_format", "Date Format", FieldKind::Select(DateFormat::options()))
                .default_value(DateFormat::default().value()),
            Field::new("time_format", "Time Format", FieldKind::Select(TimeFormat::options()))
                .default_value(TimeFormat::default().value()),
            Field::new("theme", "Theme", FieldKind::Select(Theme::options())).default_value("light"),
            Field::new(
                "currency",
                "Currency",
                FieldKind::Select(Currency::all().map(|c| (c.code(), c.name())).collect()),
            )
            .default_value(Currency::DEFAULT.code()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(schema: &Schema, values: &FormValues) -> FormErrors {
        schema.validate(values).unwrap_err()
    }

    #[test]
    fn login_messages() {
        let schema = login();
        let e = errors(&schema, &FormValues::default().with("email", "nope").with("password", "123"));
        assert_eq!(e.get("email"), Some("Please enter a valid email address"));
        assert_eq!(e.get("password"), Some("Password must be at least 6 characters"));
        assert_eq!(e.get("remember_me"), None);

        let ok = FormValues::default()
            .with("email", "farmer@example.com")
            .with("password", "secret1");
        assert!(schema.validate(&ok).is_ok());
    }

    #[test]
    fn number_fields_are_coerced() {
        let schema = add_birds();
        let base = schema
            .defaults()
            .with("bird_type", "layers")
            .with("coup", "coup-a")
            .with("source", "hatchery")
            .with("purchase_date", "2023-06-15");

        // Defaults hold quantity 0.
        let e = errors(&schema, &base);
        assert_eq!(e.get("quantity"), Some("Quantity must be at least 1"));
        assert_eq!(e.len(), 1);

        let e = errors(&schema, &base.clone().with("quantity", "abc"));
        assert_eq!(e.get("quantity"), Some(NOT_A_NUMBER));

        let e = errors(&schema, &base.clone().with("quantity", ""));
        assert_eq!(e.get("quantity"), Some("Quantity must be at least 1"));

        let e = errors(&schema, &base.clone().with("quantity", "4294967295"));
        assert_eq!(e.get("quantity"), Some("Quantity must be at most 1,000,000"));
        assert!(schema.validate(&base.clone().with("quantity", "1000000")).is_ok());

        let values = base.with("quantity", " 250 ");
        assert!(schema.validate(&values).is_ok());
        assert_eq!(values.count("quantity"), 250);
        assert_eq!(values.choice::<BirdType>("bird_type"), Some(BirdType::Layers));
        assert_eq!(values.date("purchase_date"), NaiveDate::from_ymd_opt(2023, 6, 15));
    }

    #[test]
    fn required_fields_report_their_own_message() {
        let e = errors(&record_expense(), &FormValues::default());
        assert_eq!(e.get("date"), Some("Date is required"));
        assert_eq!(e.get("category"), Some("Category is required"));
        assert_eq!(e.get("description"), Some("Description is required"));
        assert_eq!(e.get("amount"), Some("Amount must be greater than 0"));
        assert_eq!(e.get("payment_method"), Some("Payment method is required"));
        assert_eq!(e.get("supplier"), None);
        assert_eq!(e.len(), 5);
    }

    #[test]
    fn first_failing_rule_wins() {
        let schema = alert_settings();
        let e = errors(&schema, &schema.defaults().with("mortality_threshold", "-1"));
        assert_eq!(e.get("mortality_threshold"), Some("Must be a positive number"));
        let e = errors(&schema, &schema.defaults().with("egg_drop_threshold", "101"));
        assert_eq!(e.get("egg_drop_threshold"), Some("Must be less than 100"));
        assert!(schema.validate(&schema.defaults()).is_ok());
    }

    #[test]
    fn passwords_must_match() {
        let schema = add_user();
        let values = FormValues::default()
            .with("first_name", "Grace")
            .with("last_name", "Nansubuga")
            .with("email", "grace@poultryfarm.com")
            .with("role", "staff")
            .with("password", "longenough")
            .with("confirm_password", "different");
        let e = errors(&schema, &values);
        assert_eq!(e.get("confirm_password"), Some("Passwords do not match"));
        assert_eq!(e.len(), 1);
        assert!(schema.validate(&values.with("confirm_password", "longenough")).is_ok());
    }

    #[test]
    fn settings_defaults_validate() {
        for schema in [backup_settings(), edit_profile(), preferences(), generate_report()] {
            let result = schema.validate(&schema.defaults());
            if schema.id == "generate-report" {
                assert!(result.is_err());
            } else {
                assert!(result.is_ok(), "{}: {:?}", schema.id, result);
            }
        }
        let e = errors(&backup_settings(), &backup_settings().defaults().with("retention_days", "0"));
        assert_eq!(e.get("retention_days"), Some("Must be at least 1"));
    }

    #[test]
    fn email_check() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("john@poultryfarm.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("john"));
        assert!(!is_valid_email("john@farm"));
        assert!(!is_valid_email("@farm.com"));
        assert!(!is_valid_email("jo hn@farm.com"));
        assert!(!is_valid_email("john@farm..com"));
    }

    #[test]
    fn errors_display_lists_fields() {
        let e = errors(&forgot_password(), &FormValues::default());
        assert_eq!(e.to_string(), "invalid form fields: email");
    }

    #[test]
    fn select_values_display_their_labels() {
        let schema = record_expense();
        let values = FormValues::default().with("category", "feed").with("description", "Layer mash");
        assert_eq!(schema.display_value(&values, "category"), "Feed");
        assert_eq!(schema.display_value(&values, "description"), "Layer mash");
        assert_eq!(schema.display_value(&values.with("category", "mystery"), "category"), "mystery");
    }
}
