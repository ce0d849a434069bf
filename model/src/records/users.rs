//! System users shown on the admin screen and the activity log.

use serde::Deserialize;
use serde::Serialize;

use crate::choice::Choice;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::EnumIter)]
pub enum Role {
    Admin,
    Manager,
    Staff,
    Accountant,
    Viewer,
}

impl Choice for Role {
    fn value(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Staff => "staff",
            Self::Accountant => "accountant",
            Self::Viewer => "viewer",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Staff => "Staff",
            Self::Accountant => "Accountant",
            Self::Viewer => "Viewer",
        }
    }
}

/// Permissions offered on the user forms. Stored only; nothing checks them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum::EnumIter)]
pub enum Permission {
    ViewDashboard,
    ManageInventory,
    ManageFinancials,
    ManageCustomers,
    ManageUsers,
    ConfigureFarm,
    ViewReports,
    ExportData,
}

impl Choice for Permission {
    fn value(&self) -> &'static str {
        match self {
            Self::ViewDashboard => "view-dashboard",
            Self::ManageInventory => "manage-inventory",
            Self::ManageFinancials => "manage-financials",
            Self::ManageCustomers => "manage-customers",
            Self::ManageUsers => "manage-users",
            Self::ConfigureFarm => "configure-farm",
            Self::ViewReports => "view-reports",
            Self::ExportData => "export-data",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::ViewDashboard => "View Dashboard",
            Self::ManageInventory => "Manage Inventory",
            Self::ManageFinancials => "Manage Financials",
            Self::ManageCustomers => "Manage Customers",
            Self::ManageUsers => "Manage Users",
            Self::ConfigureFarm => "Configure Farm Settings",
            Self::ViewReports => "View Reports",
            Self::ExportData => "Export Data",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
    /// Empty for users who never logged in.
    pub last_login: String,
    pub permissions: Vec<Permission>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Uppercase first letters of the first and last name, e.g. "JD".
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

/// Fields collected by the Add User form.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub permissions: Vec<Permission>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::sample()
    }
}

impl UserDirectory {
    pub fn sample() -> Self {
        let user = |id, first: &str, last: &str, role, active, last_login: &str| User {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@poultryfarm.com", first.to_lowercase()),
            role,
            active,
            last_login: last_login.to_string(),
            permissions: vec![Permission::ViewDashboard],
        };
        Self {
            users: vec![
                user(1, "John", "Doe", Role::Admin, true, "2023-06-15 09:45 AM"),
                user(2, "Sarah", "Johnson", Role::Manager, true, "2023-06-14 16:30 PM"),
                user(3, "Mike", "Brown", Role::Staff, true, "2023-06-15 08:15 AM"),
                user(4, "Emily", "Davis", Role::Accountant, false, "2023-06-10 14:20 PM"),
            ],
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Adds a user and returns the assigned id. New users start active.
    pub fn add_user(&mut self, new: NewUser) -> u32 {
        let id = self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        self.users.push(User {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            role: new.role,
            active: true,
            last_login: String::new(),
            permissions: new.permissions,
        });
        id
    }

    /// Flips a user between active and inactive. Returns the new state.
    pub fn toggle_active(&mut self, id: u32) -> Option<bool> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        user.active = !user.active;
        Some(user.active)
    }

    pub fn active_count(&self) -> usize {
        self.users.iter().filter(|u| u.active).count()
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub user: String,
    pub action: String,
    pub details: String,
    pub ip: String,
}

pub fn sample_activity() -> Vec<ActivityEntry> {
    [
        ("2023-06-15 10:45:23", "John Doe", "Login", "Successful login from Chrome on Windows", "192.168.1.105"),
        ("2023-06-15 10:48:12", "John Doe", "Update", "Updated inventory for Coup A", "192.168.1.105"),
        ("2023-06-15 09:30:45", "Sarah Johnson", "Create", "Created new customer: Farm Fresh Restaurant", "192.168.1.110"),
        ("2023-06-15 09:15:33", "Sarah Johnson", "Login", "Successful login from Safari on macOS", "192.168.1.110"),
        ("2023-06-15 08:50:19", "Mike Brown", "Report", "Generated monthly financial report", "192.168.1.115"),
        ("2023-06-15 08:45:07", "Mike Brown", "Login", "Successful login from Firefox on Linux", "192.168.1.115"),
        ("2023-06-14 17:30:22", "System", "Alert", "Feed stock low in Coup B: 450kg remaining", "-"),
        ("2023-06-14 16:45:11", "John Doe", "Delete", "Deleted expired inventory record", "192.168.1.105"),
    ]
    .into_iter()
    .map(|(timestamp, user, action, details, ip)| ActivityEntry {
        timestamp: timestamp.to_string(),
        user: user.to_string(),
        action: action.to_string(),
        details: details.to_string(),
        ip: ip.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_and_names() {
        let directory = UserDirectory::sample();
        let john = directory.get(1).unwrap();
        assert_eq!(john.initials(), "JD");
        assert_eq!(john.full_name(), "John Doe");
        assert_eq!(john.email, "john@poultryfarm.com");
        assert_eq!(directory.get(4).unwrap().status_label(), "Inactive");
    }

    #[test]
    fn initials_tolerate_missing_parts() {
        let mut user = UserDirectory::sample().get(2).unwrap().clone();
        user.last_name.clear();
        assert_eq!(user.initials(), "S");
        user.first_name = "élodie".to_string();
        assert_eq!(user.initials(), "É");
    }

    #[test]
    fn add_user_assigns_next_id_and_starts_active() {
        let mut directory = UserDirectory::sample();
        let id = directory.add_user(NewUser {
            first_name: "Grace".to_string(),
            last_name: "Nansubuga".to_string(),
            email: "grace@poultryfarm.com".to_string(),
            role: Role::Viewer,
            permissions: vec![Permission::ViewReports],
        });
        assert_eq!(id, 5);
        let grace = directory.get(id).unwrap();
        assert!(grace.active);
        assert_eq!(grace.permissions, vec![Permission::ViewReports]);
        assert_eq!(directory.active_count(), 4);
    }

    #[test]
    fn toggle_active_flips_state() {
        let mut directory = UserDirectory::sample();
        assert_eq!(directory.toggle_active(4), Some(true));
        assert_eq!(directory.toggle_active(4), Some(false));
        assert_eq!(directory.toggle_active(99), None);
    }

    #[test]
    fn role_options_follow_declaration_order() {
        let values: Vec<&str> = Role::options().into_iter().map(|(value, _)| value).collect();
        assert_eq!(values, vec!["admin", "manager", "staff", "accountant", "viewer"]);
        assert_eq!(Permission::from_value("export-data"), Some(Permission::ExportData));
    }
}
