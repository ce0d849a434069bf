use std::ops::Deref;
use std::sync::Arc;

/// Farm and operator details that do not change while the app runs.
#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub farm_name: &'static str,
    pub user_name: &'static str,
    pub user_role: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self(Arc::new(AppStateData {
            farm_name: "Poultry Farm",
            user_name: "John Doe",
            user_role: "Farm Manager",
        }))
    }
}
