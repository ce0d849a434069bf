//! Bird inventory per coup, its filters and the operations behind the
//! inventory forms.

use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::choice::Choice;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("no coup named `{0}`")]
    UnknownCoup(String),
    #[error("{coup} holds {available} {bird_type} birds, {requested} requested")]
    InsufficientBirds {
        coup: String,
        bird_type: &'static str,
        available: u32,
        requested: u32,
    },
    #[error("a transfer needs two different coups")]
    SameCoup,
    #[error("{coup} cannot hold {requested} more {bird_type} birds")]
    FlockFull {
        coup: String,
        bird_type: &'static str,
        requested: u32,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum::EnumIter)]
pub enum BirdType {
    Layers,
    Broilers,
}

impl Choice for BirdType {
    fn value(&self) -> &'static str {
        match self {
            Self::Layers => "layers",
            Self::Broilers => "broilers",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Layers => "Layers",
            Self::Broilers => "Broilers",
        }
    }
}

/// Ordered from best to worst.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize, strum::EnumIter)]
pub enum HealthStatus {
    Healthy,
    Monitor,
    UnderTreatment,
}

impl Choice for HealthStatus {
    fn value(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Monitor => "monitor",
            Self::UnderTreatment => "treatment",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Monitor => "Monitor",
            Self::UnderTreatment => "Under Treatment",
        }
    }
}

/// Age bands in weeks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum::EnumIter)]
pub enum AgeGroup {
    Chicks,
    Growers,
    Pullets,
    Adults,
}

impl AgeGroup {
    pub fn contains(&self, age_weeks: u32) -> bool {
        match self {
            Self::Chicks => age_weeks <= 4,
            Self::Growers => (5..=12).contains(&age_weeks),
            Self::Pullets => (13..=20).contains(&age_weeks),
            Self::Adults => age_weeks >= 21,
        }
    }
}

impl Choice for AgeGroup {
    fn value(&self) -> &'static str {
        match self {
            Self::Chicks => "0-4",
            Self::Growers => "5-12",
            Self::Pullets => "13-20",
            Self::Adults => "21+",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Chicks => "0-4 weeks",
            Self::Growers => "5-12 weeks",
            Self::Pullets => "13-20 weeks",
            Self::Adults => "21+ weeks",
        }
    }
}

/// The birds housed in one coup.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Flock {
    pub coup: String,
    pub bird_type: BirdType,
    pub count: u32,
    pub age_weeks: u32,
    pub health: HealthStatus,
}

impl Flock {
    fn new(coup: &str, bird_type: BirdType, count: u32, age_weeks: u32, health: HealthStatus) -> Self {
        Self {
            coup: coup.to_string(),
            bird_type,
            count,
            age_weeks,
            health,
        }
    }

    /// Filter value of the coup, e.g. "coup-a".
    pub fn coup_value(&self) -> String {
        self.coup.to_lowercase().replace(' ', "-")
    }
}

/// `None` fields match everything.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct InventoryFilter {
    pub bird_type: Option<BirdType>,
    pub coup: Option<String>,
    pub health: Option<HealthStatus>,
    pub age_group: Option<AgeGroup>,
}

impl InventoryFilter {
    pub fn matches(&self, flock: &Flock) -> bool {
        self.bird_type.is_none_or(|t| t == flock.bird_type)
            && self
                .coup
                .as_deref()
                .is_none_or(|c| c == flock.coup_value() || c == flock.coup)
            && self.health.is_none_or(|h| h == flock.health)
            && self.age_group.is_none_or(|g| g.contains(flock.age_weeks))
    }
}

/// Totals for one bird type.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TypeSummary {
    pub bird_type: BirdType,
    pub total: u32,
    pub coups: usize,
    /// The worst status among the type's flocks.
    pub health: HealthStatus,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Inventory {
    flocks: Vec<Flock>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::sample()
    }
}

impl Inventory {
    pub fn new(flocks: Vec<Flock>) -> Self {
        Self { flocks }
    }

    /// Coups A to E as shown on the inventory screen.
    pub fn sample() -> Self {
        use BirdType::*;
        use HealthStatus::*;
        Self::new(vec![
            Flock::new("Coup A", Layers, 1200, 24, Healthy),
            Flock::new("Coup B", Layers, 1040, 18, Healthy),
            Flock::new("Coup C", Layers, 1000, 12, Healthy),
            Flock::new("Coup D", Broilers, 1200, 6, Monitor),
            Flock::new("Coup E", Broilers, 840, 4, Healthy),
        ])
    }

    pub fn flocks(&self) -> &[Flock] {
        &self.flocks
    }

    pub fn filtered(&self, filter: &InventoryFilter) -> Vec<&Flock> {
        self.flocks.iter().filter(|f| filter.matches(f)).collect()
    }

    pub fn total_birds(&self) -> u32 {
        self.flocks.iter().map(|f| f.count).sum()
    }

    /// Coup names in inventory order, without duplicates.
    pub fn coups(&self) -> Vec<&str> {
        self.flocks.iter().map(|f| f.coup.as_str()).unique().collect()
    }

    /// Per bird type totals, in `BirdType` order. Types with no flocks are omitted.
    pub fn summary_by_type(&self) -> Vec<TypeSummary> {
        let groups = self.flocks.iter().into_group_map_by(|f| f.bird_type);
        groups
            .into_iter()
            .sorted_by_key(|(bird_type, _)| *bird_type as u8)
            .map(|(bird_type, flocks)| TypeSummary {
                bird_type,
                total: flocks.iter().map(|f| f.count).sum(),
                coups: flocks.iter().map(|f| &f.coup).unique().count(),
                health: flocks.iter().map(|f| f.health).max().unwrap_or(HealthStatus::Healthy),
            })
            .collect()
    }

    fn flock_mut(&mut self, coup: &str, bird_type: BirdType) -> Option<&mut Flock> {
        self.flocks
            .iter_mut()
            .find(|f| (f.coup == coup || f.coup_value() == coup) && f.bird_type == bird_type)
    }

    fn has_coup(&self, coup: &str) -> bool {
        self.flocks.iter().any(|f| f.coup == coup || f.coup_value() == coup)
    }

    fn take(&mut self, coup: &str, bird_type: BirdType, quantity: u32) -> Result<(), InventoryError> {
        if !self.has_coup(coup) {
            return Err(InventoryError::UnknownCoup(coup.to_string()));
        }
        let flock = self.flock_mut(coup, bird_type);
        let available = flock.as_ref().map(|f| f.count).unwrap_or(0);
        match flock {
            Some(flock) if flock.count >= quantity => {
                flock.count -= quantity;
                Ok(())
            }
            _ => Err(InventoryError::InsufficientBirds {
                coup: coup.to_string(),
                bird_type: bird_type.label(),
                available,
                requested: quantity,
            }),
        }
    }

    /// Adds purchased or hatched birds to a coup, creating the flock if the
    /// coup does not yet house that type.
    pub fn add_birds(
        &mut self,
        coup: &str,
        bird_type: BirdType,
        quantity: u32,
        age_weeks: u32,
    ) -> Result<(), InventoryError> {
        self.check_room(coup, bird_type, quantity)?;
        match self.flock_mut(coup, bird_type) {
            Some(flock) => flock.count += quantity,
            None => self
                .flocks
                .push(Flock::new(coup, bird_type, quantity, age_weeks, HealthStatus::Healthy)),
        }
        Ok(())
    }

    fn check_room(&mut self, coup: &str, bird_type: BirdType, quantity: u32) -> Result<(), InventoryError> {
        let current = self.flock_mut(coup, bird_type).map(|f| f.count).unwrap_or(0);
        match current.checked_add(quantity) {
            Some(_) => Ok(()),
            None => Err(InventoryError::FlockFull {
                coup: coup.to_string(),
                bird_type: bird_type.label(),
                requested: quantity,
            }),
        }
    }

    pub fn record_mortality(&mut self, coup: &str, bird_type: BirdType, quantity: u32) -> Result<(), InventoryError> {
        self.take(coup, bird_type, quantity)
    }

    pub fn mark_for_sale(&mut self, coup: &str, bird_type: BirdType, quantity: u32) -> Result<(), InventoryError> {
        self.take(coup, bird_type, quantity)
    }

    /// Moves birds between coups. Nothing changes on error.
    pub fn transfer(
        &mut self,
        from: &str,
        to: &str,
        bird_type: BirdType,
        quantity: u32,
    ) -> Result<(), InventoryError> {
        if from == to {
            return Err(InventoryError::SameCoup);
        }
        if !self.has_coup(to) {
            return Err(InventoryError::UnknownCoup(to.to_string()));
        }
        self.check_room(to, bird_type, quantity)?;
        let age_weeks = self.flock_mut(from, bird_type).map(|f| f.age_weeks).unwrap_or(0);
        self.take(from, bird_type, quantity)?;
        self.add_birds(to, bird_type, quantity, age_weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::filter_value;

    #[test]
    fn sample_totals_match_the_inventory_cards() {
        let inventory = Inventory::sample();
        assert_eq!(inventory.total_birds(), 5280);

        let summary = inventory.summary_by_type();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].bird_type, BirdType::Layers);
        assert_eq!(summary[0].total, 3240);
        assert_eq!(summary[0].coups, 3);
        assert_eq!(summary[0].health, HealthStatus::Healthy);
        assert_eq!(summary[1].bird_type, BirdType::Broilers);
        assert_eq!(summary[1].total, 2040);
        assert_eq!(summary[1].coups, 2);
        assert_eq!(summary[1].health, HealthStatus::Monitor);
    }

    #[test]
    fn empty_filter_matches_everything() {
        let inventory = Inventory::sample();
        assert_eq!(inventory.filtered(&InventoryFilter::default()).len(), 5);
    }

    #[test]
    fn filters_combine() {
        let inventory = Inventory::sample();
        let filter = InventoryFilter {
            bird_type: filter_value("layers"),
            age_group: filter_value("13-20"),
            ..Default::default()
        };
        let coups: Vec<&str> = inventory.filtered(&filter).iter().map(|f| f.coup.as_str()).collect();
        assert_eq!(coups, vec!["Coup B"]);

        let filter = InventoryFilter {
            coup: Some("coup-d".into()),
            health: filter_value("monitor"),
            ..Default::default()
        };
        assert_eq!(inventory.filtered(&filter).len(), 1);

        let filter = InventoryFilter {
            health: filter_value("treatment"),
            ..Default::default()
        };
        assert!(inventory.filtered(&filter).is_empty());
    }

    #[test]
    fn age_groups_cover_boundaries() {
        assert!(AgeGroup::Chicks.contains(4));
        assert!(AgeGroup::Growers.contains(5));
        assert!(AgeGroup::Growers.contains(12));
        assert!(AgeGroup::Pullets.contains(20));
        assert!(AgeGroup::Adults.contains(21));
        assert!(!AgeGroup::Adults.contains(20));
    }

    #[test]
    fn mortality_reduces_the_flock() {
        let mut inventory = Inventory::sample();
        inventory.record_mortality("Coup A", BirdType::Layers, 5).unwrap();
        assert_eq!(inventory.total_birds(), 5275);

        let err = inventory.record_mortality("Coup A", BirdType::Broilers, 1).unwrap_err();
        assert!(matches!(err, InventoryError::InsufficientBirds { available: 0, .. }));

        let err = inventory.record_mortality("Coup Z", BirdType::Layers, 1).unwrap_err();
        assert_eq!(err, InventoryError::UnknownCoup("Coup Z".into()));
    }

    #[test]
    fn transfer_moves_birds_and_is_atomic() {
        let mut inventory = Inventory::sample();
        inventory.transfer("coup-a", "Coup B", BirdType::Layers, 200).unwrap();
        let counts: Vec<u32> = inventory.flocks().iter().map(|f| f.count).collect();
        assert_eq!(counts[..2], [1000, 1240]);
        assert_eq!(inventory.total_birds(), 5280);

        let before = inventory.clone();
        assert!(inventory.transfer("Coup A", "Coup B", BirdType::Layers, 5000).is_err());
        assert!(inventory.transfer("Coup A", "Coup A", BirdType::Layers, 1).is_err());
        assert!(inventory.transfer("Coup A", "Coup Q", BirdType::Layers, 1).is_err());
        assert_eq!(inventory, before);
    }

    #[test]
    fn adding_a_new_type_creates_a_flock() {
        let mut inventory = Inventory::sample();
        inventory.add_birds("Coup C", BirdType::Broilers, 100, 1).unwrap();
        assert_eq!(inventory.flocks().len(), 6);
        assert_eq!(inventory.coups().len(), 5);
        inventory.add_birds("Coup C", BirdType::Broilers, 50, 1).unwrap();
        assert_eq!(inventory.flocks().len(), 6);
        assert_eq!(inventory.total_birds(), 5430);
    }

    #[test]
    fn adding_past_the_counter_limit_is_refused() {
        let mut inventory = Inventory::sample();
        let err = inventory
            .add_birds("Coup A", BirdType::Layers, u32::MAX, 1)
            .unwrap_err();
        assert!(matches!(err, InventoryError::FlockFull { requested: u32::MAX, .. }));
        assert_eq!(inventory.total_birds(), 5280);

        // A brand new flock can take the full range.
        inventory.add_birds("Coup C", BirdType::Broilers, u32::MAX, 1).unwrap();
        assert!(inventory.transfer("Coup A", "Coup C", BirdType::Broilers, 1).is_err());
    }
}
