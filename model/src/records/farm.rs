//! Coup configuration edited on the admin screen.

use serde::Deserialize;
use serde::Serialize;

use super::financials::percentage;
use super::inventory::Inventory;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CoupConfig {
    pub name: String,
    /// Layers, Broilers, Mixed...
    pub kind: String,
    pub capacity: u32,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Farm {
    coups: Vec<CoupConfig>,
}

impl Default for Farm {
    fn default() -> Self {
        Self::sample()
    }
}

impl Farm {
    pub fn sample() -> Self {
        let coups = [
            ("Coup A", "Layers", 1500),
            ("Coup B", "Layers", 1200),
            ("Coup C", "Layers", 1000),
            ("Coup D", "Broilers", 1200),
            ("Coup E", "Broilers", 1000),
        ]
        .into_iter()
        .map(|(name, kind, capacity)| CoupConfig {
            name: name.to_string(),
            kind: kind.to_string(),
            capacity,
        })
        .collect();
        Self { coups }
    }

    pub fn coups(&self) -> &[CoupConfig] {
        &self.coups
    }

    /// Replaces the coup with the same name, or adds a new one.
    pub fn upsert(&mut self, coup: CoupConfig) {
        match self.coups.iter_mut().find(|c| c.name.eq_ignore_ascii_case(&coup.name)) {
            Some(existing) => *existing = coup,
            None => self.coups.push(coup),
        }
    }

    pub fn total_capacity(&self) -> u32 {
        self.coups.iter().map(|c| c.capacity).sum()
    }

    /// Birds housed in `coup` as a percentage of its capacity.
    pub fn occupancy(&self, coup: &str, inventory: &Inventory) -> Option<f64> {
        let config = self.coups.iter().find(|c| c.name == coup)?;
        let housed: u32 = inventory.flocks().iter().filter(|f| f.coup == coup).map(|f| f.count).sum();
        Some(percentage(f64::from(housed), f64::from(config.capacity)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_against_sample_inventory() {
        let farm = Farm::sample();
        let inventory = Inventory::sample();
        assert_eq!(farm.occupancy("Coup A", &inventory), Some(80.0));
        assert_eq!(farm.occupancy("Coup C", &inventory), Some(100.0));
        assert_eq!(farm.occupancy("Coup Z", &inventory), None);
        assert_eq!(farm.total_capacity(), 5900);
    }

    #[test]
    fn upsert_replaces_by_name() {
        let mut farm = Farm::sample();
        farm.upsert(CoupConfig {
            name: "coup a".to_string(),
            kind: "Mixed".to_string(),
            capacity: 2000,
        });
        assert_eq!(farm.coups().len(), 5);
        assert_eq!(farm.coups()[0].capacity, 2000);

        farm.upsert(CoupConfig {
            name: "Coup F".to_string(),
            kind: "Quarantine".to_string(),
            capacity: 100,
        });
        assert_eq!(farm.coups().len(), 6);
    }
}
