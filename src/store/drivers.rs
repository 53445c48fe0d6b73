use crate::models::driver::Driver;

/// Read-only courier roster for the Bissau hub.
#[derive(Debug, Default)]
pub struct DriverRegistry {
    drivers: Vec<Driver>,
}

impl DriverRegistry {
    pub fn new(drivers: Vec<Driver>) -> Self {
        Self { drivers }
    }

    /// Looks a driver up by id first, then by exact display name.
    pub fn resolve(&self, key: &str) -> Option<&Driver> {
        let key = key.trim();
        self.drivers
            .iter()
            .find(|driver| driver.id == key)
            .or_else(|| self.drivers.iter().find(|driver| driver.name == key))
    }

    pub fn by_name(&self, name: &str) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.name == name)
    }

    pub fn list(&self) -> Vec<Driver> {
        self.drivers.clone()
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::DriverRegistry;
    use crate::models::driver::Driver;

    fn driver(id: &str, name: &str) -> Driver {
        Driver {
            id: id.to_string(),
            name: name.to_string(),
            avg_delivery_time: "1.2h".to_string(),
            completion_rate: 98.5,
            rating: 4.9,
            total_deliveries: 450,
        }
    }

    #[test]
    fn resolves_by_id_or_name() {
        let registry = DriverRegistry::new(vec![
            driver("d1", "Antonio Silva"),
            driver("d2", "Buba Sanha"),
        ]);

        assert_eq!(registry.resolve("d2").map(|d| d.name.as_str()), Some("Buba Sanha"));
        assert_eq!(registry.resolve("Antonio Silva").map(|d| d.id.as_str()), Some("d1"));
        assert!(registry.resolve("antonio silva").is_none());
        assert!(registry.resolve("d9").is_none());
    }
}
