use serde::Serialize;

/// Buildings a town can hold (`MAX_BLDG`).
pub const MAX_BUILDINGS: usize = 32;

/// One service offered at a building counter.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildingAction {
    pub name: String,
    /// Action id dispatched when selected (BACT_* constants).
    pub action: i16,
    /// Price for members of the building's class.
    pub member_cost: u16,
    /// Price for everyone else.
    pub other_cost: u16,
}

/// A town building (`building_type`): name, proprietor and services.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Building {
    pub name: String,
    pub owner_name: String,
    pub owner_race: String,
    pub actions: Vec<BuildingAction>,
    /// Per-class membership costs, indexed by class id.
    pub class_costs: Vec<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_building_has_no_services() {
        let b = Building::default();
        assert!(b.name.is_empty());
        assert!(b.actions.is_empty());
    }
}
