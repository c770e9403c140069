use crate::model::TimePeriod;

/// which choice model is asking for utilities. some utility specifications
/// apply different coefficients per application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Application {
    #[default]
    Generic,
    TourModeChoice,
    TripModeChoice,
}

/// attribute record handed to the utility evaluator for one leg.
///
/// one flat struct replaces the per-mode decision-making-unit objects of
/// older implementations: the engine fills in the physical attributes of the
/// leg being priced and leaves the rest at their defaults or at the rider
/// context configured on the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct PathAttributes {
    // walk legs (minutes)
    pub access_walk_time: f64,
    pub egress_walk_time: f64,
    pub escalator_time: f64,

    // drive legs
    pub drive_time_to_tap: f64,
    pub drive_dist_to_tap: f64,
    pub car_to_station_walk_time: f64,
    /// fuel cost in cents per mile.
    pub fuel_cost: f64,
    /// maintenance cost in cents per mile.
    pub maintenance_cost: f64,

    // line-haul
    pub period: TimePeriod,
    pub skim_set: usize,

    // rider/tour context
    pub value_of_time: f64,
    pub person_type: usize,
    pub joint_tour: bool,
    pub application: Application,
}

impl Default for PathAttributes {
    fn default() -> PathAttributes {
        PathAttributes {
            access_walk_time: 0.0,
            egress_walk_time: 0.0,
            escalator_time: 0.0,
            drive_time_to_tap: 0.0,
            drive_dist_to_tap: 0.0,
            car_to_station_walk_time: 0.0,
            fuel_cost: 12.40,
            maintenance_cost: 5.60,
            period: TimePeriod::Ea,
            skim_set: 0,
            value_of_time: 10.0,
            person_type: 1,
            joint_tour: false,
            application: Application::Generic,
        }
    }
}
