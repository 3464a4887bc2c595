use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transport,
    Electricity,
    Food,
    Waste,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Transport,
        Category::Electricity,
        Category::Food,
        Category::Waste,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Electricity => "electricity",
            Category::Food => "food",
            Category::Waste => "waste",
        }
    }

    /// Case-insensitive lookup, surrounding whitespace ignored.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
    }

    pub fn default_unit(self) -> &'static str {
        match self {
            Category::Transport => "km",
            Category::Electricity => "kWh",
            Category::Food | Category::Waste => "kg",
        }
    }

    pub fn activities(self) -> &'static [Activity] {
        use Activity::*;
        match self {
            Category::Transport => &[
                CarPetrol,
                CarDiesel,
                Bus,
                Train,
                PlaneShort,
                PlaneLong,
                Motorcycle,
                ElectricCar,
            ],
            Category::Electricity => &[Grid, Solar, Wind, Coal],
            Category::Food => &[Beef, Chicken, Pork, Fish, Rice, Vegetables, Milk, Cheese],
            Category::Waste => &[Landfill, Recycled, Composted, Plastic],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    CarPetrol,
    CarDiesel,
    Bus,
    Train,
    PlaneShort,
    PlaneLong,
    Motorcycle,
    ElectricCar,
    Grid,
    Solar,
    Wind,
    Coal,
    Beef,
    Chicken,
    Pork,
    Fish,
    Rice,
    Vegetables,
    Milk,
    Cheese,
    Landfill,
    Recycled,
    Composted,
    Plastic,
}

impl Activity {
    pub fn as_str(self) -> &'static str {
        match self {
            Activity::CarPetrol => "car_petrol",
            Activity::CarDiesel => "car_diesel",
            Activity::Bus => "bus",
            Activity::Train => "train",
            Activity::PlaneShort => "plane_short",
            Activity::PlaneLong => "plane_long",
            Activity::Motorcycle => "motorcycle",
            Activity::ElectricCar => "electric_car",
            Activity::Grid => "grid",
            Activity::Solar => "solar",
            Activity::Wind => "wind",
            Activity::Coal => "coal",
            Activity::Beef => "beef",
            Activity::Chicken => "chicken",
            Activity::Pork => "pork",
            Activity::Fish => "fish",
            Activity::Rice => "rice",
            Activity::Vegetables => "vegetables",
            Activity::Milk => "milk",
            Activity::Cheese => "cheese",
            Activity::Landfill => "landfill",
            Activity::Recycled => "recycled",
            Activity::Composted => "composted",
            Activity::Plastic => "plastic",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Activity::CarPetrol
            | Activity::CarDiesel
            | Activity::Bus
            | Activity::Train
            | Activity::PlaneShort
            | Activity::PlaneLong
            | Activity::Motorcycle
            | Activity::ElectricCar => Category::Transport,
            Activity::Grid | Activity::Solar | Activity::Wind | Activity::Coal => {
                Category::Electricity
            }
            Activity::Beef
            | Activity::Chicken
            | Activity::Pork
            | Activity::Fish
            | Activity::Rice
            | Activity::Vegetables
            | Activity::Milk
            | Activity::Cheese => Category::Food,
            Activity::Landfill | Activity::Recycled | Activity::Composted | Activity::Plastic => {
                Category::Waste
            }
        }
    }

    /// kg CO2 emitted per unit of activity, in the category's default unit.
    pub fn factor(self) -> f64 {
        match self {
            Activity::CarPetrol => 0.192,
            Activity::CarDiesel => 0.171,
            Activity::Bus => 0.105,
            Activity::Train => 0.041,
            Activity::PlaneShort => 0.15,
            Activity::PlaneLong => 0.09,
            Activity::Motorcycle => 0.103,
            Activity::ElectricCar => 0.05,
            Activity::Grid => 0.5,
            Activity::Solar => 0.05,
            Activity::Wind => 0.011,
            Activity::Coal => 0.82,
            Activity::Beef => 27.0,
            Activity::Chicken => 6.9,
            Activity::Pork => 12.1,
            Activity::Fish => 6.1,
            Activity::Rice => 4.0,
            Activity::Vegetables => 2.0,
            Activity::Milk => 1.9,
            Activity::Cheese => 13.5,
            Activity::Landfill => 0.5,
            Activity::Recycled => 0.1,
            Activity::Composted => 0.3,
            Activity::Plastic => 2.5,
        }
    }

    /// Only activities belonging to `category` are accepted.
    pub fn parse(category: Category, name: &str) -> Option<Self> {
        let name = name.trim();
        category
            .activities()
            .iter()
            .copied()
            .find(|activity| activity.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_activity_lists_under_its_own_category() {
        for category in Category::ALL {
            for activity in category.activities() {
                assert_eq!(activity.category(), category, "{activity}");
                assert!(activity.factor() > 0.0);
            }
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(Category::parse(" Transport "), Some(Category::Transport));
        assert_eq!(Category::parse("FOOD"), Some(Category::Food));
        assert_eq!(Category::parse("housing"), None);
        assert_eq!(
            Activity::parse(Category::Transport, "CAR_PETROL"),
            Some(Activity::CarPetrol)
        );
    }

    #[test]
    fn activity_outside_its_category_is_rejected() {
        assert_eq!(Activity::parse(Category::Food, "grid"), None);
        assert_eq!(Activity::parse(Category::Electricity, "grid"), Some(Activity::Grid));
    }

    #[test]
    fn serde_names_match_display_names() {
        let json = serde_json::to_string(&Activity::PlaneShort).unwrap();
        assert_eq!(json, "\"plane_short\"");
        let json = serde_json::to_string(&Category::Electricity).unwrap();
        assert_eq!(json, "\"electricity\"");
    }
}
