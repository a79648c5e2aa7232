//! Hard-coded destinations served by the mock source.

use crate::types::{ForecastDay, Location};

fn weekend(saturday: (i32, &str), sunday: (i32, &str)) -> Vec<ForecastDay> {
    vec![
        ForecastDay::new(saturday.0, saturday.1, "Saturday"),
        ForecastDay::new(sunday.0, sunday.1, "Sunday"),
    ]
}

/// The six mock destinations, in display order.
pub fn mock_locations() -> Vec<Location> {
    vec![
        Location::new("Miami", "USA", weekend((82, "Sunny"), (84, "Sunny"))),
        Location::new(
            "San Diego",
            "USA",
            weekend((75, "Sunny"), (73, "Mostly Sunny")),
        ),
        Location::new("Cancun", "Mexico", weekend((85, "Sunny"), (86, "Sunny"))),
        Location::new("Barcelona", "Spain", weekend((76, "Sunny"), (78, "Sunny"))),
        Location::new(
            "Honolulu",
            "USA",
            weekend((81, "Partly Cloudy"), (82, "Sunny")),
        ),
        Location::new("Sydney", "Australia", weekend((77, "Sunny"), (79, "Sunny"))),
    ]
}
