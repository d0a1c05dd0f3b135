use crate::dataset::columns::names;
use polars::prelude::{col, lit, LazyFrame};

/// Selection filters over a normalized heat-wave `LazyFrame`.
///
/// All filters are lazy; nothing is evaluated until the frame is collected.
pub trait HeatWaveFrameFilterExt {
    /// Keeps the observations of one city.
    fn filter_city(self, city: &str) -> LazyFrame;

    /// Keeps the observations of one city in one year.
    /// Matches on the explicit `year` column, not on the timestamp.
    fn filter_city_year(self, city: &str, year: i32) -> LazyFrame;

    /// Keeps heat-wave days only.
    fn filter_heat_wave_days(self) -> LazyFrame;
}

impl HeatWaveFrameFilterExt for LazyFrame {
    fn filter_city(self, city: &str) -> LazyFrame {
        self.filter(col(names::CITY).eq(lit(city)))
    }

    fn filter_city_year(self, city: &str, year: i32) -> LazyFrame {
        self.filter(
            col(names::CITY)
                .eq(lit(city))
                .and(col(names::YEAR).eq(lit(year))),
        )
    }

    fn filter_heat_wave_days(self) -> LazyFrame {
        self.filter(col(names::HEAT_WAVE))
    }
}
