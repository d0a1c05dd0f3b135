use crate::aggregate::ensure_city;
use crate::aggregate::error::AggregateError;
use crate::aggregate::extractor::{f64_values, i32_values, single_f64};
use crate::dataset::columns::names;
use crate::dataset::heat_wave_dataset::HeatWaveDataset;
use crate::filtering::HeatWaveFrameFilterExt;
use crate::types::records::AnnualAnomaly;
use polars::prelude::*;

const COL_BASELINE: &str = "baseline";
const COL_MEAN_TEMP: &str = "mean_temp";
const COL_ANOMALY: &str = "anomaly";

/// Computes each year's mean temperature for `city` and its deviation from the city's
/// baseline, the mean `temp_med` over all of the city's observations.
///
/// Returns one row per year with data, ascending by year. A city observed in a single
/// year gets an anomaly of 0 for it.
///
/// # Errors
///
/// Returns [`AggregateError::UnknownCity`] if the dataset holds no observation for
/// `city`, since the baseline would be undefined.
pub fn compute_annual_anomalies(
    dataset: &HeatWaveDataset,
    city: &str,
) -> Result<Vec<AnnualAnomaly>, AggregateError> {
    ensure_city(dataset, city)?;
    let city_rows = dataset.lazy().filter_city(city);

    let baseline_frame = city_rows
        .clone()
        .select([col(names::TEMP_MED).mean().alias(COL_BASELINE)])
        .collect()?;
    let baseline = single_f64(&baseline_frame, COL_BASELINE)?;

    let yearly = city_rows
        .group_by([col(names::YEAR)])
        .agg([col(names::TEMP_MED).mean().alias(COL_MEAN_TEMP)])
        .with_column((col(COL_MEAN_TEMP) - lit(baseline)).alias(COL_ANOMALY))
        .sort_by_exprs(vec![col(names::YEAR)], SortMultipleOptions::default())
        .collect()?;

    let years = i32_values(&yearly, names::YEAR)?;
    let means = f64_values(&yearly, COL_MEAN_TEMP)?;
    let anomalies = f64_values(&yearly, COL_ANOMALY)?;

    Ok(years
        .into_iter()
        .zip(means)
        .zip(anomalies)
        .map(|((year, mean_temp), anomaly)| AnnualAnomaly {
            year,
            mean_temp,
            anomaly,
            baseline,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::extractor::observations_from_frame;
    use crate::test_fixtures::fixture_dataset;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_fortaleza_anomalies() -> Result<(), Box<dyn std::error::Error>> {
        let anomalies = compute_annual_anomalies(&fixture_dataset(), "Fortaleza")?;
        let years: Vec<i32> = anomalies.iter().map(|a| a.year).collect();
        let values: Vec<f64> = anomalies.iter().map(|a| a.anomaly).collect();

        assert_eq!(years, vec![2018, 2019, 2020]);
        assert_eq!(values, vec![-1.0, 1.0, 0.0]);
        assert!(anomalies.iter().all(|a| a.baseline == 29.0));
        Ok(())
    }

    #[test]
    fn test_baseline_spans_all_years() -> Result<(), Box<dyn std::error::Error>> {
        let anomalies = compute_annual_anomalies(&fixture_dataset(), "Recife")?;
        assert_eq!(anomalies.len(), 2);

        let baseline = 199.0 / 7.0;
        assert!((anomalies[0].baseline - baseline).abs() < EPS);
        assert!((anomalies[0].mean_temp - 27.0).abs() < EPS);
        assert!((anomalies[1].mean_temp - 29.0).abs() < EPS);
        assert!((anomalies[0].anomaly - (27.0 - baseline)).abs() < EPS);
        assert!((anomalies[1].anomaly - (29.0 - baseline)).abs() < EPS);
        Ok(())
    }

    #[test]
    fn test_weighted_year_means_reconstruct_baseline() -> Result<(), Box<dyn std::error::Error>>
    {
        let dataset = fixture_dataset();
        let observations = observations_from_frame(dataset.frame())?;

        for city in dataset.cities() {
            let anomalies = compute_annual_anomalies(&dataset, city)?;
            let baseline = anomalies[0].baseline;
            assert!(anomalies.iter().all(|a| a.baseline == baseline));

            let mut weighted = 0.0;
            let mut count = 0usize;
            for a in &anomalies {
                let n = observations
                    .iter()
                    .filter(|o| o.city == city && o.year == a.year)
                    .count();
                weighted += n as f64 * a.mean_temp;
                count += n;
            }
            assert!((weighted / count as f64 - baseline).abs() < EPS);
        }
        Ok(())
    }

    #[test]
    fn test_single_year_city_has_zero_anomaly() -> Result<(), Box<dyn std::error::Error>> {
        let anomalies = compute_annual_anomalies(&fixture_dataset(), "Natal")?;
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].anomaly, 0.0);
        assert_eq!(anomalies[0].mean_temp, anomalies[0].baseline);
        Ok(())
    }

    #[test]
    fn test_unknown_city() {
        let result = compute_annual_anomalies(&fixture_dataset(), "Olinda");
        assert!(matches!(result, Err(AggregateError::UnknownCity(city)) if city == "Olinda"));
    }

    #[test]
    fn test_anomalies_are_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let dataset = fixture_dataset();
        let first = compute_annual_anomalies(&dataset, "Recife")?;
        let second = compute_annual_anomalies(&dataset, "Recife")?;
        let bits = |rows: &[AnnualAnomaly]| -> Vec<(i32, u64, u64)> {
            rows.iter()
                .map(|a| (a.year, a.mean_temp.to_bits(), a.anomaly.to_bits()))
                .collect()
        };
        assert_eq!(bits(&first), bits(&second));
        Ok(())
    }
}
