use chrono::NaiveDate;
use havakalitesi::{AirQuality, AirQualityError};

#[tokio::main]
async fn main() -> Result<(), AirQualityError> {
    let client = AirQuality::new()?;

    // Maslak
    let (concentrations, aqi) = client
        .readings()
        .station("6b7a9840-1e13-4045-a79d-0f881c4852ad")
        .start(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        .end(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap())
        .call()
        .await?
        .into_parts();

    for c in &concentrations {
        println!(
            "{} PM10={:?} SO2={:?} O3={:?} NO2={:?} CO={:?}",
            c.read_time, c.pm10, c.so2, c.o3, c.no2, c.co
        );
    }
    for a in &aqi {
        println!(
            "{} AQI={} ({}) {} {}",
            a.read_time, a.aqi_index, a.contaminant_parameter, a.color, a.state
        );
    }

    Ok(())
}
