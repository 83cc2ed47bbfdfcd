use havakalitesi::{AirQuality, AirQualityError};

#[tokio::main]
async fn main() -> Result<(), AirQualityError> {
    let client = AirQuality::new()?;
    let stations = client.stations().await?;

    for station in &stations {
        println!(
            "{} {:<24} {:>10.5} {:>10.5}  {}",
            station.id, station.name, station.latitude, station.longitude, station.address
        );
    }
    println!("{} stations", stations.len());

    Ok(())
}
