use cirrus_application::AppContext;
use cirrus_core::Result;
use colored::Colorize;

pub async fn run(ctx: &AppContext, city: &str) -> Result<()> {
    if ctx.search.is_mock_mode() {
        println!("{}", "Mock mode".yellow());
    }

    let reading = ctx.search.search(city).await?;

    let place = if reading.country.is_empty() {
        reading.city.clone()
    } else {
        format!("{} ({})", reading.city, reading.country)
    };
    println!("{}", place.bold());
    println!("  {}  {}°C", reading.condition, reading.temp_c);
    println!(
        "  humidity {}%  wind {} km/h",
        reading.humidity, reading.wind_kph
    );
    println!("  {}", reading.icon_url.dimmed());
    Ok(())
}
