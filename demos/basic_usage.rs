// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_vector::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Numeric Vector Example ===\n");

    let mut v1 = VectorShort::filled(5, 2)?;
    let v2 = VectorShort::filled(5, 3)?;

    v1 += &v2;
    println!("v1 after addition: {}", v1);

    v1 *= 2;
    println!("v1 after scaling by 2: {}", v1);

    let before = v1.post_decrement();
    println!("v1 before decrement: {}, after: {}", before, v1);
    println!("negated: {}, complement: {}", -&v1, !&v1);

    match v1.checked_add(&VectorShort::new()) {
        Ok(sum) => println!("unexpected sum: {}", sum),
        Err(err) => println!("rejected: {}", err),
    }
    if let Err(err) = v1.checked_div(0) {
        println!("rejected: {}", err);
    }

    println!("\nLive vectors: {}", InstanceCounter::live());

    println!("\n=== Flight Schedule ===\n");
    let schedule = FlightSchedule::from_records([
        (FlightNumber(101), DepartureTime::new(6, 30)?),
        (FlightNumber(205), DepartureTime::new(9, 15)?),
        (FlightNumber(412), DepartureTime::new(18, 0)?),
    ]);
    print!("{}", schedule);

    let departure = DepartureTime::new(9, 15)?;
    println!("Flight at {}: {}", departure, schedule.flight_at(&departure)?);
    println!(
        "Departure of flight 412: {}",
        schedule.departure_of(FlightNumber(412))?
    );
    println!(
        "Flights between 06 and 10: {:?}",
        schedule.departing_between(6, 10)
    );

    Ok(())
}
