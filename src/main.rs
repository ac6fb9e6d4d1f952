use std::{thread, time::Duration};

use anyhow::Result;
use itertools::Itertools;

use crate::coords::Coordinate;
use crate::ibge::Municipality;
use crate::nominatim::{Geocoder, Resolution};
use crate::output::Table;

mod coords;
mod ibge;
mod nominatim;
mod normalize;
mod output;
mod utils;

// IBGE region code for Paraíba.
const STATE_ID: u32 = 25;

// Breather between municipalities, on top of the geocoder's own rate limit.
const ITERATION_DELAY: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    eprintln!("Fetching municipality list from IBGE...");
    let municipalities = ibge::municipalities(&utils::agent(), STATE_ID)?;
    eprintln!("{} municipalities found.", municipalities.len());

    let mut geocoder = Geocoder::new();
    let (table, unresolved) = collect(&municipalities, |q| geocoder.search(q));

    output::write(&table)?;

    println!(
        "Done. {} of {} municipalities written to {} and {}.",
        table.len(),
        municipalities.len(),
        output::JSON_PATH,
        output::MODULE_PATH
    );
    if !unresolved.is_empty() {
        println!(
            "{} without coordinates: {}",
            unresolved.len(),
            unresolved.iter().take(10).join(", ")
        );
        println!("Rerun later or fill these in from the IBGE centroid data.");
    }

    Ok(())
}

/// Geocode every municipality in listing order, accumulating resolved
/// coordinates keyed by normalized name plus the display names that stayed
/// unresolved.
fn collect(
    municipalities: &[Municipality],
    mut search: impl FnMut(&str) -> Result<Option<Coordinate>>,
) -> (Table, Vec<String>) {
    let mut table = Table::new();
    let mut unresolved = Vec::new();

    let pb = utils::progress_bar(municipalities.len() as u64);
    for municipality in municipalities {
        let key = normalize::key(&municipality.name);
        match nominatim::resolve(&mut search, &municipality.name) {
            Resolution::Primary(coordinate) => {
                pb.println(format!("{key}: {coordinate}"));
                table.insert(key, coordinate);
            }
            Resolution::Fallback(coordinate) => {
                pb.println(format!("{key}: {coordinate} (via fallback)"));
                table.insert(key, coordinate);
            }
            Resolution::NotFound => {
                pb.println(format!("no result: {}", municipality.name));
                unresolved.push(municipality.name.clone());
            }
            Resolution::Failed(e) => {
                pb.println(format!("error on {}: {e}", municipality.name));
                unresolved.push(municipality.name.clone());
            }
        }
        pb.inc(1);
        thread::sleep(ITERATION_DELAY);
    }
    pb.finish_and_clear();

    (table, unresolved)
}

#[cfg(test)]
mod tests {
    use crate::nominatim::Place;

    use super::*;

    #[test]
    fn areia_end_to_end() {
        let municipalities: Vec<Municipality> =
            serde_json::from_str(r#"[{"id": 1, "nome": "Areia"}]"#).unwrap();

        let (table, unresolved) = collect(&municipalities, |_| -> Result<Option<Coordinate>> {
            let places: Vec<Place> =
                serde_json::from_str(r#"[{"lat": "-6.9586", "lon": "-35.6994"}]"#)?;
            match places.first() {
                Some(place) => Ok(Some(place.coordinate()?)),
                None => Ok(None),
            }
        });

        assert!(unresolved.is_empty());
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("paraiba-areia"),
            Some(&Coordinate(-6.9586, -35.6994))
        );
    }

    #[test]
    fn unresolved_names_stay_out_of_both_artifacts() {
        let municipalities = [
            Municipality {
                id: 1,
                name: "Areia".to_string(),
            },
            Municipality {
                id: 2,
                name: "Atlantis".to_string(),
            },
        ];

        let (table, unresolved) = collect(&municipalities, |q| {
            if q.starts_with("Areia,") {
                Ok(Some(Coordinate::new(-6.9586, -35.6994)))
            } else {
                Ok(None)
            }
        });

        assert_eq!(unresolved, vec!["Atlantis"]);

        let json = serde_json::to_string_pretty(&table).unwrap();
        let module = output::render_module(&table).unwrap();
        for artifact in [&json, &module] {
            assert!(artifact.contains("paraiba-areia"));
            assert!(!artifact.contains("atlantis"));
        }
    }
}
